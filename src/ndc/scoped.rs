// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope-bound push/pop.

use std::marker::PhantomData;

use super::ndc_impl;

/// A guard that holds a context label for the duration of a scope.
///
/// Construction pushes the label onto the calling thread's stack; dropping
/// the guard pops exactly one entry.  Because `Drop` runs on every exit path,
/// the pop happens whether the scope returns normally, returns early, or
/// unwinds from a panic:
///
/// ```rust
/// logndc::clear();
/// fn handle_request(id: u64) {
///     let _ctx = logndc::ScopedContext::new(format!("req-{id}"));
///     // every log statement below runs under "req-7"
///     if id == 0 {
///         return; // popped here
///     }
///     // ...
/// } // and here
/// handle_request(7);
/// assert_eq!(logndc::depth(), 0);
/// ```
///
/// The guard is `!Send`: the pop must run on the thread that pushed, so the
/// guard cannot be moved to another thread.  To continue a context on another
/// thread use [`clone_stack`](crate::clone_stack) and
/// [`inherit`](crate::inherit) instead.
#[derive(Debug)]
#[must_use = "dropping a ScopedContext immediately pops the label it just pushed"]
pub struct ScopedContext {
    // Raw-pointer marker: keeps the guard on the thread whose stack it pops.
    _not_send: PhantomData<*const ()>,
}

impl ScopedContext {
    /// Pushes `message` onto the calling thread's stack and returns the
    /// guard that will pop it.
    pub fn new(message: impl Into<String>) -> Self {
        ndc_impl::push(message);
        ScopedContext {
            _not_send: PhantomData,
        }
    }
}

impl Drop for ScopedContext {
    fn drop(&mut self) {
        ndc_impl::pop();
    }
}
