// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context preservation across async executor boundaries.

use std::future::Future;
use std::pin::Pin;
use std::task::Poll;

use super::ndc_impl;
use super::stack::ContextStack;

/// A [`Future`] wrapper that carries an NDC stack across polls.
///
/// Executors make no promise about which thread polls a future, and
/// thread-local state does not follow the future around.  `ApplyContext`
/// closes that gap: it holds a [`ContextStack`] snapshot and, around every
/// poll, installs it on the polling thread, runs the inner future, captures
/// the (possibly mutated) stack back into itself, and restores the thread's
/// prior stack.
///
/// Pushes and pops made by the inner future therefore behave as if the
/// future owned a thread of its own: a [`ScopedContext`](crate::ScopedContext)
/// held across an `.await` pops correctly even if the wake-up lands on a
/// different thread, and the polling thread's own context is untouched.
///
/// # Examples
///
/// ```rust
/// use logndc::ApplyContext;
///
/// async fn work() {
///     logndc::get(|ctx| assert_eq!(ctx, "submitter"));
/// }
///
/// # async fn example() {
/// logndc::clear();
/// logndc::push("submitter");
/// let future = ApplyContext::new(logndc::clone_stack(), work());
/// future.await;
/// # }
/// ```
pub struct ApplyContext<F>(ContextStack, F);

impl<F> ApplyContext<F> {
    /// Wraps `f` so that `stack` is the current context whenever it is
    /// polled.
    ///
    /// `stack` is typically [`clone_stack()`](crate::clone_stack) taken on
    /// the submitting thread at spawn time.
    pub fn new(stack: ContextStack, f: F) -> Self {
        Self(stack, f)
    }
}

impl<F> Future for ApplyContext<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        //safety: we never move out of the inner future; the stack field is
        //not pinned.
        let this = unsafe { self.get_unchecked_mut() };
        let fut = unsafe { Pin::new_unchecked(&mut this.1) };
        let prior = ndc_impl::clone_stack();
        ndc_impl::inherit(this.0.clone());
        let r = fut.poll(cx);
        this.0 = ndc_impl::clone_stack();
        ndc_impl::inherit(prior);
        r
    }
}
