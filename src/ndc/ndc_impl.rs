// SPDX-License-Identifier: MIT OR Apache-2.0

//! The accessor functions over the calling thread's stack.

use std::cell::RefCell;

use super::stack::ContextStack;
use crate::global_sink;

thread_local! {
    static STACK: RefCell<ContextStack> = const { RefCell::new(ContextStack::new()) };
}

const STORAGE_GONE: &str = "thread-local context storage is unavailable";

/// Runs `f` against the calling thread's stack, absorbing storage failure.
///
/// `try_with` fails only when the thread-local has already been destroyed,
/// which can happen when a `Drop` impl logs during thread teardown.  Per the
/// crate's failure policy that is reported to the error sink and mapped to
/// `fallback`; it never reaches the caller.
fn with_stack<R>(
    operation: &'static str,
    fallback: impl FnOnce() -> R,
    f: impl FnOnce(&mut ContextStack) -> R,
) -> R {
    match STACK.try_with(|cell| f(&mut cell.borrow_mut())) {
        Ok(r) => r,
        Err(_) => {
            global_sink::report(operation, STORAGE_GONE);
            fallback()
        }
    }
}

/// Shared shape of the borrowed accessors [`peek`] and [`get`]: lends the
/// string chosen by `select` to `f`, or `""` when the stack is empty or its
/// storage is gone.
fn with_current<R>(
    operation: &'static str,
    select: fn(&ContextStack) -> Option<&str>,
    f: impl FnOnce(&str) -> R,
) -> R {
    // The Option round-trip hands `f` back if the thread-local closure never
    // ran: try_with invokes it at most once, so exactly one take() succeeds.
    let mut f = Some(f);
    let outcome = STACK.try_with(|cell| {
        let f = f.take().expect("accessor closure runs at most once");
        f(select(&cell.borrow()).unwrap_or(""))
    });
    match outcome {
        Ok(r) => r,
        Err(_) => {
            global_sink::report(operation, STORAGE_GONE);
            let f = f.take().expect("accessor closure did not run");
            f("")
        }
    }
}

/// Pushes a label onto the calling thread's stack.
///
/// The new entry's full message is the previous top's full message, a space,
/// and `message`; or `message` alone if the stack was empty.
///
/// Prefer [`ScopedContext`](crate::ScopedContext) in block-structured code;
/// a manual `push` must be matched by a [`pop`] on every exit path.
pub fn push(message: impl Into<String>) {
    let message = message.into();
    with_stack("push", || (), move |stack| stack.push_message(message));
}

/// Removes the top entry and returns its label.
///
/// Returns the label as pushed, not the full message.  Popping an empty stack
/// is not an error: it returns an empty string (no allocation) and leaves the
/// depth at 0.
pub fn pop() -> String {
    with_stack("pop", String::new, |stack| {
        stack
            .pop_entry()
            .map(|entry| entry.message().to_string())
            .unwrap_or_default()
    })
}

/// Lends the top entry's label to `f`, or `""` if the stack is empty.
///
/// The closure form avoids copying the label on the hot path.  `f` must not
/// call back into the NDC; the thread's stack is borrowed for its duration.
pub fn peek<R>(f: impl FnOnce(&str) -> R) -> R {
    fn top_message(stack: &ContextStack) -> Option<&str> {
        stack.top().map(|entry| entry.message())
    }
    with_current("peek", top_message, f)
}

/// Lends the current full context string to `f`, or `""` if the stack is
/// empty.
///
/// This is the hot-path call for formatters: the space-joined concatenation
/// of every label on the calling thread's stack, precomputed at push time, is
/// passed by reference with no allocation.  `f` must not call back into the
/// NDC; the thread's stack is borrowed for its duration.
pub fn get<R>(f: impl FnOnce(&str) -> R) -> R {
    fn top_full_message(stack: &ContextStack) -> Option<&str> {
        stack.top().map(|entry| entry.full_message())
    }
    with_current("get", top_full_message, f)
}

/// Number of entries on the calling thread's stack.
pub fn depth() -> usize {
    with_stack("depth", || 0, |stack| stack.depth())
}

/// Pops entries from the top until the depth is at most `max_depth`.
///
/// Never grows the stack, and calling it twice with the same value is the
/// same as calling it once.
pub fn set_max_depth(max_depth: usize) {
    with_stack(
        "set_max_depth",
        || (),
        |stack| stack.truncate_to(max_depth),
    );
}

/// Empties the calling thread's stack.
pub fn clear() {
    with_stack("clear", || (), |stack| *stack = ContextStack::new());
}

/// Empties the calling thread's stack.
///
/// Synonym for [`clear`], kept as a distinct entry point for callers that
/// want to signal "this thread is done with its context" rather than "reset
/// and continue".  The observable effect is identical.
pub fn remove() {
    with_stack("remove", || (), |stack| *stack = ContextStack::new());
}

/// Returns an independent snapshot of the calling thread's stack.
///
/// The snapshot is safe to move to another thread and mutate; neither side
/// observes the other's subsequent changes.  Cheap: entries are shared, not
/// deep-copied.
pub fn clone_stack() -> ContextStack {
    with_stack("clone_stack", ContextStack::new, |stack| stack.clone())
}

/// Replaces the calling thread's stack with the given snapshot.
///
/// The other half of a hand-off: thread A calls [`clone_stack`], moves the
/// snapshot along with the work, and thread B calls `inherit` before running
/// it.  Serializing the hand-off is the caller's responsibility, typically
/// guaranteed by the task-submission protocol itself.
pub fn inherit(stack: ContextStack) {
    with_stack("inherit", || (), move |slot| *slot = stack);
}
