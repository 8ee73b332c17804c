// SPDX-License-Identifier: MIT OR Apache-2.0

//! The diagnostic context entry and the stack snapshot type.

use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug)]
struct DiagnosticContextInner {
    message: String,
    full_message: String,
}

/// One entry on an NDC stack: a pushed label plus the full message
/// accumulated up to and including it.
///
/// The full message is computed once, at push time, from the entry that was
/// then on top of the stack.  It is never recomputed; it cannot go stale
/// because the stack is a true LIFO, so an entry's ancestors cannot change
/// while it is on the stack.
///
/// Entries are cheap to clone (`Arc`-based), which is what makes
/// [`clone_stack`](crate::clone_stack) a shallow copy.
#[derive(Debug, Clone)]
pub struct DiagnosticContext {
    inner: Arc<DiagnosticContextInner>,
}

impl DiagnosticContext {
    /// Creates a root entry: the full message is the label itself.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let full_message = message.clone();
        DiagnosticContext {
            inner: Arc::new(DiagnosticContextInner {
                message,
                full_message,
            }),
        }
    }

    /// Creates an entry nested under `parent`: the full message is the
    /// parent's full message, a space, and the label.
    pub fn with_parent(message: impl Into<String>, parent: &DiagnosticContext) -> Self {
        let message = message.into();
        let full_message = format!("{} {}", parent.full_message(), message);
        DiagnosticContext {
            inner: Arc::new(DiagnosticContextInner {
                message,
                full_message,
            }),
        }
    }

    /// The label as pushed.
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// The space-joined concatenation of every label from the bottom of the
    /// stack through this entry.
    #[inline]
    pub fn full_message(&self) -> &str {
        &self.inner.full_message
    }
}

impl PartialEq for DiagnosticContext {
    fn eq(&self, other: &Self) -> bool {
        // Value equality: an entry is its strings.  Two entries built from
        // the same push sequence compare equal even across stacks.
        self.message() == other.message() && self.full_message() == other.full_message()
    }
}

impl Eq for DiagnosticContext {}

impl Display for DiagnosticContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_message())
    }
}

/// A snapshot of one thread's NDC stack, ordered bottom to top.
///
/// Returned by [`clone_stack`](crate::clone_stack) and consumed by
/// [`inherit`](crate::inherit); this is the value you move across a thread
/// boundary to continue logging under the same context.  A snapshot is
/// independent of the stack it was taken from: mutating either afterwards
/// does not affect the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextStack {
    entries: Vec<DiagnosticContext>,
}

impl ContextStack {
    /// An empty stack.  Allocation-free until the first push.
    #[inline]
    pub const fn new() -> Self {
        ContextStack {
            entries: Vec::new(),
        }
    }

    /// Number of entries, bottom to top.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push_message(&mut self, message: String) {
        let entry = match self.entries.last() {
            Some(top) => DiagnosticContext::with_parent(message, top),
            None => DiagnosticContext::new(message),
        };
        self.entries.push(entry);
    }

    pub(crate) fn pop_entry(&mut self) -> Option<DiagnosticContext> {
        self.entries.pop()
    }

    pub(crate) fn top(&self) -> Option<&DiagnosticContext> {
        self.entries.last()
    }

    pub(crate) fn truncate_to(&mut self, max_depth: usize) {
        self.entries.truncate(max_depth);
    }
}
