// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-local nested diagnostic context management.
//!
//! This module provides the NDC core: a stack of labels owned by each thread,
//! a scoped guard for block-structured push/pop, and the snapshot type used to
//! hand a context across threads.
//!
//! # Overview
//!
//! The NDC consists of four pieces:
//!
//! - The accessor functions ([`push`], [`pop`], [`peek`], [`get`], [`depth`],
//!   [`set_max_depth`], [`clear`], [`remove`], [`clone_stack`], [`inherit`]),
//!   which operate on the calling thread's stack
//! - [`DiagnosticContext`]: one pushed label together with the full message
//!   accumulated up to it
//! - [`ContextStack`]: an independent snapshot of a thread's stack
//! - [`ScopedContext`]: a guard that pushes on construction and pops on drop
//!
//! The stack itself is never exposed for direct mutation; all access goes
//! through the accessor functions, which lazily create the calling thread's
//! storage on first use.
//!
//! # Thread-local storage
//!
//! Each thread's stack lives in a `thread_local!` cell, created on the
//! thread's first NDC operation and torn down with the thread.  Ordinary
//! operations involve no synchronization of any kind.  An operation that runs
//! after the cell has been destroyed (possible from `Drop` impls during
//! thread teardown) is reported to the [error sink](crate::ErrorSink) and
//! falls back to an empty result.
//!
//! # Hand-off
//!
//! ```rust
//! logndc::clear();
//! logndc::push("req-7");
//! let snapshot = logndc::clone_stack();
//! std::thread::spawn(move || {
//!     logndc::inherit(snapshot);
//!     logndc::get(|ctx| assert_eq!(ctx, "req-7"));
//! })
//! .join()
//! .unwrap();
//! ```
//!
//! For futures, [`ApplyContext`] packages the same hand-off around every poll.

mod apply_context;
mod ndc_impl;
mod scoped;
mod stack;


pub use apply_context::ApplyContext;
pub use ndc_impl::{
    clear, clone_stack, depth, get, inherit, peek, pop, push, remove, set_max_depth,
};
pub use scoped::ScopedContext;
pub use stack::{ContextStack, DiagnosticContext};
