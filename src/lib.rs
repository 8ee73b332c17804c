//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logndc

logndc is a per-thread nested diagnostic context (NDC) for Rust logging.

# The problem

Suppose a request handler calls into a parser, which calls into a cache, which
logs a warning.  Which request was it for?  The cache doesn't know; nobody
threaded a request ID down four layers of APIs just in case something wanted
to log it.

An NDC solves this with a stack of labels owned by each thread.  You push a
label ("request 42", "user alice") when you enter a unit of work and pop it
when you leave.  Any log statement on the same thread can ask for the current
context (the space-joined concatenation of every label on the stack) and tag
its output with it.  Nothing is threaded through parameters and nothing is
shared between threads.

# The API

```rust
logndc::clear();
let _req = logndc::ScopedContext::new("req-1");
{
    let _db = logndc::ScopedContext::new("db-query");
    logndc::get(|ctx| assert_eq!(ctx, "req-1 db-query"));
} // db-query popped here
logndc::get(|ctx| assert_eq!(ctx, "req-1"));
```

[`ScopedContext`] pops on every exit path, including panic unwinds.  Manual
[`push`]/[`pop`] pairing is also supported; matching them on all exit paths is
then your problem.

[`get`] and [`peek`] lend the current string to a closure rather than
returning it, so the hot logging path performs no allocation and no copy.

# Multithreading

Each thread owns its stack outright; two threads never observe each other's
context.  To carry a context across a thread hand-off (worker pools, spawned
threads), snapshot it with [`clone_stack`] and apply it on the receiving
thread with [`inherit`].  For futures polled on executor threads, wrap them in
[`ApplyContext`] and the snapshot is applied around every poll automatically.

# Failure policy

A logging subsystem must never crash the application it is logging.  Every
operation here is infallible from the caller's perspective: if the thread's
storage is unavailable (it can be, during thread teardown), the failure is
reported once to a process-wide [`ErrorSink`] and the operation degrades to
its documented fallback: empty string, zero depth, or no-op.  The default
sink writes to stderr; swap it with [`set_error_sink`], e.g. for an
[`InMemorySink`] in tests.
*/

pub mod global_sink;
mod inmemory_sink;
pub mod ndc;
mod sink;
mod spinlock;
mod stderror_sink;

pub use global_sink::{error_sink, set_error_sink};
pub use inmemory_sink::InMemorySink;
pub use ndc::{
    ApplyContext, ContextStack, DiagnosticContext, ScopedContext, clear, clone_stack, depth, get,
    inherit, peek, pop, push, remove, set_max_depth,
};
pub use sink::ErrorSink;
pub use stderror_sink::StdErrorSink;
