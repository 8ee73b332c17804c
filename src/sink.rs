//SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/**
A destination for the logging subsystem's own errors.

The NDC never surfaces its internal failures to callers; it reports them here
and degrades to a documented fallback.  Implementations are fire-and-forget:
[report](Self::report) must not panic and must not block meaningfully, since
it can run on any thread, including during thread teardown.
*/
pub trait ErrorSink: Debug + Send + Sync {
    /**
    Reports one human-readable failure message.
    */
    fn report(&self, message: &str);
}

/*
Boilerplate notes.

# ErrorSink

Clone doesn't make sense on a trait object we hold behind Arc.
PartialEq/Eq are unclear (data equality vs provenance), so not required.
Default is not sensible; who knows how a sink is constructed (file path, channel, etc.)
Send/Sync are required: the sink is process-wide and reports can come from any thread.
Debug is required so the installed sink can be inspected in diagnostics.
*/
