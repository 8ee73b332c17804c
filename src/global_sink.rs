// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide error sink management.
//!
//! This module owns the single slot holding the [`ErrorSink`] that receives
//! reports about the NDC's own internal failures.  The slot is lazily
//! initialized with a [`StdErrorSink`] on first use, so reporting works
//! out-of-the-box without configuration, and can be replaced at any time with
//! [`set_error_sink`].
//!
//! # Thread safety
//!
//! The slot is a `OnceLock` around a spinlock-guarded `Arc`.  The spinlock
//! keeps hold times to an `Arc` clone or store, and stays usable on the wasm
//! main thread where blocking mutexes are unavailable.  The `Arc` is cloned
//! out before [`report`](ErrorSink::report) is called, so a sink replacement
//! during a report lets the in-flight report finish against the old sink.

use crate::sink::ErrorSink;
use crate::spinlock::Spinlock;
use crate::stderror_sink::StdErrorSink;
use std::sync::{Arc, OnceLock};

/// Static storage for the installed sink.
static ERROR_SINK: OnceLock<Spinlock<Arc<dyn ErrorSink>>> = OnceLock::new();

fn sink_slot() -> &'static Spinlock<Arc<dyn ErrorSink>> {
    ERROR_SINK.get_or_init(|| {
        // Initialize with the default stderr sink.
        Spinlock::new(Arc::new(StdErrorSink::new()))
    })
}

/// Returns the currently installed error sink.
///
/// Installs and returns the default [`StdErrorSink`] if none has been set.
pub fn error_sink() -> Arc<dyn ErrorSink> {
    sink_slot().with(|sink| sink.clone())
}

/// Replaces the process-wide error sink.
///
/// The previous sink is dropped once any in-flight reports against it
/// complete.  Typical use is installing an
/// [`InMemorySink`](crate::InMemorySink) in tests:
///
/// ```rust
/// use logndc::InMemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// logndc::set_error_sink(sink.clone());
/// ```
pub fn set_error_sink(sink: Arc<dyn ErrorSink>) {
    let sink_clone = sink.clone();
    ERROR_SINK
        .get_or_init(|| Spinlock::new(sink_clone))
        .with_mut(|slot| *slot = sink);
}

/// Internal reporting entry point: one line naming the failed operation.
pub(crate) fn report(operation: &str, error: &str) {
    error_sink().report(&format!("ndc::{operation}: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use std::sync::Mutex;

    // The sink slot is process-wide; serialize tests that touch it.
    static TEST_SINK_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_sink() {
        let _guard = TEST_SINK_GUARD.lock().unwrap();
        set_error_sink(Arc::new(StdErrorSink::new()));
        // Lazily installed default (or the one we just set) is retrievable
        let sink = error_sink();
        sink.report("test_default_sink: this report intentionally goes to stderr");
    }

    #[test]
    fn test_replace_sink() {
        let _guard = TEST_SINK_GUARD.lock().unwrap();
        let sink = Arc::new(InMemorySink::new());
        set_error_sink(sink.clone());

        report("test", "synthetic failure");

        let messages = sink.drain();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], "ndc::test: synthetic failure");

        set_error_sink(Arc::new(StdErrorSink::new()));
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let _guard = TEST_SINK_GUARD.lock().unwrap();
        let sink = Arc::new(InMemorySink::new());
        set_error_sink(sink.clone());

        // Report from another thread while the main thread reads the slot
        let handle = thread::spawn(|| {
            report("spawned", "failure from spawned thread");
        });
        let _ = error_sink();
        handle.join().expect("Thread should complete successfully");

        let messages = sink.drain();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("spawned"));

        set_error_sink(Arc::new(StdErrorSink::new()));
    }
}
