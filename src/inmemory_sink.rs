// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! An [`ErrorSink`] that captures reports in memory rather than writing them
//! to stderr, for:
//!
//! - Unit testing the failure-absorption path
//! - Capturing reports where stderr is redirected or unavailable
//! - Examining reports programmatically (e.g. WASM in browsers)

use crate::sink::ErrorSink;
use std::sync::Mutex;

/// An error sink that stores reported messages in a `Vec<String>`.
///
/// Thread-safe; share it across threads with `Arc`.  Typical test usage is
/// to install it with [`set_error_sink`](crate::set_error_sink), run the code
/// under test, and assert on [`drain`](InMemorySink::drain):
///
/// ```rust
/// use logndc::InMemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// logndc::set_error_sink(sink.clone());
///
/// // ...code under test...
///
/// for message in sink.drain() {
///     println!("reported: {message}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    messages: Mutex<Vec<String>>,
}

impl InMemorySink {
    pub const fn new() -> Self {
        InMemorySink {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Removes and returns all captured messages, oldest first.
    pub fn drain(&self) -> Vec<String> {
        let mut messages = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *messages)
    }

    /// True if nothing has been reported since the last drain.
    pub fn is_empty(&self) -> bool {
        match self.messages.lock() {
            Ok(guard) => guard.is_empty(),
            Err(poisoned) => poisoned.into_inner().is_empty(),
        }
    }
}

impl ErrorSink for InMemorySink {
    fn report(&self, message: &str) {
        // Recover from poison rather than panic: a sink must not take the
        // process down, even if an earlier panic happened mid-report.
        let mut messages = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}
