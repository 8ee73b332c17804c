// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::ErrorSink;

/**
The reference sink: reports to stderr.
 */
#[derive(Debug, Clone)]
pub struct StdErrorSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdErrorSink trait implementations:
//
// - Debug/Clone: Derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Hash: Implemented - consistent with Eq
// - Default: Implemented - convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: Automatic - zero-sized struct is always thread-safe

impl Copy for StdErrorSink {}

impl PartialEq for StdErrorSink {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StdErrorSink {}

impl std::hash::Hash for StdErrorSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StdErrorSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl ErrorSink for StdErrorSink {
    fn report(&self, message: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            // A sink must not panic; if stderr itself is gone there is
            // nowhere left to complain, so the write result is dropped.
            let mut lock = std::io::stderr().lock();
            let _ = lock.write_all(message.as_bytes());
            let _ = lock.write_all(b"\n");
        }
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&message.into());
        }
    }
}
