// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests the error-sink surface as a downstream crate sees it.

use logndc::{ErrorSink, InMemorySink, StdErrorSink, error_sink, set_error_sink};
use std::sync::Arc;

#[test]
fn installed_sink_receives_reports() {
    let sink = Arc::new(InMemorySink::new());
    set_error_sink(sink.clone());
    assert!(sink.is_empty());

    error_sink().report("something went wrong inside the logger");

    let messages = sink.drain();
    assert_eq!(
        messages,
        vec!["something went wrong inside the logger".to_string()]
    );
    assert!(sink.is_empty());

    set_error_sink(Arc::new(StdErrorSink::new()));
}
