//! Trace ID system for correlating the log lines of one user action
//!
//! A presentation handler (form submit, file selection) runs inside a span
//! carrying a fresh trace id, so every API-call log line it produces can be
//! grouped after the fact.

use std::future::Future;
use tracing::Instrument;
use uuid::Uuid;

/// Generate a new trace ID
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Run `fut` inside a span named after `action` with a new trace ID
pub async fn with_trace_id<F, R>(action: &'static str, fut: F) -> R
where
    F: Future<Output = R>,
{
    let trace_id = new_trace_id();
    let span = tracing::info_span!("action", action, trace_id = %trace_id);
    let result = fut.instrument(span).await;
    tracing::debug!(action, trace_id = %trace_id, "Trace context completed");
    result
}
