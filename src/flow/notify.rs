//! Notification sink.
//!
//! The orchestrator emits three severities, each a short human-readable
//! string; delivery (toast, log, terminal) is up to the sink.

/// Receives user-facing notifications from the orchestrator.
pub trait NotificationSink {
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that forwards notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn success(&self, message: &str) {
        tracing::info!(notification = "success", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(notification = "warning", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(notification = "error", "{message}");
    }
}
