//! Diagnostic sink used by request handlers.

/// Where handlers report progress and failures.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to the process `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "integration_sync::sync", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "integration_sync::sync", "{}", message);
    }
}
