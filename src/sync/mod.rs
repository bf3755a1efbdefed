//! The collaborator behind the sync-all endpoint.
//!
//! The endpoint only knows [`SyncAllConnections`]; how connections are
//! synchronised, and what the results look like, is up to the implementation.

mod store;

pub use store::StoreSync;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Synchronise every configured integration connection.
#[async_trait]
pub trait SyncAllConnections: Send + Sync {
    /// Run one synchronisation pass. The returned value is passed through to
    /// callers untouched.
    async fn sync_all_connections(&self) -> Result<Value, SyncError>;
}

/// A failed synchronisation attempt.
///
/// Variants describe the shape of the failure value so that its text
/// rendering is fixed: error-like values carry an `Error: ` prefix, bare
/// values render as-is.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Error: {0}")]
    Failed(String),

    #[error("{0}")]
    Message(String),

    /// Structured failure detail, rendered as compact JSON.
    #[error("{0}")]
    Value(Value),

    #[error("Error: {0}")]
    Store(#[from] sqlx::Error),
}

impl SyncError {
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }
}
