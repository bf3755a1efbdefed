// src/backend/handlers.rs
use axum::extract::State;

use crate::backend::{envelope::SyncEnvelope, AppState};
use crate::diagnostics::DiagnosticSink;
use crate::sync::SyncAllConnections;

pub async fn sync_all_handler(State(state): State<AppState>) -> SyncEnvelope {
    sync_all(state.syncer.as_ref(), state.diagnostics.as_ref()).await
}

/// One sync attempt, no retries. Shared by the HTTP route and the `sync` command.
pub async fn sync_all(
    syncer: &dyn SyncAllConnections,
    diagnostics: &dyn DiagnosticSink,
) -> SyncEnvelope {
    diagnostics.info("starting sync");

    let outcome = syncer.sync_all_connections().await;
    if let Err(e) = &outcome {
        diagnostics.error(&format!("sync failed: {}", e));
    }

    SyncEnvelope::from_outcome(outcome)
}
