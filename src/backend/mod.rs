pub mod envelope;
pub mod handlers;
mod routes;

use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::diagnostics::DiagnosticSink;
use crate::sync::SyncAllConnections;

#[derive(Clone)]
pub struct AppState {
    pub syncer: Arc<dyn SyncAllConnections>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl AppState {
    pub fn new(
        syncer: impl SyncAllConnections + 'static,
        diagnostics: impl DiagnosticSink + 'static,
    ) -> Self {
        Self {
            syncer: Arc::new(syncer),
            diagnostics: Arc::new(diagnostics),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = app(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
