use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Pool, Sqlite};

use super::{SyncAllConnections, SyncError};
use crate::database::db::queries;

/// Syncs the enabled rows of the `connections` table.
///
/// A pass is one write statement, so it is all-or-nothing and concurrent
/// passes queue on the database write lock.
#[derive(Clone)]
pub struct StoreSync {
    pool: Pool<Sqlite>,
}

impl StoreSync {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyncAllConnections for StoreSync {
    async fn sync_all_connections(&self) -> Result<Value, SyncError> {
        let synced = queries::mark_enabled_connections_synced(&self.pool).await?;

        let results: Vec<String> = synced
            .into_iter()
            .map(|(connection_id, connection_name)| {
                tracing::debug!(connection_id, "synced connection {}", connection_name);
                format!("{}-ok", connection_name)
            })
            .collect();

        Ok(Value::from(results))
    }
}
