use anyhow::{bail, Result};
use sqlx::{Pool, Sqlite};

use crate::backend::handlers;
use crate::database::db::queries;
use crate::diagnostics::TracingSink;
use crate::sync::StoreSync;

// Same path as POST /api/integrations/sync-all, minus HTTP.
pub async fn sync_once(pool: Pool<Sqlite>) -> Result<()> {
    let envelope = handlers::sync_all(&StoreSync::new(pool), &TracingSink).await;

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.is_success() {
        bail!("sync failed");
    }
    Ok(())
}

pub async fn add_connection(pool: &Pool<Sqlite>, name: &str) -> Result<()> {
    let connection_id = queries::create_connection(pool, name).await?;
    println!("Connection created: {} (id {})", name, connection_id);
    Ok(())
}

pub async fn set_enabled(pool: &Pool<Sqlite>, connection_id: i64, enabled: bool) -> Result<()> {
    if !queries::set_connection_enabled(pool, connection_id, enabled).await? {
        bail!("no connection with id {}", connection_id);
    }
    println!(
        "Connection {} {}",
        connection_id,
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub async fn list_connections(pool: &Pool<Sqlite>) -> Result<()> {
    let connections = queries::get_all_connections(pool).await?;
    if connections.is_empty() {
        println!("No connections configured");
        return Ok(());
    }

    for c in connections {
        let last = c
            .last_synced_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:>4}  {:<24} {:<8} syncs={:<5} last={}",
            c.connection_id,
            c.connection_name,
            if c.enabled { "enabled" } else { "disabled" },
            c.sync_count,
            last
        );
    }
    Ok(())
}
