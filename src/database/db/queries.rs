use sqlx::{Pool, Sqlite};
use crate::database::models::Connection;
/*
SQL for the connections table.
Writes are single statements; none of these open a transaction.
 */

 /*==========Connection Queries=========== */

// Create connection, enabled by default
pub async fn create_connection(
    pool: &Pool<Sqlite>,
    connection_name: &str,
) -> Result<i64, sqlx::Error> {
    let connection_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO connections (connection_name, enabled, sync_count, connection_created_at)
        VALUES (?, 1, 0, datetime('now'))
        RETURNING connection_id
        "#,
    )
    .bind(connection_name)
    .fetch_one(pool)
    .await?;

    Ok(connection_id)
}

// Get all connections
pub async fn get_all_connections(pool: &Pool<Sqlite>) -> Result<Vec<Connection>, sqlx::Error> {
    sqlx::query_as::<_, Connection>(
        r#"
        SELECT
            connection_id,
            connection_name,
            enabled,
            sync_count,
            last_synced_at,
            connection_created_at
        FROM connections
        ORDER BY connection_id
        "#,
    )
    .fetch_all(pool)
    .await
}

// Enable or disable a connection. Returns false when the id does not exist.
pub async fn set_connection_enabled(
    pool: &Pool<Sqlite>,
    connection_id: i64,
    enabled: bool,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE connections SET enabled = ? WHERE connection_id = ?")
        .bind(enabled)
        .bind(connection_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Stamp every enabled connection as synced now and return (id, name) of each, ordered by id.
// Single write statement: concurrent callers queue on busy_timeout.
pub async fn mark_enabled_connections_synced(
    pool: &Pool<Sqlite>,
) -> Result<Vec<(i64, String)>, sqlx::Error> {
    let mut synced = sqlx::query_as::<_, (i64, String)>(
        r#"
        UPDATE connections
        SET last_synced_at = datetime('now'),
            sync_count     = sync_count + 1
        WHERE enabled = 1
        RETURNING connection_id, connection_name
        "#,
    )
    .fetch_all(pool)
    .await?;

    // RETURNING row order is unspecified
    synced.sort_by_key(|(connection_id, _)| *connection_id);
    Ok(synced)
}
