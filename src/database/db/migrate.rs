use anyhow::Result;
use sqlx::{Pool, Sqlite};

// Embedded at build time from ./migrations
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("database migrations applied");
    Ok(())
}
