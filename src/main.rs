// src/main.rs
use clap::Parser;
use dotenvy::dotenv;
use integration_sync::backend::{self, AppState};
use integration_sync::cli::{commands, Args, Command};
use integration_sync::database::db::{connection, migrate};
use integration_sync::diagnostics::TracingSink;
use integration_sync::sync::StoreSync;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "integration_sync=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = connection::get_db_pool(&args.database_url).await?;
    migrate::run_migrations(&pool).await?;

    match args.command_or_default() {
        Command::Server { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            let state = AppState::new(StoreSync::new(pool), TracingSink);
            backend::run_server(addr, state).await?;
        }
        Command::Sync => commands::sync_once(pool).await?,
        Command::AddConnection { name } => commands::add_connection(&pool, &name).await?,
        Command::DisableConnection { id } => commands::set_enabled(&pool, id, false).await?,
        Command::EnableConnection { id } => commands::set_enabled(&pool, id, true).await?,
        Command::Connections => commands::list_connections(&pool).await?,
    }
    Ok(())
}
