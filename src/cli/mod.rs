//! Command line entry: argument parsing plus the commands that do not start
//! the HTTP server.

use clap::{Parser, Subcommand};

pub mod commands;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(name = "integration-sync")]
#[command(about = "Trigger and serve synchronisation of all integration connections", long_about = None)]
pub struct Args {
    /// sqlite database holding the connections table
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://integration_sync.db",
        global = true
    )]
    pub database_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the HTTP API (default)
    Server {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Sync all connections once and print the result envelope
    Sync,
    /// Register a new connection
    AddConnection { name: String },
    /// Stop syncing a connection
    DisableConnection { id: i64 },
    /// Resume syncing a connection
    EnableConnection { id: i64 },
    /// List registered connections
    Connections,
}

impl Args {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Server {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_is_the_default_command() {
        let args = Args::try_parse_from(["integration-sync", "--database-url", "sqlite::memory:"])
            .unwrap();
        assert_eq!(
            args.command_or_default(),
            Command::Server {
                host: "127.0.0.1".to_string(),
                port: 3000
            }
        );
    }

    #[test]
    fn bare_server_matches_the_implicit_default() {
        let implicit = Args::try_parse_from(["integration-sync"]).unwrap();
        let explicit = Args::try_parse_from(["integration-sync", "server"]).unwrap();
        assert_eq!(implicit.command_or_default(), explicit.command_or_default());
    }

    #[test]
    fn parses_server_flags() {
        let args = Args::try_parse_from([
            "integration-sync",
            "server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();
        assert_eq!(
            args.command_or_default(),
            Command::Server {
                host: "0.0.0.0".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn database_url_is_accepted_after_subcommand() {
        let args =
            Args::try_parse_from(["integration-sync", "sync", "--database-url", "sqlite::memory:"])
                .unwrap();
        assert_eq!(args.database_url, "sqlite::memory:");
        assert_eq!(args.command_or_default(), Command::Sync);
    }

    #[test]
    fn add_connection_takes_a_name() {
        let args = Args::try_parse_from(["integration-sync", "add-connection", "crm"]).unwrap();
        assert_eq!(
            args.command_or_default(),
            Command::AddConnection {
                name: "crm".to_string()
            }
        );
    }
}
