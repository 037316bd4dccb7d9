//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tunr_server::{create_pool_with_options, run_migrations, run_server, ServerConfig};

use super::DatabaseArgs;
use crate::config::TunrConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:4567)
    #[arg(long, short = 'b', env = "TUNR_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Run pending migrations before serving
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &TunrConfig) -> Result<()> {
    let database_url = config.database_url(args.db.database_url);
    let max_connections = config.max_connections(args.db.max_connections);

    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let server_config = ServerConfig {
        bind_addr: config.bind(args.bind),
        cors_permissive: config.cors_permissive(args.cors_permissive),
    };

    tracing::info!("Starting tunr server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
