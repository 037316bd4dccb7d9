//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use tunr_server::{create_pool_with_options, run_migrations};

use super::DatabaseArgs;
use crate::config::TunrConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the `artists` and `songs` tables if they are missing
pub async fn run_migrate(args: MigrateArgs, config: &TunrConfig) -> Result<()> {
    let database_url = config.database_url(args.db.database_url);
    let max_connections = config.max_connections(args.db.max_connections);
    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations complete");
    Ok(())
}
