//! tunr CLI - serve and administer the artists catalog
//!
//! - `serve`: run the HTML server
//! - `migrate`: create the `artists` and `songs` tables
//! - `seed`: insert sample artists and songs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::{migrate::MigrateArgs, seed::SeedArgs, serve::ServeArgs};
use config::TunrConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "tunr",
    author,
    version,
    about = "Catalog of music artists and their songs, served as HTML"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.tunr/config.toml when present)
    #[arg(long, global = true, env = "TUNR_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Run database migrations
    Migrate(MigrateArgs),
    /// Insert sample artists and songs
    Seed(SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; values already in the environment win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config = TunrConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await?,
        Commands::Seed(args) => commands::run_seed(args, &config).await?,
    }
    Ok(())
}
