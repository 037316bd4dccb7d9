//! Command implementations for the tunr CLI

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::Args;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}
