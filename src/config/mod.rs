
use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generator::DEFAULT_RECORD_COUNT;

#[derive(Debug, Parser)]
#[command(name = "sphere-revenue-pipeline", version, about = "Generate, load and validate ticket revenue data")]
pub struct Cli {
    /// One of: error, warn, info, debug, trace
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize a revenue dataset and write it to a CSV file
    Generate(GenerateArgs),
    /// Clean a revenue dataset and insert it into the warehouse
    Load(LoadArgs),
    /// Run the post-load validation queries against the warehouse
    Validate(ValidateArgs)
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, env = "NUM_RECORDS_TO_GENERATE", default_value_t = DEFAULT_RECORD_COUNT)]
    pub records: usize,

    #[arg(long, default_value = "data/revenue_data.csv")]
    pub output: PathBuf
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[arg(long, default_value = "data/revenue_data.csv")]
    pub input: PathBuf,

    /// Table definition applied before the first insert
    #[arg(long, default_value = "sql/create_table.sql")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub warehouse: WarehouseConfig
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// `;`-terminated read-only statements
    #[arg(long, default_value = "sql/validation_queries.sql")]
    pub queries: PathBuf,

    #[command(flatten)]
    pub warehouse: WarehouseConfig
}

/// Connection settings for the warehouse.
///
/// Every setting can come from the environment (`REDSHIFT_*`), or from a `.env` file in
/// the working directory, so the same binary runs unchanged in scheduled jobs. Flags
/// override both.
#[derive(Clone, Args)]
pub struct WarehouseConfig {
    #[arg(long, env = "REDSHIFT_HOST")]
    pub host: String,

    #[arg(long, env = "REDSHIFT_PORT", default_value_t = 5439)]
    pub port: u16,

    #[arg(long, env = "REDSHIFT_DB", default_value = "dev")]
    pub database: String,

    #[arg(long, env = "REDSHIFT_USER")]
    pub user: String,

    #[arg(long, env = "REDSHIFT_PASSWORD", hide_env_values = true)]
    pub password: String
}

impl fmt::Debug for WarehouseConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("WarehouseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"********")
            .finish()
    }
}
