mod cleaner;
mod config;
mod engine;
mod events;
mod generator;
mod models;
mod storage;
mod types;
mod warehouse;

use std::fs;
use std::io::stderr;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Cli, Command, GenerateArgs, LoadArgs, ValidateArgs};
use crate::engine::{Loader, ValidationRunner};
use crate::events::TracingObserver;
use crate::storage::read_dataset;
use crate::warehouse::{PostgresWarehouse, Warehouse};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    //NOTE: Must run before parsing so `.env` values reach the `env` fallbacks; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let timer = Instant::now();

    match cli.command {
        Command::Generate(args) => generate(args)?,
        Command::Load(args) => load(args).await?,
        Command::Validate(args) => validate(args).await?
    }

    info!("Pipeline step completed in: {:?}", timer.elapsed());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn generate(args: GenerateArgs) -> Result<()> {
    let records = generator::generate(args.records, Utc::now().naive_utc(), &mut rand::thread_rng(), &TracingObserver);

    generator::save(&args.output, &records, &TracingObserver)
        .with_context(|| format!("Failed to save revenue data to {}", args.output.display()))
}

async fn load(args: LoadArgs) -> Result<()> {
    info!("Loading data from {} into the warehouse...", args.input.display());

    let dataset = read_dataset(&args.input)
        .with_context(|| format!("Failed to read dataset {}", args.input.display()))?;
    let ddl = fs::read_to_string(&args.schema)
        .with_context(|| format!("Failed to read schema file {}", args.schema.display()))?;

    let mut warehouse = PostgresWarehouse::connect(&args.warehouse).await
        .with_context(|| format!("Failed to connect to warehouse {}:{}", args.warehouse.host, args.warehouse.port))?;

    let result = Loader::new(TracingObserver).load(&mut warehouse, dataset, &ddl).await;
    warehouse.close().await;

    result.context("Failed to apply warehouse schema")?;

    Ok(())
}

async fn validate(args: ValidateArgs) -> Result<()> {
    let batch = fs::read_to_string(&args.queries)
        .with_context(|| format!("Failed to read validation queries {}", args.queries.display()))?;

    info!("Starting validation queries against the warehouse...");

    let mut warehouse = PostgresWarehouse::connect(&args.warehouse).await
        .with_context(|| format!("Failed to connect to warehouse {}:{}", args.warehouse.host, args.warehouse.port))?;

    ValidationRunner::new(TracingObserver).run(&mut warehouse, &batch).await;
    warehouse.close().await;

    Ok(())
}
