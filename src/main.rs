// Entry point for the pets-query CLI.

use anyhow::Result;
use clap::Parser;
use pets_query::runner::DEFAULT_DB_PATH;
use pets_query::RunnerConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Run the pets queries against a SQLite file and print the results
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SQLite database to read
    #[arg(env = "PETS_DATABASE", default_value = DEFAULT_DB_PATH)]
    database: PathBuf,

    /// JSON file with the queries to run instead of the built-in set
    #[arg(short, long)]
    queries: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = RunnerConfig::new(args.database);
    if let Some(path) = args.queries {
        config = config.with_queries_file(path);
    }

    config.run()?;
    Ok(())
}
