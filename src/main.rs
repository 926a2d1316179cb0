//! `tabfilter` command-line entrypoint.
//!
//! ```bash
//! tabfilter products.csv
//! tabfilter products.csv --where "price>500"
//! tabfilter products.csv --where "brand=acme" --aggregate "price=avg"
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see parsed conditions and row counts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tabfilter::pipeline::{self, QueryRequest};

#[derive(Parser, Debug)]
#[command(name = "tabfilter")]
#[command(about = "Filter and aggregate a CSV file, printing the result as a table")]
#[command(version)]
struct Cli {
    /// Path to the CSV file
    file: PathBuf,

    /// Filter condition (e.g. "price>500")
    #[arg(long = "where", value_name = "CONDITION")]
    where_clause: Option<String>,

    /// Aggregate condition (e.g. "price=avg")
    #[arg(long, value_name = "SPEC")]
    aggregate: Option<String>,
}

impl From<Cli> for QueryRequest {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.file,
            where_clause: cli.where_clause,
            aggregate: cli.aggregate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let request = QueryRequest::from(cli);
    let output = pipeline::run(&request)
        .with_context(|| format!("failed to process {}", request.path.display()))?;
    print!("{output}");
    Ok(())
}
