mod chart;
mod color;
mod config;
mod data;
mod export;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::ReportConfig;

#[derive(Debug, Parser)]
#[command(
    name = "benchplot",
    author,
    version,
    about = "Render benchmark speedup charts from raw runtime measurements"
)]
struct CliArgs {
    /// Directory holding the raw *.txt runtime measurements
    #[arg(long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// Directory the speedup-<mode>.png charts are written to
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// JSON config overriding the built-in benchmark matrix
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write a CSV summary of every computed speedup
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    // CLI flags win over config-file values.
    if let Some(dir) = args.results_dir {
        config.results_dir = dir;
    }
    if let Some(dir) = args.out_dir {
        config.out_dir = dir;
    }
    config.validate()?;

    report::run(&config, args.csv.as_deref())
}
