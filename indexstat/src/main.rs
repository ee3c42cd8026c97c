use clap::Parser;
use indexstat_core::cli::analyze::{OutputMode, default_output_mode, run_analysis};
use indexstat_core::conf::resolve_config;
use indexstat_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "indexstat",
    version,
    about = "indexstat: compare sampled partition sizes with the Stirling prior"
)]
struct Cli {
    /// Path to the grouping-index log (default: indices.log)
    input: Option<PathBuf>,

    /// Path to a TOML config file (default: ./indexstat.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to show the result (default: tui on a terminal, text otherwise)
    #[arg(long, value_enum)]
    output: Option<OutputMode>,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("indexstat error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&std::env::current_dir()?, cli.config.as_deref(), cli.input)?;
    let mode = cli.output.unwrap_or_else(default_output_mode);

    tracing::debug!(?config, ?mode, "starting analysis");

    run_analysis(&config, mode)
}
