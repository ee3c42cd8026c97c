use crate::cli::analyze::render::{render_json, render_text};
use crate::cli::analyze::tui;
use crate::cli::analyze::types::OutputMode;
use crate::conf::AnalysisConfig;
use crate::records::{collect_samples, open_records};
use crate::stats::Report;
use anyhow::{Context, Result};

/// Runs the pipeline up to the report, without rendering anything.
pub fn analyze(config: &AnalysisConfig) -> Result<Report> {
    let columns = config.columns();

    let lines = open_records(&config.input)?;
    let samples = collect_samples(lines, columns, config.on_malformed)
        .with_context(|| format!("failed to analyze {}", config.input.display()))?;

    Ok(Report::build(&samples, columns)?)
}

pub fn run_analysis(config: &AnalysisConfig, mode: OutputMode) -> Result<()> {
    let report = analyze(config)?;

    match mode {
        OutputMode::Tui => tui::run(&report)?,
        OutputMode::Text => print!("{}", render_text(&report)),
        OutputMode::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}
