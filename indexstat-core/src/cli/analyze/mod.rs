//! Partition Count Analysis
//!
//! Reads a grouping-index log, counts how many distinct groups each record
//! uses, and compares the observed counts with what a uniform prior over set
//! partitions predicts.
//!
//! There are three ways to view the result:
//! - **Tui mode**: an interactive chart with the observed counts as bars and
//!   the expected curve drawn over them
//! - **Text mode**: the same comparison as a bar listing on stdout
//! - **Json mode**: the full report, for feeding into other tools
//!
//! The overall data processing architecture is:
//!
//! log file
//! open_records
//! collect_samples
//! Report
//! render
//!

mod render;
mod run;
mod tui;
mod types;


pub use render::{render_json, render_text};
pub use run::{analyze, run_analysis};
pub use types::{OutputMode, default_output_mode};
