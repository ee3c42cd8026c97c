//! Log record ingestion.
//!
//! The overall data flow is:
//!
//! log file
//! RecordLines (header skipped)
//! distinct_count
//! Samples
//!

mod error;
mod extract;
mod reader;
mod types;


pub use error::*;
pub use extract::*;
pub use reader::*;
pub use types::*;
