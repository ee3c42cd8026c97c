use crate::records::{Columns, MalformedPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound on the column window; keeps `B(width)` exact in an `f64`.
pub const MAX_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Log file to analyze.
    pub input: PathBuf,

    /// First column of the grouping window (0-indexed).
    pub first_column: usize,

    /// Number of columns in the window; also the partition universe size.
    pub width: usize,

    pub on_malformed: MalformedPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let columns = Columns::default();
        Self {
            input: PathBuf::from("indices.log"),
            first_column: columns.first,
            width: columns.width,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn columns(&self) -> Columns {
        Columns::new(self.first_column, self.width)
    }
}
