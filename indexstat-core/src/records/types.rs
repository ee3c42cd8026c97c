use serde::{Deserialize, Serialize};

/// Contiguous run of whitespace-separated columns taken from each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Columns {
    /// First column used, 0-indexed.
    pub first: usize,
    /// Number of columns used.
    pub width: usize,
}

impl Columns {
    pub fn new(first: usize, width: usize) -> Self {
        Self { first, width }
    }

    /// Exclusive end of the column range.
    pub fn end(&self) -> usize {
        self.first + self.width
    }
}

impl Default for Columns {
    /// Columns 1..7: the six grouping indices following the sample number.
    fn default() -> Self {
        Self { first: 1, width: 6 }
    }
}

/// What to do with a record that has too few columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the run, naming the offending line.
    #[default]
    Fail,
    /// Drop the record and log a warning.
    Skip,
}

/// One line of the log with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

/// Distinct-value counts, one per accepted record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Samples {
    pub values: Vec<usize>,
    /// Records dropped under [`MalformedPolicy::Skip`].
    pub skipped: usize,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: usize = self.values.iter().sum();
        Some(sum as f64 / self.values.len() as f64)
    }
}
