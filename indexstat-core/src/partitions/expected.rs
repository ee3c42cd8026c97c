use crate::partitions::{ModelError, StirlingTable};
use num_traits::ToPrimitive;
use serde::Serialize;

/// Expected block-count frequencies for a sample of a given size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedCurve {
    /// `(k, expected count)` for `k = 1..=n`.
    pub points: Vec<(u32, f64)>,
    /// Mean block count under the uniform partition prior.
    pub mean: f64,
}

impl ExpectedCurve {
    /// Normalizes the table to a probability distribution and scales it to
    /// `sample_count`, so the curve sums to the number of samples.
    pub fn from_table(table: &StirlingTable, sample_count: usize) -> Result<Self, ModelError> {
        if table.is_empty() {
            return Err(ModelError::EmptyTable { n: table.n() });
        }

        let total = table.total().to_f64().unwrap_or(f64::INFINITY);
        let probabilities: Vec<f64> = table.as_f64().iter().map(|s| s / total).collect();

        let points: Vec<(u32, f64)> = probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (i as u32 + 1, p * sample_count as f64))
            .collect();

        let mean: f64 = probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64 + 1.0) * p)
            .sum();

        Ok(Self { points, mean })
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|(_, v)| v).sum()
    }

    pub fn max(&self) -> f64 {
        self.points.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    pub fn at(&self, k: u32) -> Option<f64> {
        self.points.iter().find(|(x, _)| *x == k).map(|(_, v)| *v)
    }
}
