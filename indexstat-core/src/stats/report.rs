use crate::partitions::{ExpectedCurve, ModelError, StirlingTable};
use crate::records::{Columns, Samples};
use crate::stats::Histogram;
use serde::Serialize;

/// Everything the renderers need: observed histogram plus model overlay.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub columns: Columns,
    pub sample_count: usize,
    pub skipped: usize,
    pub histogram: Histogram,
    pub stirling: StirlingTable,
    pub expected: ExpectedCurve,
    pub observed_mean: Option<f64>,
}

impl Report {
    pub fn build(samples: &Samples, columns: Columns) -> Result<Self, ModelError> {
        let n = u32::try_from(columns.width).unwrap_or(u32::MAX);
        let stirling = StirlingTable::new(n);
        let expected = ExpectedCurve::from_table(&stirling, samples.len())?;
        // One bin past `width` keeps the right margin the model curve leaves.
        let histogram = Histogram::from_values(columns.width + 1, &samples.values);

        if histogram.out_of_range() > 0 {
            tracing::warn!(
                count = histogram.out_of_range(),
                "samples fell outside the histogram range"
            );
        }

        tracing::info!(
            samples = samples.len(),
            observed_mean = ?samples.mean(),
            expected_mean = expected.mean,
            "built report"
        );

        Ok(Self {
            columns,
            sample_count: samples.len(),
            skipped: samples.skipped,
            histogram,
            stirling,
            expected,
            observed_mean: samples.mean(),
        })
    }

    /// Observed share of samples with block count `k`.
    pub fn observed_proportion(&self, k: usize) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.histogram.count(k) as f64 / self.sample_count as f64
    }

    /// Model share of samples with block count `k`.
    pub fn expected_proportion(&self, k: usize) -> f64 {
        let values = self.stirling.as_f64();
        let total: f64 = values.iter().sum();
        match k.checked_sub(1).and_then(|i| values.get(i)) {
            Some(s) if total > 0.0 => s / total,
            _ => 0.0,
        }
    }
}
