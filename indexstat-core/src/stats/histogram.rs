use serde::Serialize;

/// Unit-width histogram over small positive integers.
///
/// Bins are centered on `1..=last`, so the edges sit at `0.5, 1.5, ..., last + 0.5`.
/// Values outside every bin are tallied separately instead of being dropped
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    last: usize,
    counts: Vec<u64>,
    out_of_range: u64,
}

impl Histogram {
    pub fn new(last: usize) -> Self {
        Self {
            last,
            counts: vec![0; last],
            out_of_range: 0,
        }
    }

    pub fn from_values(last: usize, values: &[usize]) -> Self {
        let mut histogram = Self::new(last);
        for &value in values {
            histogram.record(value);
        }
        histogram
    }

    pub fn record(&mut self, value: usize) {
        match value.checked_sub(1).and_then(|i| self.counts.get_mut(i)) {
            Some(count) => *count += 1,
            None => self.out_of_range += 1,
        }
    }

    /// Bin edges, `last + 1` of them.
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.last).map(|i| i as f64 + 0.5).collect()
    }

    /// `(bin center, count)` pairs in ascending order.
    pub fn bins(&self) -> Vec<(usize, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| (i + 1, *c))
            .collect()
    }

    pub fn count(&self, center: usize) -> u64 {
        center
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Samples that landed in a bin.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn out_of_range(&self) -> u64 {
        self.out_of_range
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn last(&self) -> usize {
        self.last
    }
}
