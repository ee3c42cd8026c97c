use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use serde::Serialize;

/// `n!` as an exact integer.
pub fn factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Binomial coefficient `C(a, b)`; zero when `b > a`.
pub fn binomial(a: u32, b: u32) -> BigUint {
    if b > a {
        return BigUint::zero();
    }
    factorial(a) / (factorial(b) * factorial(a - b))
}

/// Stirling number of the second kind `S(n, k)`: the number of ways to split
/// `n` labelled items into exactly `k` non-empty, unlabelled groups.
///
/// Evaluated with the inclusion–exclusion form
///
/// ```text
/// S(n, k) = 1/k! * sum_{j=0..k} (-1)^(k-j) * C(k, j) * j^n
/// ```
///
/// The alternating sum is carried out in signed big integers so no
/// cancellation error creeps in; the final division by `k!` is exact.
///
/// Boundary values follow the usual convention: `S(0, 0) = 1`, `S(n, n) = 1`,
/// `S(n, 0) = 0` for `n > 0` and `S(n, k) = 0` for `k > n`.
pub fn stirling2(n: u32, k: u32) -> BigUint {
    if n == k {
        return BigUint::one();
    }
    if k == 0 || k > n {
        return BigUint::zero();
    }

    let sum = (0..=k).fold(BigInt::zero(), |acc, j| {
        let term = BigInt::from(binomial(k, j) * BigUint::from(j).pow(n));
        if (k - j) % 2 == 0 { acc + term } else { acc - term }
    });

    // The sum is k! * S(n, k) and therefore non-negative.
    let sum = sum.to_biguint().unwrap_or_default();
    sum / factorial(k)
}

/// Bell number `B(n)`, the number of partitions of an `n`-set into any
/// number of non-empty blocks.
pub fn bell(n: u32) -> BigUint {
    (0..=n).map(|k| stirling2(n, k)).sum()
}

/// `S(n, 1) ..= S(n, n)` for a fixed universe size `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StirlingTable {
    n: u32,
    #[serde(serialize_with = "serialize_exact")]
    values: Vec<BigUint>,
}

impl StirlingTable {
    pub fn new(n: u32) -> Self {
        let values = (1..=n).map(|k| stirling2(n, k)).collect();
        tracing::debug!(n, "built stirling table");
        Self { n, values }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    /// Values as `f64` for plotting, index `i` holding `S(n, i + 1)`.
    pub fn as_f64(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::INFINITY))
            .collect()
    }

    /// Exact sum of the table, which is the Bell number `B(n)` for `n > 0`.
    pub fn total(&self) -> BigUint {
        self.values.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// JSON numbers lose precision past 2^53, so exact values go out as strings.
fn serialize_exact<S>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(values.iter().map(|v| v.to_string()))
}
