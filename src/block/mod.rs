//! Block sum approximation
//!
//! For a block [a, b] with midpoint x = (a + b + 1)/2:
//!
//! Σ_{i=a}^{b} 1/i = (1/x) Σ 1/(1 − t),  t = (x − i)/x
//!
//! t runs over [−n₀ + 1/x, n₀] in steps of 1/x with n₀ = (b + 1 − x)/x.
//! Replacing 1/(1 − t) by 1 + t + ... + t^M and telescoping through the
//! antidifference p of that polynomial leaves p(n₀) − p(−n₀), which is O(M)
//! work regardless of the block width.
//!
//! Truncation error per term is t^(M+1)/(1 − t), so blocks must keep
//! b − a ≤ a (|n₀| ≤ 1/3 + O(1/a)).

use crate::{
    series::{back_substitute, DifferenceTable, Polynomial},
    HarmonicError, TERMS,
};

/// Inclusive range of terms [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BlockRange {
    start: u64,
    end: u64,
}

impl BlockRange {
    /// Validate a block for approximation
    pub fn new(start: u64, end: u64) -> Result<Self, HarmonicError> {
        if start == 0 {
            return Err(HarmonicError::ZeroStart);
        }
        if start > end {
            return Err(HarmonicError::InvalidRange { start, end });
        }
        if end - start > start {
            return Err(HarmonicError::BlockTooWide { start, end });
        }
        Ok(Self { start, end })
    }

    /// Construct a block already known to satisfy the checks in [`BlockRange::new`]
    pub(crate) fn from_bounds(start: u64, end: u64) -> Self {
        debug_assert!(start >= 1 && start <= end && end - start <= start);
        Self { start, end }
    }

    /// First term
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last term (inclusive)
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of terms
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false; validated blocks hold at least one term
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Midpoint x = (a + b + 1)/2
    pub fn midpoint(&self) -> f64 {
        (self.start as f64 + self.end as f64 + 1.0) * 0.5
    }

    /// Series ratio n₀ = (b + 1 − x)/x
    pub fn ratio(&self) -> f64 {
        let x = self.midpoint();
        (self.end as f64 + 1.0 - x) / x
    }

    /// Approximate Σ 1/i over the block with an M-term series
    ///
    /// The start must be at least M; below that the step 1/x is too coarse and
    /// the antidifference coefficients cancel to noise.
    pub fn approximate(&self, terms: usize) -> Result<f64, HarmonicError> {
        if self.start < terms as u64 {
            return Err(HarmonicError::StartBelowTerms {
                start: self.start,
                terms,
            });
        }
        Ok(self.series_sum(terms))
    }

    /// Series approximation for a block whose start is already known to be ≥ M
    pub(crate) fn series_sum(&self, terms: usize) -> f64 {
        debug_assert!(self.start >= terms as u64);
        let x = self.midpoint();
        let ratio = self.ratio();

        let table = DifferenceTable::expand(1.0 / x, terms);
        let geometric = Polynomial::geometric(terms);
        let sum_formula = back_substitute(&table, geometric.into_coefficients());

        sum_formula.symmetric_difference(ratio) / x
    }

    /// Σ 1/i over the block, term by term in ascending order
    pub fn direct_sum(&self) -> f64 {
        let mut result = 0.0;
        for i in self.start..=self.end {
            result += 1.0 / i as f64;
        }
        result
    }
}

/// Approximate Σ_{i=start}^{end} 1/i with the default term count
pub fn approximate_block_sum(start: u64, end: u64) -> Result<f64, HarmonicError> {
    BlockRange::new(start, end)?.approximate(TERMS)
}
