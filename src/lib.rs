//! # Harmonic Number Estimation via Polynomial Antidifferences
//!
//! Estimates H(n) = Σ_{i=1}^{n} 1/i for any `u64` n without performing n
//! additions.
//!
//! ## Core Algorithm
//!
//! 1. **Direct phase**: below a fixed cutoff C, sum 1/i term by term
//! 2. **Difference table**: expand (n−k)^m for m = 1..M+1 by repeated multiplication
//! 3. **Antidifference**: back-substitute to get p with p(n) − p(n−k) = P(n)
//! 4. **Block sums**: approximate Σ_{i=a}^{b} 1/i with a truncated geometric
//!    series around the block midpoint, telescoped through p
//! 5. **Doubling windows**: cover [C, n] with blocks [a, 2a) so only O(log n)
//!    blocks are needed
//!
//! Each full block has midpoint ratio |n₀| = 1/3, so the truncation error of the
//! M = 100 term series stays far below f64 resolution for every block.
//!
//! ## Usage Example
//!
//! ```
//! use harmonic_series::{estimate_harmonic, EstimatorConfig, HarmonicEstimator};
//!
//! assert_eq!(estimate_harmonic(1), 1.0);
//!
//! let estimator = HarmonicEstimator::new(EstimatorConfig::default()).unwrap();
//! let h = estimator.estimate(1_000_000);
//! assert!((h - 14.392_726_722_865_7).abs() < 1e-8);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one layer of the numeric kernel
pub mod series;     // Polynomials, difference tables, antidifferences
pub mod block;      // Block sum approximation
pub mod estimator;  // Doubling-window driver

// Re-exports for convenience
pub use series::{solve_antidifference, AntidifferenceSolver, DifferenceTable, Polynomial, SumFormula};
pub use block::{approximate_block_sum, BlockRange};
pub use estimator::{BlockContribution, DoublingSchedule, HarmonicEstimate, HarmonicEstimator, Phase};

use thiserror::Error;

/// Number of geometric-series terms M used to approximate 1/(1−t)
pub const TERMS: usize = 100;

/// Below this n the harmonic number is summed directly
pub const DIRECT_CUTOFF: u64 = 16384;

/// Configuration parameters for estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Term count M of the geometric series
    pub term_count: usize,

    /// Cutoff C between the direct and doubling phases
    pub direct_cutoff: u64,

    /// Keep a per-block breakdown in the run report
    pub record_blocks: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            term_count: TERMS,
            direct_cutoff: DIRECT_CUTOFF,
            record_blocks: false,
        }
    }
}

impl EstimatorConfig {
    /// Default configuration with the block breakdown enabled
    pub fn recording() -> Self {
        Self {
            record_blocks: true,
            ..Self::default()
        }
    }

    /// Check the parameters describe a usable estimator
    ///
    /// The first block starts at C with step 1/(1.5C); once C drops below M the
    /// antidifference coefficients grow faster than the series powers shrink and
    /// the result is dominated by cancellation.
    pub fn validate(&self) -> Result<(), HarmonicError> {
        if self.term_count == 0 {
            return Err(HarmonicError::InvalidConfig(
                "term count must be at least 1".to_string(),
            ));
        }
        if self.direct_cutoff == 0 {
            return Err(HarmonicError::InvalidConfig(
                "direct cutoff must be at least 1".to_string(),
            ));
        }
        if self.direct_cutoff < self.term_count as u64 {
            return Err(HarmonicError::InvalidConfig(format!(
                "direct cutoff {} is below term count {}",
                self.direct_cutoff, self.term_count
            )));
        }
        Ok(())
    }
}

/// Errors raised by the validating entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmonicError {
    /// Difference table step is zero or not finite
    #[error("Invalid step {0}: must be finite and nonzero")]
    InvalidStep(f64),

    /// Block range with start after end
    #[error("Invalid block range [{start}, {end}]")]
    InvalidRange {
        /// First term of the block
        start: u64,
        /// Last term of the block
        end: u64,
    },

    /// Block range that includes the term 1/0
    #[error("Block range must start at 1 or later")]
    ZeroStart,

    /// Block wider than its start, so the series ratio is not below 1
    #[error("Block [{start}, {end}] is wider than its start")]
    BlockTooWide {
        /// First term of the block
        start: u64,
        /// Last term of the block
        end: u64,
    },

    /// Block starts too close to 1 for the term count to stay accurate
    #[error("Block start {start} is below the term count {terms}")]
    StartBelowTerms {
        /// First term of the block
        start: u64,
        /// Term count M
        terms: usize,
    },

    /// Polynomial does not match the difference table
    #[error("Polynomial has {actual} coefficients, expected {expected}")]
    LengthMismatch {
        /// Coefficients the table supports
        expected: usize,
        /// Coefficients supplied
        actual: usize,
    },

    /// Polynomial with no coefficients
    #[error("Polynomial has no coefficients")]
    EmptyPolynomial,

    /// Rejected estimator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Sum 1/i for i = 1..=n in ascending order
pub fn direct_harmonic(n: u64) -> f64 {
    let mut result = 0.0;
    for i in 1..=n {
        result += 1.0 / i as f64;
    }
    result
}

/// Estimate H(n) with the default configuration
pub fn estimate_harmonic(n: u64) -> f64 {
    HarmonicEstimator::default().estimate(n)
}
