//! Harmonic number driver
//!
//! Three sequential phases:
//! - Direct: n < C, sum 1/i term by term
//! - Seed: sum 1/i for i = 1..C−1
//! - Doubling: approximate [C, 2C), [2C, 4C), ... then the tail [a, n]
//!
//! Accumulation order is fixed, so results are bit-reproducible.

mod schedule;

pub use schedule::{DoublingSchedule, ScheduledBlock};

use crate::{block::BlockRange, direct_harmonic, EstimatorConfig, HarmonicError};

/// Which path produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Phase {
    /// n below the cutoff, summed term by term
    Direct,
    /// Seed sum plus doubling-window blocks
    Doubling,
}

/// Contribution of one approximated block
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BlockContribution {
    /// Terms covered
    pub range: BlockRange,
    /// Whether this was the final partial window
    pub is_tail: bool,
    /// Series ratio n₀ of the block
    pub ratio: f64,
    /// Approximated Σ 1/i over the block
    pub value: f64,
}

/// Result of an estimation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct HarmonicEstimate {
    /// Argument n
    pub n: u64,

    /// Estimated H(n)
    pub value: f64,

    /// Path taken
    pub phase: Phase,

    /// Terms summed directly
    pub direct_terms: u64,

    /// Number of approximated blocks
    pub block_count: usize,

    /// Per-block breakdown (if enabled)
    pub blocks: Option<Vec<BlockContribution>>,
}

/// Doubling-window estimator for H(n)
#[derive(Debug, Clone, Default)]
pub struct HarmonicEstimator {
    config: EstimatorConfig,
}

impl HarmonicEstimator {
    /// Create estimator, rejecting invalid configurations
    pub fn new(config: EstimatorConfig) -> Result<Self, HarmonicError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate H(n)
    pub fn estimate(&self, n: u64) -> f64 {
        self.run(n).value
    }

    /// Blocks the doubling phase would approximate for n
    pub fn schedule(&self, n: u64) -> DoublingSchedule {
        DoublingSchedule::new(self.config.direct_cutoff, n)
    }

    /// Estimate H(n) and report how it was assembled
    pub fn run(&self, n: u64) -> HarmonicEstimate {
        let cutoff = self.config.direct_cutoff;

        if n < cutoff {
            tracing::debug!(n, cutoff, "direct summation");
            return HarmonicEstimate {
                n,
                value: direct_harmonic(n),
                phase: Phase::Direct,
                direct_terms: n,
                block_count: 0,
                blocks: self.config.record_blocks.then(Vec::new),
            };
        }

        let mut value = direct_harmonic(cutoff - 1);
        tracing::debug!(n, seed = value, terms = cutoff - 1, "seed phase complete");

        let mut blocks = self.config.record_blocks.then(Vec::new);
        let mut block_count = 0;

        for scheduled in self.schedule(n) {
            let range = scheduled.range;
            let contribution = range.series_sum(self.config.term_count);
            value += contribution;
            block_count += 1;

            tracing::debug!(
                start = range.start(),
                end = range.end(),
                tail = scheduled.is_tail,
                contribution,
                "block approximated"
            );

            if let Some(ref mut recorded) = blocks {
                recorded.push(BlockContribution {
                    range,
                    is_tail: scheduled.is_tail,
                    ratio: range.ratio(),
                    value: contribution,
                });
            }
        }

        HarmonicEstimate {
            n,
            value,
            phase: Phase::Doubling,
            direct_terms: cutoff - 1,
            block_count,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_n_uses_direct_phase() {
        let estimator = HarmonicEstimator::default();
        let report = estimator.run(10);
        assert_eq!(report.phase, Phase::Direct);
        assert_eq!(report.direct_terms, 10);
        assert_eq!(report.block_count, 0);
        assert!(report.blocks.is_none());
        assert!((report.value - 2.928_968_254_0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_is_empty_sum() {
        assert_eq!(HarmonicEstimator::default().estimate(0), 0.0);
    }

    #[test]
    fn test_recorded_blocks_sum_to_estimate() {
        let estimator = HarmonicEstimator::new(EstimatorConfig::recording()).unwrap();
        let report = estimator.run(100_000);
        assert_eq!(report.phase, Phase::Doubling);
        assert_eq!(report.direct_terms, 16383);
        assert_eq!(report.block_count, 3);

        let blocks = report.blocks.as_ref().unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[2].is_tail);
        assert_eq!(blocks[2].range.start(), 65536);
        assert_eq!(blocks[2].range.end(), 100_000);

        let mut rebuilt = direct_harmonic(16383);
        for block in blocks {
            rebuilt += block.value;
        }
        assert_eq!(rebuilt.to_bits(), report.value.to_bits());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EstimatorConfig {
            term_count: 0,
            ..EstimatorConfig::default()
        };
        assert!(HarmonicEstimator::new(config).is_err());
    }

    #[test]
    fn test_smaller_cutoff_still_accurate() {
        let config = EstimatorConfig {
            direct_cutoff: 1024,
            ..EstimatorConfig::default()
        };
        let estimator = HarmonicEstimator::new(config).unwrap();
        let n = 50_000;
        assert!((estimator.estimate(n) - direct_harmonic(n)).abs() < 1e-9);
    }
}
