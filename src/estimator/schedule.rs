//! Doubling-window schedule
//!
//! Covers [C, n] with windows [a, 2a) while a ≤ n/2, then one tail [a, n].
//! Yields O(log(n/C)) blocks, each at most as wide as its start.

use crate::block::BlockRange;

/// Iterator over the blocks of the doubling phase
///
/// The window end is derived from its start and only formed while a ≤ n/2, so
/// neither bound ever exceeds n.
#[derive(Debug, Clone)]
pub struct DoublingSchedule {
    next_start: Option<u64>,
    n: u64,
}

/// One scheduled block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledBlock {
    /// Terms covered
    pub range: BlockRange,
    /// Whether this is the final partial window
    pub is_tail: bool,
}

impl DoublingSchedule {
    /// Schedule for the terms cutoff..=n
    ///
    /// Empty when n < cutoff or cutoff is 0.
    pub fn new(cutoff: u64, n: u64) -> Self {
        let next_start = if cutoff >= 1 && cutoff <= n {
            Some(cutoff)
        } else {
            None
        };
        Self { next_start, n }
    }
}

impl Iterator for DoublingSchedule {
    type Item = ScheduledBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;

        if start <= self.n / 2 {
            self.next_start = Some(start * 2);
            Some(ScheduledBlock {
                range: BlockRange::from_bounds(start, start * 2 - 1),
                is_tail: false,
            })
        } else {
            self.next_start = None;
            Some(ScheduledBlock {
                range: BlockRange::from_bounds(start, self.n),
                is_tail: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(schedule: DoublingSchedule) -> Vec<(u64, u64, bool)> {
        schedule
            .map(|block| (block.range.start(), block.range.end(), block.is_tail))
            .collect()
    }

    #[test]
    fn test_windows_for_one_hundred_thousand() {
        let blocks = bounds(DoublingSchedule::new(16384, 100_000));
        assert_eq!(
            blocks,
            vec![
                (16384, 32767, false),
                (32768, 65535, false),
                (65536, 100_000, true),
            ]
        );
    }

    #[test]
    fn test_cutoff_alone_is_a_tail() {
        let blocks = bounds(DoublingSchedule::new(16384, 16384));
        assert_eq!(blocks, vec![(16384, 16384, true)]);
    }

    #[test]
    fn test_exact_power_of_two_ends_with_single_term_tail() {
        let blocks = bounds(DoublingSchedule::new(16384, 65536));
        assert_eq!(blocks.last(), Some(&(65536, 65536, true)));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_below_cutoff_is_empty() {
        assert_eq!(DoublingSchedule::new(16384, 16383).count(), 0);
    }

    #[test]
    fn test_maximum_n_does_not_overflow() {
        let blocks = bounds(DoublingSchedule::new(16384, u64::MAX));
        let (start, end, is_tail) = *blocks.last().unwrap();
        assert!(is_tail);
        assert_eq!(start, 1 << 63);
        assert_eq!(end, u64::MAX);
        // 2^14 .. 2^63 start points
        assert_eq!(blocks.len(), 50);
    }
}
