//! Expansions of (n−k)^m by repeated multiplication

use crate::HarmonicError;

/// Triangular table of (n−k)^m coefficients
///
/// Row r holds the r+2 ascending coefficients of (n−k)^(r+1), for
/// r = 0..=terms. Every row's leading coefficient is exactly 1.0.
///
/// Space: O(M²) values, rebuilt per step k
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    step: f64,
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Build the table for step k and term count M
    pub fn build(step: f64, terms: usize) -> Result<Self, HarmonicError> {
        if !step.is_finite() || step == 0.0 {
            return Err(HarmonicError::InvalidStep(step));
        }
        Ok(Self::expand(step, terms))
    }

    /// Build without validating the step
    pub(crate) fn expand(step: f64, terms: usize) -> Self {
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(terms + 1);

        // (n−k)^1
        rows.push(vec![-step, 1.0]);

        // (n−k)^(r+1) = (n−k)^r · (n−k)
        for r in 1..=terms {
            let prev = &rows[r - 1];
            let mut row = vec![0.0; r + 2];
            row[0] = -prev[0] * step;
            for j in 1..=r {
                row[j] = prev[j - 1] - prev[j] * step;
            }
            row[r + 1] = 1.0;
            rows.push(row);
        }

        tracing::trace!(step, terms, "difference table built");

        Self { step, rows }
    }

    /// Step k
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Term count M (highest row index)
    pub fn terms(&self) -> usize {
        self.rows.len() - 1
    }

    /// Coefficients of (n−k)^exponent, for exponent in 1..=M+1
    pub fn expansion(&self, exponent: usize) -> Option<&[f64]> {
        exponent
            .checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .map(Vec::as_slice)
    }

    /// Row r, i.e. the expansion of (n−k)^(r+1)
    pub(crate) fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }
}
