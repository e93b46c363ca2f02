//! Antidifference solver
//!
//! Given P(n) of degree ≤ M and a step k, find p(n) = Σ s_i n^(i+1) with
//! p(n) − p(n−k) = P(n).
//!
//! n^(i+1) − (n−k)^(i+1) has degree i, so the system is triangular and is
//! solved from the top degree down without forming a matrix.

use super::{DifferenceTable, Polynomial, SumFormula};
use crate::HarmonicError;

/// Solver bound to one difference table
#[derive(Debug, Clone, Copy)]
pub struct AntidifferenceSolver<'a> {
    table: &'a DifferenceTable,
}

impl<'a> AntidifferenceSolver<'a> {
    /// Create solver over a prebuilt table
    pub fn new(table: &'a DifferenceTable) -> Self {
        Self { table }
    }

    /// Consume P and return its sum formula
    ///
    /// P must have exactly M+1 coefficients for the table's M.
    pub fn solve(&self, polynomial: Polynomial) -> Result<SumFormula, HarmonicError> {
        let expected = self.table.terms() + 1;
        if polynomial.len() != expected {
            return Err(HarmonicError::LengthMismatch {
                expected,
                actual: polynomial.len(),
            });
        }
        Ok(back_substitute(self.table, polynomial.into_coefficients()))
    }
}

/// Build the table for step k and solve P against it
pub fn solve_antidifference(polynomial: Polynomial, step: f64) -> Result<SumFormula, HarmonicError> {
    let table = DifferenceTable::build(step, polynomial.degree_bound())?;
    AntidifferenceSolver::new(&table).solve(polynomial)
}

/// Eliminate degrees M..=0, reusing `remainder` as scratch
///
/// Row i of the table is (n−k)^(i+1); its n^i coefficient −(i+1)k is the pivot
/// for degree i. Requires `remainder.len() == table.terms() + 1`.
pub(crate) fn back_substitute(table: &DifferenceTable, mut remainder: Vec<f64>) -> SumFormula {
    debug_assert_eq!(remainder.len(), table.terms() + 1);

    let mut sum_formula = vec![0.0; remainder.len()];
    for i in (0..remainder.len()).rev() {
        let row = table.row(i);
        let scale = remainder[i] / row[i];
        for j in 0..i {
            remainder[j] -= scale * row[j];
        }
        sum_formula[i] = -scale;
    }

    SumFormula::from_parts(sum_formula, table.step())
}
