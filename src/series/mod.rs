//! Polynomial series kernel
//!
//! Turns a polynomial P(n) into a sum formula p(n) with p(n) − p(n−k) = P(n):
//! - Difference table: expansions of (n−k)^m, m = 1..M+1
//! - Antidifference solver: back-substitution against the table
//!
//! All coefficients are stored in ascending order of power.

mod antidifference;
mod polynomial;
mod table;

pub use antidifference::{solve_antidifference, AntidifferenceSolver};
pub(crate) use antidifference::back_substitute;
pub use polynomial::{Polynomial, SumFormula};
pub use table::DifferenceTable;
