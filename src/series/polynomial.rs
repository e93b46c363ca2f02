//! Dense polynomials in ascending coefficient order

use crate::HarmonicError;

/// Polynomial P(t) = Σ c_i t^i
///
/// Index i always holds the coefficient of t^i.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Wrap ascending coefficients
    pub fn new(coefficients: Vec<f64>) -> Result<Self, HarmonicError> {
        if coefficients.is_empty() {
            return Err(HarmonicError::EmptyPolynomial);
        }
        Ok(Self { coefficients })
    }

    /// Truncated geometric series 1 + t + ... + t^terms
    ///
    /// Approximates 1/(1−t) for |t| < 1 with error t^(terms+1)/(1−t).
    pub fn geometric(terms: usize) -> Self {
        Self {
            coefficients: vec![1.0; terms + 1],
        }
    }

    /// Number of stored coefficients
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false; construction rejects empty coefficient lists
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree bound (len − 1)
    pub fn degree_bound(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Ascending coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Release the coefficient buffer
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    /// Evaluate at t via Horner's rule
    pub fn evaluate(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }
}

/// Sum formula p(t) = Σ c_i t^(i+1) for step k
///
/// Index i holds the coefficient of t^(i+1); the constant term is zero since
/// only differences of p are ever used.
#[derive(Debug, Clone, PartialEq)]
pub struct SumFormula {
    coefficients: Vec<f64>,
    step: f64,
}

impl SumFormula {
    pub(crate) fn from_parts(coefficients: Vec<f64>, step: f64) -> Self {
        Self { coefficients, step }
    }

    /// Coefficients, index i for t^(i+1)
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Step k this formula telescopes over
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Evaluate p(t)
    pub fn evaluate(&self, t: f64) -> f64 {
        let inner = self
            .coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c);
        inner * t
    }

    /// p(t) − p(t − k), which equals P(t)
    pub fn difference(&self, t: f64) -> f64 {
        self.evaluate(t) - self.evaluate(t - self.step)
    }

    /// p(t) − p(−t)
    ///
    /// Even powers of t cancel, so only the odd powers t^(i+1) at even i are
    /// accumulated.
    pub fn symmetric_difference(&self, t: f64) -> f64 {
        let square = t * t;
        let mut positive = t;
        let mut negative = -t;
        let mut result = 0.0;
        for coefficient in self.coefficients.iter().step_by(2) {
            result += (positive - negative) * coefficient;
            positive *= square;
            negative *= square;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polynomial_rejected() {
        assert_eq!(Polynomial::new(vec![]), Err(HarmonicError::EmptyPolynomial));
    }

    #[test]
    fn test_horner_evaluation() {
        // 1 + 2t + 3t^2
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.evaluate(0.0), 1.0);
        assert_eq!(p.evaluate(2.0), 17.0);
        assert_eq!(p.degree_bound(), 2);
    }

    #[test]
    fn test_geometric_series_approaches_reciprocal() {
        let p = Polynomial::geometric(60);
        assert_eq!(p.len(), 61);
        assert!((p.evaluate(0.25) - 1.0 / 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_sum_formula_has_no_constant_term() {
        let formula = SumFormula::from_parts(vec![2.0, -1.0], 1.0);
        assert_eq!(formula.evaluate(0.0), 0.0);
        // 2t - t^2 at t = 3
        assert_eq!(formula.evaluate(3.0), -3.0);
    }

    #[test]
    fn test_symmetric_difference_matches_direct_evaluation() {
        let formula = SumFormula::from_parts(vec![0.5, 3.0, -2.0, 7.0, 1.25], 0.1);
        let t = 0.4;
        let expected = formula.evaluate(t) - formula.evaluate(-t);
        assert!((formula.symmetric_difference(t) - expected).abs() < 1e-14);
    }
}
