#![allow(dead_code)]

/// Compensated (Kahan) sum of 1/i over start..=end
pub fn reference_sum(start: u64, end: u64) -> f64 {
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;
    for i in start..=end {
        let term = 1.0 / i as f64 - compensation;
        let next = sum + term;
        compensation = (next - sum) - term;
        sum = next;
    }
    sum
}

/// Compensated H(n)
pub fn reference_harmonic(n: u64) -> f64 {
    reference_sum(1, n)
}

/// Round to a fixed number of decimals, as the CLI prints
pub fn to_decimals(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
