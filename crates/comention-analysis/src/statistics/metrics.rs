//! Association measures over line counts.
//!
//! `n` is the number of lines in the corpus, `n_a` / `n_b` the lines
//! mentioning each entity and `n_ab` the lines mentioning both. Callers
//! guarantee every count is positive.

use std::f64::consts::PI;

/// Pointwise mutual information, natural log:
/// `ln(n_ab) + ln(n) - ln(n_a) - ln(n_b)`.
pub fn mutual_information(n: u64, n_a: u64, n_b: u64, n_ab: u64) -> f64 {
    (n_ab as f64).ln() + (n as f64).ln() - (n_a as f64).ln() - (n_b as f64).ln()
}

/// Poisson-deviance significance of `n_ab` against the expectation
/// `λ = n_a·n_b / n`: `k(ln k − ln λ − 1) + ½ln(2πk) + λ` with `k = n_ab`.
pub fn poisson_likelihood(n: u64, n_a: u64, n_b: u64, n_ab: u64) -> f64 {
    let k = n_ab as f64;
    let lambda = n_a as f64 * n_b as f64 / n as f64;
    k * (k.ln() - lambda.ln() - 1.0) + 0.5 * (2.0 * PI * k).ln() + lambda
}

/// `intersection / union`, 0 for two empty sets.
pub fn jaccard(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
