//! Closed-form reference values for the egg scramble.

/// Probability that a uniform permutation of `n` items has no fixed point:
/// `sum_{k=0..=n} (-1)^k / k!`. Converges to `1/e` quickly, so terms past
/// the point where `1/k!` underflows are skipped.
pub fn exact_derangement_probability(n: usize) -> f64 {
    let mut sum = 0.0_f64;
    let mut term = 1.0_f64;
    for k in 0..=n {
        if k > 0 {
            term /= -(k as f64);
        }
        if term == 0.0 {
            break;
        }
        sum += term;
    }
    sum
}

/// Expected fixed points of a uniform permutation: 1 for any non-empty box.
pub fn expected_fixed_points(n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        1.0
    }
}

/// Standard error of a proportion `p` estimated from `trials` samples.
pub fn standard_error(p: f64, trials: u64) -> f64 {
    if trials == 0 {
        return f64::NAN;
    }
    (p * (1.0 - p) / trials as f64).sqrt()
}
