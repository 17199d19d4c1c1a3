//! Spread statistics shared by the equality heuristics.

/// Normalized spread of non-negative values, in `[0, 1]`.
///
/// Population standard deviation divided by its largest possible value for
/// the same mean, `mean × sqrt(n − 1)`, which is reached when one value holds
/// the whole sum. Zero for fewer than two values or an all-zero input.
///
/// # Examples
///
/// ```
/// use rota_scoring::heuristic::normalized_spread;
///
/// assert_eq!(normalized_spread(&[3.0, 3.0, 3.0]), 0.0);
/// assert_eq!(normalized_spread(&[6.0, 0.0, 0.0]), 1.0);
/// assert_eq!(normalized_spread(&[5.0]), 0.0);
/// ```
pub fn normalized_spread(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    if mean <= 0.0 || !mean.is_finite() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let spread = variance.sqrt() / (mean * (count - 1.0).sqrt());
    spread.clamp(0.0, 1.0)
}

/// Maps `[0, ∞)` onto `[0, 1)`.
#[inline]
pub(crate) fn squash(x: f64) -> f64 {
    if x.is_infinite() {
        return 1.0;
    }
    x / (1.0 + x)
}
