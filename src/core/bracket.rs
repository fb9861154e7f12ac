//! Bracket-constrained nearest-value selection. A value is reported
//! only when recorded samples exist on both sides of the target; there
//! is no one-sided fallback.

/// Metric of the pair nearest to `target` among `(sample_index, metric)`
/// pairs. `target` may be fractional. Equidistant targets take the below
/// side; duplicate sample indices keep the first-seen pair.
pub fn nearest_with_bracket(pairs: &[(i64, f64)], target: f64) -> Option<f64> {
    let mut below: Option<(i64, f64)> = None;
    let mut above: Option<(i64, f64)> = None;
    for &(n, value) in pairs {
        if (n as f64) <= target && below.is_none_or(|(b, _)| n > b) {
            below = Some((n, value));
        }
        if (n as f64) >= target && above.is_none_or(|(a, _)| n < a) {
            above = Some((n, value));
        }
    }
    let (below, above) = (below?, above?);
    if (target - below.0 as f64).abs() <= (above.0 as f64 - target).abs() {
        Some(below.1)
    } else {
        Some(above.1)
    }
}
