//! Tail convergence statistics: mean and population spread of the last
//! K defined metric values of a series.

/// Mean and population standard deviation (divide by `count`, not
/// `count - 1`) over the final `count` values. Fewer than `count`
/// values yield nothing; no partial statistic is ever produced.
pub fn tail_stats(values: &[f64], count: usize) -> Option<(f64, f64)> {
    if count == 0 || values.len() < count {
        return None;
    }
    let tail = &values[values.len() - count..];
    let mean = tail.iter().sum::<f64>() / count as f64;
    let variance = tail
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / count as f64;
    Some((mean, variance.sqrt()))
}
