//! Backward windowed extremum aggregation. Windows partition the series
//! exactly: stepping back from the end in chunks of `window`, the oldest
//! chunk possibly shorter, every record in exactly one chunk.

use crate::core::series::Record;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub sample_index: i64,
}

/// Extrema of one window over the defined metric values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchResult {
    pub min: Option<Extremum>,
    pub max: Option<Extremum>,
}

/// Running min/max of one window slice. Strict comparisons, so an equal
/// value keeps the first-seen extremum's sample index.
pub fn window_extrema(window: &[Record]) -> BatchResult {
    let mut min: Option<Extremum> = None;
    let mut max: Option<Extremum> = None;
    for r in window {
        let Some(value) = r.metric else {
            continue;
        };
        if min.is_none_or(|m| value < m.value) {
            min = Some(Extremum {
                value,
                sample_index: r.sample_index,
            });
        }
        if max.is_none_or(|m| value > m.value) {
            max = Some(Extremum {
                value,
                sample_index: r.sample_index,
            });
        }
    }
    BatchResult { min, max }
}

/// Aggregate a series into per-window extrema, most-recent window first.
/// Windows whose records are all undefined are suppressed.
pub fn aggregate_batches(records: &[Record], window: usize) -> Vec<BatchResult> {
    assert!(window >= 1, "window size must be at least 1");
    let mut out = Vec::new();
    let mut end = records.len();
    while end > 0 {
        let start = end.saturating_sub(window);
        let result = window_extrema(&records[start..end]);
        if result.min.is_some() || result.max.is_some() {
            out.push(result);
        }
        end = start;
    }
    out
}
