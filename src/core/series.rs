//! Schema-driven loading of `(sample index, metric)` records from run
//! CSV files. The recognized column names are a fixed set; nothing is
//! inferred beyond picking the first candidate present in the header.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Upstream logs write this when a metric could not be computed.
/// It marks an undefined value, distinct from a true zero.
pub const ZERO_SENTINEL: &str = "0.000000";

/// Column layout of one input flavor: index-column candidates tried in
/// priority order, metric-column candidates resolved against the header,
/// and whether the zero sentinel applies.
#[derive(Clone, Copy, Debug)]
pub struct SeriesSchema {
    pub index_candidates: &'static [&'static str],
    pub metric_candidates: &'static [&'static str],
    pub zero_sentinel: bool,
}

impl SeriesSchema {
    /// Ratio-flavor files: single `n` index, `lambda` metric, no sentinel.
    pub const RATIO_LAMBDA: Self = Self {
        index_candidates: &["n"],
        metric_candidates: &["lambda"],
        zero_sentinel: false,
    };

    /// Ratio-flavor files, reading the `ratio` column instead.
    pub const RATIO_RATIO: Self = Self {
        index_candidates: &["n"],
        metric_candidates: &["ratio"],
        zero_sentinel: false,
    };

    /// Lambda-flavor files carrying the lower-bound column.
    pub const LAMBDA_MIN: Self = Self {
        index_candidates: &["n_0", "n_1", "n"],
        metric_candidates: &["Lambda_min"],
        zero_sentinel: true,
    };

    /// Lambda-flavor files carrying the upper-bound column.
    pub const LAMBDA_MAX: Self = Self {
        index_candidates: &["n_0", "n_1", "n"],
        metric_candidates: &["Lambda_max"],
        zero_sentinel: true,
    };

    /// Lambda-flavor files of either kind; the header decides which
    /// column is present, `Lambda_min` taking priority.
    pub const LAMBDA_ANY: Self = Self {
        index_candidates: &["n_0", "n_1", "n"],
        metric_candidates: &["Lambda_min", "Lambda_max"],
        zero_sentinel: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub sample_index: i64,
    pub metric: Option<f64>,
}

/// Records of one input file, in file order. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct RecordSeries {
    pub records: Vec<Record>,
}

impl RecordSeries {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a defined metric, as `(sample_index, metric)` pairs
    /// in series order. Bracket search and tail statistics both operate
    /// on this view.
    pub fn defined_pairs(&self) -> Vec<(i64, f64)> {
        self.records
            .iter()
            .filter_map(|r| r.metric.map(|m| (r.sample_index, m)))
            .collect()
    }
}

fn parse_index(cols: &[&str], index_cols: &[usize]) -> Option<i64> {
    for &i in index_cols {
        // A cell missing from a short row falls through like a blank one.
        let Some(s) = cols.get(i).map(|c| c.trim()) else {
            continue;
        };
        if s.is_empty() {
            continue;
        }
        if let Ok(n) = s.parse::<i64>() {
            return Some(n);
        }
    }
    None
}

fn parse_metric(v: Option<&str>, zero_sentinel: bool) -> Option<f64> {
    let s = v?.trim();
    if s.is_empty() {
        return None;
    }
    if zero_sentinel && s == ZERO_SENTINEL {
        return None;
    }
    let x = s.parse::<f64>().ok()?;
    if x.is_finite() { Some(x) } else { None }
}

/// Parse CSV text into a series. A header without any recognized index
/// or metric column yields an empty series; a row whose index fields
/// are all blank or unparsable is dropped.
pub fn parse_series(text: &str, schema: &SeriesSchema) -> RecordSeries {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let Some(header) = lines.next() else {
        return RecordSeries::default();
    };
    let mut col_idx = HashMap::new();
    for (i, c) in header.split(',').enumerate() {
        col_idx.insert(c.trim().to_string(), i);
    }
    let index_cols: Vec<usize> = schema
        .index_candidates
        .iter()
        .filter_map(|c| col_idx.get(*c).copied())
        .collect();
    let Some(metric_col) = schema
        .metric_candidates
        .iter()
        .find_map(|c| col_idx.get(*c).copied())
    else {
        return RecordSeries::default();
    };
    if index_cols.is_empty() {
        return RecordSeries::default();
    }

    let mut records = Vec::new();
    for line in lines {
        let cols: Vec<&str> = line.split(',').collect();
        let Some(sample_index) = parse_index(&cols, &index_cols) else {
            continue;
        };
        let metric = parse_metric(cols.get(metric_col).copied(), schema.zero_sentinel);
        records.push(Record {
            sample_index,
            metric,
        });
    }
    RecordSeries { records }
}

pub fn load_series(path: &Path, schema: &SeriesSchema) -> io::Result<RecordSeries> {
    let text = fs::read_to_string(path)?;
    Ok(parse_series(&text, schema))
}
