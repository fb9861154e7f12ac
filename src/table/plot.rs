//! Plotting summary: windowed extremum rows per canonical-grid alpha,
//! most recent window first.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::alpha;
use crate::core::batch::{BatchResult, aggregate_batches};
use crate::core::series::{self, SeriesSchema};
use crate::errors::SummaryError;

pub const PLOT_HEADER: &str = "alpha,n_min_lambda,min_lambda,n_max_lambda,max_lambda";

#[derive(Clone, Debug)]
pub struct PlotRow {
    pub alpha_tag: String,
    pub result: BatchResult,
}

/// Schema for a lambda-flavor pattern. The filename carries which bound
/// the files hold: `lambdaboundmin` files have a `Lambda_min` column,
/// `lambdaboundmax` files a `Lambda_max` column.
pub fn lambda_schema_for_pattern(
    pattern: &str,
) -> Result<&'static SeriesSchema, SummaryError> {
    if pattern.contains("lambdaboundmin") {
        Ok(&SeriesSchema::LAMBDA_MIN)
    } else if pattern.contains("lambdaboundmax") {
        Ok(&SeriesSchema::LAMBDA_MAX)
    } else {
        Err(SummaryError::UnknownMetric(pattern.to_string()))
    }
}

/// Aggregate every canonical-grid alpha found under `root`. Missing or
/// unreadable inputs are skipped with a warning.
pub fn build_rows(
    root: &Path,
    pattern: &str,
    schema: &SeriesSchema,
    window: usize,
) -> Result<Vec<PlotRow>, SummaryError> {
    alpha::ensure_placeholder(pattern)?;
    let mut rows = Vec::new();
    for entry in alpha::canonical_grid() {
        let dir = entry.dir(root);
        if !dir.is_dir() {
            warn!("directory {} does not exist", dir.display());
            continue;
        }
        let path = dir.join(entry.resolve_pattern(pattern));
        if !path.is_file() {
            warn!("file {} does not exist", path.display());
            continue;
        }
        let series = match series::load_series(&path, schema) {
            Ok(series) => series,
            Err(err) => {
                warn!("failed to read {}: {err}", path.display());
                continue;
            }
        };
        for result in aggregate_batches(&series.records, window) {
            rows.push(PlotRow {
                alpha_tag: entry.tag.clone(),
                result,
            });
        }
    }
    Ok(rows)
}

pub fn summary_csv(rows: &[PlotRow]) -> String {
    let mut out = String::from(PLOT_HEADER);
    out.push('\n');
    for row in rows {
        let min_n = row
            .result
            .min
            .map(|m| m.sample_index.to_string())
            .unwrap_or_default();
        let min_v = row
            .result
            .min
            .map(|m| m.value.to_string())
            .unwrap_or_default();
        let max_n = row
            .result
            .max
            .map(|m| m.sample_index.to_string())
            .unwrap_or_default();
        let max_v = row
            .result
            .max
            .map(|m| m.value.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{min_n},{min_v},{max_n},{max_v}\n",
            row.alpha_tag
        ));
    }
    out
}

pub fn run(
    root: &Path,
    pattern: &str,
    output_file: &Path,
    schema: &SeriesSchema,
    window: usize,
) -> Result<(), SummaryError> {
    let rows = build_rows(root, pattern, schema, window)?;
    if rows.is_empty() {
        return Err(SummaryError::NoResults);
    }
    fs::write(output_file, summary_csv(&rows))?;
    let alpha_count = rows
        .iter()
        .map(|r| r.alpha_tag.as_str())
        .collect::<HashSet<_>>()
        .len();
    info!(
        "Summary written to {} ({} rows, {} alphas)",
        output_file.display(),
        rows.len(),
        alpha_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::Extremum;

    #[test]
    fn pattern_determines_lambda_schema() {
        let schema = lambda_schema_for_pattern("lambdaboundmin-23PR--=ALPHA=--v0.2.0.csv")
            .expect("min pattern");
        assert_eq!(schema.metric_candidates, &["Lambda_min"]);
        let schema = lambda_schema_for_pattern("lambdaboundmax-23PR--=ALPHA=--v0.2.0.csv")
            .expect("max pattern");
        assert_eq!(schema.metric_candidates, &["Lambda_max"]);
        assert!(lambda_schema_for_pattern("boundratio--=ALPHA=--.csv").is_err());
    }

    #[test]
    fn csv_rows_follow_the_fixed_header() {
        let rows = vec![PlotRow {
            alpha_tag: "0.5".to_string(),
            result: BatchResult {
                min: Some(Extremum {
                    value: 1.25,
                    sample_index: 7,
                }),
                max: Some(Extremum {
                    value: 3.5,
                    sample_index: 9,
                }),
            },
        }];
        let csv = summary_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("alpha,n_min_lambda,min_lambda,n_max_lambda,max_lambda")
        );
        assert_eq!(lines.next(), Some("0.5,7,1.25,9,3.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn absent_extrema_render_blank() {
        let rows = vec![PlotRow {
            alpha_tag: "1".to_string(),
            result: BatchResult {
                min: None,
                max: Some(Extremum {
                    value: 2.0,
                    sample_index: 4,
                }),
            },
        }];
        let csv = summary_csv(&rows);
        assert!(csv.ends_with("1,,,4,2\n"));
    }
}
