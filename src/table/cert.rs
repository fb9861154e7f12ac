//! Certification table: one row per discovered alpha directory, holding
//! bracketed-nearest values at the two calibration targets and tail
//! statistics of the lower and upper series.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::alpha::{self, AlphaEntry};
use crate::core::bracket::nearest_with_bracket;
use crate::core::series::{self, SeriesSchema};
use crate::core::tail::tail_stats;
use crate::errors::SummaryError;

pub const CERT_HEADER: &str =
    "alpha,L11_lo,L11_hi,L13_lo,L13_hi,Lfinal_lo,Lfinal_lo_std,Lfinal_hi,Lfinal_hi_std";

/// Calibration inputs for one cert run. The moduli are the two problem
/// scales; the target sample size at each scale is `m^2 / (2 alpha)`.
#[derive(Clone, Copy, Debug)]
pub struct CertParams {
    pub l11_modulus: f64,
    pub l13_modulus: f64,
    pub tail_count: usize,
}

/// One output row. Every derived field is independently optional and
/// renders blank when its precondition failed.
#[derive(Clone, Debug, PartialEq)]
pub struct CertRow {
    pub alpha_tag: String,
    pub l11_lo: Option<f64>,
    pub l11_hi: Option<f64>,
    pub l13_lo: Option<f64>,
    pub l13_hi: Option<f64>,
    pub lfinal_lo: Option<f64>,
    pub lfinal_lo_std: Option<f64>,
    pub lfinal_hi: Option<f64>,
    pub lfinal_hi_std: Option<f64>,
}

impl CertRow {
    /// Row with the alpha only; emitted when inputs are missing or empty
    /// so the table stays aligned row-per-alpha.
    pub fn blank(alpha_tag: String) -> Self {
        Self {
            alpha_tag,
            l11_lo: None,
            l11_hi: None,
            l13_lo: None,
            l13_hi: None,
            lfinal_lo: None,
            lfinal_lo_std: None,
            lfinal_hi: None,
            lfinal_hi_std: None,
        }
    }

    pub fn has_values(&self) -> bool {
        self.l11_lo.is_some()
            || self.l11_hi.is_some()
            || self.l13_lo.is_some()
            || self.l13_hi.is_some()
            || self.lfinal_lo.is_some()
            || self.lfinal_lo_std.is_some()
            || self.lfinal_hi.is_some()
            || self.lfinal_hi_std.is_some()
    }
}

#[inline]
pub fn target_sample_size(modulus: f64, alpha: f64) -> f64 {
    modulus * modulus / (2.0 * alpha)
}

fn values_of(pairs: &[(i64, f64)]) -> Vec<f64> {
    pairs.iter().map(|&(_, v)| v).collect()
}

fn build_row(
    root: &Path,
    entry: &AlphaEntry,
    min_pattern: &str,
    max_pattern: &str,
    schema: &SeriesSchema,
    params: &CertParams,
) -> Result<CertRow, SummaryError> {
    let dir = entry.dir(root);
    let min_file = dir.join(entry.resolve_pattern(min_pattern));
    let max_file = dir.join(entry.resolve_pattern(max_pattern));
    if !min_file.is_file() || !max_file.is_file() {
        warn!("alpha {}: missing input file, emitting blank row", entry.tag);
        return Ok(CertRow::blank(entry.tag.clone()));
    }

    let min_pairs = series::load_series(&min_file, schema)?.defined_pairs();
    let max_pairs = series::load_series(&max_file, schema)?.defined_pairs();
    if min_pairs.is_empty() || max_pairs.is_empty() {
        warn!("alpha {}: no defined values, emitting blank row", entry.tag);
        return Ok(CertRow::blank(entry.tag.clone()));
    }

    let t11 = target_sample_size(params.l11_modulus, entry.value);
    let t13 = target_sample_size(params.l13_modulus, entry.value);

    let (lfinal_lo, lfinal_lo_std) = match tail_stats(&values_of(&min_pairs), params.tail_count)
    {
        Some((mean, std)) => (Some(mean), Some(std)),
        None => (None, None),
    };
    let (lfinal_hi, lfinal_hi_std) = match tail_stats(&values_of(&max_pairs), params.tail_count)
    {
        Some((mean, std)) => (Some(mean), Some(std)),
        None => (None, None),
    };

    Ok(CertRow {
        alpha_tag: entry.tag.clone(),
        l11_lo: nearest_with_bracket(&min_pairs, t11),
        l11_hi: nearest_with_bracket(&max_pairs, t11),
        l13_lo: nearest_with_bracket(&min_pairs, t13),
        l13_hi: nearest_with_bracket(&max_pairs, t13),
        lfinal_lo,
        lfinal_lo_std,
        lfinal_hi,
        lfinal_hi_std,
    })
}

/// Build one row per `alpha-*` directory under `root`, ascending by
/// alpha value.
pub fn build_rows(
    root: &Path,
    min_pattern: &str,
    max_pattern: &str,
    schema: &SeriesSchema,
    params: &CertParams,
) -> Result<Vec<CertRow>, SummaryError> {
    alpha::ensure_placeholder(min_pattern)?;
    alpha::ensure_placeholder(max_pattern)?;
    let mut rows = Vec::new();
    for entry in alpha::discover_grid(root)? {
        rows.push(build_row(
            root,
            &entry,
            min_pattern,
            max_pattern,
            schema,
            params,
        )?);
    }
    Ok(rows)
}

fn fmt_value(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.5}"),
        None => String::new(),
    }
}

pub fn cert_csv(rows: &[CertRow]) -> String {
    let mut out = String::from(CERT_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            row.alpha_tag,
            fmt_value(row.l11_lo),
            fmt_value(row.l11_hi),
            fmt_value(row.l13_lo),
            fmt_value(row.l13_hi),
            fmt_value(row.lfinal_lo),
            fmt_value(row.lfinal_lo_std),
            fmt_value(row.lfinal_hi),
            fmt_value(row.lfinal_hi_std),
        ));
    }
    out
}

/// Build and write the cert table. Fails without writing when no row
/// carries a derived value.
pub fn run(
    root: &Path,
    min_pattern: &str,
    max_pattern: &str,
    output_file: &Path,
    schema: &SeriesSchema,
    params: &CertParams,
) -> Result<(), SummaryError> {
    let rows = build_rows(root, min_pattern, max_pattern, schema, params)?;
    if !rows.iter().any(CertRow::has_values) {
        return Err(SummaryError::NoResults);
    }
    fs::write(output_file, cert_csv(&rows))?;
    info!(
        "Summary written to {} ({} rows)",
        output_file.display(),
        rows.len()
    );
    Ok(())
}
