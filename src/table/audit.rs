//! Audit filter: restrict a cert table to the audited alpha values.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::SummaryError;

/// Alpha values retained by the audit: the power-of-two grid plus one
/// additional audited constant. The literal is kept verbatim; its
/// provenance is upstream of this tool.
pub const TARGET_ALPHAS: [f64; 12] = [
    1.0,
    1.0 / 2.0,
    1.0 / 4.0,
    1.0 / 8.0,
    1.0 / 16.0,
    1.0 / 32.0,
    1.0 / 64.0,
    1.0 / 128.0,
    1.0 / 256.0,
    1.0 / 512.0,
    0.00106494895768,
    1.0 / 1024.0,
];

pub fn matches_target(alpha: f64, tolerance: f64) -> bool {
    TARGET_ALPHAS
        .iter()
        .any(|t| (alpha - t).abs() <= tolerance)
}

/// Filter table text. Keeps the header and every row whose alpha cell
/// parses within tolerance of a target; kept lines pass through
/// unchanged. Returns the output text and kept-row count, or nothing
/// when the table has no usable header.
fn filter_lines(text: &str, tolerance: f64) -> Option<(String, usize)> {
    let mut lines = text.lines();
    let header = lines.next()?;
    if header.trim().is_empty() {
        return None;
    }
    let alpha_col = header.split(',').position(|c| c.trim() == "alpha");

    let mut out = String::from(header);
    out.push('\n');
    let mut kept = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let Some(col) = alpha_col else {
            continue;
        };
        let Some(field) = line.split(',').nth(col) else {
            continue;
        };
        let Ok(alpha) = field.trim().parse::<f64>() else {
            continue;
        };
        if matches_target(alpha, tolerance) {
            out.push_str(line);
            out.push('\n');
            kept += 1;
        }
    }
    Some((out, kept))
}

pub fn run(
    cert_file: &Path,
    output_file: &Path,
    tolerance: f64,
) -> Result<(), SummaryError> {
    let text = fs::read_to_string(cert_file)?;
    let Some((out, kept)) = filter_lines(&text, tolerance) else {
        return Err(SummaryError::EmptyTable {
            path: cert_file.to_path_buf(),
        });
    };
    if kept == 0 {
        return Err(SummaryError::NoMatchingRows {
            path: cert_file.to_path_buf(),
        });
    }
    fs::write(output_file, out)?;
    info!(
        "Summary written to {} ({kept} rows)",
        output_file.display()
    );
    Ok(())
}
