//! Alpha grid: the canonical control-parameter values and the directory
//! naming convention used to locate per-alpha run outputs.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::SummaryError;

/// Placeholder substituted per alpha in caller-supplied file patterns.
pub const ALPHA_PLACEHOLDER: &str = "--=ALPHA=--";

/// Reject patterns without the substitution point before any I/O.
pub fn ensure_placeholder(pattern: &str) -> Result<(), SummaryError> {
    if pattern.contains(ALPHA_PLACEHOLDER) {
        Ok(())
    } else {
        Err(SummaryError::MissingPlaceholder(pattern.to_string()))
    }
}

/// Exact decimal tags for the canonical grid (negative powers of two).
/// These values are exactly representable, so equality comparison is safe.
const CANONICAL_TAGS: [(f64, &str); 11] = [
    (1.0, "1"),
    (0.5, "0.5"),
    (0.25, "0.25"),
    (0.125, "0.125"),
    (0.0625, "0.0625"),
    (0.03125, "0.03125"),
    (0.015625, "0.015625"),
    (0.0078125, "0.0078125"),
    (0.00390625, "0.00390625"),
    (0.001953125, "0.001953125"),
    (0.0009765625, "0.0009765625"),
];

/// One grid point: the numeric alpha and the string tag naming its
/// input directory and files.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaEntry {
    pub value: f64,
    pub tag: String,
}

impl AlphaEntry {
    pub fn new(value: f64) -> Self {
        Self {
            tag: format_alpha(value),
            value,
        }
    }

    /// Directory holding this alpha's run outputs, under the output root.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(format!("alpha-{}", self.tag))
    }

    /// Resolve a file pattern by substituting `-{tag}-` at the placeholder.
    pub fn resolve_pattern(&self, pattern: &str) -> String {
        pattern.replace(ALPHA_PLACEHOLDER, &format!("-{}-", self.tag))
    }
}

/// Decimal tag for an alpha value. Canonical grid values get their exact
/// hand-written form; anything else falls back to the shortest
/// round-trip rendering.
pub fn format_alpha(value: f64) -> String {
    for (v, tag) in CANONICAL_TAGS {
        if value == v {
            return tag.to_string();
        }
    }
    value.to_string()
}

/// The canonical eleven-point grid, ascending (1/1024 first).
pub fn canonical_grid() -> Vec<AlphaEntry> {
    CANONICAL_TAGS
        .iter()
        .rev()
        .map(|(value, tag)| AlphaEntry {
            value: *value,
            tag: (*tag).to_string(),
        })
        .collect()
}

/// Enumerate existing `alpha-*` directories under `root`, ascending by
/// numeric value. Directory name suffixes are kept verbatim as tags;
/// a suffix that does not parse as a number is skipped with a warning.
pub fn discover_grid(root: &Path) -> io::Result<Vec<AlphaEntry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(root)? {
        let dirent = dirent?;
        if !dirent.file_type()?.is_dir() {
            continue;
        }
        let name = dirent.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(tag) = name.strip_prefix("alpha-") else {
            continue;
        };
        match tag.parse::<f64>() {
            Ok(value) => entries.push(AlphaEntry {
                value,
                tag: tag.to_string(),
            }),
            Err(_) => warn!("skipping directory with non-numeric alpha tag: {name}"),
        }
    }
    entries.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    Ok(entries)
}
