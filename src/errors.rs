use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for summarizer input validation and whole-run failures.
///
/// Row-level parse problems never reach this type; they are handled by
/// dropping the field or row at the parse site.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("file pattern '{0}' must contain the '--=ALPHA=--' placeholder")]
    MissingPlaceholder(String),
    #[error("pattern '{0}' does not determine a metric column (expected 'lambdaboundmin' or 'lambdaboundmax')")]
    UnknownMetric(String),
    #[error("no results found")]
    NoResults,
    #[error("table '{}' is empty or has an invalid header", .path.display())]
    EmptyTable { path: PathBuf },
    #[error("no rows in '{}' matched the target alpha values", .path.display())]
    NoMatchingRows { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
}
