use thiserror::Error;

/// Recoverable failures surfaced to the presentation layer.
///
/// Everything here is reported once and degraded: a source that fails to
/// load is treated as empty, a missing rate leaves values unconverted.
/// Malformed numeric cells and unmatched selections are not errors at all
/// (they degrade to 0.0 inside the chart builder).
#[derive(Debug, Error)]
pub enum DashboardError {
    // IO-related.
    #[error("Error reading file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("Invalid CSV format: {0}")]
    InvalidCsv(#[from] csv::Error),
    #[error("Invalid CSV content: {details}.")]
    InvalidCsvContent { details: String },
    #[error("Invalid rate schema (invalid RON format): {details}.")]
    InvalidRateSchema { details: String },
    #[error("Invalid rate type pattern '{pattern}': {details}.")]
    InvalidRatePattern { pattern: String, details: String },
}

impl DashboardError {
    pub(crate) fn read_error(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.display().to_string(),
            source,
        }
    }
}
