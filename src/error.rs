use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tools ingest, merge, or check vocabulary data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the spreadsheet reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a spreadsheet row cannot be mapped onto a vocabulary entry.
    #[error(
        "row {row} has {columns} usable columns; expected 4 or 5: \
         word, (optional level), definition, example, translation"
    )]
    MalformedRow { row: usize, columns: usize },

    /// Raised when a persisted bundle is not the expected JSON shape.
    #[error("invalid vocabulary bundle in {}: {reason}", .path.display())]
    InvalidBundle { path: PathBuf, reason: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Raised when the validator accumulated one or more findings.
    #[error("vocabulary validation failed with {problems} problem(s)")]
    ValidationFailed { problems: usize },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
