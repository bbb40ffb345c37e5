//! Unified error types for the Longan library.
//!
//! All descriptor validation happens eagerly, before any RTF is emitted;
//! the encoding pipeline itself never fails on data content. Output files
//! are not created when any error is returned.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid descriptor configuration
    #[error("Invalid descriptor: {0}")]
    Validation(String),

    /// A grouping descriptor names a column that the data frame lacks
    #[error("Column not found in data frame: {0}")]
    ColumnNotFound(String),

    /// Column lengths passed to a data frame constructor differ
    #[error("Column length mismatch: column '{column}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        got: usize,
        expected: usize,
    },

    /// Font slot outside the 1-10 table, or an unrecognized font name
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    /// Measurement unit not supported by the string width oracle
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// Color name missing from the fixed palette
    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    /// Figure file missing or of an unsupported format
    #[error("Figure resource error: {0}")]
    Figure(String),

    /// Figure file not found on disk
    #[error("Figure file not found: {0}")]
    FigureNotFound(PathBuf),

    /// Input text is not valid UTF-8
    #[error("Invalid UTF-8 in input text")]
    InvalidUtf8,

    /// Assembly input file missing
    #[error("Assembly input file not found: {0}")]
    AssemblyFileMissing(PathBuf),

    /// Assembly called with an empty input list
    #[error("Assembly input file list is empty")]
    AssemblyEmptyInput,
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
