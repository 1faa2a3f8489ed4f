//! I/O error types for sceneclust-io.

use std::path::PathBuf;

use sceneclust_labels::LabelError;

/// Errors from file I/O, CSV parsing, preprocessing, and result serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the CSV file contains a header but zero data rows.
    #[error("empty dataset (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when a data row has a different number of columns than the header.
    #[error("inconsistent row length in {path}: row {row_index} has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Expected number of columns (from header).
        expected: usize,
        /// Actual number of columns in this row.
        got: usize,
    },

    /// Returned when a cell, after preprocessing, is not a finite float.
    #[error("non-finite value in {path}: row {row_index}, column \"{column}\", raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Header name of the offending column.
        column: String,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when a requested column is not in the dataset header.
    #[error("column \"{column}\" not found (available: {available})")]
    MissingColumn {
        /// The requested column name.
        column: String,
        /// Comma-separated list of available columns.
        available: String,
    },

    /// Returned when a scenario column holds a value that is not a whole number.
    #[error("scenario column \"{column}\" row {row_index} holds non-integer value {value}")]
    NonIntegerScenario {
        /// Scenario column name.
        column: String,
        /// Zero-based row index.
        row_index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the address prefix pattern does not compile.
    #[error("invalid address prefix pattern \"{pattern}\"")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// Returned when a scaler is applied to data of a different width.
    #[error("scaler was fitted on {expected} columns, got {got}")]
    ScalerWidthMismatch {
        /// Column count seen during fitting.
        expected: usize,
        /// Column count of the data being transformed.
        got: usize,
    },

    /// Returned when a label file contains no digit runs.
    #[error("no labels found in {path}")]
    EmptyLabels {
        /// Path to the label file.
        path: PathBuf,
    },

    /// Returned when a label file cannot be parsed into labels.
    #[error("invalid labels in {path}")]
    InvalidLabels {
        /// Path to the label file.
        path: PathBuf,
        /// Underlying label error.
        source: LabelError,
    },

    /// Wraps a label error raised while assembling a report.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// Returned when the experiment name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid experiment name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidExperimentName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a CSV result file cannot be written.
    #[error("cannot write CSV file {path}")]
    CsvWrite {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
