//! CSV network statistics reader with preprocessing and validation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::StatsDataset;
use crate::preprocess::PreprocessConfig;
use crate::IoError;

/// Reads per-node network statistics from a CSV file.
///
/// Expected CSV format:
/// - Header row required; every column is kept under its header name
/// - `scenario,address,snr,avgthroughput,...`
/// - One row per station or access point, all rows the same width
///
/// Each cell is first matched against the categorical mapping of the
/// [`PreprocessConfig`]; otherwise the address prefix is stripped (address
/// column only) and the remainder parsed as a float.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable after preprocessing |
pub struct StatsReader {
    path: PathBuf,
    preprocess: PreprocessConfig,
}

impl StatsReader {
    /// Create a new reader for the given CSV file path with default preprocessing.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            preprocess: PreprocessConfig::default(),
        }
    }

    /// Replace the preprocessing configuration.
    #[must_use]
    pub fn with_preprocess(mut self, preprocess: PreprocessConfig) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Read and validate the CSV file, returning a [`StatsDataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<StatsDataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) so our InconsistentRowLength check fires instead of a
        // low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        })?;
        let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
        let expected_cols = columns.len();
        debug!(expected_cols, "read CSV header");

        let mut rows = Vec::new();
        let mut n_mapped = 0usize;

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            if record.len() != expected_cols {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let mut values = Vec::with_capacity(expected_cols);
            for (column, raw) in columns.iter().zip(record.iter()) {
                if let Some(value) = self.preprocess.category(raw) {
                    n_mapped += 1;
                    values.push(value);
                    continue;
                }
                let cell = self.preprocess.strip(column, raw);
                let value: f64 = cell
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        column: column.clone(),
                        raw: raw.to_string(),
                    })?;
                values.push(value);
            }
            rows.push(values);
        }

        if rows.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(
            n_samples = rows.len(),
            n_columns = expected_cols,
            n_mapped,
            "statistics loaded"
        );

        Ok(StatsDataset::new(columns, rows))
    }
}
