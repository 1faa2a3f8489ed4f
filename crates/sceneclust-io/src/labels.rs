//! Reader for textual cluster label dumps.

use std::path::{Path, PathBuf};

use sceneclust_labels::parse_labels;
use tracing::{info, instrument};

use crate::IoError;

/// Reads a label sequence from a text file.
///
/// The file may hold any rendering of an integer array (`[1 3 0 ...]`,
/// `1, 3, 0`, one label per line, ...): every run of decimal digits is a
/// label, everything else is a separator. Minus signs are separators too,
/// so sentinel labels cannot be stored this way.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::InvalidLabels`] | A digit run overflows a 64-bit label |
/// | [`IoError::EmptyLabels`] | The file contains no digits |
pub struct LabelReader {
    path: PathBuf,
}

impl LabelReader {
    /// Create a new reader for the given file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and parse the file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<i64>, IoError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;
        let labels = parse_labels(&text).map_err(|e| IoError::InvalidLabels {
            path: self.path.clone(),
            source: e,
        })?;
        if labels.is_empty() {
            return Err(IoError::EmptyLabels {
                path: self.path.clone(),
            });
        }
        info!(n_labels = labels.len(), "labels loaded");
        Ok(labels)
    }
}
