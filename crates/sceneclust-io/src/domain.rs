//! Domain types for sceneclust-io.

use crate::IoError;

/// A validated experiment name for output file naming.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentName(String);

impl ExperimentName {
    /// Parse and validate an experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidExperimentName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, IoError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(IoError::InvalidExperimentName { name });
        }
        Ok(Self(name))
    }

    /// Return the experiment name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A table of per-node network statistics.
///
/// Produced by [`StatsReader`](crate::StatsReader). Every cell is a finite
/// float; categorical cells have already been mapped to numbers. Rows keep
/// the CSV order, which is the sample order cluster labels refer to.
#[derive(Debug, Clone)]
pub struct StatsDataset {
    /// Column names from the CSV header.
    columns: Vec<String>,
    /// Values: `rows[sample_index][column_index]`.
    rows: Vec<Vec<f64>>,
}

impl StatsDataset {
    /// Create a new dataset.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Return the column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Return the value matrix (row-major).
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Return the number of samples (rows).
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of columns.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Return the index of column `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingColumn`] if `name` is not in the header.
    pub fn column_index(&self, name: &str) -> Result<usize, IoError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| IoError::MissingColumn {
                column: name.to_string(),
                available: self.columns.join(","),
            })
    }

    /// Return the values of column `name`, one per sample.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingColumn`] if `name` is not in the header.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, IoError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Return a new dataset holding only `names`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingColumn`] for the first name not in the header.
    pub fn select(&self, names: &[&str]) -> Result<Self, IoError> {
        let indices = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<Vec<_>, _>>()?;
        let rows = self
            .rows
            .iter()
            .map(|r| indices.iter().map(|&i| r[i]).collect())
            .collect();
        Ok(Self::new(names.iter().map(|n| n.to_string()).collect(), rows))
    }

    /// Return column `name` as integer scenario ids.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::MissingColumn`] | `name` is not in the header |
    /// | [`IoError::NonIntegerScenario`] | A value has a fractional part |
    pub fn scenario_ids(&self, name: &str) -> Result<Vec<i64>, IoError> {
        let values = self.column(name)?;
        values
            .into_iter()
            .enumerate()
            .map(|(row_index, value)| {
                if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
                    return Err(IoError::NonIntegerScenario {
                        column: name.to_string(),
                        row_index,
                        value,
                    });
                }
                Ok(value as i64)
            })
            .collect()
    }
}
