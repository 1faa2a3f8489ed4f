//! Per-column min-max scaling to `[0, 1]`.

use tracing::{debug, instrument};

use crate::domain::StatsDataset;
use crate::IoError;

/// Min-max scaler fitted on the columns of a [`StatsDataset`].
///
/// Each value becomes `(x - min) / (max - min)` using the column's fitted
/// range. A constant column has zero range and scales to `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl MinMaxScaler {
    /// Record the per-column minimum and maximum of `dataset`.
    #[must_use]
    #[instrument(skip_all, fields(n_samples = dataset.n_samples(), n_columns = dataset.n_columns()))]
    pub fn fit(dataset: &StatsDataset) -> Self {
        let n_cols = dataset.n_columns();
        let mut mins = vec![f64::INFINITY; n_cols];
        let mut maxs = vec![f64::NEG_INFINITY; n_cols];
        for row in dataset.rows() {
            for (j, &v) in row.iter().enumerate() {
                mins[j] = mins[j].min(v);
                maxs[j] = maxs[j].max(v);
            }
        }
        debug!("scaler fitted");
        Self { mins, maxs }
    }

    /// Return the fitted per-column minima.
    #[must_use]
    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    /// Return the fitted per-column maxima.
    #[must_use]
    pub fn maxs(&self) -> &[f64] {
        &self.maxs
    }

    /// Scale `dataset` with the fitted ranges, returning a new dataset.
    ///
    /// Values outside the fitted range scale outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ScalerWidthMismatch`] if `dataset` has a different
    /// number of columns than the one the scaler was fitted on.
    pub fn transform(&self, dataset: &StatsDataset) -> Result<StatsDataset, IoError> {
        if dataset.n_columns() != self.mins.len() {
            return Err(IoError::ScalerWidthMismatch {
                expected: self.mins.len(),
                got: dataset.n_columns(),
            });
        }
        Ok(self.scale_rows(dataset))
    }

    /// Fit on `dataset` and scale it in one step.
    #[must_use]
    pub fn fit_transform(dataset: &StatsDataset) -> StatsDataset {
        Self::fit(dataset).scale_rows(dataset)
    }

    /// Scale `dataset`, whose width must equal the fitted width.
    fn scale_rows(&self, dataset: &StatsDataset) -> StatsDataset {
        let rows = dataset
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.mins.iter().zip(&self.maxs))
                    .map(|(&v, (&min, &max))| {
                        let range = max - min;
                        if range > 0.0 { (v - min) / range } else { 0.0 }
                    })
                    .collect()
            })
            .collect();
        StatsDataset::new(dataset.columns().to_vec(), rows)
    }
}
