//! Label-versus-scenario assessment of a reordering run.

use sceneclust_labels::{agreement, ScenarioCrosstab};
use tracing::info;

use crate::IoError;

/// Per-label scenario counts plus overall agreement for remapped labels.
#[derive(Debug, Clone)]
pub struct AssessReport {
    /// Scenario ids reported, in column order.
    pub scenario_ids: Vec<i64>,
    /// Label × scenario contingency table.
    pub crosstab: ScenarioCrosstab,
    /// Fraction of samples whose remapped label equals their scenario id.
    pub agreement: f64,
}

impl AssessReport {
    /// Build a report for remapped `labels` against per-sample `scenarios`.
    ///
    /// When `scenario_ids` is empty, the distinct values of `scenarios` are
    /// used in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Label`] wrapping
    /// [`LabelError::LengthMismatch`](sceneclust_labels::LabelError::LengthMismatch)
    /// if `labels` and `scenarios` differ in length.
    pub fn new(labels: &[i64], scenarios: &[i64], scenario_ids: &[i64]) -> Result<Self, IoError> {
        let crosstab = ScenarioCrosstab::new(labels, scenarios)?;
        let agreement = agreement(labels, scenarios)?;
        let scenario_ids = if scenario_ids.is_empty() {
            let mut ids = scenarios.to_vec();
            ids.sort_unstable();
            ids.dedup();
            ids
        } else {
            scenario_ids.to_vec()
        };
        info!(n_scenarios = scenario_ids.len(), agreement, "assessment complete");
        Ok(Self {
            scenario_ids,
            crosstab,
            agreement,
        })
    }

    /// Return the zero-filled scenario counts for `label`, in `scenario_ids` order.
    #[must_use]
    pub fn counts_for(&self, label: i64) -> Vec<usize> {
        self.crosstab.counts_for(label, &self.scenario_ids)
    }
}
