//! Cluster size and label-versus-scenario assessment tables.

use std::collections::BTreeMap;

use crate::error::LabelError;

/// Number of samples carrying each label.
///
/// Non-negative labels are counted individually; all negative sentinels are
/// pooled into [`ClusterSizes::noise`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSizes {
    counts: BTreeMap<i64, usize>,
    noise: usize,
}

impl ClusterSizes {
    /// Return the sample count for `label` (zero if absent or negative).
    #[must_use]
    pub fn get(&self, label: i64) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Return the number of samples with a negative sentinel label.
    #[must_use]
    pub fn noise(&self) -> usize {
        self.noise
    }

    /// Iterate over `(label, count)` in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&l, &c)| (l, c))
    }

    /// Return the number of distinct non-negative labels.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.counts.len()
    }

    /// Return the total number of samples, noise included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.noise
    }
}

/// Count the samples per label in `labels`.
#[must_use]
pub fn cluster_sizes(labels: &[i64]) -> ClusterSizes {
    let mut sizes = ClusterSizes::default();
    for &label in labels {
        if label < 0 {
            sizes.noise += 1;
        } else {
            *sizes.counts.entry(label).or_insert(0) += 1;
        }
    }
    sizes
}

/// Contingency table of cluster label against ground-truth scenario id.
///
/// Row keys are labels (sentinels included, each under its own value), column
/// keys are scenario ids. Only observed pairs are stored; lookups of unseen
/// pairs read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCrosstab {
    table: BTreeMap<i64, BTreeMap<i64, usize>>,
}

impl ScenarioCrosstab {
    /// Build the table from parallel label and scenario sequences.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LabelError::LengthMismatch`] | `labels.len() != scenarios.len()` |
    pub fn new(labels: &[i64], scenarios: &[i64]) -> Result<Self, LabelError> {
        if labels.len() != scenarios.len() {
            return Err(LabelError::LengthMismatch {
                n_labels: labels.len(),
                n_scenarios: scenarios.len(),
            });
        }
        let mut table: BTreeMap<i64, BTreeMap<i64, usize>> = BTreeMap::new();
        for (&label, &scenario) in labels.iter().zip(scenarios) {
            *table.entry(label).or_default().entry(scenario).or_insert(0) += 1;
        }
        Ok(Self { table })
    }

    /// Return the observed labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = i64> + '_ {
        self.table.keys().copied()
    }

    /// Return the number of samples with `label` drawn from `scenario`.
    #[must_use]
    pub fn count(&self, label: i64, scenario: i64) -> usize {
        self.table
            .get(&label)
            .and_then(|row| row.get(&scenario))
            .copied()
            .unwrap_or(0)
    }

    /// Return one count per entry of `scenario_ids`, zero-filled.
    #[must_use]
    pub fn counts_for(&self, label: i64, scenario_ids: &[i64]) -> Vec<usize> {
        scenario_ids.iter().map(|&s| self.count(label, s)).collect()
    }

    /// Return the share of `label`'s samples that come from its most common
    /// scenario, or `None` if `label` was never observed.
    #[must_use]
    pub fn purity(&self, label: i64) -> Option<f64> {
        let row = self.table.get(&label)?;
        let total: usize = row.values().sum();
        let top = row.values().copied().max()?;
        Some(top as f64 / total as f64)
    }
}

/// Fraction of samples whose label equals their scenario id.
///
/// Meaningful after reordering with one segment per scenario, when the
/// samples are ordered by scenario. Returns `0.0` for empty input.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LabelError::LengthMismatch`] | `labels.len() != scenarios.len()` |
pub fn agreement(labels: &[i64], scenarios: &[i64]) -> Result<f64, LabelError> {
    if labels.len() != scenarios.len() {
        return Err(LabelError::LengthMismatch {
            n_labels: labels.len(),
            n_scenarios: scenarios.len(),
        });
    }
    if labels.is_empty() {
        return Ok(0.0);
    }
    let hits = labels.iter().zip(scenarios).filter(|(l, s)| l == s).count();
    Ok(hits as f64 / labels.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_pool_negatives() {
        let sizes = cluster_sizes(&[0, 1, 1, -1, -2, 3]);
        assert_eq!(sizes.get(1), 2);
        assert_eq!(sizes.get(2), 0);
        assert_eq!(sizes.noise(), 2);
        assert_eq!(sizes.n_clusters(), 3);
        assert_eq!(sizes.total(), 6);
        assert_eq!(sizes.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (3, 1)]);
    }

    #[test]
    fn crosstab_counts_and_zero_fill() {
        let labels = [0, 0, 1, 1, 1, 0];
        let scenarios = [0, 0, 1, 1, 0, 3];
        let tab = ScenarioCrosstab::new(&labels, &scenarios).unwrap();
        assert_eq!(tab.counts_for(0, &[0, 1, 2, 3]), vec![2, 0, 0, 1]);
        assert_eq!(tab.counts_for(1, &[0, 1, 2, 3]), vec![1, 2, 0, 0]);
        assert_eq!(tab.counts_for(5, &[0, 1]), vec![0, 0]);
        assert_eq!(tab.labels().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn crosstab_purity() {
        let tab = ScenarioCrosstab::new(&[2, 2, 2, 2], &[1, 1, 1, 0]).unwrap();
        assert!((tab.purity(2).unwrap() - 0.75).abs() < f64::EPSILON);
        assert!(tab.purity(9).is_none());
    }

    #[test]
    fn crosstab_length_mismatch() {
        let result = ScenarioCrosstab::new(&[0, 1], &[0]);
        assert!(matches!(
            result,
            Err(LabelError::LengthMismatch { n_labels: 2, n_scenarios: 1 })
        ));
    }

    #[test]
    fn agreement_fraction() {
        let a = agreement(&[0, 1, 2, 2], &[0, 1, 1, 2]).unwrap();
        assert!((a - 0.75).abs() < f64::EPSILON);
        assert!((agreement(&[], &[]).unwrap()).abs() < f64::EPSILON);
        assert!(agreement(&[0], &[0, 1]).is_err());
    }
}
