//! Result type for label reordering.

use crate::assess::{cluster_sizes, ClusterSizes};
use crate::mapping::LabelMapping;

/// Result of a single reordering run.
#[derive(Debug, Clone)]
pub struct ReorderResult {
    /// Remapped label for each input sample, in input order.
    pub labels: Vec<i64>,
    /// Dominant non-negative label of each segment (`None` for segments with
    /// none). Empty when the segments themselves are empty.
    pub dominants: Vec<Option<i64>>,
    /// Original label → segment index mapping that produced `labels`.
    pub mapping: LabelMapping,
    /// Number of samples in each segment.
    pub segment_len: usize,
    /// Number of trailing samples outside every segment.
    pub remainder_len: usize,
}

impl ReorderResult {
    /// Return the number of samples per remapped label.
    #[must_use]
    pub fn cluster_sizes(&self) -> ClusterSizes {
        cluster_sizes(&self.labels)
    }

    /// Return the number of non-negative samples whose label had no mapping
    /// entry and was therefore left as it was.
    ///
    /// `original` must be the sequence passed to `fit`.
    #[must_use]
    pub fn n_unmapped(&self, original: &[i64]) -> usize {
        original
            .iter()
            .filter(|&&l| l >= 0 && self.mapping.get(l).is_none())
            .count()
    }
}
