//! Configuration builder for segment-dominance label reordering.

use tracing::{debug, instrument, warn};

use crate::dominant::dominant_value;
use crate::error::LabelError;
use crate::mapping::LabelMapping;
use crate::partition::Segments;
use crate::result::ReorderResult;

/// Configuration for reordering cluster labels.
///
/// Construct via [`ReorderConfig::new`], then call [`ReorderConfig::fit`].
/// The partition count is the number of contiguous, equal-size segments the
/// label sequence is split into; the label dominating segment `i` is renamed
/// to `i`.
#[derive(Debug, Clone, Copy)]
pub struct ReorderConfig {
    partition: usize,
}

impl ReorderConfig {
    /// Create a new configuration with the given partition count.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LabelError::InvalidPartition`] | `partition` is zero |
    pub fn new(partition: usize) -> Result<Self, LabelError> {
        if partition == 0 {
            return Err(LabelError::InvalidPartition { partition });
        }
        Ok(Self { partition })
    }

    /// Return the partition count.
    #[must_use]
    pub fn partition(&self) -> usize {
        self.partition
    }

    /// Reorder `labels`.
    ///
    /// 1. Split into segments of `labels.len() / partition` samples.
    /// 2. Find each segment's dominant non-negative label.
    /// 3. Map dominant label → segment index (later segments win).
    /// 4. Apply the mapping to every sample, remainder included. Negative and
    ///    unmapped labels are left as they are.
    ///
    /// When `partition` exceeds `labels.len()` every segment is empty, so the
    /// labels come back unchanged with no dominants and an empty mapping.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LabelError::InvalidPartition`] | `partition` is zero |
    #[instrument(skip_all, fields(n = labels.len(), partition = self.partition))]
    pub fn fit(&self, labels: &[i64]) -> Result<ReorderResult, LabelError> {
        let segments = Segments::new(labels, self.partition)?;

        // With zero-length segments no dominant exists; skip the per-segment pass.
        if segments.segment_len() == 0 {
            warn!(
                n = labels.len(),
                partition = self.partition,
                "partition exceeds sample count, labels left unchanged"
            );
            return Ok(ReorderResult {
                labels: labels.to_vec(),
                dominants: Vec::new(),
                mapping: LabelMapping::from_dominants(&[]),
                segment_len: 0,
                remainder_len: labels.len(),
            });
        }

        let dominants: Vec<Option<i64>> = segments.iter().map(dominant_value).collect();
        for (i, dominant) in dominants.iter().enumerate() {
            match dominant {
                Some(label) => debug!(segment = i, label, "segment dominant"),
                None => warn!(segment = i, "segment has no non-negative label"),
            }
        }

        let remainder_len = segments.remainder().len();
        if remainder_len > 0 {
            warn!(remainder_len, "trailing samples fall outside every segment");
        }

        let mapping = LabelMapping::from_dominants(&dominants);
        let remapped = mapping.apply(labels);
        debug!(n_mapped = mapping.len(), "label mapping built");

        Ok(ReorderResult {
            labels: remapped,
            dominants,
            mapping,
            segment_len: segments.segment_len(),
            remainder_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ReorderConfig;
    use crate::error::LabelError;

    #[test]
    fn new_valid_partition() {
        let cfg = ReorderConfig::new(4);
        assert!(cfg.is_ok());
        assert_eq!(cfg.unwrap().partition(), 4);
    }

    #[test]
    fn new_partition_zero() {
        let result = ReorderConfig::new(0);
        assert!(matches!(
            result,
            Err(LabelError::InvalidPartition { partition: 0 })
        ));
    }

    #[test]
    fn fit_reports_segment_geometry() {
        let cfg = ReorderConfig::new(3).unwrap();
        let result = cfg.fit(&[0, 0, 1, 1, 2, 2, 9, 9]).unwrap();
        assert_eq!(result.segment_len, 2);
        assert_eq!(result.remainder_len, 2);
        assert_eq!(result.dominants, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn fit_on_empty_input() {
        let result = ReorderConfig::new(2).unwrap().fit(&[]).unwrap();
        assert!(result.labels.is_empty());
        assert!(result.dominants.is_empty());
        assert!(result.mapping.is_empty());
    }

    #[test]
    fn fit_huge_partition_returns_input() {
        let cfg = ReorderConfig::new(1usize << 40).unwrap();
        let result = cfg.fit(&[1, 2, 3]).unwrap();
        assert_eq!(result.labels, vec![1, 2, 3]);
        assert_eq!(result.segment_len, 0);
        assert_eq!(result.remainder_len, 3);
        assert!(result.dominants.is_empty());
        assert!(result.mapping.is_empty());
    }
}
