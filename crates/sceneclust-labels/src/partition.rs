//! Contiguous equal-size segmentation of a label sequence.

use crate::error::LabelError;

/// A label sequence split into `partition` contiguous segments.
///
/// Every segment has length `labels.len() / partition`. Samples past
/// `partition * segment_len` form the remainder: they belong to no segment
/// but remain part of the sequence.
#[derive(Debug, Clone, Copy)]
pub struct Segments<'a> {
    labels: &'a [i64],
    partition: usize,
    segment_len: usize,
}

impl<'a> Segments<'a> {
    /// Split `labels` into `partition` segments.
    ///
    /// When `partition > labels.len()` every segment is empty.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LabelError::InvalidPartition`] | `partition` is zero |
    pub fn new(labels: &'a [i64], partition: usize) -> Result<Self, LabelError> {
        if partition == 0 {
            return Err(LabelError::InvalidPartition { partition });
        }
        Ok(Self {
            labels,
            partition,
            segment_len: labels.len() / partition,
        })
    }

    /// Return the number of segments.
    #[must_use]
    pub fn partition(&self) -> usize {
        self.partition
    }

    /// Return the length shared by every segment.
    #[must_use]
    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Return the trailing samples not covered by any segment.
    #[must_use]
    pub fn remainder(&self) -> &'a [i64] {
        &self.labels[self.partition * self.segment_len..]
    }

    /// Return segment `i`, or `None` when `i >= partition`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&'a [i64]> {
        if i >= self.partition {
            return None;
        }
        let start = i * self.segment_len;
        Some(&self.labels[start..start + self.segment_len])
    }

    /// Iterate over the segments in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [i64]> + '_ {
        (0..self.partition).filter_map(move |i| self.get(i))
    }
}
