//! Cluster label reordering for cross-run comparison.
//!
//! Pure library, zero I/O. Splits a label sequence into contiguous
//! equal-size segments, finds the dominant label of each segment, and
//! renames labels so that the label dominating segment `i` becomes `i`.
//! Also provides a digit-run parser for textual label dumps and
//! per-scenario assessment tables for remapped labels.

mod assess;
mod config;
mod dominant;
mod error;
mod mapping;
mod parse;
mod partition;
mod result;

pub use assess::{agreement, cluster_sizes, ClusterSizes, ScenarioCrosstab};
pub use config::ReorderConfig;
pub use dominant::dominant_value;
pub use error::LabelError;
pub use mapping::LabelMapping;
pub use parse::parse_labels;
pub use partition::Segments;
pub use result::ReorderResult;

/// Conventional sentinel for samples that a clustering run left unassigned.
///
/// Any negative label is treated as a sentinel; this is the value most
/// clustering outputs use.
pub const NOISE: i64 = -1;

/// Reorder `labels` using `partition` contiguous segments.
///
/// Shorthand for `ReorderConfig::new(partition)?.fit(labels)` that keeps only
/// the remapped sequence.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LabelError::InvalidPartition`] | `partition` is zero |
pub fn reorder_labels(labels: &[i64], partition: usize) -> Result<Vec<i64>, LabelError> {
    Ok(ReorderConfig::new(partition)?.fit(labels)?.labels)
}
