//! Error types for label reordering, parsing, and assessment.

/// Errors from label sequence operations.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// Returned when the partition count is zero.
    #[error("partition must be at least 1, got {partition}")]
    InvalidPartition {
        /// The invalid partition count provided.
        partition: usize,
    },

    /// Returned when a digit run does not fit in a 64-bit label.
    #[error("label \"{raw}\" at byte offset {offset} does not fit in an i64")]
    LabelOverflow {
        /// The digit run that failed to parse.
        raw: String,
        /// Byte offset of the run in the input string.
        offset: usize,
    },

    /// Returned when labels and scenario ids have different lengths.
    #[error("got {n_labels} labels but {n_scenarios} scenario ids")]
    LengthMismatch {
        /// Number of labels provided.
        n_labels: usize,
        /// Number of scenario ids provided.
        n_scenarios: usize,
    },
}
