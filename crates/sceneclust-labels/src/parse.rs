//! Digit-run extraction from textual label dumps.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LabelError;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("compile digit-run pattern"));

/// Parse every maximal run of ASCII decimal digits in `s` as a label.
///
/// Everything else is a separator, so bracketed, comma- or space-separated
/// and ellipsis-truncated array renderings all parse. Runs are returned in
/// left-to-right order; a string without digits yields an empty vector.
///
/// A minus sign is a separator too: `"-3"` parses as `3`. Sentinel labels
/// therefore do not survive a round trip through text.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`LabelError::LabelOverflow`] | A digit run exceeds `i64::MAX` |
pub fn parse_labels(s: &str) -> Result<Vec<i64>, LabelError> {
    DIGIT_RUN
        .find_iter(s)
        .map(|m| {
            m.as_str().parse::<i64>().map_err(|_| LabelError::LabelOverflow {
                raw: m.as_str().to_string(),
                offset: m.start(),
            })
        })
        .collect()
}
