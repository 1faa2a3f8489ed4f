//! Most-frequent-label detection within a segment.

use std::collections::HashMap;

/// Return the most frequent non-negative label in `segment`.
///
/// Negative sentinels are ignored. When several labels share the highest
/// count, the one whose first occurrence comes earliest in `segment` wins.
///
/// Returns `None` when `segment` holds no non-negative label.
#[must_use]
pub fn dominant_value(segment: &[i64]) -> Option<i64> {
    // Counts in first-occurrence order; `slots` maps a label to its index here.
    let mut counts: Vec<(i64, usize)> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();

    for &label in segment.iter().filter(|&&l| l >= 0) {
        match slots.get(&label) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    let mut best: Option<(i64, usize)> = None;
    for &(label, count) in &counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}
