//! Original-label → ordinal-position mapping built from segment dominants.

use std::collections::BTreeMap;

/// Maps an original label to the index of the segment it dominates.
///
/// Built by assigning `mapping[dominant[i]] = i` for each segment in order,
/// so a label that dominates several segments ends up pointing at the last
/// of them. Segments without a dominant label contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    targets: BTreeMap<i64, i64>,
}

impl LabelMapping {
    /// Build the mapping from per-segment dominant labels, in segment order.
    #[must_use]
    pub fn from_dominants(dominants: &[Option<i64>]) -> Self {
        let mut targets = BTreeMap::new();
        for (i, dominant) in dominants.iter().enumerate() {
            if let Some(label) = *dominant {
                // A present dominant implies a non-empty segment, so i < labels.len().
                targets.insert(label, i as i64);
            }
        }
        Self { targets }
    }

    /// Return the target for `label`, if it has one.
    #[must_use]
    pub fn get(&self, label: i64) -> Option<i64> {
        self.targets.get(&label).copied()
    }

    /// Map a single label. Negative labels and labels without an entry are
    /// returned unchanged.
    #[must_use]
    pub fn map(&self, label: i64) -> i64 {
        if label < 0 {
            return label;
        }
        self.get(label).unwrap_or(label)
    }

    /// Map every label in `labels`, preserving length and order.
    #[must_use]
    pub fn apply(&self, labels: &[i64]) -> Vec<i64> {
        labels.iter().map(|&l| self.map(l)).collect()
    }

    /// Iterate over `(original, target)` pairs in ascending original order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.targets.iter().map(|(&k, &v)| (k, v))
    }

    /// Return the number of mapped labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Return `true` if no label is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
