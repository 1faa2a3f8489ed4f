//! Property tests for label reordering and digit-run parsing.
//!
//! Checks invariants that must hold for any label sequence and partition
//! count, rather than pinned outputs.

use proptest::prelude::*;
use sceneclust_labels::{parse_labels, reorder_labels, ReorderConfig};

fn labels_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-2i64..6, 1..60)
}

proptest! {
    #[test]
    fn prop_length_preserved(labels in labels_strategy(), p in 1usize..80) {
        let out = reorder_labels(&labels, p).unwrap();
        prop_assert_eq!(out.len(), labels.len());
    }

    #[test]
    fn prop_negatives_unchanged(labels in labels_strategy(), p in 1usize..80) {
        let out = reorder_labels(&labels, p).unwrap();
        for (before, after) in labels.iter().zip(&out) {
            if *before < 0 {
                prop_assert_eq!(before, after);
            } else {
                prop_assert!(*after >= 0);
            }
        }
    }

    #[test]
    fn prop_mapped_targets_below_partition(labels in labels_strategy(), p in 1usize..80) {
        let result = ReorderConfig::new(p).unwrap().fit(&labels).unwrap();
        for (_, target) in result.mapping.iter() {
            prop_assert!((target as usize) < p);
        }
    }

    #[test]
    fn prop_equal_inputs_stay_equal(labels in labels_strategy(), p in 1usize..80) {
        let out = reorder_labels(&labels, p).unwrap();
        for i in 0..labels.len() {
            for j in 0..labels.len() {
                if labels[i] == labels[j] {
                    prop_assert_eq!(out[i], out[j]);
                }
            }
        }
    }

    #[test]
    fn prop_parse_rendered_non_negative(labels in prop::collection::vec(0i64..1000, 0..40)) {
        let rendered = format!("{labels:?}");
        prop_assert_eq!(parse_labels(&rendered).unwrap(), labels);
    }
}
