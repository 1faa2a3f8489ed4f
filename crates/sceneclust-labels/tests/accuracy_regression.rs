//! Regression tests for segment-dominance label reordering.
//!
//! Each test pins the exact output of a hand-checked input so that changes to
//! tie-breaking, segment geometry, or sentinel handling are caught.

use sceneclust_labels::{dominant_value, parse_labels, reorder_labels, ReorderConfig, NOISE};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

/// Four-scenario dump with noisy first two segments and a two-sample tail.
fn four_scenario_dump() -> Vec<i64> {
    parse_labels("[3 3 3 2 0 2 3 0 3 3 3 1 1 1 1 0 0 0 0 0 3 3 3 3 3 3]").unwrap()
}

// ---------------------------------------------------------------------------
// a) four segments with a repeated dominant label
// ---------------------------------------------------------------------------

/// Segments 0, 1 and 3 are all dominated by 3, so 3 maps to the last of them.
/// Segment 2 ties 1 against 0 and 1 wins by appearing first.
#[test]
fn four_segments_repeated_dominant() {
    let labels = four_scenario_dump();
    assert_eq!(labels.len(), 26);

    let result = ReorderConfig::new(4).unwrap().fit(&labels).unwrap();
    assert_eq!(result.segment_len, 6);
    assert_eq!(result.remainder_len, 2);
    assert_eq!(result.dominants, vec![Some(3), Some(3), Some(1), Some(3)]);
    assert_eq!(result.mapping.iter().collect::<Vec<_>>(), vec![(1, 2), (3, 3)]);

    let expected = vec![
        3, 3, 3, 2, 0, 2, 3, 0, 3, 3, 3, 2, 2, 2, 2, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3,
    ];
    assert_eq!(result.labels, expected);
}

// ---------------------------------------------------------------------------
// b) dominant value
// ---------------------------------------------------------------------------

#[test]
fn dominant_of_short_segment() {
    assert_eq!(dominant_value(&[5, 5, 5, 2, 2]), Some(5));
}

// ---------------------------------------------------------------------------
// c) parsing loses signs
// ---------------------------------------------------------------------------

#[test]
fn parse_drops_minus_sign() {
    assert_eq!(parse_labels("[1, -3, 22]").unwrap(), vec![1, 3, 22]);
}

// ---------------------------------------------------------------------------
// d) one sample per segment
// ---------------------------------------------------------------------------

/// With `partition == n` each label maps to its last position.
#[test]
fn partition_equal_to_length() {
    let labels = vec![2, 0, 1, 2];
    let result = ReorderConfig::new(4).unwrap().fit(&labels).unwrap();
    assert_eq!(result.segment_len, 1);
    assert_eq!(result.dominants, vec![Some(2), Some(0), Some(1), Some(2)]);
    // 2 -> 3 (last write), 0 -> 1, 1 -> 2
    assert_eq!(result.labels, vec![3, 1, 2, 3]);
}

#[test]
fn partition_equal_to_length_distinct_labels_is_permutation() {
    let labels = vec![4, 7, 1, 0];
    let out = reorder_labels(&labels, 4).unwrap();
    assert_eq!(out, vec![0, 1, 2, 3]);
}

// ---------------------------------------------------------------------------
// e) remainder samples
// ---------------------------------------------------------------------------

#[test]
fn remainder_remapped_but_not_counted() {
    // part = 2 with partition 3; the tail [5] is never a dominant candidate.
    let labels = vec![1, 1, 0, 0, 2, 2, 5];
    let result = ReorderConfig::new(3).unwrap().fit(&labels).unwrap();
    assert_eq!(result.remainder_len, 1);
    assert_eq!(result.labels, vec![0, 0, 1, 1, 2, 2, 5]);

    // Tail labels that do have a mapping entry are remapped.
    let labels = vec![1, 1, 0, 0, 1];
    let out = reorder_labels(&labels, 2).unwrap();
    assert_eq!(out, vec![0, 0, 1, 1, 0]);
}

// ---------------------------------------------------------------------------
// f) sentinels
// ---------------------------------------------------------------------------

#[test]
fn all_noise_segment_is_skipped() {
    let labels = vec![NOISE, NOISE, 4, 4, 9, 9];
    let result = ReorderConfig::new(3).unwrap().fit(&labels).unwrap();
    assert_eq!(result.dominants, vec![None, Some(4), Some(9)]);
    assert_eq!(result.labels, vec![NOISE, NOISE, 1, 1, 2, 2]);
}

#[test]
fn sentinel_never_counted_or_remapped() {
    let labels = vec![-1, -1, -1, 2, 0, 0, 0, -5];
    let out = reorder_labels(&labels, 2).unwrap();
    // seg0 [-1,-1,-1,2] -> 2 -> 0; seg1 [0,0,0,-5] -> 0 -> 1
    assert_eq!(out, vec![-1, -1, -1, 0, 1, 1, 1, -5]);
}

// ---------------------------------------------------------------------------
// g) idempotence does not hold
// ---------------------------------------------------------------------------

/// An unmapped original label equal to a target index can take over a
/// segment on the second pass.
#[test]
fn reorder_is_not_idempotent() {
    let labels = vec![5, 5, 5, 5, 5, 5, 8, 8, 0, 0, 5, 5];
    let once = reorder_labels(&labels, 2).unwrap();
    assert_eq!(once, vec![0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0]);

    let twice = reorder_labels(&once, 2).unwrap();
    assert_eq!(twice, vec![1; 12]);
    assert_ne!(once, twice);
}

#[test]
fn partition_larger_than_length_is_identity() {
    let labels = vec![3, 1, 2];
    let result = ReorderConfig::new(10).unwrap().fit(&labels).unwrap();
    assert_eq!(result.segment_len, 0);
    assert!(result.mapping.is_empty());
    assert_eq!(result.labels, labels);
}

#[test]
fn partition_far_beyond_length_is_identity() {
    let labels = vec![1, 2, 3];
    let out = reorder_labels(&labels, 1 << 40).unwrap();
    assert_eq!(out, labels);
}

#[test]
fn zero_partition_fails() {
    assert!(reorder_labels(&[1, 2, 3], 0).is_err());
}
