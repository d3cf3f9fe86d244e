//! Sift behaviour on hand-checked inputs.

use siftmetric::{sift_distance, sift_similarity, MetricError, SiftMetric, DEFAULT_MAX_OFFSET};

#[test]
fn test_default_lookahead_is_five() {
    assert_eq!(DEFAULT_MAX_OFFSET, 5);
    assert_eq!(SiftMetric::default().max_offset(), 5);
    assert!(!SiftMetric::default().fast_resync());
}

#[test]
fn test_empty_sequences() {
    assert_eq!(sift_distance(Some(""), Some("")), 0.0);
    assert_eq!(sift_distance(Some(""), Some("abc")), 3.0);
    assert_eq!(sift_distance(Some("abc"), None), 3.0);
}

#[test]
fn test_shift_within_lookahead_is_cheap() {
    // Four characters inserted at the front: found at offset 4, inside a window of 5.
    // The resynchronizing 'a' itself is not counted, so (6 + 10) / 2 - 5 = 3.
    assert_eq!(sift_distance(Some("abcdef"), Some("wxyzabcdef")), 3.0);
}

#[test]
fn test_shift_beyond_lookahead_degrades() {
    // Five inserted characters need offset 5; the default window stops at 4.
    let near = sift_distance(Some("abcdef"), Some("vwxyzabcdef"));
    let wide = SiftMetric::new(6).str_distance("abcdef", "vwxyzabcdef");
    assert_eq!(wide, 3.0);
    assert_eq!(near, 8.0);
}

#[test]
fn test_integer_halving() {
    // (1 + 2) / 2 = 1 in integers, minus one common char.
    assert_eq!(sift_distance(Some("a"), Some("ab")), 0.0);
}

#[test]
fn test_similarity_requires_both_inputs() {
    assert_eq!(
        sift_similarity(Some("abc"), None),
        Err(MetricError::MissingInput {
            operation: "sift_similarity",
            position: 2
        })
    );
    assert_eq!(sift_similarity(Some(""), Some("")), Ok(1.0));
    assert_eq!(sift_similarity(Some("abc"), Some("")), Ok(0.0));
}

#[test]
fn test_works_on_token_sequences() {
    let a = ["select", "id", "from", "users"];
    let b = ["select", "name", "from", "users"];
    assert_eq!(SiftMetric::default().distance(&a[..], &b[..]), 1.0);
}
