//! The cascades: which stage answers, and what it answers.

use siftmetric::{
    fast_distance, fast_similarity, levenshtein_distance, Cascade, Metric, MetricSuite,
    SiftMetric,
};

const SUITE: MetricSuite = MetricSuite::DEFAULT;

#[test]
fn test_distance_stage_progression() {
    let pair = (Some("saturday"), Some("sunday"));

    // Threshold at the length difference: length decides.
    let c = SUITE.cascade_distance(pair.0, pair.1, 2.0);
    assert_eq!(c.stage, Metric::Length);
    assert_eq!(c.value, 2.0);

    // Generous threshold: every stage passes, the answer is exact.
    let c = SUITE.cascade_distance(pair.0, pair.1, 10.0);
    assert_eq!(c, Cascade { value: 3.0, stage: Metric::Levenshtein });
    assert_eq!(levenshtein_distance(pair.0, pair.1), Ok(3));
}

#[test]
fn test_distance_zero_threshold_always_stops_at_length() {
    for (a, b) in [("", ""), ("abc", "abc"), ("abc", "xyz")] {
        let c = SUITE.cascade_distance(Some(a), Some(b), 0.0);
        assert_eq!(c.stage, Metric::Length);
    }
}

#[test]
fn test_similarity_threshold_above_one_always_stops_at_length() {
    let c = SUITE.cascade_similarity(Some("same"), Some("same"), 1.0);
    assert_eq!(c, Cascade { value: 1.0, stage: Metric::Length });
}

#[test]
fn test_similarity_negative_threshold_is_exact() {
    let c = SUITE.cascade_similarity(Some("flaw"), Some("lawn"), -1.0);
    assert_eq!(c, Cascade { value: 0.5, stage: Metric::Levenshtein });
}

#[test]
fn test_free_functions_match_default_suite() {
    assert_eq!(
        fast_distance(Some("kitten"), Some("sitting"), 5.0),
        SUITE.fast_distance(Some("kitten"), Some("sitting"), 5.0)
    );
    assert_eq!(
        fast_similarity(Some("kitten"), Some("sitting"), 0.2),
        SUITE.fast_similarity(Some("kitten"), Some("sitting"), 0.2)
    );
}

#[test]
fn test_custom_suite_changes_sift_stage_only() {
    // Without lookahead, a one-char shift looks like a string of substitutions.
    let blind = MetricSuite::new(SiftMetric::new(1));
    let c = blind.cascade_distance(Some("abcdef"), Some("xabcdef"), 3.0);
    assert_eq!(c.stage, Metric::Sift);

    let c = SUITE.cascade_distance(Some("abcdef"), Some("xabcdef"), 3.0);
    assert_eq!(c, Cascade { value: 1.0, stage: Metric::Levenshtein });
}
