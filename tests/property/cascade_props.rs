//! Cascade properties: every answer comes from the right stage.

use super::common::{approx_eq, optional_word_strategy, oracle_levenshtein, word_strategy};
use proptest::prelude::*;
use siftmetric::{
    fast_distance, fast_similarity, length_distance, length_similarity, sift_distance,
    sift_similarity, Metric, MetricSuite,
};

const SUITE: MetricSuite = MetricSuite::DEFAULT;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// An early stage only answers when its value reaches the threshold, and
    /// otherwise the answer is exact edit distance.
    #[test]
    fn prop_distance_cascade_stages(
        a in word_strategy(),
        b in word_strategy(),
        max in 0u32..12,
    ) {
        let max = f64::from(max);
        let (sa, sb) = (Some(a.as_str()), Some(b.as_str()));
        let c = SUITE.cascade_distance(sa, sb, max);
        let ld = length_distance(sa, sb) as f64;
        let sd = sift_distance(sa, sb);

        match c.stage {
            Metric::Length => {
                prop_assert!(ld >= max);
                prop_assert_eq!(c.value, ld);
            }
            Metric::Sift => {
                prop_assert!(ld < max);
                prop_assert!(sd >= max);
                prop_assert_eq!(c.value, sd);
            }
            Metric::Levenshtein => {
                prop_assert!(ld < max && sd < max);
                prop_assert_eq!(c.value, oracle_levenshtein(&a, &b) as f64);
            }
        }
        prop_assert_eq!(fast_distance(sa, sb, max), c.value);
    }

    /// Anything under the threshold is exact.
    #[test]
    fn prop_distance_below_threshold_is_exact(
        a in word_strategy(),
        b in word_strategy(),
        max in 1u32..12,
    ) {
        let value = fast_distance(Some(a.as_str()), Some(b.as_str()), f64::from(max));
        if value < f64::from(max) {
            prop_assert_eq!(value, oracle_levenshtein(&a, &b) as f64);
        }
    }

    #[test]
    fn prop_similarity_cascade_stages(
        a in word_strategy(),
        b in word_strategy(),
        min in 0.0f64..1.0,
    ) {
        let (sa, sb) = (Some(a.as_str()), Some(b.as_str()));
        let c = SUITE.cascade_similarity(sa, sb, min);
        let ls = length_similarity(sa, sb);
        let ss = sift_similarity(sa, sb).unwrap();

        match c.stage {
            Metric::Length => {
                prop_assert!(ls <= min);
                prop_assert_eq!(c.value, ls);
            }
            Metric::Sift => {
                prop_assert!(ls > min);
                prop_assert!(ss <= min);
                prop_assert_eq!(c.value, ss);
            }
            Metric::Levenshtein => {
                prop_assert!(ls > min && ss > min);
                let exact = strsim::normalized_levenshtein(&a, &b);
                prop_assert!(approx_eq(c.value, exact));
            }
        }
        prop_assert_eq!(fast_similarity(sa, sb, min), c.value);
    }

    /// The cascades treat `None` exactly like `""` and never fail.
    #[test]
    fn prop_cascades_accept_absent_input(
        a in optional_word_strategy(),
        b in optional_word_strategy(),
        max in 0u32..8,
    ) {
        let (oa, ob) = (a.as_deref(), b.as_deref());
        let (ea, eb) = (Some(oa.unwrap_or("")), Some(ob.unwrap_or("")));
        prop_assert_eq!(
            SUITE.cascade_distance(oa, ob, f64::from(max)),
            SUITE.cascade_distance(ea, eb, f64::from(max))
        );
        prop_assert_eq!(
            SUITE.cascade_similarity(oa, ob, 0.5),
            SUITE.cascade_similarity(ea, eb, 0.5)
        );
    }
}
