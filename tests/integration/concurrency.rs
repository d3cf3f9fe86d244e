//! One suite, many threads: nothing is written after construction.

use std::sync::Arc;
use std::thread;

use super::common::{oracle_levenshtein, KNOWN_PAIRS};
use siftmetric::{MetricSuite, SiftMetric};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_metric_types_are_thread_safe() {
    assert_send_sync::<SiftMetric>();
    assert_send_sync::<MetricSuite>();
}

#[test]
fn test_shared_suite_gives_same_answers_on_every_thread() {
    let suite = Arc::new(MetricSuite::new(SiftMetric::new(7)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let suite = Arc::clone(&suite);
            thread::spawn(move || {
                KNOWN_PAIRS
                    .iter()
                    .map(|&(a, b, _)| {
                        (
                            suite.fast_distance(Some(a), Some(b), 100.0),
                            suite.sift_distance(Some(a), Some(b)),
                        )
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for run in &results {
        assert_eq!(run, &results[0]);
        for (&(a, b, expected), &(fast, _)) in KNOWN_PAIRS.iter().zip(run) {
            // A threshold of 100 is never reached, so the answer is exact.
            assert_eq!(fast, expected as f64);
            assert_eq!(oracle_levenshtein(a, b), expected);
        }
    }
}
