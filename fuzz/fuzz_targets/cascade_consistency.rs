// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance and similarity cascades.
//!
//! Whatever stage answers, the answer must be consistent with the metric that
//! stage stands for. An early stage that answers below the threshold, or an
//! "exact" answer that is not exact, means callers silently drop matches.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftmetric::{Metric, MetricSuite, SiftMetric};

#[derive(Debug, Arbitrary)]
struct CascadeInput {
    a: Option<String>,
    b: Option<String>,
    max_distance: u8,
    min_similarity: u8,
    max_offset: u8,
    fast_resync: bool,
}

fuzz_target!(|input: CascadeInput| {
    // Cap lengths to keep the O(n·m) table small
    let cap = |s: &Option<String>| s.as_ref().map(|s| s.chars().take(64).collect::<String>());
    let (a, b) = (cap(&input.a), cap(&input.b));
    let (a, b) = (a.as_deref(), b.as_deref());

    let sift = SiftMetric::new(usize::from(input.max_offset % 16) + 1)
        .with_fast_resync(input.fast_resync);
    let suite = MetricSuite::new(sift);
    let (ea, eb) = (Some(a.unwrap_or("")), Some(b.unwrap_or("")));

    // INVARIANT 1: distance cascade stages
    let max_distance = f64::from(input.max_distance % 32);
    let c = suite.cascade_distance(a, b, max_distance);
    match c.stage {
        Metric::Length | Metric::Sift => assert!(c.value >= max_distance, "{:?}", c),
        Metric::Levenshtein => {
            let exact = suite.levenshtein_distance(ea, eb).unwrap() as f64;
            assert_eq!(c.value, exact);
        }
    }

    // INVARIANT 2: similarity cascade stages, always in [0, 1]
    let min_similarity = f64::from(input.min_similarity) / 255.0;
    let c = suite.cascade_similarity(a, b, min_similarity);
    assert!((0.0..=1.0).contains(&c.value), "{:?}", c);
    match c.stage {
        Metric::Length | Metric::Sift => assert!(c.value <= min_similarity, "{:?}", c),
        Metric::Levenshtein => {
            let exact = suite.levenshtein_similarity(ea, eb).unwrap();
            assert_eq!(c.value, exact);
        }
    }

    // INVARIANT 3: length difference bounds exact distance
    let exact = suite.levenshtein_distance(ea, eb).unwrap();
    assert!(exact >= suite.length_distance(a, b));
});
