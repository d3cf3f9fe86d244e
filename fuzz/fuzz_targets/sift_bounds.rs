// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Sift scan.
//!
//! The scan indexes with a moving cursor plus two offsets, and the fast-resync
//! rule jumps the cursor. Any slip there is an out-of-bounds panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftmetric::SiftMetric;

#[derive(Debug, Arbitrary)]
struct SiftInput {
    a: Vec<u8>,
    b: Vec<u8>,
    max_offset: u8,
    fast_resync: bool,
}

fuzz_target!(|input: SiftInput| {
    let metric = SiftMetric::new(usize::from(input.max_offset)).with_fast_resync(input.fast_resync);
    let (a, b) = (&input.a[..], &input.b[..]);

    let d = metric.distance(a, b);
    assert!(d >= 0.0);
    assert!(d <= a.len().max(b.len()) as f64);

    let s = metric.similarity(a, b);
    assert!((0.0..=1.0).contains(&s));

    // Identity
    assert_eq!(metric.distance(a, a), 0.0);
});
