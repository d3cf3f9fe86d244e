// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The cheapest metric: compare lengths and nothing else.
//!
//! Worthless as a similarity on its own, but it is a sound lower bound on edit
//! distance, which makes it the perfect first filter in a cascade.

/// Absolute difference of two lengths.
pub fn length_distance(l1: usize, l2: usize) -> usize {
    l1.abs_diff(l2)
}

/// Ratio of the shorter length to the longer one.
///
/// Branch order matters: `l1 < l2` is tested before the zero guard, so
/// `(0, n > 0)` yields 0 while `(0, 0)` yields 1.
pub fn length_similarity(l1: usize, l2: usize) -> f64 {
    let (l1, l2) = (l1 as f64, l2 as f64);
    if l1 < l2 {
        return l1 / l2;
    }
    if l1 == 0.0 {
        return 1.0;
    }
    l2 / l1
}
