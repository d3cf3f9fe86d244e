// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the metrics.
//!
//! Debug-mode assertions that check the properties the cascades depend on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure detection** in tests and fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                           |
//! |------------------------------|----------------------------------------------------|
//! | `check_length_lower_bound`   | `levenshtein(a, b) >= abs(len a - len b)`          |
//! | `check_sift_lcs_bounded`     | `lcs <= min(len a, len b)`, so Sift is never < 0   |
//! | `check_similarity_in_range`  | every similarity lies in [0, 1]                    |
//! | `check_cascade_stage`        | a cheap stage only stops past the threshold        |

use crate::types::Metric;

/// Edit distance can never beat the length difference.
#[inline]
pub fn check_length_lower_bound(distance: usize, l1: usize, l2: usize) {
    debug_assert!(
        distance >= l1.abs_diff(l2),
        "Contract violation: levenshtein {} < length difference {}",
        distance,
        l1.abs_diff(l2)
    );
    debug_assert!(
        distance <= l1.max(l2),
        "Contract violation: levenshtein {} > max length {}",
        distance,
        l1.max(l2)
    );
}

/// Sift counts at most one common character per cursor step, and the cursor
/// never passes the shorter sequence.
#[inline]
pub fn check_sift_lcs_bounded(lcs: usize, l1: usize, l2: usize) {
    debug_assert!(
        lcs <= l1.min(l2),
        "Contract violation: sift lcs {} > min length {}",
        lcs,
        l1.min(l2)
    );
}

#[inline]
pub fn check_similarity_in_range(metric: Metric, similarity: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&similarity),
        "Contract violation: {} similarity {} outside [0, 1]",
        metric,
        similarity
    );
}

/// Which side of the threshold ends a cascade early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Distance cascade: stop at `value >= max_distance`.
    Distance,
    /// Similarity cascade: stop at `value <= min_similarity`.
    Similarity,
}

impl Direction {
    fn crosses(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Distance => value >= threshold,
            Direction::Similarity => value <= threshold,
        }
    }
}

/// A cascade may return from `Length` or `Sift` only once the value crosses
/// the threshold; anything short of that has to escalate. The exact stage
/// answers whatever the threshold, but its value must still be a valid
/// distance or similarity.
#[inline]
pub fn check_cascade_stage(stage: Metric, value: f64, threshold: f64, direction: Direction) {
    if stage == Metric::Levenshtein {
        match direction {
            Direction::Distance => debug_assert!(
                value >= 0.0,
                "Contract violation: exact cascade distance {} is negative",
                value
            ),
            Direction::Similarity => check_similarity_in_range(stage, value),
        }
        return;
    }
    debug_assert!(
        direction.crosses(value, threshold),
        "Contract violation: {:?} cascade stopped at {} with {} short of threshold {}",
        direction,
        stage,
        value,
        threshold
    );
}
