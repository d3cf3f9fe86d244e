// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by the metrics and the cascades.
//!
//! Three metrics, ordered by cost. The derived `Ord` follows declaration order,
//! so `Length < Sift < Levenshtein` is also "cheaper than". The cascades rely on
//! this when they report which stage produced an answer.
//!
//! | Metric        | Cost              | Exact? |
//! |---------------|-------------------|--------|
//! | `Length`      | O(1)              | Lower bound only |
//! | `Sift`        | O(k·max(n, m))    | Heuristic |
//! | `Levenshtein` | O(n·m)            | Yes |

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three interchangeable metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Absolute difference of lengths.
    Length,
    /// Bounded-lookahead approximation of edit distance.
    Sift,
    /// Exact edit distance.
    Levenshtein,
}

impl Metric {
    /// All metrics, cheapest first.
    pub const ALL: [Metric; 3] = [Metric::Length, Metric::Sift, Metric::Levenshtein];

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Length => "length",
            Metric::Sift => "sift",
            Metric::Levenshtein => "levenshtein",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a cascade: the value returned and the stage that decided it.
///
/// When `stage` is `Levenshtein` the value is exact. Any earlier stage means
/// the pair was rejected by a cheaper bound and the exact metric never ran.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cascade {
    pub value: f64,
    pub stage: Metric,
}

impl Cascade {
    pub(crate) fn new(value: f64, stage: Metric) -> Self {
        Self { value, stage }
    }

    /// Did the cascade stop before the exact metric?
    pub fn short_circuited(&self) -> bool {
        self.stage != Metric::Levenshtein
    }
}
