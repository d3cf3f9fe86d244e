// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three metrics behind one string-facing API, plus the cascades.
//!
//! Every entry point takes `Option<&str>`. Absent input means different things
//! depending on the function:
//!
//! | Function                 | `None` is...                    |
//! |--------------------------|---------------------------------|
//! | `length_*`, `sift_distance` | treated as `""`              |
//! | `sift_similarity`        | `MetricError::MissingInput`     |
//! | `levenshtein_*`          | `MetricError::MissingInput`     |
//! | `fast_*`, `cascade_*`, `within` | treated as `""` for every stage |
//!
//! # Cascades
//!
//! The cascades run length → Sift → Levenshtein and stop at the first stage
//! whose value already decides the threshold:
//!
//! ```text
//! distance:   length >= max ─┐   sift >= max ─┐
//!                            ▼                ▼
//!                         return           return      else exact Levenshtein
//! similarity: length <= min ─┐   sift <= min ─┐
//!                            ▼                ▼
//!                         return           return      else exact Levenshtein
//! ```
//!
//! On corpora where most pairs are dissimilar, most calls end at the first or
//! second stage and the O(n·m) table is never allocated.

use tracing::trace;

use crate::contracts::{check_cascade_stage, check_similarity_in_range, Direction};
use crate::error::{require, MetricError};
use crate::length;
use crate::levenshtein::{levenshtein_distance, levenshtein_within};
use crate::sift::SiftMetric;
use crate::types::{Cascade, Metric};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Length-, Sift- and Levenshtein-based metrics sharing one Sift configuration.
///
/// Holds nothing mutable, so a single suite can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricSuite {
    sift: SiftMetric,
}

impl MetricSuite {
    /// Suite with the default Sift lookahead.
    pub const DEFAULT: MetricSuite = MetricSuite::new(SiftMetric::new(
        crate::sift::DEFAULT_MAX_OFFSET,
    ));

    pub const fn new(sift: SiftMetric) -> Self {
        Self { sift }
    }

    pub fn sift(&self) -> &SiftMetric {
        &self.sift
    }

    // =========================================================================
    // LENGTH
    // =========================================================================

    pub fn length_distance(&self, a: Option<&str>, b: Option<&str>) -> usize {
        length::length_distance(char_len(a), char_len(b))
    }

    pub fn length_similarity(&self, a: Option<&str>, b: Option<&str>) -> f64 {
        length::length_similarity(char_len(a), char_len(b))
    }

    // =========================================================================
    // SIFT
    // =========================================================================

    pub fn sift_distance(&self, a: Option<&str>, b: Option<&str>) -> f64 {
        self.sift.str_distance(a.unwrap_or_default(), b.unwrap_or_default())
    }

    pub fn sift_similarity(&self, a: Option<&str>, b: Option<&str>) -> Result<f64, MetricError> {
        let (a, b) = require("sift_similarity", a, b)?;
        let similarity = self.sift.str_similarity(a, b);
        check_similarity_in_range(Metric::Sift, similarity);
        Ok(similarity)
    }

    // =========================================================================
    // LEVENSHTEIN
    // =========================================================================

    pub fn levenshtein_distance(
        &self,
        a: Option<&str>,
        b: Option<&str>,
    ) -> Result<usize, MetricError> {
        let (a, b) = require("levenshtein_distance", a, b)?;
        Ok(levenshtein_distance(&chars(a), &chars(b)))
    }

    pub fn levenshtein_similarity(
        &self,
        a: Option<&str>,
        b: Option<&str>,
    ) -> Result<f64, MetricError> {
        let (a, b) = require("levenshtein_similarity", a, b)?;
        let (a, b) = (chars(a), chars(b));
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return Ok(1.0);
        }
        let d = levenshtein_distance(&a, &b);
        let similarity = 1.0 - d as f64 / max_len as f64;
        check_similarity_in_range(Metric::Levenshtein, similarity);
        Ok(similarity)
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Distance under the chosen metric. Only Levenshtein can fail.
    pub fn distance(
        &self,
        metric: Metric,
        a: Option<&str>,
        b: Option<&str>,
    ) -> Result<f64, MetricError> {
        match metric {
            Metric::Length => Ok(self.length_distance(a, b) as f64),
            Metric::Sift => Ok(self.sift_distance(a, b)),
            Metric::Levenshtein => self.levenshtein_distance(a, b).map(|d| d as f64),
        }
    }

    /// Similarity under the chosen metric. Sift and Levenshtein can fail.
    pub fn similarity(
        &self,
        metric: Metric,
        a: Option<&str>,
        b: Option<&str>,
    ) -> Result<f64, MetricError> {
        match metric {
            Metric::Length => Ok(self.length_similarity(a, b)),
            Metric::Sift => self.sift_similarity(a, b),
            Metric::Levenshtein => self.levenshtein_similarity(a, b),
        }
    }

    // =========================================================================
    // CASCADES
    // =========================================================================

    /// Distance cascade with the deciding stage attached.
    ///
    /// Returns the first value `>= max_distance` from length then Sift, or the
    /// exact Levenshtein distance when both cheaper stages stay below it.
    pub fn cascade_distance(
        &self,
        a: Option<&str>,
        b: Option<&str>,
        max_distance: f64,
    ) -> Cascade {
        let (a, b) = (chars(a.unwrap_or_default()), chars(b.unwrap_or_default()));

        let ld = length::length_distance(a.len(), b.len()) as f64;
        if ld >= max_distance {
            trace!(stage = %Metric::Length, value = ld, max_distance, "cascade rejected");
            check_cascade_stage(Metric::Length, ld, max_distance, Direction::Distance);
            return Cascade::new(ld, Metric::Length);
        }

        let sd = self.sift.distance(&a, &b);
        if sd >= max_distance {
            trace!(stage = %Metric::Sift, value = sd, max_distance, "cascade rejected");
            check_cascade_stage(Metric::Sift, sd, max_distance, Direction::Distance);
            return Cascade::new(sd, Metric::Sift);
        }

        let exact = levenshtein_distance(&a, &b) as f64;
        trace!(stage = %Metric::Levenshtein, value = exact, max_distance, "cascade exact");
        check_cascade_stage(Metric::Levenshtein, exact, max_distance, Direction::Distance);
        Cascade::new(exact, Metric::Levenshtein)
    }

    /// Similarity cascade with the deciding stage attached.
    ///
    /// Returns the first value `<= min_similarity` from length then Sift, or the
    /// exact Levenshtein similarity when both cheaper stages stay above it.
    pub fn cascade_similarity(
        &self,
        a: Option<&str>,
        b: Option<&str>,
        min_similarity: f64,
    ) -> Cascade {
        let (a, b) = (chars(a.unwrap_or_default()), chars(b.unwrap_or_default()));

        let ls = length::length_similarity(a.len(), b.len());
        if ls <= min_similarity {
            trace!(stage = %Metric::Length, value = ls, min_similarity, "cascade rejected");
            check_cascade_stage(Metric::Length, ls, min_similarity, Direction::Similarity);
            return Cascade::new(ls, Metric::Length);
        }

        let ss = self.sift.similarity(&a, &b);
        if ss <= min_similarity {
            trace!(stage = %Metric::Sift, value = ss, min_similarity, "cascade rejected");
            check_cascade_stage(Metric::Sift, ss, min_similarity, Direction::Similarity);
            return Cascade::new(ss, Metric::Sift);
        }

        let max_len = a.len().max(b.len());
        let exact = if max_len == 0 {
            1.0
        } else {
            1.0 - levenshtein_distance(&a, &b) as f64 / max_len as f64
        };
        trace!(stage = %Metric::Levenshtein, value = exact, min_similarity, "cascade exact");
        check_cascade_stage(Metric::Levenshtein, exact, min_similarity, Direction::Similarity);
        Cascade::new(exact, Metric::Levenshtein)
    }

    /// Are `a` and `b` at most `max_edits` edits apart? `None` counts as empty.
    ///
    /// The yes/no form of the distance cascade. Sift is skipped: it can
    /// overestimate, so it never proves a pair too far apart. Length is a true
    /// lower bound and settles the question before any DP runs.
    pub fn within(&self, a: Option<&str>, b: Option<&str>, max_edits: usize) -> bool {
        let (a, b) = (chars(a.unwrap_or_default()), chars(b.unwrap_or_default()));

        let ld = length::length_distance(a.len(), b.len());
        if ld > max_edits {
            trace!(stage = %Metric::Length, value = ld, max_edits, "within rejected");
            return false;
        }

        let within = levenshtein_within(&a, &b, max_edits);
        trace!(stage = %Metric::Levenshtein, within, max_edits, "within decided");
        within
    }

    /// Cheapest-first distance: see [`cascade_distance`](Self::cascade_distance).
    pub fn fast_distance(&self, a: Option<&str>, b: Option<&str>, max_distance: f64) -> f64 {
        self.cascade_distance(a, b, max_distance).value
    }

    /// Cheapest-first similarity: see [`cascade_similarity`](Self::cascade_similarity).
    pub fn fast_similarity(&self, a: Option<&str>, b: Option<&str>, min_similarity: f64) -> f64 {
        self.cascade_similarity(a, b, min_similarity).value
    }
}

fn char_len(s: Option<&str>) -> usize {
    s.map_or(0, |s| s.chars().count())
}
