// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sift: edit distance without the table.
//!
//! One forward scan with a shared cursor `c`. While characters line up at
//! `a[c + offset1]` and `b[c + offset2]` we count them as common. On a mismatch
//! we look up to `max_offset - 1` positions ahead on each side for a character
//! that resynchronizes the two sequences, and carry that shift as an offset.
//!
//! The result is `(len(a) + len(b)) / 2 - lcs`. It tracks Levenshtein closely on
//! typos and small shifts, and can drift on adversarial inputs full of repeated
//! near-miss alignments. That drift is the price of O(k·max(n, m)) instead of
//! O(n·m). It is not a metric: no triangle inequality.
//!
//! # Fast resync
//!
//! [`SiftMetric::with_fast_resync`] enables an alternate cursor rule: on a
//! mismatch the cursor first jumps ahead by the mean of the two offsets. Fewer
//! iterations, less reliable. Off by default.

use crate::config::SiftConfig;
use crate::contracts::check_sift_lcs_bounded;

/// Lookahead used when nothing else is configured.
pub const DEFAULT_MAX_OFFSET: usize = 5;

/// Approximate edit distance with bounded lookahead.
///
/// Immutable after construction, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiftMetric {
    max_offset: usize,
    fast_resync: bool,
}

impl Default for SiftMetric {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OFFSET)
    }
}

impl SiftMetric {
    /// Create a metric that searches up to `max_offset - 1` positions ahead.
    ///
    /// `max_offset` of 0 or 1 disables the lookahead entirely; every mismatch
    /// is then a plain substitution.
    pub const fn new(max_offset: usize) -> Self {
        Self {
            max_offset,
            fast_resync: false,
        }
    }

    /// Toggle the faster, less reliable cursor-advance rule.
    pub const fn with_fast_resync(mut self, enabled: bool) -> Self {
        self.fast_resync = enabled;
        self
    }

    pub fn from_config(config: &SiftConfig) -> Self {
        Self::new(config.max_offset).with_fast_resync(config.fast_resync)
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    pub fn fast_resync(&self) -> bool {
        self.fast_resync
    }

    /// Approximate edit distance between `a` and `b`.
    pub fn distance<T: PartialEq>(&self, a: &[T], b: &[T]) -> f64 {
        let (l1, l2) = (a.len(), b.len());
        if l1 == 0 {
            return l2 as f64;
        }
        if l2 == 0 {
            return l1 as f64;
        }

        let mut c = 0;
        let mut offset1 = 0;
        let mut offset2 = 0;
        let mut lcs = 0;

        // Offsets are never negative, so c < l1 and c < l2 inside the loop.
        while c + offset1 < l1 && c + offset2 < l2 {
            if a[c + offset1] == b[c + offset2] {
                lcs += 1;
            } else {
                if self.fast_resync {
                    c += (offset1 + offset2) / 2;
                    c = c.min(l1 - 1).min(l2 - 1);
                }
                offset1 = 0;
                offset2 = 0;
                if a[c] == b[c] {
                    c += 1;
                    continue;
                }
                for i in 1..self.max_offset {
                    if c + i < l1 && a[c + i] == b[c] {
                        offset1 = i;
                        break;
                    }
                    if c + i < l2 && a[c] == b[c + i] {
                        offset2 = i;
                        break;
                    }
                }
            }
            c += 1;
        }

        check_sift_lcs_bounded(lcs, l1, l2);
        // Integer halving before the subtraction, as the classic formulation does.
        ((l1 + l2) / 2 - lcs) as f64
    }

    /// Similarity in [0, 1]: `1 - d / max(len(a), len(b), d)`.
    ///
    /// The distance itself takes part in the normalizer. The heuristic can in
    /// principle report more than either length, and this keeps the ratio from
    /// going negative without clamping.
    pub fn similarity<T: PartialEq>(&self, a: &[T], b: &[T]) -> f64 {
        let d = self.distance(a, b);
        let normalizer = (a.len().max(b.len()) as f64).max(d);
        if normalizer == 0.0 {
            return 1.0;
        }
        1.0 - d / normalizer
    }

    /// [`distance`](Self::distance) over the chars of two strings.
    pub fn str_distance(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance(&a, &b)
    }

    /// [`similarity`](Self::similarity) over the chars of two strings.
    pub fn str_similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.similarity(&a, &b)
    }
}
