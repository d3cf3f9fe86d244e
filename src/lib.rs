// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered string distance: length, Sift and Levenshtein.
//!
//! Exact edit distance costs O(n·m) per pair. Most pairs in a deduplication or
//! spell-correction pass are nowhere near each other, and a cheap bound can
//! prove it. This crate provides three metrics of increasing cost and accuracy,
//! and two cascades that try them cheapest first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌────────────────┐
//! │  length.rs  │   │   sift.rs    │   │ levenshtein.rs │
//! │ (abs diff,  │   │ (SiftMetric, │   │ (dense DP,     │
//! │  ratio)     │   │  lookahead)  │   │  bounded check)│
//! └─────────────┘   └──────────────┘   └────────────────┘
//!        │                 │                    │
//!        ▼                 ▼                    ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                      suite.rs                         │
//! │  (MetricSuite: Option<&str> API, cascade_distance,    │
//! │   cascade_similarity, fast_distance, fast_similarity) │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The free functions at the crate root use [`MetricSuite::DEFAULT`], which
//! carries a Sift lookahead of 5. Build your own suite (directly or through
//! [`SuiteConfig`]) for anything else.
//!
//! # Usage
//!
//! ```
//! use siftmetric::{fast_distance, levenshtein_distance, Metric, MetricSuite};
//!
//! assert_eq!(levenshtein_distance(Some("kitten"), Some("sitting")), Ok(3));
//!
//! // Length alone proves these are at least 5 apart; no table is built.
//! let cascade = MetricSuite::DEFAULT.cascade_distance(Some("a"), Some("abcdef"), 3.0);
//! assert_eq!(cascade.stage, Metric::Length);
//! assert_eq!(fast_distance(Some("a"), Some("abcdef"), 3.0), 5.0);
//! ```

pub mod config;
pub mod contracts;
mod error;
mod length;
mod levenshtein;
mod sift;
mod suite;
pub mod testing;
mod types;

pub use config::{SiftConfig, SuiteConfig};
pub use error::{ConfigError, MetricError};
pub use levenshtein::str_levenshtein_distance;
pub use sift::{SiftMetric, DEFAULT_MAX_OFFSET};
pub use suite::MetricSuite;
pub use types::{Cascade, Metric};

/// Generic slice-level algorithms, for sequences that are not strings.
pub mod seq {
    pub use crate::length::{length_distance, length_similarity};
    pub use crate::levenshtein::{levenshtein_distance, levenshtein_within};
}

/// Absolute difference of char counts; `None` counts as empty.
pub fn length_distance(a: Option<&str>, b: Option<&str>) -> usize {
    MetricSuite::DEFAULT.length_distance(a, b)
}

/// Shorter length over longer length; `None` counts as empty.
pub fn length_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    MetricSuite::DEFAULT.length_similarity(a, b)
}

/// Approximate edit distance with the default lookahead; `None` counts as empty.
pub fn sift_distance(a: Option<&str>, b: Option<&str>) -> f64 {
    MetricSuite::DEFAULT.sift_distance(a, b)
}

/// Sift similarity with the default lookahead. Both sequences are required.
pub fn sift_similarity(a: Option<&str>, b: Option<&str>) -> Result<f64, MetricError> {
    MetricSuite::DEFAULT.sift_similarity(a, b)
}

/// Exact edit distance. Both sequences are required.
pub fn levenshtein_distance(a: Option<&str>, b: Option<&str>) -> Result<usize, MetricError> {
    MetricSuite::DEFAULT.levenshtein_distance(a, b)
}

/// `1 - d / max(len a, len b)`, or 1 for two empty sequences. Both are required.
pub fn levenshtein_similarity(a: Option<&str>, b: Option<&str>) -> Result<f64, MetricError> {
    MetricSuite::DEFAULT.levenshtein_similarity(a, b)
}

/// Length, then Sift, then Levenshtein; stops at the first value `>= max_distance`.
pub fn fast_distance(a: Option<&str>, b: Option<&str>, max_distance: f64) -> f64 {
    MetricSuite::DEFAULT.fast_distance(a, b, max_distance)
}

/// Length, then Sift, then Levenshtein; stops at the first value `<= min_similarity`.
pub fn fast_similarity(a: Option<&str>, b: Option<&str>, min_similarity: f64) -> f64 {
    MetricSuite::DEFAULT.fast_similarity(a, b, min_similarity)
}

/// Is the edit distance at most `max_edits`? `None` counts as empty.
pub fn within(a: Option<&str>, b: Option<&str>, max_edits: usize) -> bool {
    MetricSuite::DEFAULT.within(a, b, max_edits)
}
