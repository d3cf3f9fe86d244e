// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Metric computation has exactly one failure mode: a strict entry point was
//! handed an absent sequence. Everything numeric is guarded against zero
//! lengths, so there is nothing else to go wrong. Configuration loading has its
//! own error type because it touches the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// A contract violation by the caller of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A strict metric (Sift similarity, either Levenshtein function) got `None`.
    ///
    /// `position` is 1 for the first argument and 2 for the second.
    #[error("{operation} requires a sequence for argument {position}, got none")]
    MissingInput {
        operation: &'static str,
        position: u8,
    },
}

/// Unwrap both arguments of a strict entry point, or report the first absent one.
pub(crate) fn require<'a>(
    operation: &'static str,
    a: Option<&'a str>,
    b: Option<&'a str>,
) -> Result<(&'a str, &'a str), MetricError> {
    let a = a.ok_or(MetricError::MissingInput {
        operation,
        position: 1,
    })?;
    let b = b.ok_or(MetricError::MissingInput {
        operation,
        position: 2,
    })?;
    Ok((a, b))
}

/// Failure to load or validate a [`crate::SuiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("maxOffset must be at least 1, got {0}")]
    InvalidMaxOffset(usize),
}
