// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration for a [`MetricSuite`].
//!
//! JSON, camelCase keys, every field optional:
//!
//! ```json
//! { "sift": { "maxOffset": 7, "fastResync": false } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sift::{SiftMetric, DEFAULT_MAX_OFFSET};
use crate::suite::MetricSuite;

/// Tuning for the Sift metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiftConfig {
    /// Lookahead window after a mismatch.
    pub max_offset: usize,
    /// Jump the cursor by the mean offset on a mismatch. Faster, less reliable.
    pub fast_resync: bool,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            max_offset: DEFAULT_MAX_OFFSET,
            fast_resync: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuiteConfig {
    pub sift: SiftConfig,
}

impl SuiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sift.max_offset == 0 {
            return Err(ConfigError::InvalidMaxOffset(self.sift.max_offset));
        }
        Ok(())
    }

    /// Validate and turn the configuration into a ready-to-use suite.
    pub fn build(&self) -> Result<MetricSuite, ConfigError> {
        self.validate()?;
        Ok(MetricSuite::new(SiftMetric::from_config(&self.sift)))
    }
}
