// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the siftmetric command-line interface.
//!
//! Four one-shot subcommands compare a single pair: `distance` and `similarity`
//! under one chosen metric, `fast-distance` and `fast-similarity` through the
//! cascades, and `within` as a yes/no bounded check. `batch` streams JSON lines
//! through the distance cascade.
//!
//! Sift tuning comes from an optional JSON config file, then the
//! `--max-offset` and `--fast-resync` flags on top.

pub mod display;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siftmetric::{Metric, SuiteConfig};

#[derive(Parser, Debug)]
#[command(
    name = "siftmetric",
    about = "Tiered string distance: length, Sift and Levenshtein",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file (`{"sift": {"maxOffset": 5, "fastResync": false}}`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sift lookahead window, overrides the config file
    #[arg(long, global = true)]
    pub max_offset: Option<usize>,

    /// Use the faster, less reliable Sift cursor rule
    #[arg(long, global = true)]
    pub fast_resync: bool,

    /// Print JSON even when stdout is a terminal
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distance between two strings under one metric
    Distance {
        a: String,
        b: String,

        #[arg(short, long, value_enum, default_value_t = Metric::Levenshtein)]
        metric: Metric,
    },

    /// Similarity in [0, 1] between two strings under one metric
    Similarity {
        a: String,
        b: String,

        #[arg(short, long, value_enum, default_value_t = Metric::Levenshtein)]
        metric: Metric,
    },

    /// Length, then Sift, then Levenshtein, stopping once a value reaches the threshold
    FastDistance {
        a: String,
        b: String,

        /// Values at or above this end the cascade early
        #[arg(long)]
        max_distance: f64,
    },

    /// Length, then Sift, then Levenshtein, stopping once a value drops to the threshold
    FastSimilarity {
        a: String,
        b: String,

        /// Values at or below this end the cascade early
        #[arg(long)]
        min_similarity: f64,
    },

    /// Are the two strings at most N edits apart?
    ///
    /// Length first, then a banded edit-distance check that stops once the
    /// answer is known. Never builds the full table.
    Within {
        a: String,
        b: String,

        #[arg(long)]
        max_edits: usize,
    },

    /// Run the distance cascade over JSON lines of `{"a": ..., "b": ...}`
    ///
    /// Either side may be null; it is compared as the empty string.
    /// Output is one JSON object per input line.
    Batch {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long)]
        max_distance: f64,
    },
}

impl Cli {
    /// Config file first, then flag overrides.
    pub fn suite_config(&self) -> Result<SuiteConfig> {
        let mut config = match &self.config {
            Some(path) => SuiteConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SuiteConfig::default(),
        };
        if let Some(max_offset) = self.max_offset {
            config.sift.max_offset = max_offset;
        }
        if self.fast_resync {
            config.sift.fast_resync = true;
        }
        config.validate()?;
        Ok(config)
    }
}
