// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal and pipeline output for the siftmetric CLI.
//!
//! On a TTY you get one readable line per answer. Anywhere else (or with
//! `--json`) you get one JSON object per answer, so the output pipes straight
//! into `jq`. Respects `NO_COLOR`.

use std::io::{self, Write};

use serde::Serialize;
use siftmetric::{Cascade, Metric};

/// How answers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human { color: bool },
    Json,
}

impl OutputMode {
    pub fn detect(force_json: bool) -> Self {
        if force_json || !atty::is(atty::Stream::Stdout) {
            return OutputMode::Json;
        }
        OutputMode::Human {
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Distance,
    Similarity,
}

/// One computed answer, as printed.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub a: Option<&'a str>,
    pub b: Option<&'a str>,
    pub kind: Kind,
    /// Metric that produced `value`. For cascades, the deciding stage.
    pub metric: Metric,
    pub value: f64,
    /// Set for cascades only: did a cheap stage end it early?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_circuited: Option<bool>,
}

impl<'a> Report<'a> {
    pub fn single(a: &'a str, b: &'a str, kind: Kind, metric: Metric, value: f64) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
            kind,
            metric,
            value,
            short_circuited: None,
        }
    }

    pub fn cascade(a: Option<&'a str>, b: Option<&'a str>, kind: Kind, cascade: Cascade) -> Self {
        Self {
            a,
            b,
            kind,
            metric: cascade.stage,
            value: cascade.value,
            short_circuited: Some(cascade.short_circuited()),
        }
    }
}

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Bounded yes/no answer from `within`.
#[derive(Debug, Serialize)]
pub struct Verdict<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub max_edits: usize,
    pub within: bool,
}

/// Anything `emit` can print: serde for JSON, a one-liner for terminals.
pub trait Render: Serialize {
    fn human(&self, color: bool) -> String;
}

impl Render for Report<'_> {
    fn human(&self, color: bool) -> String {
        format_human(self, color)
    }
}

impl Render for Verdict<'_> {
    fn human(&self, color: bool) -> String {
        let (bold, reset) = if color { (BOLD, RESET) } else { ("", "") };
        let answer = if self.within { "yes" } else { "no" };
        format!(
            "within {}  {:?} ~ {:?}  {}{}{}",
            self.max_edits, self.a, self.b, bold, answer, reset
        )
    }
}

/// Human-readable single line, e.g. `levenshtein distance  "kitten" ~ "sitting"  3`.
pub fn format_human(report: &Report<'_>, color: bool) -> String {
    let (bold, dim, reset) = if color { (BOLD, DIM, RESET) } else { ("", "", "") };
    let kind = match report.kind {
        Kind::Distance => "distance",
        Kind::Similarity => "similarity",
    };
    let mut line = format!(
        "{} {}  {:?} ~ {:?}  {}{}{}",
        report.metric,
        kind,
        report.a.unwrap_or_default(),
        report.b.unwrap_or_default(),
        bold,
        format_value(report.value),
        reset
    );
    if let Some(short) = report.short_circuited {
        let note = if short { "stopped early" } else { "exact" };
        line.push_str(&format!("  {}({}){}", dim, note, reset));
    }
    line
}

/// Integers without a trailing `.0`, everything else to four places.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
    }
}

pub fn emit(out: &mut impl Write, mode: OutputMode, item: &impl Render) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer(&mut *out, item)?;
            writeln!(out)
        }
        OutputMode::Human { color } => writeln!(out, "{}", item.human(color)),
    }
}
