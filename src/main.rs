// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use siftmetric::MetricSuite;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{emit, Kind, OutputMode, Report, Verdict};
use cli::{Cli, Commands};

/// One input line for `batch`. Missing or null fields compare as empty.
#[derive(Deserialize)]
struct BatchPair {
    #[serde(default)]
    a: Option<String>,
    #[serde(default)]
    b: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

/// The whole context chain on one line.
fn error_line(err: &anyhow::Error) -> String {
    format!("❌ {:#}", err)
}

/// Log to stderr, filtered by `SIFTMETRIC_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFTMETRIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.suite_config()?;
    debug!(
        max_offset = config.sift.max_offset,
        fast_resync = config.sift.fast_resync,
        "resolved configuration"
    );
    let suite = config.build()?;
    let mode = OutputMode::detect(cli.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Distance { a, b, metric } => {
            let value = suite.distance(*metric, Some(a.as_str()), Some(b.as_str()))?;
            emit(&mut out, mode, &Report::single(a, b, Kind::Distance, *metric, value))?;
        }
        Commands::Similarity { a, b, metric } => {
            let value = suite.similarity(*metric, Some(a.as_str()), Some(b.as_str()))?;
            emit(&mut out, mode, &Report::single(a, b, Kind::Similarity, *metric, value))?;
        }
        Commands::FastDistance { a, b, max_distance } => {
            let (a, b) = (Some(a.as_str()), Some(b.as_str()));
            let cascade = suite.cascade_distance(a, b, *max_distance);
            emit(&mut out, mode, &Report::cascade(a, b, Kind::Distance, cascade))?;
        }
        Commands::FastSimilarity {
            a,
            b,
            min_similarity,
        } => {
            let (a, b) = (Some(a.as_str()), Some(b.as_str()));
            let cascade = suite.cascade_similarity(a, b, *min_similarity);
            emit(&mut out, mode, &Report::cascade(a, b, Kind::Similarity, cascade))?;
        }
        Commands::Within { a, b, max_edits } => {
            let within = suite.within(Some(a.as_str()), Some(b.as_str()), *max_edits);
            let verdict = Verdict {
                a,
                b,
                max_edits: *max_edits,
                within,
            };
            emit(&mut out, mode, &verdict)?;
        }
        Commands::Batch {
            input,
            max_distance,
        } => {
            let reader: Box<dyn BufRead> = match input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("opening {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };
            let source = input.as_deref().unwrap_or(Path::new("<stdin>"));
            run_batch(&suite, reader, &mut BufWriter::new(out), *max_distance, source)?;
        }
    }
    Ok(())
}

/// Stream pairs through the distance cascade. Batch output is always JSON lines.
fn run_batch(
    suite: &MetricSuite,
    reader: impl BufRead,
    out: &mut impl Write,
    max_distance: f64,
    source: &Path,
) -> Result<()> {
    let mut pairs = 0usize;
    let mut exact = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", source.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let pair: BatchPair = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid pair", source.display(), index + 1))?;

        let (a, b) = (pair.a.as_deref(), pair.b.as_deref());
        let cascade = suite.cascade_distance(a, b, max_distance);
        if !cascade.short_circuited() {
            exact += 1;
        }
        pairs += 1;
        emit(out, OutputMode::Json, &Report::cascade(a, b, Kind::Distance, cascade))?;
    }

    out.flush()?;
    debug!(pairs, exact, short_circuited = pairs - exact, "batch complete");
    Ok(())
}
