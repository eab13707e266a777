// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI entry point: run the fixed kernel suite once and print the timings.

use std::io;

use clap::{Parser, ValueEnum};
use kernelbench::{BenchmarkRunner, JsonReporter, Reporter, TextReporter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per kernel
    Text,
    /// A single JSON report after the run
    Json,
}

#[derive(Parser)]
#[command(name = "kernelbench")]
#[command(author, version, about = "Run the fixed five-kernel micro-benchmark suite")]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only results
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let runner = BenchmarkRunner::standard();
    tracing::info!(benchmarks = runner.len(), format = ?args.format, "Starting suite");

    let stdout = io::stdout();
    let mut reporter: Box<dyn Reporter> = match args.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout.lock())),
    };

    runner.run(reporter.as_mut())?;
    Ok(())
}
