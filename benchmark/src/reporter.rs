// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Output of benchmark results.
//!
//! [`TextReporter`] prints one line per kernel as soon as it finishes.
//! [`JsonReporter`] collects the run into a [`BenchmarkReport`] and writes
//! it once at the end.

use std::io::Write;

use chrono::Utc;
use thiserror::Error;

use crate::metrics::{format_elapsed_ms, BenchmarkReport, BenchmarkResult};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Sink for the results of a run.
pub trait Reporter {
    /// Called once before the first benchmark.
    fn begin(&mut self) -> Result<(), ReporterError>;

    /// Called after each benchmark completes.
    fn record(&mut self, result: &BenchmarkResult) -> Result<(), ReporterError>;

    /// Called once after the last benchmark completes.
    fn finish(&mut self) -> Result<(), ReporterError>;
}

/// Line-oriented text output.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a single result line: `<label>: <elapsed>ms (result: <value>)`.
    pub fn format_line(result: &BenchmarkResult) -> String {
        format!(
            "{}: {}ms (result: {})",
            result.name,
            format_elapsed_ms(result.elapsed),
            result.value
        )
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn begin(&mut self) -> Result<(), ReporterError> {
        writeln!(self.out, "Starting benchmarks...")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn record(&mut self, result: &BenchmarkResult) -> Result<(), ReporterError> {
        writeln!(self.out, "{}", Self::format_line(result))?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReporterError> {
        writeln!(self.out)?;
        writeln!(self.out, "Done!")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Single-document JSON output.
pub struct JsonReporter<W: Write> {
    out: W,
    report: BenchmarkReport,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: BenchmarkReport::new(),
        }
    }

    pub fn report(&self) -> &BenchmarkReport {
        &self.report
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn begin(&mut self) -> Result<(), ReporterError> {
        self.report.timestamp = Utc::now();
        self.report.results.clear();
        Ok(())
    }

    fn record(&mut self, result: &BenchmarkResult) -> Result<(), ReporterError> {
        self.report.add_result(result.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReporterError> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelbench_core::KernelValue;
    use std::time::Duration;

    fn sample() -> BenchmarkResult {
        BenchmarkResult::new(
            "1. Fibonacci(42)",
            Duration::from_micros(1_234_560),
            KernelValue::Integer(267_914_296),
        )
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            TextReporter::<Vec<u8>>::format_line(&sample()),
            "1. Fibonacci(42): 1234.56ms (result: 267914296)"
        );
    }

    #[test]
    fn test_text_reporter_layout() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.begin().unwrap();
        reporter.record(&sample()).unwrap();
        reporter.finish().unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Starting benchmarks...",
                "",
                "1. Fibonacci(42): 1234.56ms (result: 267914296)",
                "",
                "Done!",
            ]
        );
    }

    #[test]
    fn test_json_reporter_stamps_run_start() {
        let mut reporter = JsonReporter::new(Vec::new());
        let created = reporter.report().timestamp;
        std::thread::sleep(Duration::from_millis(5));

        reporter.begin().unwrap();
        assert!(reporter.report().timestamp > created);
    }

    #[test]
    fn test_json_reporter_writes_on_finish() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.begin().unwrap();
        reporter.record(&sample()).unwrap();
        assert_eq!(reporter.report().results.len(), 1);

        reporter.finish().unwrap();
        let out = reporter.into_inner();
        let loaded: BenchmarkReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(loaded.benchmark_suite, "kernelbench");
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].name, "1. Fibonacci(42)");
        assert_eq!(loaded.results[0].value, KernelValue::Integer(267_914_296));
    }
}
