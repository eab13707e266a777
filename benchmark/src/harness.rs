// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for running and timing kernels.
//!
//! Each benchmark runs exactly once: no warmup, no repetition. Timing uses
//! `std::time::Instant`, which is monotonic.

use std::fmt;
use std::time::{Duration, Instant};

use kernelbench_core::{Kernel, KernelResult, KernelValue};

use crate::error::{HarnessError, HarnessResult};
use crate::metrics::BenchmarkResult;
use crate::reporter::Reporter;

/// Measure the execution time of a closure.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

type Action = Box<dyn Fn() -> KernelResult<KernelValue>>;

/// A labelled unit of work the runner times.
pub struct Benchmark {
    label: String,
    action: Action,
}

impl Benchmark {
    /// Create a benchmark from an arbitrary action.
    pub fn new<F>(label: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> KernelResult<KernelValue> + 'static,
    {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    /// Benchmark a catalogue kernel on its fixed input.
    pub fn from_kernel(kernel: Kernel) -> Self {
        Self::new(kernel.label(), move || kernel.run())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run once and time it.
    pub fn execute(&self) -> HarnessResult<BenchmarkResult> {
        let (outcome, elapsed) = measure(|| (self.action)());
        let value = outcome.map_err(|source| HarnessError::Kernel {
            label: self.label.clone(),
            source,
        })?;
        Ok(BenchmarkResult::new(self.label.clone(), elapsed, value))
    }
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Benchmark")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Runs benchmarks one after another in insertion order.
#[derive(Debug, Default)]
pub struct BenchmarkRunner {
    benchmarks: Vec<Benchmark>,
}

impl BenchmarkRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed five-kernel suite.
    pub fn standard() -> Self {
        Kernel::ALL
            .into_iter()
            .fold(Self::new(), |runner, kernel| {
                runner.push(Benchmark::from_kernel(kernel))
            })
    }

    /// Append a benchmark.
    pub fn push(mut self, benchmark: Benchmark) -> Self {
        self.benchmarks.push(benchmark);
        self
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.iter().map(Benchmark::label)
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Run every benchmark, handing each result to the reporter as it lands.
    ///
    /// Stops at the first failing benchmark; later benchmarks do not run and
    /// `finish` is not called.
    pub fn run(&self, reporter: &mut dyn Reporter) -> HarnessResult<Vec<BenchmarkResult>> {
        reporter.begin()?;

        let mut results = Vec::with_capacity(self.benchmarks.len());
        for benchmark in &self.benchmarks {
            tracing::debug!(label = %benchmark.label(), "Starting benchmark");

            let result = match benchmark.execute() {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(label = %benchmark.label(), error = %e, "Benchmark failed");
                    return Err(e);
                }
            };

            tracing::info!(
                label = %result.name,
                elapsed_ms = result.elapsed_ms(),
                value = %result.value,
                "Benchmark finished"
            );
            reporter.record(&result)?;
            results.push(result);
        }

        reporter.finish()?;
        Ok(results)
    }
}
