// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Kernelbench Harness
//!
//! Runs the fixed kernel suite once, in order, timing each kernel with the
//! monotonic clock and reporting `label: elapsed (result)` per kernel.
//!
//! # Components
//!
//! - **Harness**: [`BenchmarkRunner`] sequences benchmarks and stops at the
//!   first failure
//! - **Metrics**: [`BenchmarkResult`] records and the [`BenchmarkReport`]
//!   envelope with [`SystemInfo`]
//! - **Reporters**: plain text lines or a single JSON document

pub mod error;
pub mod harness;
pub mod metrics;
pub mod reporter;

pub use error::{HarnessError, HarnessResult};
pub use harness::{measure, Benchmark, BenchmarkRunner};
pub use metrics::{BenchmarkReport, BenchmarkResult, SystemInfo};
pub use reporter::{JsonReporter, Reporter, ReporterError, TextReporter};
