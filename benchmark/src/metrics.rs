// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result and report types for benchmark runs.

use std::time::Duration;

use chrono::{DateTime, Utc};
use kernelbench_core::KernelValue;
use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Format a duration as milliseconds with two decimals, e.g. `"12.34"`.
pub fn format_elapsed_ms(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64() * 1_000.0)
}

/// Serializes a `Duration` as fractional milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64() * 1_000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        Duration::try_from_secs_f64(ms / 1_000.0).map_err(|e| {
            serde::de::Error::custom(format!("invalid elapsed_ms {}: {}", ms, e))
        })
    }
}

/// Outcome of one timed kernel invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark label
    pub name: String,
    /// Wall-clock time of the single invocation
    #[serde(rename = "elapsed_ms", with = "duration_ms")]
    pub elapsed: Duration,
    /// Numeric result returned by the kernel
    pub value: KernelValue,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, elapsed: Duration, value: KernelValue) -> Self {
        Self {
            name: name.into(),
            elapsed,
            value,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Complete report of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Harness version
    pub version: String,
    /// Timestamp when the run started
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Results in invocation order
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Create an empty report stamped with the current time and host.
    pub fn new() -> Self {
        Self {
            benchmark_suite: "kernelbench".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}
