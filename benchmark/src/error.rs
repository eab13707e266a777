// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Harness error types.

use kernelbench_core::KernelError;
use thiserror::Error;

use crate::reporter::ReporterError;

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Benchmark '{label}' failed: {source}")]
    Kernel {
        label: String,
        #[source]
        source: KernelError,
    },

    #[error("Report output failed: {0}")]
    Report(#[from] ReporterError),
}

/// Result type alias using HarnessError.
pub type HarnessResult<T> = Result<T, HarnessError>;
