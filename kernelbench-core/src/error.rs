// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for the kernels.
//!
//! Errors are explicit enum variants. Resource exhaustion is reported as a
//! value instead of aborting the process so the harness can stop the run and
//! exit with a failure status.

use thiserror::Error;

/// Errors raised by a kernel invocation.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A working buffer could not be allocated.
    #[error("{kernel}: failed to allocate {bytes} bytes")]
    Allocation { kernel: &'static str, bytes: usize },

    /// The input has no defined result for this kernel.
    #[error("{kernel}: invalid input - {reason}")]
    InvalidInput { kernel: &'static str, reason: String },
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;

/// Allocate a vector of `len` copies of `value`, surfacing allocation failure
/// as [`KernelError::Allocation`].
pub(crate) fn try_filled_vec<T: Clone>(
    kernel: &'static str,
    len: usize,
    value: T,
) -> KernelResult<Vec<T>> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| KernelError::Allocation { kernel, bytes })?;
    buf.resize(len, value);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_error_display() {
        let err = KernelError::Allocation {
            kernel: "prime_sieve",
            bytes: 10_000_001,
        };
        assert!(err.to_string().contains("prime_sieve"));
        assert!(err.to_string().contains("10000001"));
    }

    #[test]
    fn test_try_filled_vec() {
        let buf = try_filled_vec("test", 16, 1.5f64).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.iter().all(|&v| v == 1.5));
    }

    #[test]
    fn test_try_filled_vec_reports_exhaustion() {
        let err = try_filled_vec("test", usize::MAX, 0u64).unwrap_err();
        assert!(matches!(err, KernelError::Allocation { kernel: "test", .. }));
    }
}
