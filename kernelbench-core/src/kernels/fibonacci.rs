// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Naive recursive Fibonacci.
//!
//! Exercises a deep, exponential call tree. No memoization.

use crate::error::{KernelError, KernelResult};

/// Index computed by the suite.
pub const FIBONACCI_INDEX: u32 = 42;

/// Largest index whose value fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: u32 = 93;

/// Compute fib(n) with the plain recursive definition.
pub fn fibonacci(n: u32) -> KernelResult<u64> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(KernelError::InvalidInput {
            kernel: "fibonacci",
            reason: format!("fib({}) overflows u64 (max index {})", n, MAX_FIBONACCI_INDEX),
        });
    }
    Ok(fib(u64::from(n)))
}

fn fib(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}
