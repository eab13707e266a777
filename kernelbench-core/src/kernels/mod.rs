// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The fixed kernel catalogue.
//!
//! [`Kernel`] enumerates the suite in reporting order and binds each kernel to
//! its label and fixed input.

pub mod binary_trees;
pub mod fibonacci;
pub mod mandelbrot;
pub mod matrix;
pub mod sieve;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KernelResult;

/// Numeric result of a kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KernelValue {
    Integer(u64),
    Float(f64),
}

impl fmt::Display for KernelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelValue::Integer(v) => write!(f, "{}", v),
            KernelValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for KernelValue {
    fn from(value: u64) -> Self {
        KernelValue::Integer(value)
    }
}

impl From<f64> for KernelValue {
    fn from(value: f64) -> Self {
        KernelValue::Float(value)
    }
}

/// One of the five benchmarked kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    Fibonacci,
    PrimeSieve,
    Mandelbrot,
    MatrixMultiply,
    BinaryTrees,
}

impl Kernel {
    /// All kernels in reporting order.
    pub const ALL: [Kernel; 5] = [
        Kernel::Fibonacci,
        Kernel::PrimeSieve,
        Kernel::Mandelbrot,
        Kernel::MatrixMultiply,
        Kernel::BinaryTrees,
    ];

    /// Report label, including the position in the suite and the fixed input.
    pub fn label(self) -> &'static str {
        match self {
            Kernel::Fibonacci => "1. Fibonacci(42)",
            Kernel::PrimeSieve => "2. Prime Sieve (10M)",
            Kernel::Mandelbrot => "3. Mandelbrot (2000x2000)",
            Kernel::MatrixMultiply => "4. Matrix Multiply (500x500)",
            Kernel::BinaryTrees => "5. Binary Trees (depth 18)",
        }
    }

    /// Fixed input size the suite runs this kernel with.
    pub fn input(self) -> u64 {
        match self {
            Kernel::Fibonacci => u64::from(fibonacci::FIBONACCI_INDEX),
            Kernel::PrimeSieve => sieve::SIEVE_LIMIT as u64,
            Kernel::Mandelbrot => u64::from(mandelbrot::MANDELBROT_SIZE),
            Kernel::MatrixMultiply => matrix::MATRIX_SIZE as u64,
            Kernel::BinaryTrees => u64::from(binary_trees::TREE_DEPTH),
        }
    }

    /// Run the kernel on its fixed input.
    pub fn run(self) -> KernelResult<KernelValue> {
        let value: KernelValue = match self {
            Kernel::Fibonacci => fibonacci::fibonacci(fibonacci::FIBONACCI_INDEX)?.into(),
            Kernel::PrimeSieve => (sieve::prime_sieve(sieve::SIEVE_LIMIT)? as u64).into(),
            Kernel::Mandelbrot => mandelbrot::mandelbrot(mandelbrot::MANDELBROT_SIZE).into(),
            Kernel::MatrixMultiply => matrix::matrix_multiply(matrix::MATRIX_SIZE)?.into(),
            Kernel::BinaryTrees => binary_trees::binary_trees(binary_trees::TREE_DEPTH).into(),
        };
        Ok(value)
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kernel::Fibonacci => write!(f, "fibonacci"),
            Kernel::PrimeSieve => write!(f, "prime_sieve"),
            Kernel::Mandelbrot => write!(f, "mandelbrot"),
            Kernel::MatrixMultiply => write!(f, "matrix_multiply"),
            Kernel::BinaryTrees => write!(f, "binary_trees"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<_> = Kernel::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "1. Fibonacci(42)",
                "2. Prime Sieve (10M)",
                "3. Mandelbrot (2000x2000)",
                "4. Matrix Multiply (500x500)",
                "5. Binary Trees (depth 18)",
            ]
        );
    }

    #[test]
    fn test_fixed_inputs() {
        assert_eq!(Kernel::Fibonacci.input(), 42);
        assert_eq!(Kernel::PrimeSieve.input(), 10_000_000);
        assert_eq!(Kernel::Mandelbrot.input(), 2000);
        assert_eq!(Kernel::MatrixMultiply.input(), 500);
        assert_eq!(Kernel::BinaryTrees.input(), 18);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(KernelValue::Integer(267_914_296).to_string(), "267914296");
        assert_eq!(KernelValue::Float(10_291_750.0).to_string(), "10291750");
        assert_eq!(KernelValue::Float(-1.5).to_string(), "-1.5");
    }

    #[test]
    fn test_value_serialization() {
        let json = serde_json::to_string(&KernelValue::Integer(664_579)).unwrap();
        assert_eq!(json, "664579");
        let json = serde_json::to_string(&Kernel::MatrixMultiply).unwrap();
        assert_eq!(json, "\"matrix_multiply\"");
    }

    #[test]
    fn test_prime_sieve_fixed_input() {
        let value = Kernel::PrimeSieve.run().unwrap();
        assert_eq!(value, KernelValue::Integer(664_579));
    }

    #[test]
    fn test_matrix_multiply_fixed_input() {
        let value = Kernel::MatrixMultiply.run().unwrap();
        assert_eq!(value, KernelValue::Float(10_291_750.0));
    }

    #[test]
    #[ignore = "several seconds in debug builds"]
    fn test_fibonacci_fixed_input() {
        let value = Kernel::Fibonacci.run().unwrap();
        assert_eq!(value, KernelValue::Integer(267_914_296));
    }

    #[test]
    #[ignore = "several seconds in debug builds"]
    fn test_mandelbrot_fixed_input() {
        let value = Kernel::Mandelbrot.run().unwrap();
        assert_eq!(
            value,
            KernelValue::Integer(mandelbrot::mandelbrot(mandelbrot::MANDELBROT_SIZE))
        );
    }

    #[test]
    fn test_binary_trees_fixed_input() {
        // Cheapest of the five at full size.
        let value = Kernel::BinaryTrees.run().unwrap();
        assert_eq!(value, KernelValue::Integer((1 << 19) - 1));
    }
}
