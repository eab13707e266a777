// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Kernelbench Core Library
//!
//! The five deterministic compute kernels measured by the kernelbench suite:
//! recursive Fibonacci, a prime sieve, Mandelbrot escape-time iteration,
//! dense matrix multiplication and binary tree allocation.
//!
//! Every kernel is a pure function of its input. The fixed inputs used by the
//! suite live next to each kernel as named constants and are reachable through
//! [`Kernel`].

pub mod error;
pub mod kernels;

// Re-export commonly used types
pub use error::{KernelError, KernelResult};
pub use kernels::binary_trees::{binary_trees, BinaryTreeNode};
pub use kernels::fibonacci::fibonacci;
pub use kernels::mandelbrot::mandelbrot;
pub use kernels::matrix::matrix_multiply;
pub use kernels::sieve::prime_sieve;
pub use kernels::{Kernel, KernelValue};
