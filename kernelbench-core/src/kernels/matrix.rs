// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Dense matrix multiplication.
//!
//! Builds `a[i][j] = i + j` and `b[i][j] = i - j`, multiplies them with the
//! textbook triple loop and returns the center element of the product.

use crate::error::{try_filled_vec, KernelError, KernelResult};

/// Matrix dimension used by the suite.
pub const MATRIX_SIZE: usize = 500;

/// Row-major square matrix of `f64`.
struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn zeroed(n: usize) -> KernelResult<Self> {
        let len = n.checked_mul(n).ok_or_else(|| KernelError::InvalidInput {
            kernel: "matrix_multiply",
            reason: format!("dimension {} overflows the element count", n),
        })?;
        Ok(Self {
            n,
            data: try_filled_vec("matrix_multiply", len, 0.0)?,
        })
    }

    fn from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> KernelResult<Self> {
        let mut m = Self::zeroed(n)?;
        for i in 0..n {
            for j in 0..n {
                m.data[i * n + j] = f(i, j);
            }
        }
        Ok(m)
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// `self * rhs`, accumulating each dot product in index order.
    fn multiply(&self, rhs: &Matrix) -> KernelResult<Matrix> {
        let n = self.n;
        let mut out = Matrix::zeroed(n)?;
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += self.get(i, k) * rhs.get(k, j);
                }
                out.data[i * n + j] = sum;
            }
        }
        Ok(out)
    }
}

/// Compute `c = a * b` and return `c[n/2][n/2]`.
pub fn matrix_multiply(n: usize) -> KernelResult<f64> {
    if n == 0 {
        return Err(KernelError::InvalidInput {
            kernel: "matrix_multiply",
            reason: "dimension must be non-zero".to_string(),
        });
    }

    let a = Matrix::from_fn(n, |i, j| (i + j) as f64)?;
    let b = Matrix::from_fn(n, |i, j| i as f64 - j as f64)?;
    let c = a.multiply(&b)?;

    Ok(c.get(n / 2, n / 2))
}
