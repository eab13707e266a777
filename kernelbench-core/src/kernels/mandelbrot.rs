// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Mandelbrot escape-time iteration.
//!
//! Maps an `n x n` pixel grid onto the window `[-2.0, 1.0] x [-1.5, 1.5]` and
//! sums, over every pixel, the number of iterations of `z = z^2 + c` performed
//! before `|z|^2` exceeds 4 or the iteration cap is hit.

/// Grid edge length used by the suite.
pub const MANDELBROT_SIZE: u32 = 2000;

pub const X_MIN: f64 = -2.0;
pub const X_MAX: f64 = 1.0;
pub const Y_MIN: f64 = -1.5;
pub const Y_MAX: f64 = 1.5;

/// Iteration cap per pixel.
pub const MAX_ITERATIONS: u32 = 1000;

/// Total iteration count over the `n x n` grid, rows outer, columns inner.
pub fn mandelbrot(n: u32) -> u64 {
    let size = f64::from(n);
    let mut total = 0u64;

    for py in 0..n {
        let y0 = Y_MIN + (Y_MAX - Y_MIN) * f64::from(py) / size;
        for px in 0..n {
            let x0 = X_MIN + (X_MAX - X_MIN) * f64::from(px) / size;
            total += u64::from(escape_time(x0, y0));
        }
    }

    total
}

/// Iterations performed for the point `c = x0 + i*y0`.
fn escape_time(x0: f64, y0: f64) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut iter = 0;

    while x * x + y * y <= 4.0 && iter < MAX_ITERATIONS {
        let xtemp = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = xtemp;
        iter += 1;
    }

    iter
}
