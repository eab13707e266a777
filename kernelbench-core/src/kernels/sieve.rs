// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sieve of Eratosthenes.
//!
//! Counts primes `<= n` over a boolean marking array indexed `0..=n`.
//! Composites are struck starting at `i * i` in steps of `i`.

use crate::error::{try_filled_vec, KernelError, KernelResult};

/// Upper bound sieved by the suite.
pub const SIEVE_LIMIT: usize = 10_000_000;

/// Count the primes in `2..=n`.
pub fn prime_sieve(n: usize) -> KernelResult<usize> {
    if n < 2 {
        return Ok(0);
    }

    let len = n
        .checked_add(1)
        .ok_or_else(|| KernelError::InvalidInput {
            kernel: "prime_sieve",
            reason: "bound does not fit the marking array".to_string(),
        })?;
    let mut is_prime = try_filled_vec("prime_sieve", len, true)?;

    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            let mut j = i * i;
            while j <= n {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    Ok(is_prime[2..].iter().filter(|&&candidate| candidate).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_bounds() {
        assert_eq!(prime_sieve(0).unwrap(), 0);
        assert_eq!(prime_sieve(1).unwrap(), 0);
        assert_eq!(prime_sieve(2).unwrap(), 1);
        assert_eq!(prime_sieve(3).unwrap(), 2);
    }

    #[test]
    fn test_reference_counts() {
        assert_eq!(prime_sieve(10).unwrap(), 4);
        assert_eq!(prime_sieve(100).unwrap(), 25);
        assert_eq!(prime_sieve(1000).unwrap(), 168);
    }

    #[test]
    fn test_perfect_square_bound() {
        // 49 = 7 * 7 must be struck when it is the bound itself.
        assert_eq!(prime_sieve(49).unwrap(), 15);
        assert_eq!(prime_sieve(48).unwrap(), 15);
    }

    #[test]
    fn test_larger_bound() {
        assert_eq!(prime_sieve(1_000_000).unwrap(), 78_498);
    }
}
