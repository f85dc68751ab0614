// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for cryptographic operations
/// (tokens, passwords, identifiers). Typically backed by OS-level CSPRNGs.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the system entropy source
    /// is unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Trait for sources of uniformly distributed integers below a bound.
pub trait UniformSource {
    /// Returns an integer drawn uniformly from `[0, bound)`.
    ///
    /// # Errors
    ///
    /// - [`EntropyError::EmptyRange`] if `bound` is zero.
    /// - [`EntropyError::EntropyNotAvailable`] if the underlying generator fails.
    fn random_below(&self, bound: u64) -> Result<u64, EntropyError>;
}

impl<T: UniformSource + ?Sized> UniformSource for &T {
    fn random_below(&self, bound: u64) -> Result<u64, EntropyError> {
        (**self).random_below(bound)
    }
}
