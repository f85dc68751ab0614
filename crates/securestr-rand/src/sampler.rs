// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased bounded integers by rejection sampling.
//!
//! A raw `k`-bit word is reduced with `% bound` only when it lies at or above
//! `2^k mod bound`. The accepted region then holds an exact multiple of `bound`
//! values, so every residue is equally likely.
//!
//! Bounds up to `2^32` consume 4 bytes per attempt, larger bounds 8 bytes.
//! Each attempt is accepted with probability above 1/2.

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::{EntropySource, UniformSource};

const U32_RANGE: u64 = 1 << 32;

/// Uniform integer source backed by an [`EntropySource`].
///
/// # Example
///
/// ```rust
/// use securestr_rand::{RejectionSampler, SystemEntropySource, UniformSource};
///
/// let sampler = RejectionSampler::new(SystemEntropySource {});
/// let index = sampler.random_below(62).expect("Failed to draw");
///
/// assert!(index < 62);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectionSampler<E: EntropySource> {
    entropy: E,
}

impl<E: EntropySource> RejectionSampler<E> {
    /// Creates a sampler drawing raw words from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns the underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    fn next_u32(&self) -> Result<u32, EntropyError> {
        let mut bytes = [0u8; 4];
        self.entropy.fill_bytes(&mut bytes)?;

        Ok(u32::from_le_bytes(bytes))
    }

    fn next_u64(&self) -> Result<u64, EntropyError> {
        let mut bytes = [0u8; 8];
        self.entropy.fill_bytes(&mut bytes)?;

        Ok(u64::from_le_bytes(bytes))
    }

    fn below_u32(&self, bound: u32) -> Result<u64, EntropyError> {
        let threshold = (u32::MAX - bound + 1) % bound;

        loop {
            let r = self.next_u32()?;
            if r >= threshold {
                return Ok((r % bound) as u64);
            }
        }
    }

    fn below_u64(&self, bound: u64) -> Result<u64, EntropyError> {
        let threshold = (u64::MAX - bound + 1) % bound;

        loop {
            let r = self.next_u64()?;
            if r >= threshold {
                return Ok(r % bound);
            }
        }
    }
}

impl<E: EntropySource> UniformSource for RejectionSampler<E> {
    fn random_below(&self, bound: u64) -> Result<u64, EntropyError> {
        match bound {
            0 => Err(EntropyError::EmptyRange),
            1 => Ok(0),
            U32_RANGE => self.next_u32().map(u64::from),
            _ if bound < U32_RANGE => self.below_u32(bound as u32),
            _ => self.below_u64(bound),
        }
    }
}

/// Returns a [`UniformSource`] backed by the OS CSPRNG.
pub fn system_source() -> RejectionSampler<SystemEntropySource> {
    RejectionSampler::new(SystemEntropySource {})
}
