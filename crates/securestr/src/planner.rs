// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Batch planning.
//!
//! Decides how many alphabet symbols a single bounded draw can carry. For an
//! alphabet of `s` symbols and a ceiling `C`, the width `m` is the largest
//! integer with `s^m <= C`, and every full-width draw is taken below
//! `limit = s^m`.

/// Largest range requested from the entropy source per draw, by default.
pub const DEFAULT_CEILING: u64 = 1 << 32;

/// Batch width and draw limit for one alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    base: u64,
    width: usize,
    limit: u64,
}

impl BatchPlan {
    /// Alphabet size the plan was computed for.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of symbols carried by one full draw.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Exclusive upper bound of one full draw, `base^width`.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Splits `length` into the number of full draws and the remainder length.
    pub fn split(&self, length: usize) -> (usize, usize) {
        (length / self.width, length % self.width)
    }

    /// Exclusive upper bound of a draw carrying `digits` symbols, `base^digits`.
    ///
    /// # Panics
    ///
    /// Panics if `digits` exceeds the batch width.
    pub fn limit_for(&self, digits: usize) -> u64 {
        assert!(
            digits <= self.width,
            "{} digits exceed the batch width {}",
            digits,
            self.width
        );

        if digits == self.width {
            return self.limit;
        }

        // digits < width <= 64, and base^digits < limit, so this cannot overflow.
        self.base.pow(digits as u32)
    }
}

/// Computes the batch plan for `alphabet_size` symbols under `ceiling`.
///
/// Starting from one symbol per draw, the width grows while one more symbol
/// still keeps `alphabet_size^width` within `ceiling`. When the alphabet
/// alone exceeds the ceiling the plan is a single symbol per draw with
/// `limit = alphabet_size`.
///
/// Alphabets of zero or one symbol never grow (their powers never increase):
/// the plan is `width = 1`, `limit = alphabet_size`.
///
/// # Example
///
/// ```rust
/// use securestr::{DEFAULT_CEILING, plan};
///
/// let plan = plan(62, DEFAULT_CEILING);
///
/// assert_eq!(plan.width(), 5);
/// assert_eq!(plan.limit(), 916_132_832);
/// ```
pub fn plan(alphabet_size: u64, ceiling: u64) -> BatchPlan {
    let mut width = 1;
    let mut limit = alphabet_size;

    if alphabet_size > 1 {
        while let Some(next) = limit.checked_mul(alphabet_size) {
            if next > ceiling {
                break;
            }

            limit = next;
            width += 1;
        }
    }

    BatchPlan {
        base: alphabet_size,
        width,
        limit,
    }
}
