// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width base-`b` digit expansion.

use core::iter::FusedIterator;

/// Base-`base` digits of one value, least-significant first.
///
/// Yields exactly the requested width; positions above the highest non-zero
/// digit are zero.
#[derive(Debug, Clone)]
pub struct Digits {
    value: u64,
    base: u64,
    remaining: usize,
}

/// Expands `value` into `width` base-`base` digits, least-significant first.
///
/// # Panics
///
/// - If `base < 2`.
/// - If `value` does not fit in `width` digits (`value >= base^width`). Callers
///   draw below `base^width`, so this only fires on a planning bug.
///
/// # Example
///
/// ```rust
/// use securestr::expand;
///
/// let digits: Vec<u64> = expand(5, 2, 4).collect();
/// assert_eq!(digits, [1, 0, 1, 0]);
/// ```
pub fn expand(value: u64, base: u64, width: usize) -> Digits {
    assert!(base >= 2, "digit base must be at least 2, got {}", base);

    // A capacity beyond u64 holds every value.
    let fits = u32::try_from(width)
        .ok()
        .and_then(|width| base.checked_pow(width))
        .is_none_or(|capacity| value < capacity);

    assert!(
        fits,
        "value {} does not fit in {} base-{} digits",
        value,
        width,
        base
    );

    Digits {
        value,
        base,
        remaining: width,
    }
}

impl Iterator for Digits {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let digit = self.value % self.base;
        self.value /= self.base;
        self.remaining -= 1;

        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Digits {}

impl FusedIterator for Digits {}
