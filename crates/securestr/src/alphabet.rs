// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::GenerateError;

/// The 62 alphanumeric symbols: uppercase, lowercase, then digits.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Ordered, non-empty set of output symbols.
///
/// Symbols are addressed by position; index `i` is valid for `0 <= i < len()`.
/// Repeated symbols are kept as given, so a symbol listed twice is drawn
/// twice as often.
///
/// # Example
///
/// ```rust
/// use securestr::{Alphabet, GenerateError};
///
/// let vowels = Alphabet::try_from("aeiou").expect("Failed to build alphabet");
/// assert_eq!(vowels.len(), 5);
///
/// assert_eq!(Alphabet::try_from(""), Err(GenerateError::EmptyAlphabet));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given symbols, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyAlphabet`] if `symbols` yields nothing.
    pub fn new<I>(symbols: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        Ok(Self { symbols })
    }

    /// The [`ALPHANUMERIC`] alphabet.
    pub fn alphanumeric() -> Self {
        Self {
            symbols: ALPHANUMERIC.chars().collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an [`Alphabet`] cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, if any.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// All symbols, in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = GenerateError;

    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        Self::new(symbols.chars())
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = GenerateError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        if symbols.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        Ok(Self { symbols })
    }
}
