// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;
use securestr_rand::{RejectionSampler, SystemEntropySource, UniformSource, system_source};

use crate::alphabet::{ALPHANUMERIC, Alphabet};
use crate::error::GenerateError;
use crate::expander::expand;
use crate::planner::{BatchPlan, DEFAULT_CEILING, plan};

/// Length used by [`generate_alphanumeric_default`].
pub const DEFAULT_LENGTH: usize = 16;

/// Random string generator bound to a [`UniformSource`].
///
/// Each call plans a batch width once, then draws one bounded integer per
/// batch of symbols and one more, tighter draw for the remainder. A call
/// either returns the full output or an error; nothing partial is returned.
///
/// # Example
///
/// ```rust
/// use securestr::{Alphabet, StringGenerator};
///
/// let generator = StringGenerator::system();
/// let dice = Alphabet::try_from("123456").expect("Failed to build alphabet");
///
/// let rolls = generator.generate(&dice, 10).expect("Failed to generate");
/// assert_eq!(rolls.chars().count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct StringGenerator<U: UniformSource> {
    source: U,
    ceiling: u64,
}

impl StringGenerator<RejectionSampler<SystemEntropySource>> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn system() -> Self {
        Self::new(system_source())
    }
}

impl<U: UniformSource> StringGenerator<U> {
    /// Creates a generator drawing from `source` with [`DEFAULT_CEILING`].
    pub fn new(source: U) -> Self {
        Self {
            source,
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Sets the largest range requested per draw.
    ///
    /// Any value is accepted. A ceiling below the alphabet size degrades to
    /// one draw per symbol, each below the alphabet size.
    pub fn with_ceiling(mut self, ceiling: u64) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Largest range requested per draw.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Returns the underlying uniform source.
    pub fn source(&self) -> &U {
        &self.source
    }

    /// Generates `length` symbols drawn uniformly from `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Entropy`] if the uniform source fails.
    pub fn generate(&self, alphabet: &Alphabet, length: usize) -> Result<String, GenerateError> {
        let symbols = alphabet.symbols();
        let widest = symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(0);
        let mut output = String::with_capacity(widest.saturating_mul(length));

        self.draw_indices(symbols.len(), length, |index| output.push(symbols[index]))?;

        Ok(output)
    }

    /// Generates `length` symbols drawn uniformly from an arbitrary slice.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptyAlphabet`] if `symbols` is empty.
    /// - [`GenerateError::Entropy`] if the uniform source fails.
    pub fn generate_symbols<T: Clone>(
        &self,
        symbols: &[T],
        length: usize,
    ) -> Result<Vec<T>, GenerateError> {
        let mut output = Vec::with_capacity(length);

        self.draw_indices(symbols.len(), length, |index| output.push(symbols[index].clone()))?;

        Ok(output)
    }

    /// Generates `length` symbols from the [`ALPHANUMERIC`] alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Entropy`] if the uniform source fails.
    pub fn alphanumeric(&self, length: usize) -> Result<String, GenerateError> {
        let symbols = ALPHANUMERIC.as_bytes();
        let mut output = String::with_capacity(length);

        self.draw_indices(symbols.len(), length, |index| {
            output.push(char::from(symbols[index]))
        })?;

        Ok(output)
    }

    /// Emits `length` uniform indices in `[0, alphabet_size)`, in draw order.
    fn draw_indices<F>(
        &self,
        alphabet_size: usize,
        length: usize,
        mut emit: F,
    ) -> Result<(), GenerateError>
    where
        F: FnMut(usize),
    {
        if alphabet_size == 0 {
            return Err(GenerateError::EmptyAlphabet);
        }

        if length == 0 {
            return Ok(());
        }

        // A single symbol carries no entropy.
        if alphabet_size == 1 {
            (0..length).for_each(|_| emit(0));
            return Ok(());
        }

        let plan = plan(alphabet_size as u64, self.ceiling);
        let (batches, remainder) = plan.split(length);

        trace!(
            "generating {} symbols from alphabet of {}: width={} limit={} batches={} remainder={}",
            length,
            alphabet_size,
            plan.width(),
            plan.limit(),
            batches,
            remainder
        );

        for _ in 0..batches {
            self.draw_batch(&plan, plan.width(), &mut emit)?;
        }

        if remainder > 0 {
            self.draw_batch(&plan, remainder, &mut emit)?;
        }

        trace!(
            "generated {} symbols with {} draws",
            length,
            batches + usize::from(remainder > 0)
        );

        Ok(())
    }

    fn draw_batch<F>(
        &self,
        plan: &BatchPlan,
        digits: usize,
        emit: &mut F,
    ) -> Result<(), GenerateError>
    where
        F: FnMut(usize),
    {
        let value = self.source.random_below(plan.limit_for(digits))?;

        for digit in expand(value, plan.base(), digits) {
            emit(digit as usize);
        }

        Ok(())
    }
}

/// Generates `length` symbols from `alphabet` using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GenerateError::Entropy`] if no secure generator is available.
pub fn generate(alphabet: &Alphabet, length: usize) -> Result<String, GenerateError> {
    StringGenerator::system().generate(alphabet, length)
}

/// Generates `length` alphanumeric symbols using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GenerateError::Entropy`] if no secure generator is available.
pub fn generate_alphanumeric(length: usize) -> Result<String, GenerateError> {
    StringGenerator::system().alphanumeric(length)
}

/// Generates [`DEFAULT_LENGTH`] alphanumeric symbols using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`GenerateError::Entropy`] if no secure generator is available.
pub fn generate_alphanumeric_default() -> Result<String, GenerateError> {
    generate_alphanumeric(DEFAULT_LENGTH)
}
