// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securestr
//!
//! Uniform random strings over an arbitrary finite alphabet, drawn from a
//! cryptographically secure source with as few draws as possible.
//!
//! Instead of one draw per symbol, several symbols are packed into a single
//! bounded draw: with an alphabet of `s` symbols, one integer below `s^m`
//! carries `m` independent, uniform base-`s` digits. The batch width `m` is
//! the largest for which `s^m` stays within a fixed ceiling (`2^32` by
//! default). No modulo bias is introduced: every draw is exactly uniform over
//! its range.
//!
//! ## Core Types
//!
//! - [`Alphabet`]: Non-empty ordered set of output symbols
//! - [`StringGenerator`]: Generator bound to a [`UniformSource`] and a ceiling
//! - [`BatchPlan`]: Batch width and draw limit for an alphabet size
//! - [`Digits`]: Fixed-width base-`s` expansion of one draw
//!
//! ## Example
//!
//! ```rust
//! use securestr::{Alphabet, generate, generate_alphanumeric_default};
//!
//! let token = generate_alphanumeric_default().expect("Failed to generate token");
//! assert_eq!(token.len(), 16);
//!
//! let hex = Alphabet::try_from("0123456789abcdef").expect("Failed to build alphabet");
//! let id = generate(&hex, 32).expect("Failed to generate id");
//! assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
//! ```
//!
//! ## Testing with scripted entropy
//!
//! ```rust,ignore
//! use securestr::{Alphabet, StringGenerator};
//! use securestr_rand::test_utils::ScriptedUniformSource;
//!
//! let source = ScriptedUniformSource::new(&[5]);
//! let generator = StringGenerator::new(&source);
//! let binary = Alphabet::try_from("01")?;
//!
//! assert_eq!(generator.generate(&binary, 3)?, "101");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod alphabet;
mod error;
mod expander;
mod generator;
mod planner;

pub use alphabet::{ALPHANUMERIC, Alphabet};
pub use error::GenerateError;
pub use expander::{Digits, expand};
pub use generator::{
    DEFAULT_LENGTH, StringGenerator, generate, generate_alphanumeric,
    generate_alphanumeric_default,
};
pub use planner::{BatchPlan, DEFAULT_CEILING, plan};

pub use securestr_rand::{EntropyError, UniformSource};
