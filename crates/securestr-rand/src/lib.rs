// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # securestr_rand
//!
//! Cryptographically secure, unbiased bounded integers for the securestr
//! workspace.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`RejectionSampler`]: Uniform integers in `[0, bound)` on top of any [`EntropySource`]
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs producing raw bytes
//! - [`UniformSource`]: Interface for uniform integers below an arbitrary bound
//!
//! ## Example
//!
//! ```rust
//! use securestr_rand::{system_source, UniformSource};
//!
//! let source = system_source();
//! let roll = source.random_below(6).expect("Failed to draw");
//!
//! assert!(roll < 6);
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod sampler;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use sampler::{RejectionSampler, system_source};
pub use system::SystemEntropySource;
pub use traits::{EntropySource, UniformSource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
