// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use securestr_rand::EntropyError;

/// Errors that can occur when generating a random string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The alphabet holds no symbols.
    #[error("EmptyAlphabet")]
    EmptyAlphabet,

    /// The secure entropy source failed; propagated unchanged.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),
}
