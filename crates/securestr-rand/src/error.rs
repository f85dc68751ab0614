// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when drawing random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// No secure generator is available on this host, or it failed to produce data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// A uniform draw was requested below a bound of zero.
    #[error("EmptyRange")]
    EmptyRange,
}
