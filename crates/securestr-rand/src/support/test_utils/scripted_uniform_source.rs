// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::error::EntropyError;
use crate::traits::UniformSource;

/// Uniform source replaying a fixed script of values.
///
/// Every call records the requested bound, so tests can pin both the number
/// of draws and the exact ranges asked for.
///
/// # Panics
///
/// [`UniformSource::random_below`] panics when the script is exhausted or when
/// the scripted value does not lie below the requested bound.
pub struct ScriptedUniformSource {
    script: Vec<u64>,
    position: Cell<usize>,
    bounds: RefCell<Vec<u64>>,
    fail_at: Option<usize>,
}

impl ScriptedUniformSource {
    /// Creates a source that returns `script` in order.
    pub fn new(script: &[u64]) -> Self {
        Self {
            script: script.to_vec(),
            position: Cell::new(0),
            bounds: RefCell::new(Vec::new()),
            fail_at: None,
        }
    }

    /// Makes the Nth call fail (1-indexed) with [`EntropyError::EntropyNotAvailable`].
    pub fn failing_at(mut self, nth_call: usize) -> Self {
        self.fail_at = Some(nth_call);
        self
    }

    /// Returns the number of calls made so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.bounds.borrow().len()
    }

    /// Returns the bounds requested so far, in call order.
    pub fn bounds(&self) -> Vec<u64> {
        self.bounds.borrow().clone()
    }
}

impl UniformSource for ScriptedUniformSource {
    fn random_below(&self, bound: u64) -> Result<u64, EntropyError> {
        self.bounds.borrow_mut().push(bound);

        if self.fail_at == Some(self.call_count()) {
            return Err(EntropyError::EntropyNotAvailable);
        }

        let position = self.position.get();
        assert!(
            position < self.script.len(),
            "script exhausted after {} values",
            self.script.len()
        );
        self.position.set(position + 1);

        let value = self.script[position];
        assert!(
            value < bound,
            "scripted value {} is not below bound {}",
            value,
            bound
        );

        Ok(value)
    }
}
