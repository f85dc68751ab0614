// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;
use std::collections::VecDeque;

use proptest::prelude::*;

use crate::error::EntropyError;
use crate::sampler::{RejectionSampler, system_source};
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::{EntropySource, UniformSource};

/// Replays fixed little-endian words and records the size of every request.
struct WordSource {
    words: RefCell<VecDeque<u64>>,
    requests: RefCell<Vec<usize>>,
}

impl WordSource {
    fn new(words: &[u64]) -> Self {
        Self {
            words: RefCell::new(words.iter().copied().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<usize> {
        self.requests.borrow().clone()
    }
}

impl EntropySource for WordSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.requests.borrow_mut().push(dest.len());
        let word = self
            .words
            .borrow_mut()
            .pop_front()
            .expect("WordSource ran out of words");
        dest.copy_from_slice(&word.to_le_bytes()[..dest.len()]);

        Ok(())
    }
}

#[test]
fn test_random_below_zero_bound_is_empty_range() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below(0), Err(EntropyError::EmptyRange));
    assert_eq!(sampler.entropy().call_count(), 0);
}

#[test]
fn test_random_below_one_consumes_no_entropy() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below(1), Ok(0));
    assert_eq!(sampler.entropy().call_count(), 0);
}

#[test]
fn test_random_below_small_bound_uses_four_bytes() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let sampler = RejectionSampler::new(entropy);

    let value = sampler.random_below(62).expect("Failed to random_below(62)");

    assert!(value < 62);
    // Rejection is possible but rare; every attempt is 4 bytes wide.
    assert_eq!(
        sampler.entropy().bytes_requested(),
        4 * sampler.entropy().call_count()
    );
}

#[test]
fn test_random_below_full_u32_range_single_draw() {
    let entropy = WordSource::new(&[0xFFFF_FFFF]);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below(1 << 32), Ok(0xFFFF_FFFF));
    assert_eq!(sampler.entropy().requests(), vec![4]);
}

#[test]
fn test_random_below_large_bound_uses_eight_bytes() {
    let entropy = WordSource::new(&[7]);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below((1 << 32) + 1), Ok(7));
    assert_eq!(sampler.entropy().requests(), vec![8]);
}

#[test]
fn test_random_below_rejects_biased_u32_words() {
    // 2^32 mod 3 == 1, so raw 0 is rejected and raw 5 maps to 2.
    let entropy = WordSource::new(&[0, 5]);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below(3), Ok(2));
    assert_eq!(sampler.entropy().requests(), vec![4, 4]);
}

#[test]
fn test_random_below_rejects_biased_u64_words() {
    // 2^64 mod (2^32 + 1) == 1.
    let entropy = WordSource::new(&[0, 0, 12]);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below((1 << 32) + 1), Ok(12));
    assert_eq!(sampler.entropy().requests(), vec![8, 8, 8]);
}

#[test]
fn test_random_below_power_of_two_never_rejects() {
    let entropy = WordSource::new(&[0]);
    let sampler = RejectionSampler::new(entropy);

    assert_eq!(sampler.random_below(16), Ok(0));
    assert_eq!(sampler.entropy().requests(), vec![4]);
}

#[test]
fn test_random_below_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let sampler = RejectionSampler::new(entropy);

    let result = sampler.random_below(62);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(sampler.entropy().call_count(), 1);
}

#[test]
fn test_random_below_through_reference() {
    let sampler = system_source();
    let by_ref: &dyn UniformSource = &sampler;

    assert!(by_ref.random_below(10).expect("Failed to random_below(10)") < 10);
}

#[test]
#[ignore] // Run with: cargo test --release -- --ignored --nocapture
fn test_random_below_uniformity() {
    const BOUND: u64 = 62;
    const SAMPLES: usize = 6_200_000;
    const EXPECTED: f64 = SAMPLES as f64 / BOUND as f64;

    let sampler = system_source();
    let mut counts = [0usize; BOUND as usize];

    for _ in 0..SAMPLES {
        let value = sampler.random_below(BOUND).expect("Failed to draw");
        counts[value as usize] += 1;
    }

    let chi_squared: f64 = counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - EXPECTED;
            diff * diff / EXPECTED
        })
        .sum();

    println!("Chi-squared statistic: {:.2}", chi_squared);

    // Critical value for df=61, p=0.001 is ~100.9
    assert!(
        chi_squared < 110.0,
        "Chi-squared too high: {:.2} (distribution may not be uniform)",
        chi_squared
    );
}

proptest! {
    #[test]
    fn random_below_stays_in_range(bound in 1..=u64::MAX) {
        let sampler = system_source();
        let value = sampler.random_below(bound).expect("Failed to random_below(..)");

        prop_assert!(value < bound);
    }
}
