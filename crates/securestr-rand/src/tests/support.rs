// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, ScriptedUniformSource,
};
use crate::traits::{EntropySource, UniformSource};

#[test]
fn test_mock_entropy_source_fails_at_nth_call() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut bytes = [0u8; 8];

    assert!(entropy.fill_bytes(&mut bytes).is_ok());
    assert_eq!(
        entropy.fill_bytes(&mut bytes),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert!(entropy.fill_bytes(&mut bytes).is_ok());
    assert_eq!(entropy.call_count(), 3);
    assert_eq!(entropy.bytes_requested(), 24);

    entropy.reset_count();
    assert_eq!(entropy.call_count(), 0);
    assert_eq!(entropy.bytes_requested(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut bytes = [0u8; 4];

    assert!(entropy.fill_bytes(&mut bytes).is_err());

    entropy.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(entropy.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_scripted_uniform_source_replays_and_records() {
    let source = ScriptedUniformSource::new(&[3, 0, 41]);

    assert_eq!(source.random_below(4), Ok(3));
    assert_eq!(source.random_below(1), Ok(0));
    assert_eq!(source.random_below(62), Ok(41));
    assert_eq!(source.call_count(), 3);
    assert_eq!(source.bounds(), vec![4, 1, 62]);
}

#[test]
fn test_scripted_uniform_source_failing_at() {
    let source = ScriptedUniformSource::new(&[1, 2]).failing_at(2);

    assert_eq!(source.random_below(10), Ok(1));
    assert_eq!(
        source.random_below(10),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert_eq!(source.random_below(10), Ok(2));
    assert_eq!(source.call_count(), 3);
}

#[test]
#[should_panic(expected = "script exhausted")]
fn test_scripted_uniform_source_exhausted_panics() {
    let source = ScriptedUniformSource::new(&[]);
    let _ = source.random_below(10);
}

#[test]
#[should_panic(expected = "is not below bound")]
fn test_scripted_uniform_source_out_of_bound_panics() {
    let source = ScriptedUniformSource::new(&[10]);
    let _ = source.random_below(10);
}
