//! Statistical checks on raw engine streams.
//!
//! These tests verify that nearby keys do not produce related output:
//! 1. **Adjacent seeds**: few words coincide position by position
//! 2. **Bit balance**: each output bit is set about half the time
//! 3. **Cross-key bit agreement**: XOR of adjacent-seed words is balanced
//!
//! Correlation of the scaled streams is covered by the sampler crate.

use counter_engine::CounterEngine;

const N: usize = 200_000;

/// Binomial(N, 0.5) has sd ~ 224 at N = 200_000; allow 6 sd.
const BALANCE_TOLERANCE: f64 = 1_350.0;

fn bit_counts(words: impl Iterator<Item = u32>) -> [usize; 32] {
    let mut counts = [0usize; 32];
    for word in words {
        for (bit, count) in counts.iter_mut().enumerate() {
            *count += ((word >> bit) & 1) as usize;
        }
    }
    counts
}

fn assert_balanced(counts: &[usize; 32], label: &str) {
    let expected = N as f64 / 2.0;
    for (bit, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs();
        assert!(
            deviation < BALANCE_TOLERANCE,
            "{}: bit {} set {} times",
            label,
            bit,
            count
        );
    }
}

#[test]
fn test_adjacent_seeds_rarely_coincide() {
    for seed in [0u32, 1, 1_000, u32::MAX - 1] {
        let mut a = CounterEngine::new(seed);
        let mut b = CounterEngine::new(seed.wrapping_add(1));
        let equal = (0..N).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(equal < 3, "seeds {} and {} share {} words", seed, seed.wrapping_add(1), equal);
    }
}

#[test]
fn test_bit_balance() {
    let mut engine = CounterEngine::new(3);
    let counts = bit_counts((0..N).map(|_| engine.next_u32()));
    assert_balanced(&counts, "seed 3");
}

#[test]
fn test_adjacent_seed_xor_is_balanced() {
    let mut a = CounterEngine::new(41);
    let mut b = CounterEngine::new(42);
    let counts = bit_counts((0..N).map(|_| a.next_u32() ^ b.next_u32()));
    assert_balanced(&counts, "seeds 41 ^ 42");
}

#[test]
fn test_adjacent_stream_xor_is_balanced() {
    let mut a = CounterEngine::with_stream(5, 0);
    let mut b = CounterEngine::with_stream(5, 1);
    let counts = bit_counts((0..N).map(|_| a.next_u32() ^ b.next_u32()));
    assert_balanced(&counts, "streams 0 ^ 1");
}
