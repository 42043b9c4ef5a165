//! Philox4x32-10 keyed bijection.
//!
//! Reference: Salmon, Moraes, Dror & Shaw (2011), "Parallel Random Numbers:
//! As Easy as 1, 2, 3". For a fixed key the block function is a permutation
//! of the 128-bit counter space.

/// Number of 32-bit words produced per counter block.
pub const BLOCK_WORDS: usize = 4;

/// Number of mixing rounds.
pub const ROUNDS: usize = 10;

const MULTIPLIER_0: u32 = 0xD251_1F53;
const MULTIPLIER_1: u32 = 0xCD9E_8D57;

// Weyl sequence increments (golden ratio, sqrt(3) - 1).
const WEYL_0: u32 = 0x9E37_79B9;
const WEYL_1: u32 = 0xBB67_AE85;

/// 128-bit counter block, little-endian word order.
pub type Counter = [u32; BLOCK_WORDS];

/// 64-bit key.
pub type Key = [u32; 2];

#[inline(always)]
fn mulhilo(a: u32, b: u32) -> (u32, u32) {
    let product = u64::from(a) * u64::from(b);
    ((product >> 32) as u32, product as u32)
}

#[inline(always)]
fn round(ctr: Counter, key: Key) -> Counter {
    let (hi0, lo0) = mulhilo(MULTIPLIER_0, ctr[0]);
    let (hi1, lo1) = mulhilo(MULTIPLIER_1, ctr[2]);
    [hi1 ^ ctr[1] ^ key[0], lo1, hi0 ^ ctr[3] ^ key[1], lo0]
}

#[inline(always)]
fn bump(key: Key) -> Key {
    [key[0].wrapping_add(WEYL_0), key[1].wrapping_add(WEYL_1)]
}

/// Applies the full ten-round Philox permutation to one counter block.
#[inline]
pub fn philox4x32_10(ctr: Counter, key: Key) -> Counter {
    let mut ctr = round(ctr, key);
    let mut key = key;
    for _ in 1..ROUNDS {
        key = bump(key);
        ctr = round(ctr, key);
    }
    ctr
}

/// Splits a `u128` block index into little-endian counter words.
#[inline]
pub fn counter_words(block: u128) -> Counter {
    [
        block as u32,
        (block >> 32) as u32,
        (block >> 64) as u32,
        (block >> 96) as u32,
    ]
}
