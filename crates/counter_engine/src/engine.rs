//! Counter-based stream engine.
//!
//! This module provides [`CounterEngine`], a seeded stream generator whose
//! output at every position is a pure function of `(seed, stream, position)`.

use rand::{Error, RngCore, SeedableRng};

use crate::philox::{counter_words, philox4x32_10, Counter, Key, BLOCK_WORDS};

/// Counter-based pseudo-random `u32` stream.
///
/// The engine holds a 128-bit block counter and a 64-bit key built from the
/// seed and stream identifiers. Each block of four output words is the
/// Philox4x32-10 permutation of the counter under that key, so there is no
/// feedback recurrence: any position can be reached directly.
///
/// # Ownership
///
/// `next_u32` mutates the engine. Share work across threads by giving each
/// thread its own engine (distinct seed, distinct stream, or a disjoint
/// [`skip`](Self::skip) window), never by sharing one instance.
///
/// # Examples
///
/// ```rust
/// use counter_engine::CounterEngine;
///
/// let mut a = CounterEngine::new(42);
/// let mut b = CounterEngine::new(42);
///
/// // Same seed, same stream
/// for _ in 0..16 {
///     assert_eq!(a.next_u32(), b.next_u32());
/// }
///
/// // The ceiling is known without generating anything
/// assert_eq!(CounterEngine::max(), u32::MAX);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterEngine {
    /// Seed (key word 0).
    seed: u32,
    /// Stream identifier (key word 1).
    stream: u32,
    /// Index of the block currently held in `block`.
    counter: u128,
    /// `philox4x32_10(counter, key)`.
    block: Counter,
    /// Next word of `block` to hand out, always below `BLOCK_WORDS`.
    lane: usize,
}

impl CounterEngine {
    /// Largest value returned by [`next_u32`](Self::next_u32).
    pub const MAX: u32 = u32::MAX;

    /// Creates an engine on stream `0` for the given seed.
    ///
    /// Every `u32` is a valid seed; construction cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use counter_engine::CounterEngine;
    ///
    /// let engine = CounterEngine::new(7);
    /// assert_eq!(engine.seed(), 7);
    /// assert_eq!(engine.stream(), 0);
    /// assert_eq!(engine.position(), 0);
    /// ```
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Creates an engine on an explicit stream for the given seed.
    ///
    /// Streams of the same seed are independent key spaces, which suits
    /// partitioning one seeded experiment across workers.
    pub fn with_stream(seed: u32, stream: u32) -> Self {
        let key = [seed, stream];
        Self {
            seed,
            stream,
            counter: 0,
            block: philox4x32_10(counter_words(0), key),
            lane: 0,
        }
    }

    /// Returns the constant upper bound of the output range.
    ///
    /// Takes no receiver, so it can never observe or alter engine state.
    #[inline]
    pub const fn max() -> u32 {
        Self::MAX
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the stream identifier.
    #[inline]
    pub fn stream(&self) -> u32 {
        self.stream
    }

    #[inline]
    fn key(&self) -> Key {
        [self.seed, self.stream]
    }

    #[inline]
    fn load_block(&mut self) {
        self.block = philox4x32_10(counter_words(self.counter), self.key());
    }

    /// Returns the next raw value in `[0, MAX]` and advances the stream.
    ///
    /// The block counter wraps modulo 2^128 rather than failing.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let value = self.block[self.lane];
        self.lane += 1;
        if self.lane == BLOCK_WORDS {
            self.counter = self.counter.wrapping_add(1);
            self.load_block();
            self.lane = 0;
        }
        value
    }

    /// Fills the buffer with consecutive raw values.
    ///
    /// Equivalent to calling [`next_u32`](Self::next_u32) once per element.
    /// Empty buffers are a no-op.
    pub fn fill_u32(&mut self, buffer: &mut [u32]) {
        for value in buffer.iter_mut() {
            *value = self.next_u32();
        }
    }

    /// Number of words consumed so far, modulo 2^128.
    #[inline]
    pub fn position(&self) -> u128 {
        self.counter
            .wrapping_mul(BLOCK_WORDS as u128)
            .wrapping_add(self.lane as u128)
    }

    /// Jumps ahead `n` words in constant time.
    ///
    /// The resulting state is the one reached by calling
    /// [`next_u32`](Self::next_u32) `n` times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use counter_engine::CounterEngine;
    ///
    /// let mut stepped = CounterEngine::new(3);
    /// for _ in 0..1_001 {
    ///     stepped.next_u32();
    /// }
    ///
    /// let mut jumped = CounterEngine::new(3);
    /// jumped.skip(1_001);
    ///
    /// assert_eq!(stepped.next_u32(), jumped.next_u32());
    /// ```
    pub fn skip(&mut self, n: u64) {
        if n == 0 {
            return;
        }
        let total = self.lane as u128 + u128::from(n);
        let blocks = total / BLOCK_WORDS as u128;
        self.lane = (total % BLOCK_WORDS as u128) as usize;
        if blocks > 0 {
            self.counter = self.counter.wrapping_add(blocks);
            self.load_block();
        }
    }

    /// Positions the engine at the first word of `block`.
    ///
    /// Unlike [`skip`](Self::skip) this addresses the whole 2^128 block
    /// space, including the wrap point.
    pub fn seek_block(&mut self, block: u128) {
        self.counter = block;
        self.lane = 0;
        self.load_block();
    }
}

impl RngCore for CounterEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        CounterEngine::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(CounterEngine::next_u32(self));
        let hi = u64::from(CounterEngine::next_u32(self));
        lo | (hi << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = CounterEngine::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CounterEngine {
    /// Bytes `0..4` are the seed and bytes `4..8` the stream, little-endian.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let [s0, s1, s2, s3, t0, t1, t2, t3] = seed;
        Self::with_stream(
            u32::from_le_bytes([s0, s1, s2, s3]),
            u32::from_le_bytes([t0, t1, t2, t3]),
        )
    }

    /// Low half selects the seed, high half the stream.
    fn seed_from_u64(state: u64) -> Self {
        Self::with_stream(state as u32, (state >> 32) as u32)
    }
}
