//! Linear mapping of engine output onto a real interval.
//!
//! Each raw word `r` becomes `min + (r / MAX) * (max - min)`, with both
//! operands of the division promoted to `f64` and `MAX` taken from the
//! engine constant rather than a live instance.

use counter_engine::CounterEngine;
use rayon::prelude::*;

use crate::config::UniformConfig;

/// `CounterEngine::MAX` promoted to `f64`.
const ENGINE_MAX_F64: f64 = CounterEngine::MAX as f64;

/// Samples per rayon task in [`UniformSampler::sample_par`].
pub const PAR_CHUNK_SIZE: usize = 1 << 16;

/// Returns the fixed ceiling of the raw engine output.
///
/// Exposed for callers composing their own scaling on top of
/// [`CounterEngine`].
///
/// # Examples
///
/// ```rust
/// use uniform_sampler::engine_max;
///
/// assert_eq!(engine_max(), u32::MAX);
/// ```
#[inline]
pub const fn engine_max() -> u32 {
    CounterEngine::max()
}

/// Maps one raw engine word onto `[min, max]`.
///
/// The result stays inside the closed interval spanned by the two bounds in
/// either orientation: a final-ulp rounding overshoot is pulled back onto the
/// nearer bound. `min == max` yields `min` exactly.
///
/// When `max - min` overflows `f64` (bounds near `±f64::MAX`) the same point
/// is computed as the weighted sum `t * max + (1 - t) * min`, which stays
/// finite.
///
/// # Examples
///
/// ```rust
/// use uniform_sampler::{engine_max, scale_raw};
///
/// assert_eq!(scale_raw(0, 10.0, 20.0), 10.0);
/// assert_eq!(scale_raw(engine_max(), 10.0, 20.0), 20.0);
///
/// // Reversed orientation
/// assert_eq!(scale_raw(0, 1.0, -1.0), 1.0);
/// assert_eq!(scale_raw(engine_max(), 1.0, -1.0), -1.0);
/// ```
#[inline]
pub fn scale_raw(raw: u32, min: f64, max: f64) -> f64 {
    let t = f64::from(raw) / ENGINE_MAX_F64;
    let span = max - min;
    let value = if span.is_finite() || !(min.is_finite() && max.is_finite()) {
        min + t * span
    } else {
        t * max + (1.0 - t) * min
    };
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    // Comparisons leave NaN untouched.
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[inline]
fn fill_from(engine: &mut CounterEngine, min: f64, max: f64, out: &mut [f64]) {
    for value in out.iter_mut() {
        *value = scale_raw(engine.next_u32(), min, max);
    }
}

/// Draws `count` samples from `[min, max]` using a fresh engine seeded with
/// `seed`.
///
/// This is the plain-argument entry point; see [`UniformConfig`] for the
/// defaulted, validated form. Bounds are not checked here, so a NaN or
/// infinite bound propagates into the output under IEEE 754 rules.
///
/// - `count == 0` returns an empty vector.
/// - `min == max` returns `count` copies of `min`.
/// - `min > max` samples the interval in reversed orientation.
///
/// Two calls with identical arguments return bit-identical vectors.
///
/// # Examples
///
/// ```rust
/// use uniform_sampler::sample_uniform;
///
/// assert_eq!(sample_uniform(5, 3.0, 3.0, 42), vec![3.0; 5]);
/// assert!(sample_uniform(0, 0.0, 1.0, 7).is_empty());
///
/// let a = sample_uniform(100, -1.0, 1.0, 9);
/// let b = sample_uniform(100, -1.0, 1.0, 9);
/// assert_eq!(a, b);
/// ```
pub fn sample_uniform(count: u32, min: f64, max: f64, seed: u32) -> Vec<f64> {
    UniformSampler::new(UniformConfig::from_parts(count, min, max, seed)).sample()
}

/// Stateless uniform sampler bound to one request.
///
/// Every call to [`sample`](Self::sample), [`fill`](Self::fill) or
/// [`sample_par`](Self::sample_par) constructs its own [`CounterEngine`], so
/// repeated calls and concurrent calls from different threads never share
/// state.
///
/// # Examples
///
/// ```rust
/// use uniform_sampler::{UniformConfig, UniformSampler};
///
/// let config = UniformConfig::builder()
///     .count(10_000)
///     .interval(10.0, 20.0)
///     .seed(7)
///     .build()
///     .unwrap();
/// let sampler = UniformSampler::new(config);
///
/// let samples = sampler.sample();
/// assert_eq!(samples.len(), 10_000);
/// assert!(samples.iter().all(|&v| (10.0..=20.0).contains(&v)));
///
/// // Parallel fill is bit-identical to the sequential one
/// assert_eq!(sampler.sample_par(), samples);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSampler {
    config: UniformConfig,
}

impl UniformSampler {
    /// Creates a sampler for the given request.
    #[inline]
    pub fn new(config: UniformConfig) -> Self {
        Self { config }
    }

    /// Returns the request this sampler serves.
    #[inline]
    pub fn config(&self) -> &UniformConfig {
        &self.config
    }

    #[inline]
    fn engine(&self) -> CounterEngine {
        CounterEngine::new(self.config.seed())
    }

    fn log_request(&self, mode: &'static str) {
        let config = &self.config;
        tracing::debug!(
            mode,
            count = config.count(),
            min = config.min(),
            max = config.max(),
            seed = config.seed(),
            reversed = config.is_reversed(),
            "Sampling uniform interval"
        );
    }

    /// Returns exactly `count` samples.
    pub fn sample(&self) -> Vec<f64> {
        self.log_request("sequential");
        let mut out = vec![0.0; self.config.count() as usize];
        fill_from(
            &mut self.engine(),
            self.config.min(),
            self.config.max(),
            &mut out,
        );
        out
    }

    /// Fills the buffer with the first `buffer.len()` values of this
    /// request's stream, ignoring `count`.
    ///
    /// Zero-allocation; empty buffers are a no-op.
    pub fn fill(&self, buffer: &mut [f64]) {
        fill_from(
            &mut self.engine(),
            self.config.min(),
            self.config.max(),
            buffer,
        );
    }

    /// Returns exactly `count` samples, generated in parallel.
    ///
    /// The output is split into chunks of [`PAR_CHUNK_SIZE`]; each chunk
    /// builds its own engine and jumps straight to the chunk offset, so the
    /// result is bit-identical to [`sample`](Self::sample).
    pub fn sample_par(&self) -> Vec<f64> {
        self.log_request("parallel");
        let count = self.config.count() as usize;
        let (min, max, seed) = (self.config.min(), self.config.max(), self.config.seed());

        let mut out = vec![0.0; count];
        tracing::debug!(
            chunks = count.div_ceil(PAR_CHUNK_SIZE),
            chunk_size = PAR_CHUNK_SIZE,
            "Partitioning stream"
        );
        out.par_chunks_mut(PAR_CHUNK_SIZE)
            .enumerate()
            .for_each(|(index, chunk)| {
                let mut engine = CounterEngine::new(seed);
                engine.skip((index * PAR_CHUNK_SIZE) as u64);
                fill_from(&mut engine, min, max, chunk);
            });
        out
    }
}
