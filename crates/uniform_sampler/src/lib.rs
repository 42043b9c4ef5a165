//! # Uniform Sampler (Sampler Layer)
//!
//! Maps raw [`CounterEngine`] output onto a caller-specified real interval.
//!
//! ```text
//! value[i] = min + (raw[i] / CounterEngine::MAX) * (max - min)
//! ```
//!
//! `raw` is the stream of a fresh engine seeded per request, so sampling is
//! a pure function of `(count, min, max, seed)`.
//!
//! ## Interval Semantics
//!
//! - `min == max`: every sample equals `min`
//! - `min > max`: reversed orientation; the same formula applies and bounds are never swapped
//! - `count == 0`: empty output
//!
//! ## Module Structure
//!
//! - [`config`]: [`UniformConfig`] request with defaults and validating builder
//! - [`error`]: [`SamplerError`]
//! - [`sample_uniform`], [`engine_max`], [`scale_raw`]: plain-argument surface
//! - [`UniformSampler`]: sequential, buffer and parallel sampling for one request
//!
//! ## Usage Example
//!
//! ```rust
//! use uniform_sampler::{sample_uniform, UniformConfig, UniformSampler};
//!
//! // Plain arguments
//! let values = sample_uniform(1_000, 10.0, 20.0, 42);
//! assert!(values.iter().all(|&v| (10.0..=20.0).contains(&v)));
//!
//! // Configuration object with defaults [0, 1], seed 1
//! let sampler = UniformSampler::new(UniformConfig::new(1_000));
//! assert_eq!(sampler.sample(), sample_uniform(1_000, 0.0, 1.0, 1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
mod sampler;

pub use config::{UniformConfig, UniformConfigBuilder};
pub use counter_engine::CounterEngine;
pub use error::SamplerError;
pub use sampler::{engine_max, sample_uniform, scale_raw, UniformSampler, PAR_CHUNK_SIZE};
