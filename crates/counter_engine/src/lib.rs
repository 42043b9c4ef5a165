//! # Counter Engine (Engine Layer)
//!
//! Seedable counter-based pseudo-random stream generator. The output word at
//! position `p` of stream `(seed, stream)` is
//!
//! ```text
//! philox4x32_10(counter = p / 4, key = [seed, stream])[p % 4]
//! ```
//!
//! so every stream is reproducible across runs and platforms, and any
//! position can be reached without replaying the words before it.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: output is a pure function of seed, stream and position
//! - **Independence**: distinct keys select unrelated permutations of the counter space
//! - **Jump-ahead**: [`CounterEngine::skip`] and [`CounterEngine::seek_block`] are O(1)
//! - **No failure modes**: every `u32` is a valid seed; the counter wraps modulo 2^128
//!
//! ## Module Structure
//!
//! - [`philox`]: the Philox4x32-10 keyed bijection
//! - [`CounterEngine`]: buffered stream over the bijection, with `rand` integration
//!
//! ## Usage Example
//!
//! ```rust
//! use counter_engine::CounterEngine;
//! use rand::Rng;
//!
//! let mut engine = CounterEngine::new(1);
//!
//! // Raw words in [0, CounterEngine::MAX]
//! let raw = engine.next_u32();
//! assert!(raw <= CounterEngine::MAX);
//!
//! // Any rand::Rng adaptor works on top of the engine
//! let coin: bool = engine.gen();
//! let _ = coin;
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod engine;
pub mod philox;

pub use engine::CounterEngine;
