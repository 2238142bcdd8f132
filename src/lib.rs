//! # xorshift-mwc
//!
//! **Marsaglia's xorshift multiply-with-carry generator with three interchangeable access patterns.**
//!
//! The generator follows the lag-3 recurrence
//! `x[n] = (a * x[n-3] + c) mod 2^32`, where the carry `c` is the high half
//! of the same 64-bit product. Each 32-bit output is scaled by `1 / 2^32`
//! into a uniform `f64` in `[0, 1)`.
//!
//! ## Access patterns
//!
//! - **Stepping**: [`Xorshift`] advances one step per call; [`SyncXorshift`]
//!   adds a lock for shared use
//! - **Bulk**: [`generate_samples`] fills a new vector from fresh state
//! - **Lazy**: [`sample_sequence`] returns an unbounded iterator
//!
//! The same seed and parameters produce the same stream through all three.
//!
//! ## Quick Start
//!
//! ```rust
//! use xorshift_mwc::prelude::*;
//!
//! let mut rng = Xorshift::new(42);
//! let stepped: Vec<f64> = (0..100).map(|_| rng.next_sample()).collect();
//!
//! let bulk = generate_samples(100, 42, &XorshiftParams::default())?;
//! let lazy: Vec<f64> = sample_sequence(42, &XorshiftParams::default())?
//!     .take(100)
//!     .collect();
//!
//! assert_eq!(stepped, bulk);
//! assert_eq!(bulk, lazy);
//! # Ok::<(), xorshift_mwc::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize [`XorshiftParams`]
//!
//! ## Security
//!
//! Statistical quality only. Do not use this generator for keys, tokens or
//! anything an adversary may try to predict.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bulk;
pub mod dtype;
mod engine;
pub mod error;
mod kernel;
mod params;
mod sequence;
mod sync;

pub use bulk::{fill_sample_bytes, fill_samples, generate_samples, generate_samples_as};
pub use engine::Xorshift;
pub use params::{DEFAULT_A, DEFAULT_C, DEFAULT_X1, DEFAULT_X2, XorshiftParams};
pub use sequence::{SampleSequence, sample_sequence};
pub use sync::SyncXorshift;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::{
        SampleSequence, SyncXorshift, Xorshift, XorshiftParams, fill_sample_bytes, fill_samples,
        generate_samples, generate_samples_as, sample_sequence,
    };
}
