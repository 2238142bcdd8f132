//! Lazy infinite sample sequence
//!
//! [`SampleSequence`] is a pull-based iterator over the generator stream. Each
//! call to `next` computes exactly one step; nothing is precomputed.

use std::iter::FusedIterator;

use crate::error::Result;
use crate::kernel::MwcState;
use crate::params::XorshiftParams;

/// Unbounded iterator of values in [0, 1)
///
/// Never yields `None`. Take a prefix with [`Iterator::take`]; dropping the
/// iterator is all the cleanup there is. Two sequences built from the same
/// seed and parameters yield identical values.
#[derive(Clone, Debug)]
pub struct SampleSequence {
    state: MwcState,
}

impl SampleSequence {
    /// Create a sequence with the default parameters
    pub fn new(seed: i32) -> Self {
        Self {
            state: MwcState::seeded(seed, &XorshiftParams::DEFAULT),
        }
    }

    /// Create a sequence with explicit parameters
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `params.a <= params.c`.
    pub fn with_params(seed: i32, params: &XorshiftParams) -> Result<Self> {
        let state = MwcState::new(seed, params)?;
        tracing::trace!(seed, "starting xorshift sample sequence");
        Ok(Self { state })
    }
}

impl Iterator for SampleSequence {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.state.next_uniform())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for SampleSequence {}

/// Build a lazy infinite sequence of values in [0, 1)
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `params.a <= params.c`.
///
/// # Example
///
/// ```
/// use xorshift_mwc::{XorshiftParams, sample_sequence};
///
/// let first: Vec<f64> = sample_sequence(1, &XorshiftParams::default())
///     .unwrap()
///     .take(2)
///     .collect();
/// assert_eq!(first, [0.21348697342909873, 0.5518247704021633]);
/// ```
pub fn sample_sequence(seed: i32, params: &XorshiftParams) -> Result<SampleSequence> {
    SampleSequence::with_params(seed, params)
}
