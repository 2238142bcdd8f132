//! Stepping interface
//!
//! [`Xorshift`] owns one generator state and advances it one sample at a time.
//! It is not synchronized: share it across threads through
//! [`SyncXorshift`](crate::SyncXorshift).

use rand::rand_core::{RngCore, SeedableRng, impls};

use crate::dtype::Element;
use crate::error::Result;
use crate::kernel::{MwcState, xorshift_uniform_kernel};
use crate::params::XorshiftParams;
use crate::sync::SyncXorshift;

/// Xorshift multiply-with-carry generator
///
/// # Example
///
/// ```
/// use xorshift_mwc::Xorshift;
///
/// let mut rng = Xorshift::new(42);
/// let v = rng.next_sample();
/// assert!((0.0..1.0).contains(&v));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift {
    state: MwcState,
    params: XorshiftParams,
}

impl Xorshift {
    /// Create a generator with the default parameters
    ///
    /// A seed of zero behaves exactly like a seed of one.
    pub fn new(seed: i32) -> Self {
        let params = XorshiftParams::DEFAULT;
        tracing::debug!(seed, "seeding xorshift generator with default parameters");
        Self {
            state: MwcState::seeded(seed, &params),
            params,
        }
    }

    /// Create a generator with explicit parameters
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `params.a <= params.c`.
    pub fn with_params(seed: i32, params: XorshiftParams) -> Result<Self> {
        let state = MwcState::new(seed, &params)?;
        tracing::debug!(
            seed,
            a = params.a,
            c = params.c,
            x1 = params.x1,
            x2 = params.x2,
            "seeding xorshift generator"
        );
        Ok(Self { state, params })
    }

    /// Parameters this generator was built with
    pub fn params(&self) -> &XorshiftParams {
        &self.params
    }

    /// Advance one step and return the next value in [0, 1)
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        self.state.next_uniform()
    }

    /// Advance one step and return the raw 32-bit output word
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state.next_word()
    }

    /// Fill `out` with the next `out.len()` values of this generator's stream
    pub fn fill_samples<T: Element>(&mut self, out: &mut [T]) {
        xorshift_uniform_kernel(out, &mut self.state);
    }

    /// Wrap this generator for shared use across threads
    ///
    /// The stream continues where this generator left off.
    pub fn into_sync(self) -> SyncXorshift {
        SyncXorshift::from(self)
    }
}

impl RngCore for Xorshift {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state.next_word()
    }

    // Low word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xorshift {
    /// Little-endian `i32` seed
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}
