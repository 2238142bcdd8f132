//! Xorshift multiply-with-carry kernel
//!
//! Lag-3 multiply-with-carry generator from Marsaglia, "Xorshift RNGs" (2003):
//! `x[n] = (a * x[n-3] + c[n-1]) mod 2^32`, `c[n] = (a * x[n-3] + c[n-1]) / 2^32`.
//!
//! Every access pattern (engine, bulk, lazy sequence) drives the same
//! [`MwcState`], so identical seeds and parameters give identical streams.

use crate::dtype::Element;
use crate::error::Result;
use crate::params::XorshiftParams;

const LOW_WORD: u64 = 0xFFFF_FFFF;

/// Scale factor mapping a 32-bit word into [0, 1)
const INV_2_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// Convert a 32-bit word to a uniform float in [0, 1)
#[inline(always)]
pub fn u32_to_uniform(u: u32) -> f64 {
    u as f64 * INV_2_POW_32
}

/// Generator state: the last three outputs, the running carry and the multiplier
///
/// Words are stored as `u64` but always hold 32-bit values, so `a * x + c`
/// cannot exceed 64 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MwcState {
    x: u64,
    y: u64,
    z: u64,
    c: u64,
    a: u64,
}

impl MwcState {
    /// Validate `params` and seed a fresh state
    pub(crate) fn new(seed: i32, params: &XorshiftParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::seeded(seed, params))
    }

    /// Seed a fresh state from parameters already known to be valid
    ///
    /// A zero seed is replaced by one. Negative seeds keep their 32-bit
    /// two's complement pattern.
    #[inline]
    pub(crate) fn seeded(seed: i32, params: &XorshiftParams) -> Self {
        let seed = if seed == 0 {
            tracing::debug!("seed 0 replaced with 1");
            1
        } else {
            seed
        };
        Self {
            x: seed as u32 as u64,
            y: params.x1 as u64,
            z: params.x2 as u64,
            c: params.c as u64,
            a: params.a as u64,
        }
    }

    /// Advance one step and return the new low word
    #[inline(always)]
    pub(crate) fn next_word(&mut self) -> u32 {
        let t = self.a.wrapping_mul(self.x).wrapping_add(self.c);

        self.x = self.y;
        self.y = self.z;
        self.c = t >> 32;
        self.z = t & LOW_WORD;

        self.z as u32
    }

    /// Advance one step and return the new value in [0, 1)
    #[inline(always)]
    pub(crate) fn next_uniform(&mut self) -> f64 {
        u32_to_uniform(self.next_word())
    }
}

/// Fill `out` with successive uniform values in [0, 1)
///
/// Continues from `state`, leaving it positioned after the last value written.
#[inline]
pub(crate) fn xorshift_uniform_kernel<T: Element>(out: &mut [T], state: &mut MwcState) {
    for elem in out.iter_mut() {
        *elem = T::from_uniform(state.next_uniform());
    }
}
