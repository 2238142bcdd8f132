//! Thread-safe generator wrapper
//!
//! [`SyncXorshift`] serializes every step of an inner [`Xorshift`] behind a
//! mutex. The stepping core stays unsynchronized; this type only adds the lock.

use parking_lot::Mutex;
use rand::rand_core::{RngCore, impls};

use crate::dtype::Element;
use crate::engine::Xorshift;
use crate::error::Result;
use crate::params::XorshiftParams;

/// Xorshift generator shareable across threads
///
/// Concurrent callers each receive distinct, consecutive values of one stream;
/// the order they are handed out in depends on lock acquisition order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use xorshift_mwc::SyncXorshift;
///
/// let rng = Arc::new(SyncXorshift::new(42));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let rng = Arc::clone(&rng);
///         std::thread::spawn(move || rng.next_sample())
///     })
///     .collect();
/// for h in handles {
///     assert!((0.0..1.0).contains(&h.join().unwrap()));
/// }
/// ```
#[derive(Debug)]
pub struct SyncXorshift {
    inner: Mutex<Xorshift>,
}

impl SyncXorshift {
    /// Create a shared generator with the default parameters
    pub fn new(seed: i32) -> Self {
        Self::from(Xorshift::new(seed))
    }

    /// Create a shared generator with explicit parameters
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `params.a <= params.c`.
    pub fn with_params(seed: i32, params: XorshiftParams) -> Result<Self> {
        Xorshift::with_params(seed, params).map(Self::from)
    }

    /// Parameters the inner generator was built with
    pub fn params(&self) -> XorshiftParams {
        *self.inner.lock().params()
    }

    /// Advance one step and return the next value in [0, 1)
    pub fn next_sample(&self) -> f64 {
        self.inner.lock().next_sample()
    }

    /// Advance one step and return the raw 32-bit output word
    pub fn next_u32(&self) -> u32 {
        self.inner.lock().next_u32()
    }

    /// Fill `out` with consecutive values while holding the lock once
    ///
    /// No other caller's values are interleaved into the batch.
    pub fn fill_samples<T: Element>(&self, out: &mut [T]) {
        self.inner.lock().fill_samples(out);
    }

    /// Unwrap the inner generator, keeping its position in the stream
    pub fn into_inner(self) -> Xorshift {
        self.inner.into_inner()
    }
}

impl From<Xorshift> for SyncXorshift {
    fn from(rng: Xorshift) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }
}

impl RngCore for &SyncXorshift {
    fn next_u32(&mut self) -> u32 {
        self.inner.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        RngCore::next_u64(&mut *self.inner.lock())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut guard = self.inner.lock();
        impls::fill_bytes_via_next(&mut *guard, dst)
    }
}
