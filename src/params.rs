//! Generator parameters
//!
//! The multiply-with-carry recurrence is parameterized by the multiplier `a`,
//! the initial carry `c` and the two history words `x1`/`x2`. All four are
//! 32-bit values; the defaults are Marsaglia's published constants.

use crate::error::{Error, Result};

/// Default multiplier
pub const DEFAULT_A: u32 = 916_905_990;
/// Default initial carry
pub const DEFAULT_C: u32 = 13_579;
/// Default last-but-two word
pub const DEFAULT_X1: u32 = 362_436_069;
/// Default last-but-one word
pub const DEFAULT_X2: u32 = 77_465_321;

/// Parameters shared by the stepping, bulk and lazy-sequence interfaces
///
/// # Example
///
/// ```
/// use xorshift_mwc::XorshiftParams;
///
/// let params = XorshiftParams::default().with_c(7);
/// assert!(params.validate().is_ok());
///
/// let bad = XorshiftParams::default().with_a(7);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct XorshiftParams {
    /// Multiplier, must be strictly greater than `c`
    pub a: u32,
    /// Initial carry
    pub c: u32,
    /// Initial last-but-two word
    pub x1: u32,
    /// Initial last-but-one word
    pub x2: u32,
}

impl Default for XorshiftParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl XorshiftParams {
    /// Marsaglia's constants
    pub const DEFAULT: Self = Self {
        a: DEFAULT_A,
        c: DEFAULT_C,
        x1: DEFAULT_X1,
        x2: DEFAULT_X2,
    };

    /// Create a parameter set from explicit values
    ///
    /// No validation happens here; it runs when a generator is built.
    pub const fn new(a: u32, c: u32, x1: u32, x2: u32) -> Self {
        Self { a, c, x1, x2 }
    }

    /// Replace the multiplier
    pub const fn with_a(mut self, a: u32) -> Self {
        self.a = a;
        self
    }

    /// Replace the initial carry
    pub const fn with_c(mut self, c: u32) -> Self {
        self.c = c;
        self
    }

    /// Replace the initial last-but-two word
    pub const fn with_x1(mut self, x1: u32) -> Self {
        self.x1 = x1;
        self
    }

    /// Replace the initial last-but-one word
    pub const fn with_x2(mut self, x2: u32) -> Self {
        self.x2 = x2;
        self
    }

    /// Check the `a > c` constraint
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `a <= c`.
    pub fn validate(&self) -> Result<()> {
        if self.a <= self.c {
            return Err(Error::invalid_parameter("a", "a must be greater than c"));
        }
        Ok(())
    }
}
