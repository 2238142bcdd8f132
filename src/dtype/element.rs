//! Element trait for mapping Rust float types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types a sample buffer can be made of
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Byte storage can be viewed as a slice of this type (bytemuck),
///   see [`fill_sample_bytes`](crate::fill_sample_bytes)
/// - `PartialOrd` - Range checks on generated values
pub trait Element: Copy + Send + Sync + Pod + Zeroable + 'static + PartialOrd {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert a uniform sample in [0, 1) to this type
    ///
    /// The result must stay strictly below one.
    fn from_uniform(u: f64) -> Self;

    /// Zero value
    fn zero() -> Self;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline(always)]
    fn from_uniform(u: f64) -> Self {
        u
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

/// Largest f32 strictly below 1.0
const F32_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    // Samples within 2^-25 of one round up to 1.0f32.
    #[inline(always)]
    fn from_uniform(u: f64) -> Self {
        (u as f32).min(F32_BELOW_ONE)
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}
