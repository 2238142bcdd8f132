//! Output element types for generated samples
//!
//! Samples are always computed in `f64`. The `Element` trait narrows them to
//! the caller's buffer type when filling `f32` storage.

mod element;

pub use element::Element;

use std::fmt;

/// Floating-point element types a sample buffer can hold
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64-bit IEEE 754 float, the native sample precision
    F64,
    /// 32-bit IEEE 754 float
    F32,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Short name for display
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
