//! Bulk sample generation
//!
//! Each call seeds its own state, fills the output and drops the state. No
//! generator instance is read or advanced.

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::kernel::{MwcState, xorshift_uniform_kernel};
use crate::params::XorshiftParams;

/// Generate `length` successive values in [0, 1) from a freshly seeded state
///
/// The result equals the first `length` values of [`Xorshift::with_params`]
/// or [`sample_sequence`] with the same seed and parameters.
///
/// # Errors
///
/// - `Error::InvalidArgument` if `length` is negative
/// - `Error::InvalidParameter` if `params.a <= params.c`
///
/// Both are reported before anything is allocated. A length whose buffer
/// cannot be allocated is also reported as `Error::InvalidArgument`.
///
/// # Example
///
/// ```
/// use xorshift_mwc::{XorshiftParams, generate_samples};
///
/// let samples = generate_samples(1000, 42, &XorshiftParams::default()).unwrap();
/// assert_eq!(samples.len(), 1000);
/// assert!(samples.iter().all(|v| (0.0..1.0).contains(v)));
/// ```
///
/// [`Xorshift::with_params`]: crate::Xorshift::with_params
/// [`sample_sequence`]: crate::sample_sequence
pub fn generate_samples(length: isize, seed: i32, params: &XorshiftParams) -> Result<Vec<f64>> {
    generate_samples_as::<f64>(length, seed, params)
}

/// Generate `length` successive values in [0, 1) as element type `T`
///
/// # Errors
///
/// Same as [`generate_samples`].
pub fn generate_samples_as<T: Element>(
    length: isize,
    seed: i32,
    params: &XorshiftParams,
) -> Result<Vec<T>> {
    let n = usize::try_from(length).map_err(|_| {
        Error::invalid_argument("length", format!("must be non-negative, got {}", length))
    })?;
    let mut state = MwcState::new(seed, params)?;

    tracing::debug!(length = n, seed, dtype = %T::DTYPE, "generating xorshift samples");

    let mut out = Vec::new();
    out.try_reserve_exact(n).map_err(|e| {
        Error::invalid_argument("length", format!("cannot allocate {} samples: {}", n, e))
    })?;
    out.resize(n, T::zero());
    xorshift_uniform_kernel(&mut out, &mut state);
    Ok(out)
}

/// Fill `out` from a freshly seeded state
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `params.a <= params.c`; `out` is left
/// untouched in that case.
pub fn fill_samples<T: Element>(out: &mut [T], seed: i32, params: &XorshiftParams) -> Result<()> {
    let mut state = MwcState::new(seed, params)?;

    tracing::debug!(length = out.len(), seed, dtype = %T::DTYPE, "filling xorshift samples");

    xorshift_uniform_kernel(out, &mut state);
    Ok(())
}

/// Fill raw byte storage with samples of element type `dtype`
///
/// `out` is viewed as a slice of `dtype` elements, so it must be aligned for
/// that type and its length must be a multiple of the element size. Values
/// are written in native byte order.
///
/// # Errors
///
/// - `Error::InvalidArgument` if `out` is misaligned or its length is not a
///   multiple of `dtype.size_in_bytes()`
/// - `Error::InvalidParameter` if `params.a <= params.c`
///
/// `out` is left untouched on error.
pub fn fill_sample_bytes(
    out: &mut [u8],
    dtype: DType,
    seed: i32,
    params: &XorshiftParams,
) -> Result<()> {
    let elem_size = dtype.size_in_bytes();
    if out.len() % elem_size != 0 {
        return Err(Error::invalid_argument(
            "out",
            format!(
                "length {} is not a multiple of the {} element size {}",
                out.len(),
                dtype,
                elem_size
            ),
        ));
    }

    match dtype {
        DType::F64 => fill_samples(cast_elements::<f64>(out)?, seed, params),
        DType::F32 => fill_samples(cast_elements::<f32>(out)?, seed, params),
    }
}

fn cast_elements<T: Element>(out: &mut [u8]) -> Result<&mut [T]> {
    bytemuck::try_cast_slice_mut(out).map_err(|e| {
        Error::invalid_argument("out", format!("cannot view as {}: {:?}", T::DTYPE, e))
    })
}
