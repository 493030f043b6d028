//! Saturating Q15 AXPY: `y[i] = sat16(a[i] * alpha + b[i])` over i16 slices.
//!
//! The arithmetic runs in sign-extended i32 lanes and narrows back to i16
//! with saturation. A runtime-selected backend processes the range in
//! hardware-sized chunks; the scalar fallback keeps the identical contract
//! on targets without a vector unit.

pub mod backend;
pub mod dispatch;
pub mod parallel;
pub mod scalar;

#[cfg(all(feature = "simd-avx2", target_arch = "x86_64"))]
pub mod avx2;
#[cfg(all(feature = "simd-neon", target_arch = "aarch64"))]
pub mod neon;

use crate::error::KernelError;
use backend::axpy_with_backend;
use dispatch::select_backend;

pub use backend::{Rounding, VectorBackend};
pub use parallel::par_axpy_saturating_i16;

/// Compute `y[i] = sat16(a[i] * alpha + b[i])` for `i in 0..a.len()`.
///
/// `b` and `y` must each hold at least `a.len()` elements; only
/// `y[..a.len()]` is written. Panics when either slice is too short.
pub fn axpy_saturating_i16(a: &[i16], b: &[i16], y: &mut [i16], alpha: i16) {
    axpy_saturating_i16_with(a, b, y, alpha, Rounding::Down)
}

/// Same as [`axpy_saturating_i16`] with an explicit rounding mode for the
/// narrowing step.
pub fn axpy_saturating_i16_with(
    a: &[i16],
    b: &[i16],
    y: &mut [i16],
    alpha: i16,
    rounding: Rounding,
) {
    axpy_with_backend(select_backend(), a, b, y, alpha, rounding)
}

/// Checked variant: length violations come back as [`KernelError`] instead
/// of a panic.
pub fn try_axpy_saturating_i16(
    a: &[i16],
    b: &[i16],
    y: &mut [i16],
    alpha: i16,
) -> Result<(), KernelError> {
    let n = a.len();
    if b.len() < n {
        return Err(KernelError::InputTooShort {
            need: n,
            got: b.len(),
        });
    }
    if y.len() < n {
        return Err(KernelError::OutputTooShort {
            need: n,
            got: y.len(),
        });
    }
    axpy_with_backend(select_backend(), a, b, y, alpha, Rounding::Down);
    Ok(())
}
