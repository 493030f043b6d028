//! NEON backend: 8 lanes of i16 per 128-bit register.
//!
//! `vmlal_n_s16` performs the widening multiply-accumulate directly onto the
//! `vmovl_s16`-widened B halves, and `vqmovn_s32` is the saturating narrow.

#![allow(unsafe_op_in_unsafe_fn)]

use crate::kernel::backend::{Rounding, VectorBackend};
use std::arch::aarch64::*;
use std::arch::is_aarch64_feature_detected;

/// i16 lanes per 128-bit chunk.
pub const LANES: usize = 8;

pub struct NeonBackend {
    _priv: (),
}

impl NeonBackend {
    /// Returns `None` when the running CPU lacks NEON.
    pub fn new() -> Option<Self> {
        if is_aarch64_feature_detected!("neon") {
            Some(NeonBackend { _priv: () })
        } else {
            None
        }
    }
}

impl VectorBackend for NeonBackend {
    fn name(&self) -> &'static str {
        "neon"
    }

    fn max_lanes(&self) -> usize {
        LANES
    }

    fn axpy_chunk(
        &self,
        a: &[i16],
        b: &[i16],
        y: &mut [i16],
        alpha: i16,
        _rounding: Rounding,
    ) -> usize {
        // The narrow drops no fractional bits, so the rounding mode cannot
        // change the narrowed result.
        let lanes = y.len();
        // SAFETY: the constructor verified NEON is available.
        unsafe {
            if lanes == LANES {
                axpy_chunk_neon(a.as_ptr(), b.as_ptr(), y.as_mut_ptr(), alpha);
            } else {
                // Partial chunk through padded stack buffers, same scheme as
                // the AVX2 path.
                let mut pa = [0i16; LANES];
                let mut pb = [0i16; LANES];
                let mut py = [0i16; LANES];
                pa[..lanes].copy_from_slice(a);
                pb[..lanes].copy_from_slice(b);
                axpy_chunk_neon(pa.as_ptr(), pb.as_ptr(), py.as_mut_ptr(), alpha);
                y.copy_from_slice(&py[..lanes]);
            }
        }
        lanes
    }
}

/// One full-width chunk: `y[i] = sat16(a[i] * alpha + b[i])` for 8 lanes.
///
/// # Safety
/// Requires NEON and `LANES` readable i16 at `a` and `b`, `LANES` writable
/// i16 at `y`.
#[target_feature(enable = "neon")]
unsafe fn axpy_chunk_neon(a: *const i16, b: *const i16, y: *mut i16, alpha: i16) {
    let va = vld1q_s16(a);
    let vb = vld1q_s16(b);

    // Widen B, then accumulate the widening product of A and alpha onto it.
    let b_lo = vmovl_s16(vget_low_s16(vb));
    let b_hi = vmovl_s16(vget_high_s16(vb));
    let acc_lo = vmlal_n_s16(b_lo, vget_low_s16(va), alpha);
    let acc_hi = vmlal_n_s16(b_hi, vget_high_s16(va), alpha);

    // Saturating narrow back to i16.
    let out = vcombine_s16(vqmovn_s32(acc_lo), vqmovn_s32(acc_hi));
    vst1q_s16(y, out);
}
