//! AVX2 backend: 16 lanes of i16 per 256-bit register.
//!
//! The chunk arithmetic mirrors the scalar reference exactly: sign-extend
//! each half of the register to i32, `mullo` by the broadcast alpha, add B,
//! then `packs_epi32` back to i16. `packs` saturates and interleaves the
//! 128-bit halves, so a `permute4x64` restores lane order after the pack.

#![allow(unsafe_op_in_unsafe_fn)]

use crate::kernel::backend::{Rounding, VectorBackend};
use std::arch::x86_64::*;

/// i16 lanes per 256-bit chunk.
pub const LANES: usize = 16;

pub struct Avx2Backend {
    _priv: (),
}

impl Avx2Backend {
    /// Returns `None` when the running CPU lacks AVX2.
    pub fn new() -> Option<Self> {
        if is_x86_feature_detected!("avx2") {
            Some(Avx2Backend { _priv: () })
        } else {
            None
        }
    }
}

impl VectorBackend for Avx2Backend {
    fn name(&self) -> &'static str {
        "avx2"
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
        // change the packed result.
        let lanes = y.len();
        // SAFETY: the constructor verified AVX2 is available.
        unsafe {
            if lanes == LANES {
                axpy_chunk_avx2(a.as_ptr(), b.as_ptr(), y.as_mut_ptr(), alpha);
            } else {
                // Partial chunk: stage through padded stack buffers so the
                // full-width load and store never touch caller memory past
                // the chunk.
                let mut pa = [0i16; LANES];
                let mut pb = [0i16; LANES];
                let mut py = [0i16; LANES];
                pa[..lanes].copy_from_slice(a);
                pb[..lanes].copy_from_slice(b);
                axpy_chunk_avx2(pa.as_ptr(), pb.as_ptr(), py.as_mut_ptr(), alpha);
                y.copy_from_slice(&py[..lanes]);
            }
        }
        lanes
    }
}

/// One full-width chunk: `y[i] = sat16(a[i] * alpha + b[i])` for 16 lanes.
///
/// # Safety
/// Requires AVX2 and `LANES` readable i16 at `a` and `b`, `LANES` writable
/// i16 at `y`.
#[target_feature(enable = "avx2")]
unsafe fn axpy_chunk_avx2(a: *const i16, b: *const i16, y: *mut i16, alpha: i16) {
    let va = _mm256_loadu_si256(a as *const __m256i);
    let vb = _mm256_loadu_si256(b as *const __m256i);
    let valpha = _mm256_set1_epi32(alpha as i32);

    // Sign-extend each 8-lane half to i32.
    let a_lo = _mm256_cvtepi16_epi32(_mm256_castsi256_si128(va));
    let a_hi = _mm256_cvtepi16_epi32(_mm256_extracti128_si256::<1>(va));
    let b_lo = _mm256_cvtepi16_epi32(_mm256_castsi256_si128(vb));
    let b_hi = _mm256_cvtepi16_epi32(_mm256_extracti128_si256::<1>(vb));

    // 16x16-bit product plus 16-bit addend fits i32; mullo is exact here.
    let acc_lo = _mm256_add_epi32(_mm256_mullo_epi32(a_lo, valpha), b_lo);
    let acc_hi = _mm256_add_epi32(_mm256_mullo_epi32(a_hi, valpha), b_hi);

    // packs saturates i32 -> i16 but interleaves the 128-bit halves:
    // [lo0..3, hi0..3 | lo4..7, hi4..7] as 64-bit quads. (0,2,1,3) restores
    // source order.
    let packed = _mm256_packs_epi32(acc_lo, acc_hi);
    let ordered = _mm256_permute4x64_epi64::<0b1101_1000>(packed);
    _mm256_storeu_si256(y as *mut __m256i, ordered);
}
