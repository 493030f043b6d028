/// Scalar reference arithmetic and the portable fallback backend.
use crate::kernel::backend::{Rounding, VectorBackend};

/// Sign-extend one lane to the accumulator width.
#[inline]
pub fn widen(v: i16) -> i32 {
    v as i32
}

/// `a * alpha + b` in i32. A 16x16-bit product plus a 16-bit addend cannot
/// overflow 32 bits signed.
#[inline]
pub fn madd(a: i16, alpha: i16, b: i16) -> i32 {
    widen(a) * widen(alpha) + widen(b)
}

/// Saturating i32 -> i16 narrow under the given rounding mode.
#[inline]
pub fn narrow_sat(acc: i32, rounding: Rounding) -> i16 {
    rounding.narrow(acc, 0)
}

/// Plain indexed loop; SIMD backends replace it when runtime detection
/// succeeds. Also serves as the oracle primitive for tests and the bench
/// driver.
pub struct ScalarBackend;

impl VectorBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn max_lanes(&self) -> usize {
        // No hardware lane limit; the driver takes whole remainders.
        usize::MAX
    }

    fn axpy_chunk(
        &self,
        a: &[i16],
        b: &[i16],
        y: &mut [i16],
        alpha: i16,
        rounding: Rounding,
    ) -> usize {
        for i in 0..y.len() {
            y[i] = narrow_sat(madd(a[i], alpha, b[i]), rounding);
        }
        y.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn madd_widens_before_multiplying() {
        assert_eq!(madd(32767, 32767, 32767), 32767 * 32767 + 32767);
        assert_eq!(madd(-32768, 32767, -32768), -32768 * 32767 - 32768);
    }

    #[test]
    fn narrow_sat_clamps_both_rails() {
        assert_eq!(narrow_sat(32767 * 32767 + 32767, Rounding::Down), 32767);
        assert_eq!(narrow_sat(-32768 * 32767 - 32768, Rounding::Down), -32768);
        assert_eq!(narrow_sat(-5, Rounding::Down), -5);
    }

    #[test]
    fn scalar_backend_commits_whole_chunk() {
        let a = [1i16, 2, 3];
        let b = [10i16, 20, 30];
        let mut y = [0i16; 3];
        let committed = ScalarBackend.axpy_chunk(&a, &b, &mut y, 2, Rounding::Down);
        assert_eq!(committed, 3);
        assert_eq!(y, [12, 24, 36]);
    }
}
