/// Rayon variant. Chunks carry no inter-chunk data dependency, so disjoint
/// grains of the index range run the sequential kernel independently.
use crate::kernel::backend::{axpy_with_backend, Rounding};
use crate::kernel::dispatch::select_backend;
use rayon::prelude::*;

/// Elements per rayon work item. Inputs at or below this stay on the calling
/// thread.
const GRAIN: usize = 16 * 1024;

/// Parallel `y[i] = sat16(a[i] * alpha + b[i])` over `i in 0..a.len()`.
/// Output is identical to [`crate::kernel::axpy_saturating_i16`].
pub fn par_axpy_saturating_i16(a: &[i16], b: &[i16], y: &mut [i16], alpha: i16) {
    let n = a.len();
    assert!(
        b.len() >= n,
        "input `b` has {} elements, need at least {}",
        b.len(),
        n
    );
    assert!(
        y.len() >= n,
        "output `y` has {} elements, need at least {}",
        y.len(),
        n
    );

    let backend = select_backend();
    if n <= GRAIN {
        axpy_with_backend(backend, a, b, y, alpha, Rounding::Down);
        return;
    }
    y[..n]
        .par_chunks_mut(GRAIN)
        .enumerate()
        .for_each(|(k, yc)| {
            let off = k * GRAIN;
            axpy_with_backend(
                backend,
                &a[off..off + yc.len()],
                &b[off..off + yc.len()],
                yc,
                alpha,
                Rounding::Down,
            );
        });
}
