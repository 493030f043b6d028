/// Runtime backend selection: widest supported path wins.
use crate::kernel::backend::VectorBackend;
use crate::kernel::scalar::ScalarBackend;
use log::info;
use std::sync::OnceLock;

static SCALAR: ScalarBackend = ScalarBackend;
static SELECTED: OnceLock<&'static dyn VectorBackend> = OnceLock::new();

/// Probe the CPU once per process and return the chosen backend.
/// Priority: avx2 > neon > scalar.
pub fn select_backend() -> &'static dyn VectorBackend {
    *SELECTED.get_or_init(|| {
        #[cfg(all(feature = "simd-avx2", target_arch = "x86_64"))]
        if let Some(be) = crate::kernel::avx2::Avx2Backend::new() {
            info!("Using AVX2 backend ({} lanes)", be.max_lanes());
            let leaked: &'static crate::kernel::avx2::Avx2Backend = Box::leak(Box::new(be));
            return leaked;
        }
        #[cfg(all(feature = "simd-neon", target_arch = "aarch64"))]
        if let Some(be) = crate::kernel::neon::NeonBackend::new() {
            info!("Using NEON backend ({} lanes)", be.max_lanes());
            let leaked: &'static crate::kernel::neon::NeonBackend = Box::leak(Box::new(be));
            return leaked;
        }
        info!("Using scalar backend");
        &SCALAR
    })
}
