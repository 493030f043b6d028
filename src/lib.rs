// Saturating Q15 fixed-point vector kernels with runtime SIMD dispatch
pub mod error;
pub mod kernel;

// Re-exports kept minimal
pub use error::KernelError;
pub use kernel::{axpy_saturating_i16, axpy_saturating_i16_with, try_axpy_saturating_i16};
