use thiserror::Error;

/// Length-precondition violations reported by the checked kernel entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KernelError {
    #[error("input `b` has {got} elements, need at least {need}")]
    InputTooShort { need: usize, got: usize },
    #[error("output `y` has {got} elements, need at least {need}")]
    OutputTooShort { need: usize, got: usize },
}
