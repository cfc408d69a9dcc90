use thiserror::Error;

/// Failure of a checked read through [`crate::Bounded::try_evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("index {index} out of range for expression of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
