//! Error types for grid construction and field access.

use rh_core::RhError;
use thiserror::Error;

/// Errors raised by the solver. The time-marching loop itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FdmError {
    #[error("Invalid parameter {name}: {value} (must be finite, > 0 and give a representable grid)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Time index out of bounds (index={index}, len={len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Initial condition returned {got} values for {expected} interior points")]
    InitialCondition { expected: usize, got: usize },
}

pub type FdmResult<T> = Result<T, FdmError>;

impl From<RhError> for FdmError {
    fn from(e: RhError) -> Self {
        match e {
            RhError::NonFinite { what, value }
            | RhError::NonPositive { what, value }
            | RhError::TooManySamples { what, value } => {
                FdmError::InvalidParameter { name: what, value }
            }
            RhError::IndexOob { index, len, .. } => FdmError::IndexOutOfBounds { index, len },
        }
    }
}
