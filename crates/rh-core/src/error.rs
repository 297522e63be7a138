use thiserror::Error;

pub type RhResult<T> = Result<T, RhError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RhError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Sample count for {what} not representable (extent/step = {value})")]
    TooManySamples { what: &'static str, value: f64 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
