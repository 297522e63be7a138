//! rh-core: shared foundation for rodheat.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)
//! - timing (opt-in wall-clock timers)

pub mod error;
pub mod numeric;
pub mod timing;

pub use error::{RhError, RhResult};
pub use numeric::*;
