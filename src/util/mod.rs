//! Utility types shared across the library:
//! - [`Seconds`] - Time value alias
//! - [`Error`] / [`Result`] - Error handling
//! - Numeric tolerances and rounding helpers

mod error;
mod units;

pub use error::*;
pub use units::*;
