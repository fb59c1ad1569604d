//! Core data objects for seismic waveform processing.
//!
//! This module provides:
//! - [`Sampling`] - Uniform sampling geometry (start time, interval, validity)
//! - [`TimeReference`] - Relative vs. absolute time convention
//! - [`Attributes`] / [`AttrValue`] - Typed named-attribute storage
//! - [`TimeSeries`] - Scalar time-series container composing the above

mod attributes;
mod geometry;
mod series;

pub use attributes::{AttrValue, Attributes};
pub use geometry::{Sampling, TimeReference};
pub use series::TimeSeries;
