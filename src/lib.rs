//! # seistrace
//!
//! Scalar seismic time-series data objects.
//!
//! A [`TimeSeries`](core::TimeSeries) couples a contiguous buffer of sample
//! values with the sampling geometry that places those samples in time
//! ([`Sampling`](core::Sampling)) and a typed named-attribute store
//! ([`Attributes`](core::Attributes)) for auxiliary parameters that are not
//! intrinsic to the waveform but are needed by downstream algorithms.
//!
//! ## Modules
//!
//! - [`util`] - Time units, tolerances, errors
//! - [`core`] - Sampling geometry, attribute storage, the time-series container
//!
//! ## Example
//!
//! ```
//! use seistrace::prelude::*;
//!
//! let mut ts = TimeSeries::from_parts(Sampling::uniform(0.0, 0.01, 5), Attributes::new());
//! ts.set_samples(vec![0.0; 5]);
//! ts.samples_mut()[0] = 1.0;
//! assert!((ts.endtime() - 0.04).abs() < 1e-12);
//! ```

pub mod util;
pub mod core;

// Re-export commonly used types
pub use util::{Error, Result, Seconds};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{AttrValue, Attributes, Sampling, TimeReference, TimeSeries};
    pub use crate::util::{Error, Result, Seconds};
}
