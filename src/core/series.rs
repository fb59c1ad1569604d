//! Scalar time-series container.
//!
//! [`TimeSeries`] composes a [`Sampling`] geometry and an [`Attributes`]
//! store with a contiguous buffer of sample values. The buffer length is
//! authoritative for indexing and end-time computation; the geometry's
//! declared count is advisory and may lag behind resizes until
//! [`TimeSeries::sync_npts`] is called.

use crate::core::{Attributes, Sampling};
use crate::util::{nearest_sample, Error, Result, Seconds, DT_RTOL};

/// Scalar seismic time-series data object.
///
/// The samples are stored contiguously (`Vec<f64>`), so external numeric
/// routines (BLAS and the like) can operate directly on the slice
/// returned by [`samples`](Self::samples) / [`samples_mut`](Self::samples_mut).
/// That contiguity is a guarantee of this type, not an implementation
/// detail.
///
/// Every copy is a deep copy: cloning duplicates the geometry, the
/// attributes, and the full sample buffer, with no aliasing between the
/// source and the clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    sampling: Sampling,
    attributes: Attributes,
    samples: Vec<f64>,
}

impl TimeSeries {
    /// Empty series: inert (dead) geometry, no attributes, no samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sized series: `n` samples, all `0.0`, inert geometry.
    ///
    /// Intended for callers that already know the final sample count and
    /// fill positions through [`samples_mut`](Self::samples_mut). Note
    /// that [`push`](Self::push) on a pre-sized series grows it past the
    /// sized length instead of filling it.
    pub fn zeroed(n: usize) -> Self {
        Self {
            samples: vec![0.0; n],
            ..Self::default()
        }
    }

    /// Construct from components. The sample buffer starts empty
    /// regardless of `sampling.npts()`.
    pub fn from_parts(sampling: Sampling, attributes: Attributes) -> Self {
        Self {
            sampling,
            attributes,
            samples: Vec::new(),
        }
    }

    /// Sampling geometry.
    #[inline]
    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    /// Mutable sampling geometry.
    #[inline]
    pub fn sampling_mut(&mut self) -> &mut Sampling {
        &mut self.sampling
    }

    /// Named attributes.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable named attributes.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// The sample buffer, contiguous in memory.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Mutable view of the contiguous sample buffer, for direct indexed
    /// writes and bulk numeric operations. No range or liveness checks
    /// apply here; use [`get`](Self::get) for checked access.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Replace the sample buffer.
    pub fn set_samples(&mut self, samples: Vec<f64>) {
        self.samples = samples;
    }

    /// Number of stored samples. Authoritative; `sampling().npts()` may
    /// lag behind it.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the sample buffer is empty. An empty series is a valid
    /// object, not an error state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample, growing the buffer.
    pub fn push(&mut self, v: f64) {
        self.samples.push(v);
    }

    /// Resize the buffer; growth is zero-filled.
    pub fn resize(&mut self, n: usize) {
        self.samples.resize(n, 0.0);
    }

    /// Shorthand for `sampling().live()`.
    #[inline]
    pub fn live(&self) -> bool {
        self.sampling.live()
    }

    /// Time of the last stored sample: `t0 + dt * (len - 1)`.
    ///
    /// Always derived from the actual buffer length, never from the
    /// geometry's declared count. For an empty series the formula
    /// evaluates as-is to `t0 - dt`; that value is meaningless but not
    /// an error.
    pub fn endtime(&self) -> Seconds {
        self.sampling.t0() + self.sampling.dt() * (self.samples.len() as f64 - 1.0)
    }

    /// Bounds-checked sample read.
    ///
    /// A dead series is treated as an implicit empty range: every index
    /// is out of bounds and the error reports a count of zero, whatever
    /// the buffer length.
    pub fn get(&self, index: usize) -> Result<f64> {
        if !self.sampling.live() {
            return Err(Error::SampleOutOfBounds { index, count: 0 });
        }
        self.samples
            .get(index)
            .copied()
            .ok_or(Error::SampleOutOfBounds {
                index,
                count: self.samples.len(),
            })
    }

    /// Stack: align `other` to this series' time base and add the
    /// overlapping samples in place. Simple version of a seismic stack
    /// for combining repeated recordings of the same signal.
    ///
    /// Behavior:
    /// - If either operand is dead, the call is a no-op returning `Ok`.
    /// - Both operands must share a time reference
    ///   ([`Error::TimeReferenceMismatch`]) and a sample interval within
    ///   a relative tolerance of [`DT_RTOL`]
    ///   ([`Error::IncompatibleSampling`]).
    /// - The start-time difference maps to a sample offset by
    ///   nearest-sample rounding (ties away from zero); samples of
    ///   `other` that land outside this series' range are silently
    ///   dropped. The overlap is never grown.
    /// - Geometry and attributes of `self` are unchanged; `other` is
    ///   never mutated. On error `self` is left untouched.
    pub fn stack(&mut self, other: &TimeSeries) -> Result<()> {
        if !self.sampling.live() || !other.sampling.live() {
            tracing::debug!("stack skipped: dead operand");
            return Ok(());
        }
        if self.sampling.tref() != other.sampling.tref() {
            return Err(Error::TimeReferenceMismatch);
        }
        let dt = self.sampling.dt();
        let other_dt = other.sampling.dt();
        if (dt - other_dt).abs() > DT_RTOL * dt.abs() {
            return Err(Error::IncompatibleSampling {
                lhs: dt,
                rhs: other_dt,
            });
        }

        let k = nearest_sample(other.sampling.t0() - self.sampling.t0(), dt);
        let n = self.samples.len() as i64;
        let mut dropped = 0usize;
        for (i, v) in other.samples.iter().enumerate() {
            let j = i as i64 + k;
            if (0..n).contains(&j) {
                self.samples[j as usize] += v;
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::trace!(dropped, offset = k, "stack dropped samples outside overlap");
        }
        Ok(())
    }

    /// Multiply every sample in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.samples {
            *v *= factor;
        }
    }

    /// Copy the buffer length into the geometry's declared count. The
    /// two are otherwise intentionally decoupled; resizes never write
    /// to the geometry behind the caller's back.
    pub fn sync_npts(&mut self) {
        let n = self.samples.len();
        self.sampling.set_npts(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeReference;

    fn live_series(t0: Seconds, samples: Vec<f64>) -> TimeSeries {
        let n = samples.len();
        let mut ts = TimeSeries::from_parts(Sampling::uniform(t0, 1.0, n), Attributes::new());
        ts.set_samples(samples);
        ts
    }

    #[test]
    fn test_default_is_empty_and_dead() {
        let ts = TimeSeries::new();
        assert!(ts.is_empty());
        assert!(!ts.live());
        assert!(ts.attributes().is_empty());
    }

    #[test]
    fn test_zeroed() {
        let ts = TimeSeries::zeroed(4);
        assert_eq!(ts.len(), 4);
        assert!(ts.samples().iter().all(|&v| v == 0.0));

        assert_eq!(TimeSeries::zeroed(0).len(), 0);
    }

    #[test]
    fn test_from_parts_empty_buffer() {
        let ts = TimeSeries::from_parts(Sampling::uniform(0.0, 0.5, 100), Attributes::new());
        // Declared count does not pre-allocate the buffer.
        assert!(ts.is_empty());
        assert_eq!(ts.sampling().npts(), 100);
    }

    #[test]
    fn test_endtime_from_buffer_length() {
        let mut ts = TimeSeries::from_parts(Sampling::uniform(10.0, 0.5, 999), Attributes::new());
        ts.set_samples(vec![0.0; 5]);
        // len 5, not npts 999, drives endtime.
        assert!((ts.endtime() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_endtime_empty_convention() {
        let ts = TimeSeries::from_parts(Sampling::uniform(3.0, 0.25, 0), Attributes::new());
        assert!((ts.endtime() - 2.75).abs() < 1e-12); // t0 - dt
    }

    #[test]
    fn test_get_checked() {
        let ts = live_series(0.0, vec![1.0, 2.0, 3.0]);
        assert_eq!(ts.get(0).unwrap(), 1.0);
        assert_eq!(ts.get(2).unwrap(), 3.0);
        assert!(matches!(
            ts.get(3),
            Err(Error::SampleOutOfBounds { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_get_on_dead_is_empty_range() {
        let mut ts = live_series(0.0, vec![1.0, 2.0, 3.0]);
        ts.sampling_mut().kill();
        assert!(matches!(
            ts.get(0),
            Err(Error::SampleOutOfBounds { index: 0, count: 0 })
        ));
    }

    #[test]
    fn test_sync_npts() {
        let mut ts = live_series(0.0, vec![0.0; 7]);
        ts.sampling_mut().set_npts(3);
        ts.sync_npts();
        assert_eq!(ts.sampling().npts(), 7);
    }

    #[test]
    fn test_scale() {
        let mut ts = live_series(0.0, vec![1.0, -2.0, 3.0]);
        ts.scale(2.0);
        assert_eq!(ts.samples(), &[2.0, -4.0, 6.0]);
    }

    #[test]
    fn test_stack_tref_mismatch() {
        let mut a = live_series(0.0, vec![1.0; 5]);
        let mut b = live_series(0.0, vec![1.0; 5]);
        b.sampling_mut().rtoa();
        assert_eq!(b.sampling().tref(), TimeReference::Absolute);

        let before = a.clone();
        assert!(matches!(a.stack(&b), Err(Error::TimeReferenceMismatch)));
        assert_eq!(a, before);
    }
}
