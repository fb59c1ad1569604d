//! Sampling geometry for uniformly-sampled waveforms.
//!
//! A [`Sampling`] describes when a waveform's samples were recorded:
//! start time, sample interval, declared sample count, a live/dead
//! validity flag, and the time reference the start time is expressed in.

use crate::util::{nearest_sample, Seconds};

/// Time reference a sampling's start time is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeReference {
    /// Offset from an arbitrary origin (e.g. seconds after a shot).
    #[default]
    Relative,

    /// Epoch time.
    Absolute,
}

/// Uniform sampling geometry.
///
/// `npts` is the declared sample count. Containers that own an actual
/// sample buffer treat the buffer length as authoritative for indexing
/// and this field as advisory; the two are reconciled only on an
/// explicit request (see [`TimeSeries::sync_npts`]).
///
/// Invariant: `dt > 0` whenever the geometry is live. The mutators
/// uphold this unconditionally - [`set_live`](Self::set_live) refuses to
/// mark a non-positive interval live, and
/// [`set_dt`](Self::set_dt) kills the geometry when given one.
///
/// [`TimeSeries::sync_npts`]: crate::core::TimeSeries::sync_npts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampling {
    t0: Seconds,
    dt: Seconds,
    npts: usize,
    live: bool,
    tref: TimeReference,
    /// Shift applied by the last absolute-to-relative conversion,
    /// retained so `rtoa` can restore the absolute start time.
    t0shift: Seconds,
}

impl Sampling {
    /// Create a live uniform sampling. `dt` must be positive; a
    /// non-positive interval yields a dead geometry.
    pub fn uniform(t0: Seconds, dt: Seconds, npts: usize) -> Self {
        Self {
            t0,
            dt,
            npts,
            live: dt > 0.0,
            tref: TimeReference::Relative,
            t0shift: 0.0,
        }
    }

    /// Start time (time of sample 0).
    #[inline]
    pub fn t0(&self) -> Seconds {
        self.t0
    }

    /// Sample interval.
    #[inline]
    pub fn dt(&self) -> Seconds {
        self.dt
    }

    /// Declared sample count (advisory).
    #[inline]
    pub fn npts(&self) -> usize {
        self.npts
    }

    /// Whether the geometry currently describes usable data.
    #[inline]
    pub fn live(&self) -> bool {
        self.live
    }

    /// Time reference of the start time.
    #[inline]
    pub fn tref(&self) -> TimeReference {
        self.tref
    }

    pub fn set_t0(&mut self, t0: Seconds) {
        self.t0 = t0;
    }

    /// Set the sample interval. A non-positive interval kills the
    /// geometry.
    pub fn set_dt(&mut self, dt: Seconds) {
        self.dt = dt;
        if dt <= 0.0 {
            self.live = false;
        }
    }

    pub fn set_npts(&mut self, npts: usize) {
        self.npts = npts;
    }

    /// Mark the geometry live. No-op when the interval is not positive.
    pub fn set_live(&mut self) {
        self.live = self.dt > 0.0;
    }

    /// Mark the geometry dead.
    pub fn kill(&mut self) {
        self.live = false;
    }

    /// Time of sample `i`: `t0 + dt * i`.
    #[inline]
    pub fn time(&self, i: usize) -> Seconds {
        self.t0 + self.dt * i as f64
    }

    /// Sample index nearest to time `t` (ties round away from zero).
    /// May be negative or past `npts` for times outside the recording.
    /// Requires `dt > 0`.
    #[inline]
    pub fn sample_number(&self, t: Seconds) -> i64 {
        nearest_sample(t - self.t0, self.dt)
    }

    /// Time of the last declared sample: `t0 + dt * (npts - 1)`.
    ///
    /// For `npts == 0` the formula evaluates to `t0 - dt`; callers must
    /// treat that value as meaningless, not as an error.
    #[inline]
    pub fn endtime(&self) -> Seconds {
        self.t0 + self.dt * (self.npts as f64 - 1.0)
    }

    /// Whether `t` falls within the recording span of a live geometry.
    pub fn is_in_range(&self, t: Seconds) -> bool {
        self.live && t >= self.t0 && t <= self.endtime()
    }

    /// Convert absolute time to relative by shifting the origin to
    /// `tshift`. The shift is retained so [`rtoa`](Self::rtoa) can
    /// restore the absolute start time. Repeated calls accumulate.
    pub fn ator(&mut self, tshift: Seconds) {
        self.t0 -= tshift;
        self.t0shift += tshift;
        self.tref = TimeReference::Relative;
    }

    /// Undo previous [`ator`](Self::ator)/[`shift`](Self::shift) calls,
    /// restoring the absolute start time.
    pub fn rtoa(&mut self) {
        self.t0 += self.t0shift;
        self.t0shift = 0.0;
        self.tref = TimeReference::Absolute;
    }

    /// Move the relative time origin forward by `dt_shift`: relative
    /// times of the same instants decrease by `dt_shift`.
    pub fn shift(&mut self, dt_shift: Seconds) {
        self.t0 -= dt_shift;
        self.t0shift += dt_shift;
    }
}

impl Default for Sampling {
    /// Inert geometry: everything zeroed, dead, relative time.
    fn default() -> Self {
        Self {
            t0: 0.0,
            dt: 0.0,
            npts: 0,
            live: false,
            tref: TimeReference::Relative,
            t0shift: 0.0,
        }
    }
}
