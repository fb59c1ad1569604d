//! Time units and numeric tolerances.

/// Time value in seconds. Relative times are offsets from an arbitrary
/// origin (e.g. a shot time); absolute times are epoch seconds.
pub type Seconds = f64;

/// Relative tolerance for comparing sample intervals. Intervals usually
/// arrive as `1 / rate` computed from header fields, so exact equality is
/// too strict.
pub const DT_RTOL: f64 = 1e-6;

/// Map a time offset to the nearest sample index.
///
/// Rounding rule: nearest, ties away from zero (`f64::round`). Requires
/// `dt > 0`.
#[inline]
pub fn nearest_sample(offset: Seconds, dt: Seconds) -> i64 {
    (offset / dt).round() as i64
}
