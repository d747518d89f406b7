//! Bounded arithmetic shared by every meter and tone helper.

use crate::error::{Error, Result};

pub const DEFAULT_NORMALIZE_MIN: f64 = 0.0;
pub const DEFAULT_NORMALIZE_MAX: f64 = 100.0;

/// Limits `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: with `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Maps `value` onto `[0, 1]` relative to `[min, max]`, clamping first.
///
/// Fails with [`Error::InvalidRange`] when `max <= min`.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64> {
    if max <= min {
        tracing::debug!(min, max, "rejecting empty normalization range");
        return Err(Error::InvalidRange { min, max });
    }
    Ok((clamp(value, min, max) - min) / (max - min))
}

/// [`normalize`] over the default `0..=100` percentage range.
pub fn normalize_percent(value: f64) -> f64 {
    (clamp(value, DEFAULT_NORMALIZE_MIN, DEFAULT_NORMALIZE_MAX) - DEFAULT_NORMALIZE_MIN)
        / (DEFAULT_NORMALIZE_MAX - DEFAULT_NORMALIZE_MIN)
}
