//! Glow and pulse tones for meters, cards and status chips.
//!
//! Low values lean magenta (hue 300), high values cyan (hue 180). Intensity also lifts the
//! alpha, the lightness and the glow radius.

use crate::error::Result;
use crate::js::js_number;
use crate::numeric::normalize;
use serde::Serialize;

pub const DEFAULT_GLOW_MAX: f64 = 100.0;

const HUE_HIGH: f64 = 180.0;
const HUE_SPAN: f64 = 120.0;
const ALPHA_BASE: f64 = 0.35;
const ALPHA_SPAN: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlowStrength {
    /// `value` normalized against `0..=max`.
    pub intensity: f64,
    /// Degrees, `180..=300`.
    pub hue: f64,
    /// `0.35..=0.70`.
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PulseTone {
    /// CSS `hsla(...)` fill color.
    pub color: String,
    /// CSS `box-shadow` glow around a fixed cyan.
    pub border: String,
    pub alpha: f64,
    pub intensity: f64,
}

/// Fails with `InvalidRange` when `max <= 0`.
pub fn calculate_glow_strength(value: f64, max: f64) -> Result<GlowStrength> {
    let intensity = normalize(value, 0.0, max)?;
    Ok(GlowStrength {
        intensity,
        hue: HUE_HIGH + (1.0 - intensity) * HUE_SPAN,
        alpha: ALPHA_BASE + intensity * ALPHA_SPAN,
    })
}

pub fn get_pulse_tone(value: f64, max: f64) -> Result<PulseTone> {
    let GlowStrength {
        intensity,
        hue,
        alpha,
    } = calculate_glow_strength(value, max)?;

    let color = format!(
        "hsla({}, 90%, {}%, {})",
        js_number(hue),
        js_number(30.0 + intensity * 40.0),
        js_number(alpha)
    );
    let border = format!(
        "0 0 {}px rgba(0, 255, 255, {})",
        js_number(12.0 + intensity * 18.0),
        js_number(0.35 + intensity * 0.3)
    );

    Ok(PulseTone {
        color,
        border,
        alpha,
        intensity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn clamps_glow_strength_within_bounds() {
        assert_eq!(
            calculate_glow_strength(120.0, 100.0),
            Ok(GlowStrength {
                intensity: 1.0,
                hue: 180.0,
                alpha: 0.7
            })
        );
        assert_eq!(
            calculate_glow_strength(-5.0, 80.0),
            Ok(GlowStrength {
                intensity: 0.0,
                hue: 300.0,
                alpha: 0.35
            })
        );
    }

    #[test]
    fn midpoint_sits_between_magenta_and_cyan() {
        let glow = calculate_glow_strength(50.0, DEFAULT_GLOW_MAX).unwrap();
        assert_eq!(glow.intensity, 0.5);
        assert_eq!(glow.hue, 240.0);
        assert!((glow.alpha - 0.525).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_max_values() {
        assert_eq!(
            calculate_glow_strength(10.0, 0.0),
            Err(Error::InvalidRange { min: 0.0, max: 0.0 })
        );
        assert!(calculate_glow_strength(10.0, -5.0).is_err());
        assert!(get_pulse_tone(10.0, 0.0).is_err());
    }

    #[test]
    fn returns_pulse_friendly_tones() {
        let pulse = get_pulse_tone(75.0, 100.0).unwrap();
        assert!((pulse.intensity - 0.75).abs() < 1e-12);
        assert!(pulse.color.starts_with("hsla(210, 90%, 60%, "));
        assert!(pulse.border.starts_with("0 0 25.5px rgba(0, 255, 255, "));
    }

    #[test]
    fn pulse_tone_extremes_format_like_css() {
        let full = get_pulse_tone(100.0, 100.0).unwrap();
        assert_eq!(full.color, "hsla(180, 90%, 70%, 0.7)");
        assert!(full.border.starts_with("0 0 30px rgba(0, 255, 255, "));

        let idle = get_pulse_tone(0.0, 100.0).unwrap();
        assert_eq!(idle.color, "hsla(300, 90%, 30%, 0.35)");
        assert_eq!(idle.border, "0 0 12px rgba(0, 255, 255, 0.35)");
        assert_eq!(idle.alpha, 0.35);
    }
}
