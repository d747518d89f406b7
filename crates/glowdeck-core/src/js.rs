//! Number printing compatible with the web UI that consumes our strings.

use ryu_js::Buffer;

/// Formats `v` the way JavaScript's `String(v)` does (`180`, `0.7`, `25.5`).
pub(crate) fn js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    // JS prints negative zero as "0".
    let v = if v == 0.0 { 0.0 } else { v };
    let mut b = Buffer::new();
    b.format_finite(v).to_string()
}

/// `Math.round`: halves round toward positive infinity.
pub(crate) fn js_round(v: f64) -> f64 {
    (v + 0.5).floor()
}
