//! Hue interpolation on the color wheel
//!
//! Hue is circular (mod 360°), so a gradient between two hues must pick the
//! shorter of the two arcs. Interpolating raw degree values would sweep the
//! long way around whenever the endpoints straddle the 0°/360° seam.

use libm::fmodf;

use super::HUE_DEGREES;

const HALF_TURN: f32 = HUE_DEGREES / 2.0;

/// Signed distance from `from` to `to` along the shorter arc
///
/// The result is in `[-180, 180]`. Both inputs are expected in `[0, 360)`,
/// so the raw difference never exceeds one full turn.
pub fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let mut delta = to - from;
    if delta > HALF_TURN {
        delta -= HUE_DEGREES;
    } else if delta < -HALF_TURN {
        delta += HUE_DEGREES;
    }
    delta
}

/// Wrap a hue into `[0, 360)`
///
/// A tiny negative hue rounds up to exactly 360.0 in `f32` once a full turn
/// is added, so that case is folded back to 0. Non-finite hues map to 0.
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut hue = fmodf(hue, HUE_DEGREES);
    if hue < 0.0 {
        hue += HUE_DEGREES;
    }
    if hue >= HUE_DEGREES {
        hue = 0.0;
    }
    hue
}

/// Hue at `usage` (0.0..=1.0) of the way from `cold` to `hot`
///
/// Sweeps the shorter arc between the two hues. `usage` outside the unit
/// range is clamped.
pub fn interpolate_hue(cold: f32, hot: f32, usage: f32) -> f32 {
    let usage = usage.clamp(0.0, 1.0);
    let delta = shortest_hue_delta(cold, hot);
    normalize_hue(cold + delta * usage)
}
