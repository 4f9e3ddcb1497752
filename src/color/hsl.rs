use libm::{fabsf, fmodf, roundf};

use super::{MAX_PERCENT, Rgb, normalize_hue};

/// Color in the cylindrical hue/saturation/lightness model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub hue: f32,
    /// Saturation in percent (0-100)
    pub saturation: u8,
    /// Lightness in percent (0-100)
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Convert an HSL color to 8-bit RGB
///
/// Out of range saturation or lightness is clamped to 100 %, hue is wrapped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(color: Hsl) -> Rgb {
    let hue = normalize_hue(color.hue);
    let s = f32::from(color.saturation.min(MAX_PERCENT)) / f32::from(MAX_PERCENT);
    let l = f32::from(color.lightness.min(MAX_PERCENT)) / f32::from(MAX_PERCENT);

    let chroma = (1.0 - fabsf(2.0 * l - 1.0)) * s;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - fabsf(fmodf(sector, 2.0) - 1.0));
    let m = l - chroma / 2.0;

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let to_channel = |value: f32| roundf((value + m).clamp(0.0, 1.0) * 255.0) as u8;

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}
