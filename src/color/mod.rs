mod blend;
mod gradient;
mod hsl;

use smart_leds::RGB8;

pub use blend::{BlendingMode, blend};
pub use gradient::{interpolate_hue, normalize_hue, shortest_hue_delta};
pub use hsl::{Hsl, hsl_to_rgb};

pub type Rgb = RGB8;

/// Number of degrees in a full turn of the hue wheel
pub const HUE_DEGREES: f32 = 360.0;

/// Upper bound for saturation and lightness percentages
pub const MAX_PERCENT: u8 = 100;
