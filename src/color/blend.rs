//! Pixel compositing modes
//!
//! Each mode combines the color already in a pixel (written by an earlier
//! layer) with a newly rendered color, channel by channel.

use super::Rgb;

const BLEND_NAME_NORMAL: &str = "normal";
const BLEND_NAME_MULTIPLY: &str = "multiply";
const BLEND_NAME_LIGHTEN: &str = "lighten";
const BLEND_NAME_DARKEN: &str = "darken";
const BLEND_NAME_SCREEN: &str = "screen";
const BLEND_NAME_ADD: &str = "add";
const BLEND_NAME_SUBTRACT: &str = "subtract";

const BLEND_ID_NORMAL: u8 = 0;
const BLEND_ID_MULTIPLY: u8 = 1;
const BLEND_ID_LIGHTEN: u8 = 2;
const BLEND_ID_DARKEN: u8 = 3;
const BLEND_ID_SCREEN: u8 = 4;
const BLEND_ID_ADD: u8 = 5;
const BLEND_ID_SUBTRACT: u8 = 6;

/// How a rendered color combines with the existing pixel value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlendingMode {
    /// Replace the existing color
    #[default]
    Normal = BLEND_ID_NORMAL,
    Multiply = BLEND_ID_MULTIPLY,
    Lighten = BLEND_ID_LIGHTEN,
    Darken = BLEND_ID_DARKEN,
    Screen = BLEND_ID_SCREEN,
    /// Saturating sum
    Add = BLEND_ID_ADD,
    /// Saturating difference, existing minus new
    Subtract = BLEND_ID_SUBTRACT,
}

impl BlendingMode {
    /// Blending mode from its configuration enum index
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BLEND_ID_NORMAL => Self::Normal,
            BLEND_ID_MULTIPLY => Self::Multiply,
            BLEND_ID_LIGHTEN => Self::Lighten,
            BLEND_ID_DARKEN => Self::Darken,
            BLEND_ID_SCREEN => Self::Screen,
            BLEND_ID_ADD => Self::Add,
            BLEND_ID_SUBTRACT => Self::Subtract,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => BLEND_NAME_NORMAL,
            Self::Multiply => BLEND_NAME_MULTIPLY,
            Self::Lighten => BLEND_NAME_LIGHTEN,
            Self::Darken => BLEND_NAME_DARKEN,
            Self::Screen => BLEND_NAME_SCREEN,
            Self::Add => BLEND_NAME_ADD,
            Self::Subtract => BLEND_NAME_SUBTRACT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BLEND_NAME_NORMAL => Some(Self::Normal),
            BLEND_NAME_MULTIPLY => Some(Self::Multiply),
            BLEND_NAME_LIGHTEN => Some(Self::Lighten),
            BLEND_NAME_DARKEN => Some(Self::Darken),
            BLEND_NAME_SCREEN => Some(Self::Screen),
            BLEND_NAME_ADD => Some(Self::Add),
            BLEND_NAME_SUBTRACT => Some(Self::Subtract),
            _ => None,
        }
    }

    #[inline]
    fn apply(self, existing: u8, new: u8) -> u8 {
        match self {
            Self::Normal => new,
            Self::Multiply => mul8(existing, new),
            Self::Lighten => existing.max(new),
            Self::Darken => existing.min(new),
            Self::Screen => 255 - mul8(255 - existing, 255 - new),
            Self::Add => existing.saturating_add(new),
            Self::Subtract => existing.saturating_sub(new),
        }
    }
}

/// Multiply two 8-bit fractions with rounding (255 * 255 = 255)
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn mul8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

/// Composite `new` onto `existing` using `mode`
#[inline]
pub fn blend(existing: Rgb, new: Rgb, mode: BlendingMode) -> Rgb {
    Rgb {
        r: mode.apply(existing.r, new.r),
        g: mode.apply(existing.g, new.g),
        b: mode.apply(existing.b, new.b),
    }
}
