use core::fmt;

/// Static configuration fault, detected before a heatmap exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The pixel map has no entries
    EmptyPixelMap,
    /// The pixel map is longer than the slot capacity
    TooManySlots { len: usize, capacity: usize },
    /// A hue outside `[0, 360)`
    InvalidHue(u16),
    /// A saturation above 100 %
    InvalidSaturation(u8),
    /// A lightness above 100 %
    InvalidLightness(u8),
    /// A pixel map entry past the end of the pixel buffer
    PixelOutOfRange { pixel: usize, num_pixels: usize },
    /// More configuration records than instance capacity
    TooManyInstances { len: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPixelMap => write!(f, "pixel map is empty"),
            Self::TooManySlots { len, capacity } => {
                write!(f, "pixel map has {} entries, capacity is {}", len, capacity)
            }
            Self::InvalidHue(hue) => write!(f, "hue {} is outside 0..360", hue),
            Self::InvalidSaturation(value) => {
                write!(f, "saturation {} is above 100", value)
            }
            Self::InvalidLightness(value) => write!(f, "lightness {} is above 100", value),
            Self::PixelOutOfRange { pixel, num_pixels } => {
                write!(f, "pixel {} is outside the {} pixel buffer", pixel, num_pixels)
            }
            Self::TooManyInstances { len, capacity } => {
                write!(f, "{} heatmap configs, capacity is {}", len, capacity)
            }
        }
    }
}

/// Rejected key event
///
/// Only the offending event is dropped, the heatmap keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapError {
    /// The key position translated to a slot past the end of the pixel map
    SlotOutOfRange { slot: usize, len: usize },
    /// The key position has no tracked slot
    UnmappedPosition(u32),
}

impl fmt::Display for HeatmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotOutOfRange { slot, len } => {
                write!(f, "slot {} is out of range for {} slots", slot, len)
            }
            Self::UnmappedPosition(position) => {
                write!(f, "key position {} has no slot", position)
            }
        }
    }
}
