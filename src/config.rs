//! Static heatmap configuration
//!
//! Built once, validated, and never mutated afterwards.

use heapless::Vec;

use crate::color::{BlendingMode, HUE_DEGREES, MAX_PERCENT};
use crate::error::ConfigError;

const DEFAULT_COLD_HUE: u16 = 240;
const DEFAULT_HOT_HUE: u16 = 0;
const DEFAULT_SATURATION: u8 = 100;
const DEFAULT_LIGHTNESS: u8 = 50;

/// Color gradient from rarely used ("cold") to most used ("hot") keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Hue of never-pressed keys, degrees
    pub cold_hue: u16,
    /// Hue of the most pressed key, degrees
    pub hot_hue: u16,
    /// Saturation in percent
    pub saturation: u8,
    /// Lightness in percent
    pub lightness: u8,
    /// How rendered colors combine with lower layers
    pub blending_mode: BlendingMode,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            cold_hue: DEFAULT_COLD_HUE,
            hot_hue: DEFAULT_HOT_HUE,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            blending_mode: BlendingMode::Normal,
        }
    }
}

impl Gradient {
    /// Set both ends of the hue gradient
    #[must_use]
    pub fn with_hues(mut self, cold_hue: u16, hot_hue: u16) -> Self {
        self.cold_hue = cold_hue;
        self.hot_hue = hot_hue;
        self
    }

    /// Set the saturation
    #[must_use]
    pub fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the lightness
    #[must_use]
    pub fn with_lightness(mut self, lightness: u8) -> Self {
        self.lightness = lightness;
        self
    }

    /// Set the blending mode
    #[must_use]
    pub fn with_blending_mode(mut self, mode: BlendingMode) -> Self {
        self.blending_mode = mode;
        self
    }

    /// Check that every field is in its native range
    pub fn validate(&self) -> Result<(), ConfigError> {
        for hue in [self.cold_hue, self.hot_hue] {
            if f32::from(hue) >= HUE_DEGREES {
                return Err(ConfigError::InvalidHue(hue));
            }
        }
        if self.saturation > MAX_PERCENT {
            return Err(ConfigError::InvalidSaturation(self.saturation));
        }
        if self.lightness > MAX_PERCENT {
            return Err(ConfigError::InvalidLightness(self.lightness));
        }
        Ok(())
    }

    pub(crate) fn cold_hue_deg(&self) -> f32 {
        f32::from(self.cold_hue)
    }

    pub(crate) fn hot_hue_deg(&self) -> f32 {
        f32::from(self.hot_hue)
    }
}

/// Configuration of one heatmap instance
///
/// `SLOTS` is the maximum number of tracked keys.
#[derive(Debug, Clone)]
pub struct HeatmapConfig<const SLOTS: usize> {
    pixel_map: Vec<usize, SLOTS>,
    gradient: Gradient,
}

impl<const SLOTS: usize> HeatmapConfig<SLOTS> {
    /// Create a validated configuration
    ///
    /// `pixel_map[slot]` is the index of the light pixel showing that slot.
    pub fn new(pixel_map: &[usize], gradient: Gradient) -> Result<Self, ConfigError> {
        if pixel_map.is_empty() {
            return Err(ConfigError::EmptyPixelMap);
        }
        gradient.validate()?;
        let pixel_map = Vec::from_slice(pixel_map).map_err(|()| ConfigError::TooManySlots {
            len: pixel_map.len(),
            capacity: SLOTS,
        })?;

        Ok(Self {
            pixel_map,
            gradient,
        })
    }

    /// Slot to pixel index mapping
    pub fn pixel_map(&self) -> &[usize] {
        &self.pixel_map
    }

    /// Number of tracked slots
    pub fn len(&self) -> usize {
        self.pixel_map.len()
    }

    /// Always false for a validated config
    pub fn is_empty(&self) -> bool {
        self.pixel_map.is_empty()
    }

    /// Check that every mapped pixel exists in a buffer of `num_pixels`
    pub fn check_pixels(&self, num_pixels: usize) -> Result<(), ConfigError> {
        match self.pixel_map.iter().find(|&&pixel| pixel >= num_pixels) {
            Some(&pixel) => Err(ConfigError::PixelOutOfRange { pixel, num_pixels }),
            None => Ok(()),
        }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}
