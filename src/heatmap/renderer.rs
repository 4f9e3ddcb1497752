//! Usage counts to pixel colors
//!
//! Stateless: the output depends only on the counts and the configuration,
//! so rendering twice with unchanged counts composites the same colors.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Hsl, Rgb, blend, hsl_to_rgb, interpolate_hue};
use crate::config::Gradient;

/// Largest count, floored at 1 so an untouched keyboard divides cleanly
pub fn max_count(counts: &[u32]) -> u32 {
    counts.iter().copied().max().unwrap_or(0).max(1)
}

/// `count / max` as a ratio in `[0.0, 1.0]`
#[allow(clippy::cast_precision_loss)]
pub fn usage_ratio(count: u32, max: u32) -> f32 {
    (count as f32 / max.max(1) as f32).min(1.0)
}

/// Gradient color for a usage ratio
pub fn usage_color(gradient: &Gradient, usage: f32) -> Rgb {
    let hue = interpolate_hue(gradient.cold_hue_deg(), gradient.hot_hue_deg(), usage);
    hsl_to_rgb(Hsl::new(hue, gradient.saturation, gradient.lightness))
}

/// Composite one frame of the heatmap into `pixels`
///
/// `counts[slot]` is drawn at `pixels[pixel_map[slot]]`, blended with the
/// color already there. Slots mapped past the end of `pixels` are skipped.
pub fn render_frame(counts: &[u32], pixel_map: &[usize], gradient: &Gradient, pixels: &mut [Rgb]) {
    let max = max_count(counts);

    for (&count, &pixel_index) in counts.iter().zip(pixel_map) {
        let Some(pixel) = pixels.get_mut(pixel_index) else {
            #[cfg(feature = "esp32-log")]
            println!(
                "[render_frame] pixel {} is outside the {} pixel buffer",
                pixel_index,
                pixels.len()
            );
            continue;
        };
        let color = usage_color(gradient, usage_ratio(count, max));
        *pixel = blend(*pixel, color, gradient.blending_mode);
    }
}
