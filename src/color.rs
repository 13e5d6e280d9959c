use eframe::egui::Color32;
use palette::{LinSrgb, Srgb};

use crate::chart::spec::LineColor;
use crate::data::constants::METERS_PER_MICROMETER;
use crate::data::spectral::SpectralModel;

// ---------------------------------------------------------------------------
// Chart line colours
// ---------------------------------------------------------------------------

pub fn line_color(color: LineColor) -> Color32 {
    match color {
        LineColor::Black => Color32::BLACK,
        LineColor::Red => Color32::from_rgb(0xd6, 0x27, 0x28),
        LineColor::Blue => Color32::from_rgb(0x1f, 0x4e, 0xd8),
    }
}

// ---------------------------------------------------------------------------
// Body swatch: approximate visible colour of a blackbody
// ---------------------------------------------------------------------------

/// Sample wavelengths (μm) standing in for the red, green and blue channels.
const CHANNEL_WAVELENGTHS_UM: [f64; 3] = [0.610, 0.550, 0.465];

/// Approximate visible colour of a blackbody at `temperature_k`.
///
/// Planck's law is sampled at one wavelength per channel, normalised so the
/// brightest channel is 1, and the result treated as linear RGB.
pub fn body_swatch(model: &SpectralModel, temperature_k: f64) -> Color32 {
    let [r, g, b] = CHANNEL_WAVELENGTHS_UM
        .map(|um| model.planck_at(um * METERS_PER_MICROMETER, temperature_k));
    let max = r.max(g).max(b);
    if !(max.is_finite() && max > 0.0) {
        return Color32::GRAY;
    }

    let linear = LinSrgb::new((r / max) as f32, (g / max) as f32, (b / max) as f32);
    let rgb: Srgb = Srgb::from_linear(linear);
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}
