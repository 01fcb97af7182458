use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// Overlay colour of the unfiltered series.
pub const ORIGINAL: Color32 = Color32::RED;

/// Overlay colour of the despiked series.
pub const DESPIKED: Color32 = Color32::BLUE;

/// A distinct colour for the `i`-th figure.
///
/// Hues step by the golden angle so neighbouring figures never share a
/// colour, however many are submitted.
pub fn series_color(i: usize) -> Color32 {
    let hue = (i as f32 * 137.508) % 360.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
