use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::physics::params::SlitParams;

// ---------------------------------------------------------------------------
// Wavelength → colour
// ---------------------------------------------------------------------------

/// Approximate hue of the visible spectrum: violet (~270°) at 380 nm down
/// to red (0°) at 750 nm, linear in wavelength. Good enough for telling the
/// user what colour of light they are simulating.
const VIOLET_HUE_DEG: f32 = 270.0;

/// Colour of monochromatic light at the given wavelength (nm).
///
/// Wavelengths outside the slider range are clamped to its ends.
pub fn wavelength_color(wavelength_nm: f64) -> Color32 {
    let range = SlitParams::WAVELENGTH_RANGE_NM;
    let (lo, hi) = (*range.start(), *range.end());
    let nm = wavelength_nm.clamp(lo, hi);

    let t = ((hi - nm) / (hi - lo)) as f32;
    let hsl = Hsl::new(t * VIOLET_HUE_DEG, 0.9, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_end_of_spectrum_is_red() {
        let c = wavelength_color(750.0);
        assert!(c.r() > c.g() && c.r() > c.b());
    }

    #[test]
    fn short_wavelengths_lean_blue() {
        let c = wavelength_color(400.0);
        assert!(c.b() > c.g());
    }

    #[test]
    fn out_of_range_wavelengths_clamp() {
        assert_eq!(wavelength_color(100.0), wavelength_color(380.0));
        assert_eq!(wavelength_color(10_000.0), wavelength_color(750.0));
    }
}
