use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical parameters
// ---------------------------------------------------------------------------

/// The four physical parameters of the experiment, stored in the units the
/// sliders display (nm / mm / m). Passed by value into the physics layer;
/// the `*_m` accessors are the single place units are converted to SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlitParams {
    /// Wavelength of the light, in nanometers.
    pub wavelength_nm: f64,
    /// Width of each slit, in millimeters.
    pub slit_width_mm: f64,
    /// Center-to-center slit separation, in millimeters.
    pub slit_separation_mm: f64,
    /// Distance from the slits to the observation screen, in meters.
    pub screen_distance_m: f64,
}

impl Default for SlitParams {
    fn default() -> Self {
        Self {
            wavelength_nm: 500.0,
            slit_width_mm: 0.1,
            slit_separation_mm: 0.5,
            screen_distance_m: 1.0,
        }
    }
}

impl SlitParams {
    // Slider ranges, covering the visible spectrum and tabletop geometries.
    pub const WAVELENGTH_RANGE_NM: std::ops::RangeInclusive<f64> = 380.0..=750.0;
    pub const SLIT_WIDTH_RANGE_MM: std::ops::RangeInclusive<f64> = 0.01..=0.3;
    pub const SLIT_SEPARATION_RANGE_MM: std::ops::RangeInclusive<f64> = 0.1..=1.0;
    pub const SCREEN_DISTANCE_RANGE_M: std::ops::RangeInclusive<f64> = 0.1..=5.0;

    pub fn wavelength_m(&self) -> f64 {
        self.wavelength_nm * 1e-9
    }

    pub fn slit_width_m(&self) -> f64 {
        self.slit_width_mm * 1e-3
    }

    pub fn slit_separation_m(&self) -> f64 {
        self.slit_separation_mm * 1e-3
    }

    pub fn screen_distance(&self) -> f64 {
        self.screen_distance_m
    }
}
