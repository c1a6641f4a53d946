use crate::physics::axis::ScreenAxis;
use crate::physics::fraunhofer::{
    double_slit_intensity, fraunhofer_min_distance, is_fraunhofer, single_slit_intensity,
};
use crate::physics::params::SlitParams;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The computed curves for the current parameters.
#[derive(Debug, Clone, Default)]
pub struct Curves {
    /// Screen positions in meters (shared x axis of both plots).
    pub positions: Vec<f64>,
    /// Normalized single-slit intensity, same length as `positions`.
    pub single: Vec<f64>,
    /// Normalized double-slit intensity, same length as `positions`.
    pub double: Vec<f64>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current physical parameters, in slider units.
    pub params: SlitParams,

    /// Observation-screen sampling.
    pub screen: ScreenAxis,

    /// Curves derived from `params` and `screen` (cached between frames).
    pub curves: Curves,

    /// Whether the far-field approximation holds for the current parameters.
    pub fraunhofer_ok: bool,

    /// Minimum screen distance for the far-field regime, in meters.
    pub min_far_field_distance_m: f64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            params: SlitParams::default(),
            screen: ScreenAxis::default(),
            curves: Curves::default(),
            fraunhofer_ok: false,
            min_far_field_distance_m: 0.0,
            status_message: None,
        };
        state.recompute();
        state
    }
}

impl AppState {
    /// Re-derive curves and the regime verdict from the current parameters.
    ///
    /// Everything is recomputed from scratch; there is no incremental state
    /// to keep consistent.
    pub fn recompute(&mut self) {
        let positions = self.screen.positions();
        let wavelength = self.params.wavelength_m();
        let slit_width = self.params.slit_width_m();
        let separation = self.params.slit_separation_m();
        let distance = self.params.screen_distance();

        self.curves.single = single_slit_intensity(&positions, wavelength, slit_width, distance);
        self.curves.double =
            double_slit_intensity(&positions, wavelength, slit_width, separation, distance);
        self.curves.positions = positions;

        self.fraunhofer_ok = is_fraunhofer(slit_width, wavelength, distance);
        self.min_far_field_distance_m = fraunhofer_min_distance(slit_width, wavelength);
    }

    /// Replace the parameters wholesale (preset load, reset) and recompute.
    pub fn apply_params(&mut self, params: SlitParams) {
        self.params = params;
        self.status_message = None;
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_consistent_curves() {
        let state = AppState::default();
        assert_eq!(state.curves.positions.len(), state.screen.samples);
        assert_eq!(state.curves.single.len(), state.curves.positions.len());
        assert_eq!(state.curves.double.len(), state.curves.positions.len());
        // 1 m screen distance vs. a 0.2 m threshold for the defaults.
        assert!(state.fraunhofer_ok);
    }

    #[test]
    fn apply_params_refreshes_verdict() {
        let mut state = AppState::default();
        state.apply_params(SlitParams {
            slit_width_mm: 0.3,
            screen_distance_m: 0.1,
            ..SlitParams::default()
        });
        // 0.1 m against 10 · (0.3 mm)² / 500 nm = 1.8 m.
        assert!(!state.fraunhofer_ok);
    }
}
