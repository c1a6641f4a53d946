use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::params::SlitParams;

// ---------------------------------------------------------------------------
// Named parameter presets
// ---------------------------------------------------------------------------

/// A named parameter set, stored on disk as JSON:
///
/// ```json
/// {
///   "name": "Green laser pointer",
///   "params": {
///     "wavelength_nm": 532.0,
///     "slit_width_mm": 0.1,
///     "slit_separation_mm": 0.25,
///     "screen_distance_m": 2.0
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub params: SlitParams,
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("reading/writing preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Classroom-standard configurations offered in the UI.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Default (500 nm)".to_string(),
            params: SlitParams::default(),
        },
        Preset {
            name: "Red laser pointer".to_string(),
            params: SlitParams {
                wavelength_nm: 650.0,
                slit_width_mm: 0.05,
                slit_separation_mm: 0.25,
                screen_distance_m: 2.0,
            },
        },
        Preset {
            name: "Green laser pointer".to_string(),
            params: SlitParams {
                wavelength_nm: 532.0,
                slit_width_mm: 0.1,
                slit_separation_mm: 0.25,
                screen_distance_m: 2.0,
            },
        },
        Preset {
            name: "Sodium lamp, narrow slits".to_string(),
            params: SlitParams {
                wavelength_nm: 589.0,
                slit_width_mm: 0.02,
                slit_separation_mm: 0.1,
                screen_distance_m: 1.0,
            },
        },
    ]
}

pub fn load_preset(path: &Path) -> Result<Preset, PresetError> {
    let text = std::fs::read_to_string(path)?;
    parse_preset(&text)
}

pub fn save_preset(path: &Path, preset: &Preset) -> Result<(), PresetError> {
    std::fs::write(path, preset_json(preset)?)?;
    Ok(())
}

fn parse_preset(json: &str) -> Result<Preset, PresetError> {
    Ok(serde_json::from_str(json)?)
}

fn preset_json(preset: &Preset) -> Result<String, PresetError> {
    Ok(serde_json::to_string_pretty(preset)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_round_trips_through_json() {
        let original = Preset {
            name: "Bench setup".to_string(),
            params: SlitParams {
                wavelength_nm: 633.0,
                slit_width_mm: 0.08,
                slit_separation_mm: 0.4,
                screen_distance_m: 1.5,
            },
        };
        let json = preset_json(&original).unwrap();
        let restored = parse_preset(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_preset("{not json").unwrap_err();
        assert!(matches!(err, PresetError::Parse(_)));
    }

    #[test]
    fn builtins_stay_inside_slider_ranges() {
        for preset in builtin_presets() {
            let p = preset.params;
            assert!(
                SlitParams::WAVELENGTH_RANGE_NM.contains(&p.wavelength_nm),
                "{}",
                preset.name
            );
            assert!(SlitParams::SLIT_WIDTH_RANGE_MM.contains(&p.slit_width_mm));
            assert!(SlitParams::SLIT_SEPARATION_RANGE_MM.contains(&p.slit_separation_mm));
            assert!(SlitParams::SCREEN_DISTANCE_RANGE_M.contains(&p.screen_distance_m));
        }
    }
}
