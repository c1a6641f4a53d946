//! Headless companion: write the default-parameter diffraction pattern to a
//! CSV file without starting the GUI. Handy for piping the curves into other
//! plotting tools.

use std::path::Path;

use anyhow::Result;

use slitscope::export::export_csv;
use slitscope::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let state = AppState::default();
    let path = Path::new("diffraction_pattern.csv");
    export_csv(path, &state.curves)?;

    log::info!(
        "Wrote {} samples (λ = {} nm, a = {} mm, d = {} mm, L = {} m)",
        state.curves.positions.len(),
        state.params.wavelength_nm,
        state.params.slit_width_mm,
        state.params.slit_separation_mm,
        state.params.screen_distance_m
    );
    println!("Wrote {}", path.display());
    Ok(())
}
