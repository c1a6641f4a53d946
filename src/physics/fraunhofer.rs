// ---------------------------------------------------------------------------
// Fraunhofer diffraction model
// ---------------------------------------------------------------------------
//
// Closed-form far-field intensity for a single slit and for a double slit,
// both normalized so the brightest sample equals 1.0. All inputs are SI
// (meters). No input validation: a zero wavelength or screen distance
// propagates as inf/NaN through ordinary float arithmetic.

/// Phase term across an aperture: `π · dimension · x / (λ · L)` per sample.
///
/// `dimension` is the slit width for the diffraction envelope (β) or the
/// slit separation for the interference term (δ).
pub fn phase_term(dimension: f64, positions: &[f64], wavelength: f64, distance: f64) -> Vec<f64> {
    positions
        .iter()
        .map(|&x| std::f64::consts::PI * dimension * x / (wavelength * distance))
        .collect()
}

/// `sin(x) / x` with the removable singularity filled in: `sinc(0) = 1`.
///
/// This is the unnormalized sinc applied directly to the phase term, so the
/// single-slit pattern reads `[sin β / β]²`. Only an exact zero needs the
/// special case; `sin(x)/x` is well-conditioned for small nonzero `x`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Divide every sample by the curve maximum so the peak equals 1.0.
fn normalize_peak(mut raw: Vec<f64>) -> Vec<f64> {
    let max = raw.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    for v in &mut raw {
        *v /= max;
    }
    raw
}

/// Normalized single-slit intensity: `[sin β / β]²`, peak scaled to 1.0.
pub fn single_slit_intensity(
    positions: &[f64],
    wavelength: f64,
    slit_width: f64,
    distance: f64,
) -> Vec<f64> {
    let beta = phase_term(slit_width, positions, wavelength, distance);
    let raw: Vec<f64> = beta.iter().map(|&b| sinc(b).powi(2)).collect();
    normalize_peak(raw)
}

/// Normalized double-slit intensity: the single-slit envelope from the slit
/// width modulating a `cos² δ` interference term from the slit separation,
/// peak scaled to 1.0.
pub fn double_slit_intensity(
    positions: &[f64],
    wavelength: f64,
    slit_width: f64,
    slit_separation: f64,
    distance: f64,
) -> Vec<f64> {
    let beta = phase_term(slit_width, positions, wavelength, distance);
    let delta = phase_term(slit_separation, positions, wavelength, distance);
    let raw: Vec<f64> = beta
        .iter()
        .zip(delta.iter())
        .map(|(&b, &d)| sinc(b).powi(2) * d.cos().powi(2))
        .collect();
    normalize_peak(raw)
}

/// Minimum screen distance for the far-field approximation: `10 · a² / λ`.
///
/// The factor of 10 is the conventional safety margin over the Fresnel
/// distance, not something derived here.
pub fn fraunhofer_min_distance(slit_width: f64, wavelength: f64) -> f64 {
    10.0 * slit_width * slit_width / wavelength
}

/// True when the screen is far enough away for the Fraunhofer (far-field)
/// approximation to hold.
pub fn is_fraunhofer(slit_width: f64, wavelength: f64, distance: f64) -> bool {
    distance >= fraunhofer_min_distance(slit_width, wavelength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::axis::linspace;
    use approx::assert_relative_eq;

    const WAVELENGTH: f64 = 500e-9;
    const SLIT_WIDTH: f64 = 0.1e-3;
    const SLIT_SEPARATION: f64 = 0.5e-3;
    const DISTANCE: f64 = 1.0;

    fn screen() -> Vec<f64> {
        // Odd count so x = 0 is sampled exactly.
        linspace(-0.02, 0.02, 3001)
    }

    #[test]
    fn phase_term_matches_formula() {
        let positions = [0.0, 0.01, -0.01];
        let beta = phase_term(SLIT_WIDTH, &positions, WAVELENGTH, DISTANCE);
        assert_eq!(beta.len(), positions.len());
        assert_relative_eq!(beta[0], 0.0);
        assert_relative_eq!(
            beta[1],
            std::f64::consts::PI * SLIT_WIDTH * 0.01 / (WAVELENGTH * DISTANCE),
            max_relative = 1e-12
        );
        assert_relative_eq!(beta[2], -beta[1], max_relative = 1e-12);
    }

    #[test]
    fn sinc_is_one_at_zero() {
        assert_eq!(sinc(0.0), 1.0);
        assert_relative_eq!(sinc(1e-8), 1.0, epsilon = 1e-12);
        assert_relative_eq!(sinc(std::f64::consts::PI), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_slit_output_shape() {
        let positions = screen();
        let intensity = single_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, DISTANCE);
        assert_eq!(intensity.len(), positions.len());
        assert!(intensity.iter().all(|&v| v >= 0.0));
        let max = intensity.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn single_slit_peak_is_at_center() {
        let positions = [-0.01, -0.005, 0.0, 0.005, 0.01];
        let intensity = single_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, DISTANCE);
        assert_eq!(intensity[2], 1.0);
    }

    #[test]
    fn single_slit_is_even_in_position() {
        let positions = screen();
        let intensity = single_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, DISTANCE);
        let n = positions.len();
        for i in 0..n {
            assert_relative_eq!(intensity[i], intensity[n - 1 - i], epsilon = 1e-9);
        }
    }

    #[test]
    fn double_slit_output_shape() {
        let positions = screen();
        let intensity =
            double_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, SLIT_SEPARATION, DISTANCE);
        assert_eq!(intensity.len(), positions.len());
        assert!(intensity.iter().all(|&v| v >= 0.0));
        let max = intensity.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_separation_reduces_to_single_slit() {
        let positions = screen();
        let single = single_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, DISTANCE);
        let double = double_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, 0.0, DISTANCE);
        for (s, d) in single.iter().zip(double.iter()) {
            assert_relative_eq!(s, d, epsilon = 1e-12);
        }
    }

    #[test]
    fn scaling_all_lengths_leaves_curves_unchanged() {
        // Each phase term is (dimension · x) / (λ · L), a ratio of two
        // length-squared products, so scaling every length by k cancels.
        let positions = screen();
        let base =
            double_slit_intensity(&positions, WAVELENGTH, SLIT_WIDTH, SLIT_SEPARATION, DISTANCE);
        let k = 3.7;
        let scaled_positions: Vec<f64> = positions.iter().map(|&x| x * k).collect();
        let scaled = double_slit_intensity(
            &scaled_positions,
            WAVELENGTH * k,
            SLIT_WIDTH * k,
            SLIT_SEPARATION * k,
            DISTANCE * k,
        );
        for (a, b) in base.iter().zip(scaled.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn regime_predicate_threshold_cases() {
        // L = 1 m against a 0.2 m threshold.
        assert!(is_fraunhofer(0.1e-3, 500e-9, 1.0));
        // L = 0.1 m against a 20 m threshold.
        assert!(!is_fraunhofer(1e-3, 500e-9, 0.1));
    }

    #[test]
    fn min_distance_matches_rule_of_thumb() {
        assert_relative_eq!(fraunhofer_min_distance(0.1e-3, 500e-9), 0.2, epsilon = 1e-12);
        assert_relative_eq!(fraunhofer_min_distance(1e-3, 500e-9), 20.0, epsilon = 1e-9);
    }
}
