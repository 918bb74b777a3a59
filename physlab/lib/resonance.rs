//! Transfer functions of the driven, damped harmonic oscillator and the
//! transmission of a Fabry-Perot cavity.

use std::f64::consts::PI;

/// Magnitude of the position transfer function at pulsation `omega` for
/// resonant pulsation `omega0` and quality factor `q`.
pub fn transfer_position(omega: f64, omega0: f64, q: f64) -> f64 {
    let u = omega / omega0;
    let den = u.powi(2) + q.powi(2) * (1.0 - u.powi(2)).powi(2);
    q / (omega0.powi(2) * den.sqrt())
}

/// Magnitude of the velocity transfer function; resonant at `omega0` for any
/// quality factor.
pub fn transfer_velocity(omega: f64, omega0: f64, q: f64) -> f64 {
    let den = 1.0 + q.powi(2) * (omega / omega0 - omega0 / omega).powi(2);
    q / (omega0 * den.sqrt())
}

/// Wavenumber of a monochromatic wave of the given wavelength.
pub fn wavenumber(wavelength: f64) -> f64 {
    2.0 * PI / wavelength
}

/// Transmission of a Fabry-Perot cavity with mirror reflectance `r`, length
/// `d`, internal propagation angle `theta`, and wavelength `wavelength`,
///
/// ```text
/// T = (1 - R)² / (1 + R² - 2R·cos(2·d·k·cosθ))
/// ```
pub fn fabry_perot_transmission(
    r: f64,
    d: f64,
    theta: f64,
    wavelength: f64,
) -> f64 {
    let k = wavenumber(wavelength);
    let phase = (2.0 * d * k * theta.cos()).cos();
    (1.0 - r).powi(2) / (1.0 + r.powi(2) - 2.0 * r * phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_resonance_peaks_exactly_at_omega0() {
        let (omega0, q) = (5.0, 2.0);
        let at_peak = transfer_velocity(omega0, omega0, q);
        assert!((at_peak - q / omega0).abs() < 1e-12);
        assert!(at_peak > transfer_velocity(0.9 * omega0, omega0, q));
        assert!(at_peak > transfer_velocity(1.1 * omega0, omega0, q));
    }

    #[test]
    fn position_response_flattens_at_low_frequency() {
        // static limit: |H_x| -> Q/ω0² · 1/Q = 1/ω0² as ω -> 0
        let (omega0, q) = (5.0, 0.7);
        let low = transfer_position(1e-6, omega0, q);
        assert!((low - omega0.powi(2).recip()).abs() < 1e-9);
    }

    #[test]
    fn cavity_transmits_fully_at_half_wavelength_spacing() {
        let wavelength = 600e-9;
        for r in [0.2, 0.8, 0.95] {
            let t = fabry_perot_transmission(
                r, wavelength / 2.0, 0.0, wavelength);
            assert!((t - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn high_reflectance_narrows_the_cavity_fringes() {
        let wavelength = 600e-9;
        // off resonance by an eighth wave
        let d = wavelength / 2.0 + wavelength / 8.0;
        let leaky = fabry_perot_transmission(0.2, d, 0.0, wavelength);
        let sharp = fabry_perot_transmission(0.95, d, 0.0, wavelength);
        assert!(sharp < leaky);
    }
}
