//! Fourier synthesis of a square wave from its odd harmonics.

use std::f64::consts::PI;

/// Partial sum of the Fourier series of a unit square wave at pulsation
/// `omega`,
///
/// ```text
/// s_n(t) = 4/π Σ_{p<n} sin((2p+1)·ω·t) / (2p+1)
/// ```
pub fn square_wave_partial_sum(n: usize, omega: f64, t: f64) -> f64 {
    let total: f64
        = (0..n)
        .map(|p| {
            let harmonic = (2 * p + 1) as f64;
            (harmonic * omega * t).sin() / harmonic
        })
        .sum();
    4.0 * total / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sums_converge_on_the_plateau() {
        // at a quarter period the square wave is exactly 1; the alternating
        // series converges there at rate 1/(2n)
        let omega = 2.0 * PI;
        let t = 0.25;
        assert!((square_wave_partial_sum(1000, omega, t) - 1.0).abs() < 1e-3);
        assert!(square_wave_partial_sum(1, omega, t) > 1.2);
    }

    #[test]
    fn synthesis_is_odd_in_time() {
        let omega = 2.0 * PI * 50.0;
        for &t in &[1e-3, 3.7e-3, 9.1e-3] {
            let plus = square_wave_partial_sum(25, omega, t);
            let minus = square_wave_partial_sum(25, omega, -t);
            assert!((plus + minus).abs() < 1e-12);
        }
    }
}
