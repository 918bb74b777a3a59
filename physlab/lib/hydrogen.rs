//! Hydrogenic wavefunctions: radial part built from associated Laguerre
//! polynomials, angular part from real spherical harmonics.
//!
//! Lengths are measured in Bohr radii and the nuclear charge is one, so the
//! ground-state radial function is `R₁₀(r) = 2·e⁻ʳ`.

use std::f64::consts::PI;
use ndarray as nd;

fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

// (2m - 1)!! with the empty product equal to 1
fn double_factorial(n: i32) -> f64 {
    let mut value = 1.0;
    let mut k = n;
    while k > 1 {
        value *= k as f64;
        k -= 2;
    }
    value
}

// generalized Laguerre polynomial L_k^α(x) by upward recurrence in k
fn assoc_laguerre(k: u32, alpha: f64, x: f64) -> f64 {
    if k == 0 { return 1.0; }
    let mut lm1 = 1.0;
    let mut l = 1.0 + alpha - x;
    for i in 1..k {
        let i = i as f64;
        let lp1 = ((2.0 * i + 1.0 + alpha - x) * l - (i + alpha) * lm1)
            / (i + 1.0);
        lm1 = l;
        l = lp1;
    }
    l
}

// associated Legendre polynomial P_l^m(x) for m ≥ 0, Condon-Shortley phase
// included, by upward recurrence in l
fn assoc_legendre(l: u32, m: u32, x: f64) -> f64 {
    let mut pmm = (-1.0f64).powi(m as i32)
        * double_factorial(2 * m as i32 - 1)
        * (1.0 - x * x).powf(m as f64 / 2.0);
    if l == m { return pmm; }
    let mut pmmp1 = x * (2.0 * m as f64 + 1.0) * pmm;
    if l == m + 1 { return pmmp1; }
    for ll in (m + 2)..=l {
        let ll = ll as f64;
        let m = m as f64;
        let pll = ((2.0 * ll - 1.0) * x * pmmp1 - (ll + m - 1.0) * pmm)
            / (ll - m);
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pmmp1
}

/// Radial wavefunction `R_{n,l}(r)` of a hydrogen-like atom, `r` in Bohr
/// radii.
///
/// *Panics if `l ≥ n`*.
pub fn radial(r: f64, n: u32, l: u32) -> f64 {
    assert!(l < n, "radial quantum number requires l < n");
    let nr = n - l - 1;
    let nf = n as f64;
    let rho = 2.0 * r / nf;
    let coeff = ((2.0 / nf).powi(3) * factorial(nr)
        / (2.0 * nf * factorial(n + l)))
        .sqrt();
    coeff * (-r / nf).exp() * rho.powi(l as i32)
        * assoc_laguerre(nr, (2 * l + 1) as f64, rho)
}

/// Real part of the spherical harmonic `Y_l^m(θ, φ)` for polar angle `theta`
/// and azimuth `phi`.
pub fn spherical_harmonic(theta: f64, phi: f64, l: u32, m: i32) -> f64 {
    let m_abs = m.unsigned_abs();
    if m_abs > l { return 0.0; }
    let norm = ((2.0 * l as f64 + 1.0) / (4.0 * PI)
        * factorial(l - m_abs) / factorial(l + m_abs))
        .sqrt();
    let plm = assoc_legendre(l, m_abs, theta.cos());
    // Y_l^{-m} = (-1)^m conj(Y_l^m); the real part keeps cos(mφ)
    let sign = if m < 0 && m_abs % 2 == 1 { -1.0 } else { 1.0 };
    sign * norm * plm * (m_abs as f64 * phi).cos()
}

/// Full wavefunction `ψ_{nlm} = R_{nl}(r) · Re Y_l^m(θ, φ)`.
pub fn wavefunction(r: f64, theta: f64, phi: f64, n: u32, l: u32, m: i32)
    -> f64
{
    radial(r, n, l) * spherical_harmonic(theta, phi, l, m)
}

/// Presence density `4π·r²·ψ²` sampled over the y = 0 plane on a square mesh
/// of `samples`² points spanning ±`extent` Bohr radii on both axes, for
/// contour rendering. Rows index z, columns index x.
pub fn presence_density(n: u32, l: u32, m: i32, extent: f64, samples: usize)
    -> nd::Array2<f64>
{
    let axis: nd::Array1<f64> = nd::Array1::linspace(-extent, extent, samples);
    nd::Array2::from_shape_fn((samples, samples), |(i, j)| {
        let xk = axis[j];
        let zk = axis[i];
        let r = (xk * xk + zk * zk).sqrt();
        let theta = xk.abs().atan2(zk);
        let phi = 0.0f64.atan2(xk);
        4.0 * PI * r.powi(2) * wavefunction(r, theta, phi, n, l, m).powi(2)
    })
}

/// Radius-modulated surface of `|Y_l^m|` over a `samples`² mesh of polar and
/// azimuthal angles, returned as Cartesian coordinate grids `(x, y, z)` for
/// 3-D surface rendering.
pub fn harmonic_surface(l: u32, m: i32, samples: usize)
    -> (nd::Array2<f64>, nd::Array2<f64>, nd::Array2<f64>)
{
    let polar: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, samples);
    let azimuth: nd::Array1<f64>
        = nd::Array1::linspace(0.0, 2.0 * PI, samples);
    let mut x: nd::Array2<f64> = nd::Array2::zeros((samples, samples));
    let mut y: nd::Array2<f64> = nd::Array2::zeros((samples, samples));
    let mut z: nd::Array2<f64> = nd::Array2::zeros((samples, samples));
    for (i, &th) in polar.iter().enumerate() {
        for (j, &ph) in azimuth.iter().enumerate() {
            let radius = spherical_harmonic(th, ph, l, m).abs();
            x[[i, j]] = radius * th.sin() * ph.cos();
            y[[i, j]] = radius * th.sin() * ph.sin();
            z[[i, j]] = radius * th.cos();
        }
    }
    (x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::trapz;

    #[test]
    fn ground_state_radial_function_is_twice_the_exponential() {
        for &r in &[0.0, 0.5, 1.0, 3.0] {
            assert!((radial(r, 1, 0) - 2.0 * (-r).exp()).abs() < 1e-12);
        }
    }

    #[test]
    fn radial_functions_are_normalized_and_orthogonal() {
        let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 80.0, 8001);
        let dr = r[1] - r[0];
        for (n, l) in [(1, 0), (2, 0), (2, 1), (3, 1)] {
            let integrand = r.mapv(|rk| (radial(rk, n, l) * rk).powi(2));
            assert!((trapz(&integrand, dr) - 1.0).abs() < 1e-4);
        }
        let cross = r.mapv(|rk| {
            radial(rk, 1, 0) * radial(rk, 2, 0) * rk.powi(2)
        });
        assert!(trapz(&cross, dr).abs() < 1e-4);
    }

    #[test]
    fn isotropic_harmonic_matches_its_closed_form() {
        let expected = (4.0 * PI).sqrt().recip();
        for &(th, ph) in &[(0.1, 0.0), (1.2, 2.2), (2.9, 5.1)] {
            assert!(
                (spherical_harmonic(th, ph, 0, 0) - expected).abs() < 1e-12
            );
        }
    }

    #[test]
    fn dipole_harmonic_follows_the_cosine() {
        // Y_1^0 = √(3/4π)·cosθ
        let norm = (3.0 / (4.0 * PI)).sqrt();
        for &th in &[0.0f64, 0.7, 1.6, 3.0] {
            let expected = norm * th.cos();
            assert!(
                (spherical_harmonic(th, 0.3, 1, 0) - expected).abs() < 1e-12
            );
        }
    }

    #[test]
    fn negative_m_harmonics_flip_sign_for_odd_m() {
        let (th, ph) = (0.9, 0.4);
        let plus = spherical_harmonic(th, ph, 2, 1);
        let minus = spherical_harmonic(th, ph, 2, -1);
        assert!((plus + minus).abs() < 1e-12);
        let plus2 = spherical_harmonic(th, ph, 2, 2);
        let minus2 = spherical_harmonic(th, ph, 2, -2);
        assert!((plus2 - minus2).abs() < 1e-12);
    }

    #[test]
    fn presence_density_is_finite_and_nonnegative() {
        let rho = presence_density(2, 1, 0, 30.0, 41);
        for &val in rho.iter() {
            assert!(val.is_finite());
            assert!(val >= 0.0);
        }
        // 2p_z density along the polar axis beats the equatorial plane
        let on_axis = rho[[5, 20]];
        let equatorial = rho[[20, 5]];
        assert!(on_axis > equatorial);
    }
}
