//! Surface gravity, tidal fields, and the Roche limit.

use std::f64::consts::PI;
use ndarray as nd;
use crate::constants::{ G, M_earth, Omega_earth, R_earth };

/// Convert a colatitude in degrees to a latitude in radians.
pub fn latitude(colatitude_deg: f64) -> f64 {
    PI * (0.5 - colatitude_deg / 180.0)
}

/// Effective surface gravity at a colatitude in degrees: Newtonian
/// attraction minus the centrifugal term of Earth's rotation.
pub fn effective_gravity(colatitude_deg: f64) -> f64 {
    let newtonian = G * M_earth / R_earth.powi(2);
    let centrifugal
        = latitude(colatitude_deg).sin().powi(2)
        * R_earth * Omega_earth.powi(2);
    newtonian - centrifugal
}

/// Roche limit for a rigid satellite of density `rho_s` orbiting a primary of
/// density `rho_p`, in units of the primary's radius.
pub fn roche_limit(rho_s: f64, rho_p: f64) -> f64 {
    (16.0 * rho_p / rho_s).powf(1.0 / 3.0)
}

/// Tidal acceleration component along one axis at distance `r` from the
/// primary's center, for a perturber of mass `m_p` at distance `d` seen under
/// the angle `theta` from the line of centers; `x` is the coordinate of the
/// observation point along the requested axis.
pub fn tidal_acceleration(r: f64, d: f64, theta: f64, x: f64, m_p: f64) -> f64 {
    G * m_p / d.powi(3) * (x - 3.0 * r * theta.cos() / d)
}

/// Sample the tidal acceleration of a perturber sitting at `d` (a Cartesian
/// position relative to the primary's center) over a cubic lattice of
/// `samples`³ observation points spanning ±`extent` on each axis.
///
/// Returns one row per lattice point in both arrays: positions and the tidal
/// vector at each position, ready for quiver-style rendering.
pub fn tidal_field(
    extent: f64,
    samples: usize,
    d: [f64; 3],
    m_p: f64,
) -> (nd::Array2<f64>, nd::Array2<f64>) {
    let axis: nd::Array1<f64> = nd::Array1::linspace(-extent, extent, samples);
    let d_norm = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
    let n = samples.pow(3);
    let mut pos: nd::Array2<f64> = nd::Array2::zeros((n, 3));
    let mut vec: nd::Array2<f64> = nd::Array2::zeros((n, 3));
    let mut row = 0;
    for &xk in axis.iter() {
        for &yk in axis.iter() {
            for &zk in axis.iter() {
                let r = (xk * xk + yk * yk + zk * zk).sqrt();
                let dot = xk * d[0] + yk * d[1] + zk * d[2];
                let theta
                    = if r > 0.0 { (dot / (r * d_norm)).clamp(-1.0, 1.0).acos() }
                    else { 0.0 };
                pos[[row, 0]] = xk;
                pos[[row, 1]] = yk;
                pos[[row, 2]] = zk;
                vec[[row, 0]] = tidal_acceleration(r, d_norm, theta, xk, m_p);
                vec[[row, 1]] = tidal_acceleration(r, d_norm, theta, yk, m_p);
                vec[[row, 2]] = tidal_acceleration(r, d_norm, theta, zk, m_p);
                row += 1;
            }
        }
    }
    (pos, vec)
}
