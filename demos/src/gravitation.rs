use std::f64::consts::PI;
use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::constants::{
    M_earth, M_moon, M_sun, Omega_earth, R_earth, R_moon, T_sidereal, d_moon,
    d_sun,
};
use physlab::gravity;

// effective surface gravity against colatitude, the lunar tidal field, and
// the Roche limit

fn main() -> anyhow::Result<()> {
    // gravity at the reference colatitude of the original survey
    let g_paris = gravity::effective_gravity(48.51);
    println!("{g_paris:.4e}");
    println!("{T_sidereal}");
    println!("{Omega_earth:.4e}");

    let colatitude: nd::Array1<f64> = nd::Array1::range(0.0, 90.0, 2.0);
    let g_theta = colatitude.mapv(gravity::effective_gravity);

    // lunar and solar tidal fields over a small lattice of observation
    // points; the lunar tide dominates despite the mass ratio
    let (tidal_pos, tidal_vec)
        = gravity::tidal_field(100.0, 5, [d_moon, 0.0, 0.0], M_moon);
    let (_, tidal_vec_sun)
        = gravity::tidal_field(100.0, 5, [d_sun, 0.0, 0.0], M_sun);
    let tide_ratio
        = (M_sun / d_sun.powi(3)) / (M_moon / d_moon.powi(3));
    println!("solar/lunar tide ratio: {tide_ratio:.3}");

    // Roche limit for the Moon, then as a function of satellite density
    let rho_earth = M_earth / (4.0 / 3.0 * PI * R_earth.powi(3));
    let rho_moon = M_moon / (4.0 / 3.0 * PI * R_moon.powi(3));
    let limit_moon = R_earth * gravity::roche_limit(rho_moon, rho_earth);
    println!("{limit_moon:.4e}");

    let rho: nd::Array1<f64> = nd::Array1::range(0.1, 1e4, 1.0);
    let limit = rho.mapv(|rho_s| gravity::roche_limit(rho_s, rho_earth));

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/gravitation.npz")?);
    npz.add_array("colatitude", &colatitude)?;
    npz.add_array("g", &g_theta)?;
    npz.add_array("tidal_pos", &tidal_pos)?;
    npz.add_array("tidal_vec", &tidal_vec)?;
    npz.add_array("tidal_vec_sun", &tidal_vec_sun)?;
    npz.add_array("rho", &rho)?;
    npz.add_array("roche_limit", &limit)?;
    npz.finish()?;
    Ok(())
}
