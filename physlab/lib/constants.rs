#![allow(non_upper_case_globals)]

//! Physical constants and solar-system parameters used by the demonstration
//! models.
//!
//! Fundamental constants are taken from NIST; body parameters are the usual
//! textbook values.

use std::f64::consts::PI;

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.674e-11;
//             +/- 0.00015e-11

/// gravitational acceleration near Earth's surface (m s^-2)
pub const g: f64 = 9.80665;
//             +/- 0 (exact)

/// Earth radius (m)
pub const R_earth: f64 = 6.371e6;

/// Earth mass (kg)
pub const M_earth: f64 = 5.973e24;

/// Earth sidereal day (s)
pub const T_sidereal: f64 = 23.0 * 3600.0 + 56.0 * 60.0;

/// Earth rotation rate (rad s^-1)
pub const Omega_earth: f64 = 2.0 * PI / T_sidereal;

/// Moon radius (m)
pub const R_moon: f64 = 0.273 * R_earth;

/// Moon mass (kg)
pub const M_moon: f64 = 7.347e22;

/// Sun mass (kg)
pub const M_sun: f64 = 1.989e30;

/// mean Earth-Moon distance (m)
pub const d_moon: f64 = 3.84e8;

/// mean Earth-Sun distance (m)
pub const d_sun: f64 = 1.496e11;
