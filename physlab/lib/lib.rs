#![allow(non_snake_case)]

//! Numerical core for a collection of single-file physics demonstrations:
//! closed-form models evaluated over sampled domains, and a propagator for
//! the one-dimensional time-dependent Schrödinger equation based on the
//! Crank–Nicolson (Cayley) finite-difference scheme.
//!
//! Provides implementations for the following:
//! - Time-dependent: Cayley-form Crank–Nicolson stepping of a wave packet
//!   through an arbitrary static potential ([`propagate`])
//! - Closed-form demonstration models: surface gravity and tidal fields
//!   ([`gravity`]), Landau free enthalpy ([`landau`]), square-wave Fourier
//!   synthesis ([`fourier`]), string modes ([`waves`]), Fraunhofer envelopes
//!   ([`diffraction`]), oscillator and cavity resonances ([`resonance`]),
//!   relativistic kinematics ([`relativity`]), and hydrogenic wavefunctions
//!   ([`hydrogen`])
//! - An application model for the stator-field demonstration ([`stator`])
//!
//! The runnable demonstration programs live in the sibling `demos` package;
//! each one computes its arrays through this crate and hands them to the
//! rendering layer as serialized files.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod constants;
pub mod utils;
pub mod propagate;
pub mod gravity;
pub mod landau;
pub mod fourier;
pub mod waves;
pub mod diffraction;
pub mod resonance;
pub mod relativity;
pub mod hydrogen;
pub mod stator;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
