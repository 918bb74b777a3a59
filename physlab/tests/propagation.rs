//! Integration tests for the Crank-Nicolson wave-packet propagator.

#![allow(non_snake_case)]

use ndarray as nd;
use num_complex::Complex64 as C64;
use proptest::prelude::*;
use physlab::{
    propagate::{ self, Hamiltonian },
    utils,
};

// the tunneling demonstration's scenario
const N: usize = 1000;
const X_MAX: f64 = 0.5;
const DT: f64 = 1e-5;
const STEPS: usize = 400;
const BARRIER_HEIGHT: f64 = 4.55e5;
const BARRIER_WIDTH: f64 = 0.02;
const PACKET_X0: f64 = -0.2;
const PACKET_WIDTH: f64 = 0.05;
const PACKET_K: f64 = 1000.0;

fn grid(n: usize) -> (nd::Array1<f64>, f64) {
    let x = nd::Array1::linspace(-X_MAX, X_MAX, n);
    (x, 2.0 * X_MAX / n as f64)
}

fn times(steps: usize, dt: f64) -> nd::Array1<f64> {
    nd::Array1::linspace(0.0, dt * steps as f64, steps + 1)
}

#[test]
fn norm_is_conserved_through_the_tunneling_scenario() {
    let (x, dx) = grid(N);
    let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, BARRIER_HEIGHT);
    let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, PACKET_K);
    let t = times(STEPS, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let norm0 = utils::wf_norm(&q0, dx);
    for qk in q.axis_iter(nd::Axis(0)) {
        let norm = utils::wf_norm(&qk, dx);
        assert!(
            (norm / norm0 - 1.0).abs() < 1e-2,
            "norm drifted to {norm} from {norm0}",
        );
    }
}

#[test]
fn consecutive_steps_preserve_norm_tightly() {
    let (x, dx) = grid(300);
    let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, BARRIER_HEIGHT);
    let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, 300.0);
    let t = times(100, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let norms: Vec<f64> = q.axis_iter(nd::Axis(0))
        .map(|qk| utils::wf_norm(&qk, dx))
        .collect();
    for pair in norms.windows(2) {
        assert!((pair[1] - pair[0]).abs() / pair[0] < 1e-6);
    }
}

#[test]
fn propagation_is_deterministic() {
    let (x, dx) = grid(400);
    let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, BARRIER_HEIGHT);
    let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, PACKET_K);
    let t = times(50, DT);
    let first = propagate::density(
        &propagate::crank_nicolson(dx, &V, &q0, &t).unwrap());
    let second = propagate::density(
        &propagate::crank_nicolson(dx, &V, &q0, &t).unwrap());
    assert_eq!(first, second);
}

#[test]
fn free_packet_moves_at_group_velocity_and_spreads() {
    let (x, dx) = grid(N);
    let V: nd::Array1<f64> = nd::Array1::zeros(N);
    let k = 200.0;
    let q0 = propagate::gaussian_packet(&x, -0.25, PACKET_WIDTH, k);
    let steps = 100;
    let t = times(steps, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let rho = propagate::density(&q);

    let start = utils::density_mean(&x, &rho.row(0));
    let end = utils::density_mean(&x, &rho.row(steps));
    let expected = k * DT * steps as f64;
    assert!(
        (end - start - expected).abs() < 0.05 * expected,
        "displacement {} against group-velocity prediction {expected}",
        end - start,
    );

    let mut prev = utils::density_variance(&x, &rho.row(0));
    for row in rho.axis_iter(nd::Axis(0)).skip(1) {
        let var = utils::density_variance(&x, &row);
        assert!(var >= prev - 1e-12, "packet narrowed: {var} < {prev}");
        prev = var;
    }
}

#[test]
fn tall_barrier_blocks_the_packet() {
    let (x, dx) = grid(N);
    let k = 200.0;
    // ten times the packet's kinetic energy scale k²/2
    let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, 10.0 * k * k / 2.0);
    let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, k);
    let t = times(250, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let last = q.slice(nd::s![-1, ..]);
    let transmitted: f64 = x.iter().zip(last.iter())
        .filter(|(xk, _)| **xk > 1.5 * BARRIER_WIDTH)
        .map(|(_, qk)| qk.norm_sqr() * dx)
        .sum();
    let total = utils::wf_norm(&last, dx);
    assert!(transmitted / total < 1e-3, "leaked {transmitted} of {total}");
}

#[test]
fn low_barrier_transmits_the_packet() {
    let (x, dx) = grid(N);
    let k = 200.0;
    // one percent of the kinetic scale
    let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, 0.01 * k * k / 2.0);
    let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, k);
    let t = times(250, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let last = q.slice(nd::s![-1, ..]);
    let transmitted: f64 = x.iter().zip(last.iter())
        .filter(|(xk, _)| **xk > 1.5 * BARRIER_WIDTH)
        .map(|(_, qk)| qk.norm_sqr() * dx)
        .sum();
    let total = utils::wf_norm(&last, dx);
    assert!(transmitted / total > 0.9, "only {transmitted} of {total} got through");
}

#[test]
fn packet_reflects_at_the_grid_boundary() {
    let (x, dx) = grid(N);
    let V: nd::Array1<f64> = nd::Array1::zeros(N);
    // rightward packet that would coast past the edge by t = 3e-3 if the
    // boundary were open
    let q0 = propagate::gaussian_packet(&x, 0.3, PACKET_WIDTH, 200.0);
    let t = times(300, DT);
    let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
    let norm0 = utils::wf_norm(&q0, dx);
    let last = q.slice(nd::s![-1, ..]);
    let norm = utils::wf_norm(&last, dx);
    assert!((norm / norm0 - 1.0).abs() < 1e-3, "packet vanished at the wall");
    let rho = propagate::density(&q);
    let center = utils::density_mean(&x, &rho.slice(nd::s![-1, ..]));
    assert!(center < 0.3, "no sign of reflection; center at {center}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn norm_is_conserved_for_arbitrary_barriers_and_packets(
        height in 0.0..1e6f64,
        width in 0.005..0.1f64,
        k in -1500.0..1500.0f64,
        x0 in -0.3..0.3f64,
    ) {
        let (x, dx) = grid(200);
        let V = propagate::barrier(&x, 0.0, width, height);
        let q0 = propagate::gaussian_packet(&x, x0, PACKET_WIDTH, k);
        let t = times(50, DT);
        let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
        let norms: Vec<f64> = q.axis_iter(nd::Axis(0))
            .map(|qk| utils::wf_norm(&qk, dx))
            .collect();
        for pair in norms.windows(2) {
            prop_assert!((pair[1] - pair[0]).abs() / pair[0] < 1e-6);
        }
    }

    #[test]
    fn cayley_update_satisfies_its_linear_system(
        height in 0.0..1e6f64,
        k in -1500.0..1500.0f64,
    ) {
        let (x, dx) = grid(200);
        let V = propagate::barrier(&x, 0.0, BARRIER_WIDTH, height);
        let q0 = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, k);
        let t = times(1, DT);
        let q = propagate::crank_nicolson(dx, &V, &q0, &t).unwrap();
        let q1 = q.slice(nd::s![1, ..]).to_owned();

        let H = Hamiltonian::new(dx, &V);
        let half = C64::i() * (DT / 2.0);
        let lhs: nd::Array1<C64>
            = &q1 + &H.apply(&q1).mapv(|hq| half * hq);
        let rhs: nd::Array1<C64>
            = &q0 - &H.apply(&q0).mapv(|hq| half * hq);
        let scale = rhs.iter().map(|r| r.norm()).fold(0.0, f64::max);
        let residual = lhs.iter().zip(rhs.iter())
            .map(|(l, r)| (l - r).norm())
            .fold(0.0, f64::max);
        prop_assert!(residual < 1e-9 * scale.max(1.0));
    }
}
