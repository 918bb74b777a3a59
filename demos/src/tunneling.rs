use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use num_complex::Complex64 as C64;
use physlab::{ propagate, utils };

// solve the time-dependent Schrödinger equation for a Gaussian wave packet
// hitting a square-ish potential barrier

const N: usize = 1000;
const X_MAX: f64 = 0.5;
const DT: f64 = 1e-5;
const T_TOTAL: f64 = 0.004;

const BARRIER_HEIGHT: f64 = 4.55e5;
const BARRIER_CENTER: f64 = 0.0;
const BARRIER_WIDTH: f64 = 0.02;

const PACKET_X0: f64 = -0.2;
const PACKET_WIDTH: f64 = 0.05;
const PACKET_K: f64 = 1e3;

fn main() -> anyhow::Result<()> {
    let steps = (T_TOTAL / DT) as usize;
    let x: nd::Array1<f64> = nd::Array1::linspace(-X_MAX, X_MAX, N);
    let dx = 2.0 * X_MAX / N as f64;

    let v = propagate::barrier(
        &x, BARRIER_CENTER, BARRIER_WIDTH, BARRIER_HEIGHT);
    let q0: nd::Array1<C64>
        = propagate::gaussian_packet(&x, PACKET_X0, PACKET_WIDTH, PACKET_K);
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, T_TOTAL, steps + 1);

    let q = propagate::crank_nicolson(dx, &v, &q0, &t)?;
    let rho = propagate::density(&q);

    println!("initial norm: {:.6e}", utils::wf_norm(&q0, dx));
    println!(
        "final norm:   {:.6e}",
        utils::wf_norm(&q.slice(nd::s![-1, ..]), dx),
    );

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/tunneling.npz")?);
    npz.add_array("x", &x)?;
    npz.add_array("v_over_v0", &v.mapv(|vk| vk / BARRIER_HEIGHT))?;
    npz.add_array("t", &t)?;
    npz.add_array("density", &rho)?;
    npz.finish()?;
    Ok(())
}
