//! Provides functions to compute solutions to the 1+1-dimensional
//! (time-dependent) Schrödinger equation for motion in a static potential via
//! the Crank–Nicolson scheme in its Cayley form.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    error::{ LengthError, PropagateError },
};

pub type PResult<T> = Result<T, PropagateError>;

// pivots at or below this magnitude terminate the elimination
const PIVOT_FLOOR: f64 = f64::MIN_POSITIVE;

// return an array of differences between adjacent elements of a source array
fn array_diff<S>(a: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    a.iter().zip(a.iter().skip(1))
        .map(|(ak, akp1)| *akp1 - *ak)
        .collect()
}

/// Gaussian envelope modulated by a plane-wave phase factor, sampled over a
/// coordinate array. Not normalized.
pub fn gaussian_packet<S>(x: &Arr1<S>, x0: f64, width: f64, k: f64)
    -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| {
        let envelope = (-(xk - x0).powi(2) / (2.0 * width.powi(2))).exp();
        envelope * C64::cis(k * xk)
    })
}

/// Smooth, flat-topped potential bump approximating a square barrier via a
/// high-order super-Gaussian,
///
/// ```text
/// V(x) = height * exp(-((x - center) / width)^128)
/// ```
pub fn barrier<S>(x: &Arr1<S>, center: f64, width: f64, height: f64)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| height * (-((xk - center) / width).powi(128)).exp())
}

/// Discretized single-particle Hamiltonian for a static potential: the
/// three-point finite-difference kinetic stencil plus the potential on the
/// diagonal.
///
/// The operator is tridiagonal with a constant off-diagonal `-1/(2 dx²)` and
/// main diagonal `1/dx² + V`; its fixed size imposes closed (Dirichlet-like)
/// boundaries at the grid edges.
#[derive(Clone, Debug)]
pub struct Hamiltonian {
    diag: nd::Array1<f64>,
    off: f64,
}

impl Hamiltonian {
    /// Assemble the operator from a grid spacing and a sampled potential.
    pub fn new<S>(dx: f64, V: &Arr1<S>) -> Self
    where S: nd::Data<Elem = f64>
    {
        let ondx2 = dx.powi(2).recip();
        Self { diag: V.mapv(|Vk| ondx2 + Vk), off: -0.5 * ondx2 }
    }

    /// Number of grid points the operator acts on.
    pub fn len(&self) -> usize { self.diag.len() }

    pub fn is_empty(&self) -> bool { self.diag.is_empty() }

    /// Apply the operator to a state.
    ///
    /// *Panics if `q` does not match the operator's length*.
    pub fn apply<S>(&self, q: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = C64>
    {
        let n = self.len();
        assert_eq!(n, q.len());
        nd::Array1::from_shape_fn(n, |k| {
            let mut hq = self.diag[k] * q[k];
            if k > 0 { hq += self.off * q[k - 1]; }
            if k + 1 < n { hq += self.off * q[k + 1]; }
            hq
        })
    }
}

// Forward-sweep/back-substitution elimination for a tridiagonal system with a
// constant off-diagonal. All scratch arrays must have the system's length.
fn thomas_solve(
    diag: &nd::Array1<C64>,
    off: C64,
    rhs: &nd::Array1<C64>,
    sweep_c: &mut nd::Array1<C64>,
    sweep_d: &mut nd::Array1<C64>,
    out: &mut nd::Array1<C64>,
) -> PResult<()> {
    let n = diag.len();
    let mut denom = diag[0];
    if denom.norm() < PIVOT_FLOOR {
        return Err(PropagateError::SingularPivot { row: 0 });
    }
    sweep_c[0] = off / denom;
    sweep_d[0] = rhs[0] / denom;
    for k in 1..n {
        denom = diag[k] - off * sweep_c[k - 1];
        if denom.norm() < PIVOT_FLOOR {
            return Err(PropagateError::SingularPivot { row: k });
        }
        sweep_c[k] = off / denom;
        sweep_d[k] = (rhs[k] - off * sweep_d[k - 1]) / denom;
    }
    out[n - 1] = sweep_d[n - 1];
    for k in (0..n - 1).rev() {
        out[k] = sweep_d[k] - sweep_c[k] * out[k + 1];
    }
    Ok(())
}

/// Propagate an initial state through the time coordinates `t` under a static
/// potential `V` with the Cayley form of the Crank–Nicolson update,
///
/// ```text
/// (1 + i dt/2 H) ψ(t + dt) = (1 - i dt/2 H) ψ(t)
/// ```
///
/// solved as a tridiagonal linear system at every step. The update is unitary
/// in exact arithmetic, hence norm-preserving regardless of the size of `dt`.
///
/// The returned array holds one state per time coordinate, the first row
/// being `q0` itself.
///
/// *Panics if `V` has length less than 2 or `t` is empty*.
pub fn crank_nicolson<S, T, U>(dx: f64, V: &Arr1<S>, q0: &Arr1<T>, t: &Arr1<U>)
    -> PResult<nd::Array2<C64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
    U: nd::Data<Elem = f64>,
{
    LengthError::check(V, q0)?;
    let n = V.len();
    let H = Hamiltonian::new(dx, V);
    let dt = array_diff(t);
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), n));
    let mut q_temp: nd::Array1<C64> = q0.to_owned();
    q.slice_mut(nd::s![0, ..]).assign(q0);
    let mut a_diag: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut rhs: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut sweep_c: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut sweep_d: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut q_next: nd::Array1<C64> = nd::Array1::zeros(n);
    let iter = dt.iter().zip(q.axis_iter_mut(nd::Axis(0)).skip(1));
    for (&dtk, qkp1) in iter {
        let half = 0.5 * dtk;
        let a_off = C64::i() * (half * H.off);
        nd::Zip::from(&mut a_diag).and(&H.diag)
            .for_each(|ak, &hk| { *ak = 1.0 + C64::i() * (half * hk); });
        // the backward half-step operator is the elementwise conjugate of the
        // forward one since H is real
        rhs[0] = a_diag[0].conj() * q_temp[0] + a_off.conj() * q_temp[1];
        for k in 1..n - 1 {
            rhs[k] = a_diag[k].conj() * q_temp[k]
                + a_off.conj() * (q_temp[k - 1] + q_temp[k + 1]);
        }
        rhs[n - 1] = a_diag[n - 1].conj() * q_temp[n - 1]
            + a_off.conj() * q_temp[n - 2];
        thomas_solve(&a_diag, a_off, &rhs, &mut sweep_c, &mut sweep_d,
            &mut q_next)?;
        q_temp.assign(&q_next);
        q_temp.clone().move_into(qkp1);
    }
    Ok(q)
}

/// Probability density `|ψ|²` of an archived state history, row for row.
pub fn density<S>(q: &Arr2<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = C64>
{
    q.mapv(|qk| qk.norm_sqr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barrier_is_flat_topped_and_localized() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-0.5, 0.5, 1001);
        let V = barrier(&x, 0.0, 0.02, 4.55e5);
        assert!((V[500] - 4.55e5).abs() < 1e-6);
        assert!(V[250].abs() < 1e-12);
        assert!(V[750].abs() < 1e-12);
    }

    #[test]
    fn packet_envelope_peaks_at_its_center() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-0.5, 0.5, 1001);
        let q = gaussian_packet(&x, -0.2, 0.05, 1000.0);
        let peak = q.iter().enumerate()
            .max_by(|(_, l), (_, r)| l.norm().total_cmp(&r.norm()))
            .map(|(k, _)| k)
            .unwrap();
        assert!((x[peak] + 0.2).abs() < 1e-3);
        assert!((q[peak].norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hamiltonian_applies_the_three_point_stencil() {
        let dx = 0.1;
        let V: nd::Array1<f64> = nd::Array1::zeros(5);
        let H = Hamiltonian::new(dx, &V);
        // constant state: interior rows give zero, edge rows feel the
        // closed boundary
        let q: nd::Array1<C64> = nd::Array1::from_elem(5, C64::from(1.0));
        let Hq = H.apply(&q);
        assert!(Hq[2].norm() < 1e-9);
        assert!((Hq[0] - C64::from(50.0)).norm() < 1e-9);
    }
}
