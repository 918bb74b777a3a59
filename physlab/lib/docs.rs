//! # Theoretical background
//!
//! ## The time-dependent Schrödinger equation on a grid
//!
//! In natural units (`ħ = m = 1`), motion in a static potential `V(x)` obeys
//!
//! ```text
//! i ∂ψ/∂t = H ψ,    H = -1/2 ∂²/∂x² + V(x)
//! ```
//!
//! Sampling `ψ` on `N` evenly spaced points with spacing `dx` and replacing
//! the second derivative with its three-point stencil turns `H` into a real
//! tridiagonal matrix: off-diagonals `-1/(2 dx²)`, main diagonal
//! `1/dx² + V_k`. The matrix has no rows coupling the first and last samples
//! to anything outside the grid, which is equivalent to clamping `ψ = 0` just
//! beyond both edges; a packet that reaches an edge therefore reflects
//! instead of leaving.
//!
//! ## The Cayley form of the Crank-Nicolson step
//!
//! The formal solution over one step is `ψ(t + dt) = exp(-i H dt) ψ(t)`.
//! Expanding the exponential symmetrically about the midpoint of the step
//! gives the Cayley (Crank-Nicolson) approximant
//!
//! ```text
//! (1 + i dt/2 H) ψ(t + dt) = (1 - i dt/2 H) ψ(t)
//! ```
//!
//! Because `H` is Hermitian, the rational map `(1 - iz)/(1 + iz)` sends the
//! real spectrum of `H dt/2` onto the unit circle: the discrete evolution
//! operator is exactly unitary in exact arithmetic, for *any* `dt`, and the
//! total probability `Σ |ψ_k|²` is conserved up to roundoff. Large steps
//! still distort phases (the effective eigenfrequency is
//! `2 arctan(E dt/2)/dt` rather than `E`), so accuracy — not stability —
//! sets the usable step size.
//!
//! By contrast, explicit Euler stepping multiplies the norm by
//! `|1 - i E dt|² > 1` per step and blows up; this is why the propagator
//! solves a linear system per step rather than just multiplying.
//!
//! ## Solving the half-step system
//!
//! `(1 + i dt/2 H)` inherits the Hamiltonian's tridiagonal sparsity, so each
//! step is a single forward-sweep/back-substitution (Thomas) elimination in
//! `O(N)` time with `O(N)` scratch. The elimination fails only if a pivot
//! vanishes, which is surfaced as an error and ends the run; no iterative
//! refinement or retry is attempted.

// This module holds documentation only.
