//! Standing-wave modes of an ideal string with fixed ends.

use std::f64::consts::PI;
use ndarray as nd;
use crate::Arr1;

/// Displacement of the `n`-th mode at position `x` and time `t` for wave
/// speed `c` on a string of length `l`,
///
/// ```text
/// y_n(x, t) = cos(k·c·t) · sin(k·x),    k = n·π/l
/// ```
pub fn mode(x: f64, t: f64, n: usize, c: f64, l: f64) -> f64 {
    let k = PI * n as f64 / l;
    (k * c * t).cos() * (k * x).sin()
}

/// Oscillation frequency of the `n`-th mode.
pub fn mode_frequency(n: usize, c: f64, l: f64) -> f64 {
    n as f64 * c / (2.0 * l)
}

/// Tabulate the `n`-th mode over `x` for `frames` evenly spaced times
/// covering `t_max`, one frame per row, for animation playback.
pub fn mode_frames<S>(
    x: &Arr1<S>,
    n: usize,
    c: f64,
    l: f64,
    frames: usize,
    t_max: f64,
) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let dt = t_max / frames as f64;
    nd::Array2::from_shape_fn(
        (frames, x.len()),
        |(i, j)| mode(x[j], i as f64 * dt, n, c, l),
    )
}
