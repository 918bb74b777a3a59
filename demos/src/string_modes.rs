use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::waves;

// the first standing-wave modes of a fixed string, plus a frame table
// animating the third one

const WAVE_SPEED: f64 = 500.0;
const LENGTH: f64 = 1.0;
const FRAMES: usize = 1200;

fn main() -> anyhow::Result<()> {
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, LENGTH, 1000);

    let snapshots: Vec<nd::Array1<f64>>
        = (1..=4)
        .map(|n| x.mapv(|xk| waves::mode(xk, 0.0, n, WAVE_SPEED, LENGTH)))
        .collect();
    for n in 1..=4 {
        println!(
            "mode {n}: {:.1} Hz",
            waves::mode_frequency(n, WAVE_SPEED, LENGTH),
        );
    }

    let t_max = 2.0 / WAVE_SPEED;
    let animation = waves::mode_frames(&x, 3, WAVE_SPEED, LENGTH, FRAMES, t_max);

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/string_modes.npz")?);
    npz.add_array("x_over_l", &x.mapv(|xk| xk / LENGTH))?;
    for (n, snapshot) in (1..=4).zip(snapshots.iter()) {
        npz.add_array(format!("mode_{n}"), snapshot)?;
    }
    npz.add_array("animation", &animation)?;
    npz.finish()?;
    Ok(())
}
