use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::resonance;

// transfer-function magnitudes of the driven, damped oscillator for a range
// of quality factors

const OMEGA0: f64 = 5.0;
const QUALITY: [f64; 5] = [0.2, 0.7, 1.0, 2.0, 4.0];

fn main() -> anyhow::Result<()> {
    let omega: nd::Array1<f64> = nd::Array1::linspace(0.1, 10.0, 10000);

    let mut position: nd::Array2<f64>
        = nd::Array2::zeros((QUALITY.len(), omega.len()));
    let mut velocity: nd::Array2<f64>
        = nd::Array2::zeros((QUALITY.len(), omega.len()));
    for (i, &q) in QUALITY.iter().enumerate() {
        for (j, &w) in omega.iter().enumerate() {
            position[[i, j]] = resonance::transfer_position(w, OMEGA0, q);
            velocity[[i, j]] = resonance::transfer_velocity(w, OMEGA0, q);
        }
    }

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/resonance.npz")?);
    npz.add_array("omega", &omega)?;
    npz.add_array("quality", &nd::Array1::from(QUALITY.to_vec()))?;
    npz.add_array("h_position", &position)?;
    npz.add_array("h_velocity", &velocity)?;
    npz.finish()?;
    Ok(())
}
