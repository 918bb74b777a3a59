use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::diffraction;

// single-slit Fraunhofer amplitude and intensity envelopes

const X_MAX: f64 = 9.4;

fn main() -> anyhow::Result<()> {
    let x: nd::Array1<f64> = nd::Array1::linspace(-X_MAX, X_MAX, 10000);
    let amplitude = x.mapv(diffraction::sinc);
    let intensity = x.mapv(diffraction::sinc2);

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/diffraction.npz")?);
    npz.add_array("x_over_x0", &x.mapv(|xk| xk / X_MAX))?;
    npz.add_array("amplitude", &amplitude)?;
    npz.add_array("intensity", &intensity)?;
    npz.finish()?;
    Ok(())
}
