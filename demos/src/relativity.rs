use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::{ constants::c, relativity };

// the Lorentz factor over the accessible range of lab-frame speeds

fn main() -> anyhow::Result<()> {
    let v: nd::Array1<f64> = nd::Array1::linspace(0.0, 0.95 * c, 1000);
    let gamma = v.mapv(relativity::lorentz_gamma);
    println!("gamma at 0.95c: {:.4}", relativity::lorentz_gamma(0.95 * c));

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/relativity.npz")?);
    npz.add_array("beta", &v.mapv(|vk| vk / c))?;
    npz.add_array("gamma", &gamma)?;
    npz.finish()?;
    Ok(())
}
