use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::resonance;

// Fabry-Perot transmission against cavity length and against wavelength

const WAVELENGTH: f64 = 600e-9;
const REFLECTANCE: [f64; 3] = [0.2, 0.8, 0.95];

fn main() -> anyhow::Result<()> {
    // cavity length swept in units of the wavelength
    let length: nd::Array1<f64> = nd::Array1::linspace(0.25, 2.25, 10000);
    let mut by_length: nd::Array2<f64>
        = nd::Array2::zeros((REFLECTANCE.len(), length.len()));
    for (i, &r) in REFLECTANCE.iter().enumerate() {
        for (j, &d) in length.iter().enumerate() {
            by_length[[i, j]] = resonance::fabry_perot_transmission(
                r, d * WAVELENGTH, 0.0, WAVELENGTH);
        }
    }

    // wavelength swept across the sodium doublet (in ångströms) for a
    // millimeter cavity
    let doublet: nd::Array1<f64>
        = nd::Array1::linspace(5895.924, 5889.950, 10000);
    let by_wavelength = doublet.mapv(|lk| {
        resonance::fabry_perot_transmission(0.9, 1e-3, 0.0, lk * 1e-10)
    });

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/fabry_perot.npz")?);
    npz.add_array("length_over_wavelength", &length)?;
    npz.add_array("reflectance", &nd::Array1::from(REFLECTANCE.to_vec()))?;
    npz.add_array("transmission_by_length", &by_length)?;
    npz.add_array("wavelength_angstrom", &doublet)?;
    npz.add_array("transmission_by_wavelength", &by_wavelength)?;
    npz.finish()?;
    Ok(())
}
