use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use physlab::landau;

// Landau free enthalpy below and above the transition, with and without an
// applied field, and the spontaneous magnetization curve

const TC: f64 = 50.0;

fn main() -> anyhow::Result<()> {
    let m: nd::Array1<f64> = nd::Array1::linspace(-2.0, 2.0, 1000);
    let ordered = m.mapv(|mk| landau::free_enthalpy(-3.0, 1.0, mk));
    let disordered = m.mapv(|mk| landau::free_enthalpy(0.25, 0.25, mk));
    let in_field = m.mapv(|mk| landau::free_enthalpy_in_field(-3.0, 1.0, -2.0, mk));

    let temperature: nd::Array1<f64> = nd::Array1::linspace(0.0, TC, 1000);
    let magnetization
        = temperature.mapv(|tk| landau::magnetization(1.0, 1.0, TC, TC, tk));

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/landau.npz")?);
    npz.add_array("m", &m)?;
    npz.add_array("g_ordered", &ordered)?;
    npz.add_array("g_disordered", &disordered)?;
    npz.add_array("g_in_field", &in_field)?;
    npz.add_array("t_over_tc", &temperature.mapv(|tk| tk / TC))?;
    npz.add_array("magnetization", &magnetization)?;
    npz.finish()?;
    Ok(())
}
