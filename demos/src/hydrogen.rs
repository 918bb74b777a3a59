use std::fs::File;
use ndarray_npy::NpzWriter;
use physlab::hydrogen;

// presence densities and angular shapes of the low-lying hydrogenic states

const EXTENT: f64 = 50.0;
const DENSITY_SAMPLES: usize = 200;
const SURFACE_SAMPLES: usize = 100;

fn main() -> anyhow::Result<()> {
    println!("R_10(1) = {:.6}", hydrogen::radial(1.0, 1, 0));
    println!(
        "Y_0^0   = {:.6}",
        hydrogen::spherical_harmonic(0.0, 0.0, 0, 0),
    );

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/hydrogen.npz")?);
    for n in 1..=4u32 {
        for l in 0..n {
            for m in -(l as i32)..=(l as i32) {
                let rho = hydrogen::presence_density(
                    n, l, m, EXTENT, DENSITY_SAMPLES);
                npz.add_array(format!("density_n{n}_l{l}_m{m}"), &rho)?;
            }
        }
    }
    // one angular surface per distinct (l, m)
    for l in 0..4u32 {
        for m in -(l as i32)..=(l as i32) {
            let (x, y, z)
                = hydrogen::harmonic_surface(l, m, SURFACE_SAMPLES);
            npz.add_array(format!("harmonic_x_l{l}_m{m}"), &x)?;
            npz.add_array(format!("harmonic_y_l{l}_m{m}"), &y)?;
            npz.add_array(format!("harmonic_z_l{l}_m{m}"), &z)?;
        }
    }
    npz.finish()?;
    Ok(())
}
