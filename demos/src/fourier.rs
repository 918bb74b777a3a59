use std::fs::File;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use num_complex::Complex64 as C64;
use physlab::{ fourier, utils };

// square-wave synthesis from truncated Fourier series, and the spectrum of
// one of the syntheses

const FREQ: f64 = 50.0;

fn main() -> anyhow::Result<()> {
    let period = FREQ.recip();
    let omega = 2.0 * std::f64::consts::PI * FREQ;
    let t: nd::Array1<f64> = nd::Array1::linspace(-period, period, 1000);

    let terms = [1_usize, 10, 100, 10000];
    let sums: Vec<nd::Array1<f64>>
        = terms.iter()
        .map(|&n| t.mapv(|tk| fourier::square_wave_partial_sum(n, omega, tk)))
        .collect();

    // spectrum of the 100-term synthesis: odd harmonics decaying as 1/n
    let dt = t[1] - t[0];
    let signal: nd::Array1<C64> = sums[2].mapv(C64::from);
    let spectrum = utils::fft_shift(&utils::fft(&signal).mapv(|fk| fk.norm()));
    let freq = utils::fft_shift(&utils::fft_freq(t.len(), dt));

    std::fs::create_dir_all("output")?;
    let mut npz = NpzWriter::new(File::create("output/fourier.npz")?);
    npz.add_array("t_over_period", &t.mapv(|tk| tk / period))?;
    for (&n, sum) in terms.iter().zip(sums.iter()) {
        npz.add_array(format!("partial_sum_{n}"), sum)?;
    }
    npz.add_array("freq", &freq)?;
    npz.add_array("spectrum", &spectrum)?;
    npz.finish()?;
    Ok(())
}
