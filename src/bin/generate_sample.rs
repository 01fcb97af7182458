use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tilt_viewer::data::loader;
use tilt_viewer::{Sampling, TiltSeries};

/// Semidiurnal lunar tide period, hours.
const TIDE_PERIOD: f64 = 12.42;

fn tilt(t: f64, rng: &mut SimpleRng) -> f64 {
    let drift = 0.02 * t;
    let tide = 1.5 * (2.0 * std::f64::consts::PI * t / TIDE_PERIOD).sin();
    let daily = 0.6 * (2.0 * std::f64::consts::PI * t / 24.0).cos();
    drift + tide + daily + rng.gauss(0.0, 0.05)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    // Two weeks at 15 minute intervals, starting a day after 2004-09-01.
    let sampling = Arc::new(Sampling::new(14 * 24 * 4, 0.25, 24.0));

    let mut spikes = 0usize;
    let values: Vec<f32> = sampling
        .values()
        .map(|t| {
            let mut x = tilt(t, &mut rng);
            // Isolated spikes in roughly 1% of samples.
            if rng.next_f64() < 0.01 {
                x += rng.gauss(0.0, 8.0);
                spikes += 1;
            }
            x as f32
        })
        .collect();

    let series = TiltSeries::new(sampling, values)?;

    let dir = Path::new("data");
    std::fs::create_dir_all(dir).context("creating data directory")?;
    for name in ["tilt.txt", "tilt.dat"] {
        loader::save_file(&series, &dir.join(name))?;
    }

    println!(
        "Wrote {} samples ({spikes} spikes) to {}/tilt.txt and {}/tilt.dat",
        series.len(),
        dir.display(),
        dir.display()
    );
    Ok(())
}
