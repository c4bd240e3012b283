// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, ensure, Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use wcs_config::WcsConfig;
use wcs_matmul::multiply_with_kind;
use wcs_test_helpers::{naive_multiply, random_sparse, seeded_rng};

/// Expected entries per row are swept over `1..=MAX_DENSITY_FACTOR`.
pub const MAX_DENSITY_FACTOR: u32 = 10;

pub fn execute(
    config: &WcsConfig,
    max_size: usize,
    step: usize,
    reps: usize,
    seed: u64,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    ensure!(step > 0, "step must be positive");
    if let Some(dir) = &out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
    }

    let mut rng = seeded_rng(seed);
    for p in 1..=MAX_DENSITY_FACTOR {
        let mut sink: Box<dyn Write> = match &out_dir {
            Some(dir) => {
                let path = dir.join(format!("results_{p}.csv"));
                let file = File::create(&path)
                    .with_context(|| format!("Unable to open {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        for n in (step..=max_size).step_by(step) {
            for rep in 0..reps {
                info!(n, p, rep, "timing product");
                let seconds = time_product(config, n, p as f64 / n as f64, &mut rng)?;
                writeln!(sink, "{n},{p},{seconds}")?;
            }
        }
        sink.flush()?;
    }
    Ok(())
}

/// Wall time of one product on random operands, checked against the
/// triple-loop product.
fn time_product<R: rand::Rng>(
    config: &WcsConfig,
    n: usize,
    density: f64,
    rng: &mut R,
) -> Result<f64> {
    let a = random_sparse(n, density, rng);
    let b = random_sparse(n, density, rng);
    let expected = naive_multiply(&a, &b);

    let start = Instant::now();
    let (product, _) = multiply_with_kind(&a, &b, &config.product, config.oracle)?;
    let seconds = start.elapsed().as_secs_f64();

    if product != expected {
        bail!("product mismatch for n = {n}, density = {density}");
    }
    Ok(seconds)
}
