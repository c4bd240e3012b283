// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use tracing::{debug, info};
use wcs_config::WcsConfig;
use wcs_matmul::multiply_with_kind;
use wcs_test_helpers::{naive_multiply, random_sparse, seeded_rng};

pub fn execute(
    config: &WcsConfig,
    size: usize,
    density: f64,
    reps: usize,
    seed: u64,
) -> Result<()> {
    let queries = check_products(config, size, density, reps, seed)?;
    info!(reps, queries, "all products verified");
    println!("ok: {reps} products of size {size} verified");
    Ok(())
}

/// Runs `reps` random products and returns the total number of oracle queries.
fn check_products(
    config: &WcsConfig,
    size: usize,
    density: f64,
    reps: usize,
    seed: u64,
) -> Result<usize> {
    let mut rng = seeded_rng(seed);
    let mut queries = 0;
    for rep in 0..reps {
        let a = random_sparse(size, density, &mut rng);
        let b = random_sparse(size, density, &mut rng);
        let (product, stats) = multiply_with_kind(&a, &b, &config.product, config.oracle)?;
        let expected = naive_multiply(&a, &b);
        if product != expected {
            bail!(
                "product mismatch at repetition {rep} (seed {seed}): got {} entries, expected {}",
                product.nnz(),
                expected.nnz()
            );
        }
        debug!(rep, nnz = product.nnz(), queries = stats.queries, "product verified");
        queries += stats.queries;
    }
    Ok(queries)
}
