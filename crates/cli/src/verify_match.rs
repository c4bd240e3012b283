// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use rand::Rng;
use tracing::info;
use wcs_config::WcsConfig;
use wcs_pattern::match_with_wildcards_using;
use wcs_test_helpers::{brute_force_match, random_symbols, random_wildcards, seeded_rng};

const MAX_ALPHABET: i64 = 5;
const MAX_LEN: usize = 20;

pub fn execute(config: &WcsConfig, iterations: usize, seed: u64) -> Result<()> {
    check_matches(config, iterations, seed)?;
    info!(iterations, "all matches verified");
    println!("ok: {iterations} matching instances verified");
    Ok(())
}

fn check_matches(config: &WcsConfig, iterations: usize, seed: u64) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let convolver = config.convolver.build();
    for iteration in 0..iterations {
        let alphabet = rng.gen_range(1..=MAX_ALPHABET);
        let n = rng.gen_range(0..=MAX_LEN);
        let m = rng.gen_range(0..=n);
        let text = random_symbols(n, alphabet, &mut rng);
        let pattern = random_symbols(m, alphabet, &mut rng);
        let wildcards = random_wildcards(alphabet, 0.3, &mut rng);

        let got = match_with_wildcards_using(&pattern, &text, &wildcards, &convolver)?;
        if got != brute_force_match(&pattern, &text, &wildcards) {
            bail!(
                "match mismatch at iteration {iteration} (seed {seed}): pattern {pattern:?}, text {text:?}, wildcards {wildcards:?}"
            );
        }
    }
    Ok(())
}
