// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{parse_symbols, DEFAULT_WILDCARD};
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::info;
use wcs_config::WcsConfig;
use wcs_pattern::find_occurrences_using;

pub fn execute(config: &WcsConfig, pattern: &str, text: &str, wildcards: Vec<i64>) -> Result<()> {
    let positions = occurrences(config, pattern, text, wildcards)?;
    info!(count = positions.len(), convolver = %config.convolver, "matching done");

    let line: Vec<String> = positions.iter().map(ToString::to_string).collect();
    println!("{}", line.join(","));
    Ok(())
}

fn occurrences(
    config: &WcsConfig,
    pattern: &str,
    text: &str,
    wildcards: Vec<i64>,
) -> Result<Vec<usize>> {
    let star = wildcards.first().copied().unwrap_or(DEFAULT_WILDCARD);
    let pattern = parse_symbols(pattern, star).context("Invalid pattern")?;
    let text = parse_symbols(text, star).context("Invalid text")?;
    let wildcards: HashSet<i64> = if wildcards.is_empty() {
        HashSet::from([DEFAULT_WILDCARD])
    } else {
        wildcards.into_iter().collect()
    };

    let convolver = config.convolver.build();
    Ok(find_occurrences_using(&pattern, &text, &wildcards, &convolver)?)
}
