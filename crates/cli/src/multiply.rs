// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::read_matrix;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use wcs_config::WcsConfig;
use wcs_matmul::multiply_with_kind;

pub fn execute(config: &WcsConfig, lhs: &Path, rhs: &Path, out: Option<PathBuf>) -> Result<()> {
    let a = read_matrix(lhs)?;
    let b = read_matrix(rhs)?;

    let (product, stats) = multiply_with_kind(&a, &b, &config.product, config.oracle)?;
    info!(
        n = product.n(),
        nnz = product.nnz(),
        budget = stats.budget,
        queries = stats.queries,
        oracle = %config.oracle,
        "product computed"
    );

    let json = serde_json::to_string_pretty(&product)?;
    match out {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("Could not write product to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
