// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wcs_sparse_matrix::SparseBoolMatrix;

pub mod telemetry;

/// Wildcard used when none is given on the command line
pub const DEFAULT_WILDCARD: i64 = -1;

/// Parse a comma separated symbol list, mapping `*` to `wildcard`
pub fn parse_symbols(s: &str, wildcard: i64) -> Result<Vec<i64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(str::trim)
        .map(|token| match token {
            "*" => Ok(wildcard),
            _ => token
                .parse::<i64>()
                .with_context(|| format!("invalid symbol '{token}'")),
        })
        .collect()
}

pub fn read_matrix(path: &Path) -> Result<SparseBoolMatrix> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Could not read matrix file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid matrix in {}", path.display()))
}
