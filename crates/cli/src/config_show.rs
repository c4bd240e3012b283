// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use wcs_config::WcsConfig;

pub fn execute(config: &WcsConfig) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
