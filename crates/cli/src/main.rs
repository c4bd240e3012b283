// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;

mod bench_product;
mod cli;
mod config_show;
mod find;
pub mod helpers;
mod multiply;
mod verify_match;
mod verify_product;

pub fn main() {
    // Execute the cli
    if let Err(err) = Cli::parse().execute() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
