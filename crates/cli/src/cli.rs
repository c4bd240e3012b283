// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_tracing;
use crate::{bench_product, config_show, find, multiply, verify_match, verify_product};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, Level};
use wcs_config::load_config;

#[derive(Parser, Debug)]
#[command(name = "wcs")]
#[command(about = "Boolean matrix products and pattern matching with wildcards", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `wcs -vvv` will give you
    /// trace level output. Without it the configured `log_level` applies
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Level requested on the command line, if any.
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            return Some(Level::ERROR);
        }
        match self.verbose {
            0 => None,
            1 => Some(Level::INFO),  // -v
            2 => Some(Level::DEBUG), // -vv
            _ => Some(Level::TRACE), // -vvv
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.clone())?;
        setup_tracing(&config, self.log_level());
        debug!(?config, "configuration loaded");

        match self.command {
            Commands::Multiply { lhs, rhs, out } => multiply::execute(&config, &lhs, &rhs, out)?,
            Commands::Find {
                pattern,
                text,
                wildcards,
            } => find::execute(&config, &pattern, &text, wildcards)?,
            Commands::VerifyProduct {
                size,
                density,
                reps,
                seed,
            } => verify_product::execute(&config, size, density, reps, seed)?,
            Commands::VerifyMatch { iterations, seed } => {
                verify_match::execute(&config, iterations, seed)?
            }
            Commands::BenchProduct {
                max_size,
                step,
                reps,
                seed,
                out_dir,
            } => bench_product::execute(&config, max_size, step, reps, seed, out_dir)?,
            Commands::Config => config_show::execute(&config)?,
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Multiply two Boolean matrices read from JSON files
    Multiply {
        /// Left operand, `{"n": .., "entries": [[row, col], ..]}`
        #[arg(long)]
        lhs: PathBuf,

        /// Right operand, same format
        #[arg(long)]
        rhs: PathBuf,

        /// Write the product here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Find every alignment of a pattern in a text
    Find {
        /// Comma separated symbols; `*` stands for the first wildcard
        #[arg(long, allow_hyphen_values = true)]
        pattern: String,

        /// Comma separated symbols; `*` stands for the first wildcard
        #[arg(long, allow_hyphen_values = true)]
        text: String,

        /// Symbols that match anything. Defaults to -1
        #[arg(long = "wildcard", allow_negative_numbers = true)]
        wildcards: Vec<i64>,
    },

    /// Compare random products against the triple-loop product
    VerifyProduct {
        #[arg(long, default_value_t = 50)]
        size: usize,

        #[arg(long, default_value_t = 0.05)]
        density: f64,

        #[arg(long, default_value_t = 20)]
        reps: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Compare random small matching instances against brute force
    VerifyMatch {
        #[arg(long, default_value_t = 1000)]
        iterations: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Time products over growing sizes and densities, writing CSV rows `n,p,seconds`
    BenchProduct {
        #[arg(long, default_value_t = 2000)]
        max_size: usize,

        #[arg(long, default_value_t = 500)]
        step: usize,

        /// Repetitions per size and density
        #[arg(long, default_value_t = 10)]
        reps: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Directory for `results_<p>.csv`. Rows go to stdout when absent
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the effective configuration as YAML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["wcs", "config"]);
        assert_eq!(cli.log_level(), None);
        let cli = Cli::parse_from(["wcs", "-vv", "config"]);
        assert_eq!(cli.log_level(), Some(Level::DEBUG));
        let cli = Cli::parse_from(["wcs", "config", "-q"]);
        assert_eq!(cli.log_level(), Some(Level::ERROR));
        assert!(Cli::try_parse_from(["wcs", "-v", "-q", "config"]).is_err());
    }

    #[test]
    fn test_find_accepts_negative_symbols() {
        let cli = Cli::parse_from([
            "wcs",
            "find",
            "--pattern",
            "-3,*",
            "--text",
            "-3,4,-3",
            "--wildcard",
            "-7",
            "--wildcard",
            "0",
        ]);
        let Commands::Find {
            pattern,
            text,
            wildcards,
        } = cli.command
        else {
            panic!("expected find");
        };
        assert_eq!(pattern, "-3,*");
        assert_eq!(text, "-3,4,-3");
        assert_eq!(wildcards, vec![-7, 0]);
    }
}
