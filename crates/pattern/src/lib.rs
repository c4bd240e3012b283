// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Pattern matching with wildcards
//!
//! Finds every alignment of a pattern in a text where the two agree, treating
//! a designated set of symbols as wildcards on either side.
//!
//! With wildcards mapped to `0` and real symbols to positive values, the sum
//!
//! ```text
//! Σ p[i]·t[a+i]·(p[i] − t[a+i])²  =  Σ p³t − 2·Σ p²t² + Σ pt³
//! ```
//!
//! vanishes exactly when alignment `a` matches: every term is non-negative and
//! a term is zero iff one side is a wildcard or the symbols are equal. The
//! three sums over all alignments at once are three convolutions of the
//! pattern against the reversed text.

pub mod errors;
pub mod matcher;

pub use errors::{PatternError, PatternResult};
pub use matcher::{
    find_occurrences, find_occurrences_using, match_with_wildcards, match_with_wildcards_using,
};
