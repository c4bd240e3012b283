// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Longest Common Extension with Wildcards (LCEW).
//!
//! Given a [`WildcardText`], an LCEW query `(a, b)` asks for how many
//! positions the suffixes starting at `a` and `b` agree when a wildcard symbol
//! agrees with anything on the other side. The extension stops at the first
//! position where both sides hold real, different symbols, or at the end of
//! the text.
//!
//! Oracles are built once over a text and a preprocessing budget and then
//! answer any number of queries. Two backends implement [`LcewOracle`]:
//!
//! - [`NaiveLcew`] compares position by position.
//! - [`JumpLcew`] only visits positions where both sides are real, jumping
//!   over wildcard runs with a precomputed next-solid table.

pub mod errors;
pub mod jump;
pub mod naive;
pub mod oracle;
pub mod text;

pub use errors::{LcewError, LcewResult};
pub use jump::JumpLcew;
pub use naive::NaiveLcew;
pub use oracle::{LcewOracle, OracleKind};
pub use text::WildcardText;
