// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for LCEW oracles.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcewError {
    /// Oracles need a positive preprocessing budget
    #[error("Preprocessing budget must be positive")]
    ZeroBudget,

    /// Unknown backend name
    #[error("Unknown oracle '{0}', expected 'naive' or 'jump'")]
    UnknownBackend(String),
}

/// Result type alias for LCEW operations
pub type LcewResult<T> = Result<T, LcewError>;
