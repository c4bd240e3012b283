// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{LcewError, LcewResult};
use crate::text::WildcardText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Answers longest-common-extension-with-wildcards queries over one text.
pub trait LcewOracle: Sized + Send + Sync {
    /// Builds the oracle over `text`.
    ///
    /// `budget` trades preprocessing work against per-query work; backends
    /// that do not need it still validate and record it.
    ///
    /// # Errors
    ///
    /// Returns [`LcewError::ZeroBudget`] if `budget` is zero.
    fn construct(text: WildcardText, budget: usize) -> LcewResult<Self>;

    /// Length of the longest common extension starting at `a` and `b`.
    ///
    /// Counts positions `a+d`, `b+d` (advancing in lockstep) that agree under
    /// the wildcard rule, stopping at the first real mismatch or at the end of
    /// the text. Starting positions at or past the end give 0.
    fn query(&self, a: usize, b: usize) -> usize;

    fn text(&self) -> &WildcardText;

    fn budget(&self) -> usize;

    fn len(&self) -> usize {
        self.text().len()
    }

    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Longest extension the text allows from `a` and `b`, ignoring content.
pub(crate) fn extension_limit(len: usize, a: usize, b: usize) -> usize {
    len.saturating_sub(a.max(b))
}

pub(crate) fn validate_budget(budget: usize) -> LcewResult<()> {
    if budget == 0 {
        return Err(LcewError::ZeroBudget);
    }
    Ok(())
}

/// Selects an oracle backend by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleKind {
    Naive,
    #[default]
    Jump,
}

impl fmt::Display for OracleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleKind::Naive => write!(f, "naive"),
            OracleKind::Jump => write!(f, "jump"),
        }
    }
}

impl FromStr for OracleKind {
    type Err = LcewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(OracleKind::Naive),
            "jump" => Ok(OracleKind::Jump),
            _ => Err(LcewError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_limit() {
        assert_eq!(extension_limit(10, 2, 7), 3);
        assert_eq!(extension_limit(10, 10, 0), 0);
        assert_eq!(extension_limit(10, 12, 0), 0);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("jump".parse::<OracleKind>().unwrap(), OracleKind::Jump);
        assert_eq!("Naive".parse::<OracleKind>().unwrap(), OracleKind::Naive);
        assert_eq!(
            "suffix-tree".parse::<OracleKind>(),
            Err(LcewError::UnknownBackend("suffix-tree".to_string()))
        );
        assert_eq!(OracleKind::default().to_string(), "jump");
    }
}
