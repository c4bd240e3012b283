// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{MatMulError, MatMulResult};
use serde::{Deserialize, Serialize};

/// Empirical constant in front of the preprocessing budget.
pub const DEFAULT_BUDGET_FACTOR: f64 = 50.0;

/// Tuning knobs for [`crate::multiply_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    /// Multiplier of the preprocessing budget, see [`crate::preprocessing_budget`].
    pub budget_factor: f64,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            budget_factor: DEFAULT_BUDGET_FACTOR,
        }
    }
}

impl ProductConfig {
    /// A configuration with the given budget factor.
    pub fn with_budget_factor(budget_factor: f64) -> Self {
        Self { budget_factor }
    }

    /// Checks that the budget factor is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`MatMulError::InvalidConfig`] otherwise.
    ///
    /// ```
    /// use wcs_matmul::ProductConfig;
    ///
    /// assert!(ProductConfig::with_budget_factor(2.5).validate().is_ok());
    /// assert!(ProductConfig::with_budget_factor(0.0).validate().is_err());
    /// assert!(ProductConfig::with_budget_factor(f64::NAN).validate().is_err());
    /// ```
    pub fn validate(&self) -> MatMulResult<()> {
        if !self.budget_factor.is_finite() || self.budget_factor <= 0.0 {
            return Err(MatMulError::InvalidConfig {
                message: format!(
                    "budget_factor must be a positive finite number, got {}",
                    self.budget_factor
                ),
            });
        }
        Ok(())
    }
}
