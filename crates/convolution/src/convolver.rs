// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{ConvolutionError, ConvolutionResult};
use crate::ntt::NttConvolver;
use crate::schoolbook::SchoolbookConvolver;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Computes the linear convolution of two integer sequences.
///
/// For inputs `x` and `y` the output `z` has length `x.len() + y.len() - 1`
/// with `z[k] = Σ x[i]·y[k-i]`. If either input is empty the output is empty.
///
/// Implementations must be deterministic and reentrant. Internal parallelism is
/// allowed as long as the result does not depend on it.
pub trait Convolver: Send + Sync {
    /// Convolves `x` with `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvolutionError::RangeExceeded`] instead of a wrapped value
    /// when the exact result may not be representable.
    fn convolve(&self, x: &[i64], y: &[i64]) -> ConvolutionResult<Vec<i128>>;
}

impl<C: Convolver + ?Sized> Convolver for Box<C> {
    fn convolve(&self, x: &[i64], y: &[i64]) -> ConvolutionResult<Vec<i128>> {
        (**self).convolve(x, y)
    }
}

/// Selects a convolution backend by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvolverKind {
    Schoolbook,
    #[default]
    Ntt,
}

impl ConvolverKind {
    /// Instantiates the backend with its default settings.
    pub fn build(self) -> Box<dyn Convolver> {
        match self {
            ConvolverKind::Schoolbook => Box::new(SchoolbookConvolver),
            ConvolverKind::Ntt => Box::new(NttConvolver::default()),
        }
    }
}

impl fmt::Display for ConvolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolverKind::Schoolbook => write!(f, "schoolbook"),
            ConvolverKind::Ntt => write!(f, "ntt"),
        }
    }
}

impl FromStr for ConvolverKind {
    type Err = ConvolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "schoolbook" => Ok(ConvolverKind::Schoolbook),
            "ntt" => Ok(ConvolverKind::Ntt),
            _ => Err(ConvolutionError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_and_display() {
        for kind in [ConvolverKind::Schoolbook, ConvolverKind::Ntt] {
            assert_eq!(kind.to_string().parse::<ConvolverKind>().unwrap(), kind);
        }
        assert_eq!("NTT".parse::<ConvolverKind>().unwrap(), ConvolverKind::Ntt);
        assert!(matches!(
            "fft".parse::<ConvolverKind>(),
            Err(ConvolutionError::UnknownBackend(_))
        ));
    }

    #[test]
    fn test_boxed_backends_agree() {
        let x = [3, -1, 4, 1, -5];
        let y = [9, 2, -6];
        let expected = SchoolbookConvolver.convolve(&x, &y).unwrap();
        for kind in [ConvolverKind::Schoolbook, ConvolverKind::Ntt] {
            assert_eq!(kind.build().convolve(&x, &y).unwrap(), expected);
        }
    }
}
