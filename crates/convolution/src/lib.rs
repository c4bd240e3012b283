// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Convolution
//!
//! Exact linear convolution of integer sequences behind a [`Convolver`]
//! capability, so callers can swap transform implementations without touching
//! the code that consumes the products.
//!
//! ## Backends
//!
//! - [`SchoolbookConvolver`]: the quadratic definition with checked `i128`
//!   accumulation. Used for short inputs and as a reference.
//! - [`NttConvolver`]: number-theoretic transforms over three NTT-friendly
//!   primes, recombined with the Chinese Remainder Theorem. The residue
//!   transforms run in parallel on the rayon pool.
//!
//! ## Numeric range
//!
//! Results are exact or the call fails. Neither backend wraps silently: the
//! schoolbook path checks every addition and the NTT path rejects inputs whose
//! worst-case output magnitude would not be recoverable from the residues.

pub mod convolver;
pub mod errors;
pub mod ntt;
pub mod schoolbook;

pub use convolver::{Convolver, ConvolverKind};
pub use errors::{ConvolutionError, ConvolutionResult};
pub use ntt::NttConvolver;
pub use schoolbook::SchoolbookConvolver;
