// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod matrices;
mod strings;

pub use matrices::*;
pub use strings::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for reproducible test inputs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
