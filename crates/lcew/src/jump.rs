// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::LcewResult;
use crate::oracle::{extension_limit, validate_budget, LcewOracle};
use crate::text::WildcardText;
use tracing::debug;

/// Skips wildcard runs using a next-solid-position table.
///
/// `next_solid[i]` is the first position `>= i` holding a real symbol, or the
/// text length if there is none. A query only compares offsets where both
/// sides are real, so its cost is bounded by the number of real positions it
/// passes rather than by the extension length. On sparse texts such as
/// encoded Boolean matrices most positions are wildcards.
#[derive(Debug, Clone)]
pub struct JumpLcew {
    text: WildcardText,
    next_solid: Vec<usize>,
    budget: usize,
}

impl JumpLcew {
    fn next_solid_offset(&self, start: usize, d: usize) -> usize {
        self.next_solid[start + d] - start
    }
}

impl LcewOracle for JumpLcew {
    fn construct(text: WildcardText, budget: usize) -> LcewResult<Self> {
        validate_budget(budget)?;

        let len = text.len();
        let mut next_solid = vec![len; len + 1];
        for i in (0..len).rev() {
            next_solid[i] = if text.is_wildcard(i) {
                next_solid[i + 1]
            } else {
                i
            };
        }
        debug!(len, solid = text.solid_count(), budget, "built jump oracle");

        Ok(Self {
            text,
            next_solid,
            budget,
        })
    }

    fn query(&self, a: usize, b: usize) -> usize {
        let limit = extension_limit(self.text.len(), a, b);
        let symbols = self.text.symbols();

        let mut d = 0;
        while d < limit {
            // Closest offset >= d where both sides are real.
            let next = self
                .next_solid_offset(a, d)
                .max(self.next_solid_offset(b, d));
            if next >= limit {
                return limit;
            }
            if next > d {
                d = next;
                continue;
            }
            if symbols[a + d] != symbols[b + d] {
                return d;
            }
            d += 1;
        }
        limit
    }

    fn text(&self) -> &WildcardText {
        &self.text
    }

    fn budget(&self) -> usize {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::NaiveLcew;
    use proptest::prelude::*;

    #[test]
    fn test_next_solid_table() {
        let text = WildcardText::new(vec![0, 0, 5, 0, 7, 0], 0);
        let oracle = JumpLcew::construct(text, 3).unwrap();
        assert_eq!(oracle.next_solid, vec![2, 2, 2, 4, 4, 6, 6]);
        assert_eq!(oracle.budget(), 3);
    }

    #[test]
    fn test_query_skips_wildcards() {
        let text = WildcardText::new(vec![1, 0, 0, 0, 2, 0, 0, 1, 0, 0, 0, 1], 0);
        let oracle = JumpLcew::construct(text, 1).unwrap();
        // never two real symbols at the same offset
        assert_eq!(oracle.query(0, 6), 6);
        // 0 0 0 2 .. against 2 0 0 1 ..
        assert_eq!(oracle.query(1, 4), 3);
        assert_eq!(oracle.query(11, 0), 1);
        assert_eq!(oracle.query(12, 0), 0);
    }

    #[test]
    fn test_all_wildcards() {
        let text = WildcardText::filled(10, 0);
        let oracle = JumpLcew::construct(text, 1).unwrap();
        assert_eq!(oracle.query(0, 3), 7);
        assert_eq!(oracle.query(9, 9), 1);
    }

    fn arb_text() -> impl Strategy<Value = WildcardText> {
        prop::collection::vec(0u32..4, 0..60).prop_map(|symbols| WildcardText::new(symbols, 0))
    }

    proptest! {
        #[test]
        fn agrees_with_naive(text in arb_text(), a in 0usize..64, b in 0usize..64) {
            let naive = NaiveLcew::construct(text.clone(), 1).unwrap();
            let jump = JumpLcew::construct(text, 1).unwrap();
            prop_assert_eq!(jump.query(a, b), naive.query(a, b));
        }
    }
}
