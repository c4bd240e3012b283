// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::LcewResult;
use crate::oracle::{extension_limit, validate_budget, LcewOracle};
use crate::text::WildcardText;

/// Compares the two suffixes one position at a time.
///
/// No preprocessing; a query costs the length of the extension it returns.
#[derive(Debug, Clone)]
pub struct NaiveLcew {
    text: WildcardText,
    budget: usize,
}

impl LcewOracle for NaiveLcew {
    fn construct(text: WildcardText, budget: usize) -> LcewResult<Self> {
        validate_budget(budget)?;
        Ok(Self { text, budget })
    }

    fn query(&self, a: usize, b: usize) -> usize {
        let limit = extension_limit(self.text.len(), a, b);
        (0..limit)
            .find(|&d| !self.text.matches(a + d, b + d))
            .unwrap_or(limit)
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
    use crate::errors::LcewError;

    #[test]
    fn test_query() {
        // wildcard 0
        let text = WildcardText::new(vec![1, 0, 3, 4, 1, 2, 0, 4], 0);
        let oracle = NaiveLcew::construct(text, 1).unwrap();
        // 1 0 3 4 vs 1 2 0 4 : all agree, then runs out of text
        assert_eq!(oracle.query(0, 4), 4);
        // 0 3 4 1 2 0 4 vs 3 4 1 2 0 4 : '3' vs '4' at offset 1
        assert_eq!(oracle.query(1, 2), 1);
        assert_eq!(oracle.query(3, 3), 5);
        assert_eq!(oracle.query(8, 0), 0);
    }

    #[test]
    fn test_zero_budget() {
        let text = WildcardText::new(vec![1], 0);
        assert_eq!(
            NaiveLcew::construct(text, 0).unwrap_err(),
            LcewError::ZeroBudget
        );
    }
}
