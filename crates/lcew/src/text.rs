// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

/// An integer string in which one symbol value acts as a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardText {
    symbols: Vec<u32>,
    wildcard: u32,
}

impl WildcardText {
    /// Wraps `symbols`, reading every occurrence of `wildcard` as a wildcard.
    ///
    /// ```
    /// use wcs_lcew::WildcardText;
    ///
    /// let text = WildcardText::new(vec![1, 0, 2], 0);
    /// assert_eq!(text.wildcard(), 0);
    /// assert!(text.is_wildcard(1));
    /// assert!(text.matches(0, 1));
    /// assert!(!text.matches(0, 2));
    /// ```
    pub fn new(symbols: Vec<u32>, wildcard: u32) -> Self {
        Self { symbols, wildcard }
    }

    /// A text of `len` wildcards, to be filled with [`WildcardText::set`].
    pub fn filled(len: usize, wildcard: u32) -> Self {
        Self {
            symbols: vec![wildcard; len],
            wildcard,
        }
    }

    /// Overwrites the symbol at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: usize, symbol: u32) {
        self.symbols[pos] = symbol;
    }

    /// The raw symbols, wildcards included.
    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    /// The symbol that acts as a wildcard.
    pub fn wildcard(&self) -> u32 {
        self.wildcard
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether position `pos` holds the wildcard.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn is_wildcard(&self, pos: usize) -> bool {
        self.symbols[pos] == self.wildcard
    }

    /// Whether positions `a` and `b` agree under the wildcard rule.
    pub fn matches(&self, a: usize, b: usize) -> bool {
        self.is_wildcard(a) || self.is_wildcard(b) || self.symbols[a] == self.symbols[b]
    }

    /// Number of non-wildcard positions.
    pub fn solid_count(&self) -> usize {
        self.symbols.iter().filter(|&&s| s != self.wildcard).count()
    }
}
