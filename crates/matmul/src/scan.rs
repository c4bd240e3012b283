// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Diagonal scan over the output grid.

use wcs_lcew::LcewOracle;

/// Where a [`DiagonalScan`] is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Query the oracle from the current cell and skip the cells without a witness.
    Advance,
    /// Record the current cell if it is still inside the grid.
    Confirm,
    /// Move one cell past a recorded witness.
    Step,
    /// The diagonal is exhausted.
    Done,
}

/// Walks the diagonal `(row + l, col + l)` of the `n × n` output grid.
///
/// Each call to [`DiagonalScan::step`] executes exactly one phase and records
/// at most one cell. The text behind the oracle must be the encoding produced
/// by [`crate::encode`] for the same `n`.
///
/// An Advance query at offset `l` compares row `row + l` of the left operand
/// with column `col + l` of the right operand and keeps going through the
/// following rows and columns. If it returns `r = q·n + k` with `k < n`, the
/// first real mismatch sits in block `q`, position `k`: cells `l .. l+q` have
/// no witness and cell `l + q` has witness `k`. When the query reaches the end
/// of the text, `q` carries the offset out of the grid. Rows of the left
/// operand that run into the second half only meet `2`s and wildcards there,
/// which never mismatch against the right operand.
#[derive(Debug)]
pub struct DiagonalScan<'o, O> {
    oracle: &'o O,
    n: usize,
    row: usize,
    col: usize,
    offset: usize,
    phase: Phase,
    queries: usize,
}

impl<'o, O: LcewOracle> DiagonalScan<'o, O> {
    /// Starts a scan of the diagonal anchored at `(row, col)`.
    pub fn new(oracle: &'o O, n: usize, (row, col): (usize, usize)) -> Self {
        Self {
            oracle,
            n,
            row,
            col,
            offset: 0,
            phase: Phase::Advance,
            queries: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Oracle queries issued so far.
    pub fn queries(&self) -> usize {
        self.queries
    }

    /// The cell at the current offset.
    pub fn cell(&self) -> (usize, usize) {
        (self.row + self.offset, self.col + self.offset)
    }

    fn in_bounds(&self) -> bool {
        let (i, j) = self.cell();
        i < self.n && j < self.n
    }

    /// Runs one phase, returning the cell it recorded, if any.
    pub fn step(&mut self) -> Option<(usize, usize)> {
        match self.phase {
            Phase::Advance => {
                if !self.in_bounds() {
                    self.phase = Phase::Done;
                    return None;
                }
                let (i, j) = self.cell();
                let n = self.n;
                let extension = self.oracle.query(n * i, n * n + n * j);
                self.queries += 1;
                self.offset += extension / n;
                self.phase = Phase::Confirm;
                None
            }
            Phase::Confirm => {
                if self.in_bounds() {
                    self.phase = Phase::Step;
                    Some(self.cell())
                } else {
                    self.phase = Phase::Done;
                    None
                }
            }
            Phase::Step => {
                self.offset += 1;
                self.phase = Phase::Advance;
                None
            }
            Phase::Done => None,
        }
    }
}

impl<O: LcewOracle> Iterator for DiagonalScan<'_, O> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.phase != Phase::Done {
            if let Some(cell) = self.step() {
                return Some(cell);
            }
        }
        None
    }
}

/// Anchors of the `2n - 1` diagonals: `(i, 0)` for every row, then `(0, j)`
/// for every column but the first.
pub fn diagonal_anchors(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).map(|i| (i, 0)).chain((1..n).map(|j| (0, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use wcs_lcew::{NaiveLcew, WildcardText};
    use wcs_sparse_matrix::SparseBoolMatrix;

    fn oracle_for(a: &SparseBoolMatrix, b: &SparseBoolMatrix) -> NaiveLcew {
        NaiveLcew::construct(encode(a, b).unwrap(), 1).unwrap()
    }

    #[test]
    fn test_anchors_cover_grid_once() {
        let n = 5;
        let mut cells: Vec<_> = diagonal_anchors(n)
            .flat_map(|(i, j)| (0..n).map(move |l| (i + l, j + l)))
            .filter(|&(i, j)| i < n && j < n)
            .collect();
        assert_eq!(cells.len(), n * n);
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), n * n);
        assert_eq!(diagonal_anchors(0).count(), 0);
        assert_eq!(diagonal_anchors(1).collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_phase_sequence() {
        // a = b = identity(2): the main diagonal has witnesses at both cells
        let id = SparseBoolMatrix::identity(2);
        let oracle = oracle_for(&id, &id);
        let mut scan = DiagonalScan::new(&oracle, 2, (0, 0));

        assert_eq!(scan.phase(), Phase::Advance);
        assert_eq!(scan.step(), None);
        assert_eq!(scan.phase(), Phase::Confirm);
        assert_eq!(scan.step(), Some((0, 0)));
        assert_eq!(scan.phase(), Phase::Step);
        assert_eq!(scan.step(), None);
        assert_eq!(scan.offset(), 1);
        assert_eq!(scan.step(), None);
        assert_eq!(scan.step(), Some((1, 1)));
        assert_eq!(scan.step(), None);
        // offset 2 is out of the grid: no query
        assert_eq!(scan.step(), None);
        assert_eq!(scan.phase(), Phase::Done);
        assert_eq!(scan.queries(), 2);
        assert_eq!(scan.step(), None);
    }

    #[test]
    fn test_empty_diagonal_uses_one_query() {
        let a = SparseBoolMatrix::empty(4);
        let oracle = oracle_for(&a, &a);
        for anchor in diagonal_anchors(4) {
            let mut scan = DiagonalScan::new(&oracle, 4, anchor);
            assert_eq!(scan.by_ref().count(), 0);
            assert_eq!(scan.queries(), 1);
        }
    }

    #[test]
    fn test_skips_cells_without_witness() {
        // only C[2][2] is set on the main diagonal of a 3x3 product
        let a = SparseBoolMatrix::new(3, vec![(2, 0)]).unwrap();
        let b = SparseBoolMatrix::new(3, vec![(0, 2)]).unwrap();
        let oracle = oracle_for(&a, &b);
        let mut scan = DiagonalScan::new(&oracle, 3, (0, 0));
        scan.step();
        assert_eq!(scan.offset(), 2);
        assert_eq!(scan.step(), Some((2, 2)));
        assert_eq!(scan.by_ref().count(), 0);
        assert_eq!(scan.queries(), 1);
    }

    #[test]
    fn test_at_most_one_cell_per_step() {
        let a = SparseBoolMatrix::new(3, vec![(0, 0), (1, 1), (2, 2), (1, 0)]).unwrap();
        let oracle = oracle_for(&a, &a);
        for anchor in diagonal_anchors(3) {
            let mut scan = DiagonalScan::new(&oracle, 3, anchor);
            let mut recorded = 0;
            while scan.phase() != Phase::Done {
                let before = scan.phase();
                if scan.step().is_some() {
                    assert_eq!(before, Phase::Confirm);
                    recorded += 1;
                }
            }
            assert!(scan.queries() <= recorded + 1);
        }
    }

    #[test]
    fn test_works_with_any_oracle() {
        // an oracle that never finds a witness ends every diagonal at once
        struct Blind(WildcardText);
        impl LcewOracle for Blind {
            fn construct(text: WildcardText, _: usize) -> wcs_lcew::LcewResult<Self> {
                Ok(Blind(text))
            }
            fn query(&self, a: usize, b: usize) -> usize {
                self.0.len() - a.max(b)
            }
            fn text(&self) -> &WildcardText {
                &self.0
            }
            fn budget(&self) -> usize {
                1
            }
        }

        let a = SparseBoolMatrix::identity(3);
        let oracle = Blind::construct(encode(&a, &a).unwrap(), 1).unwrap();
        let found: Vec<_> = diagonal_anchors(3)
            .flat_map(|anchor| DiagonalScan::new(&oracle, 3, anchor))
            .collect();
        assert!(found.is_empty());
    }
}
