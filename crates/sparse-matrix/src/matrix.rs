// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square Boolean matrix represented by its 1-entries.
///
/// Entries are unique, sorted ascending by `(row, col)` and always inside the
/// `n × n` grid. Deserialization goes through [`SparseBoolMatrix::new`] so the
/// same invariants hold for matrices read from disk.
///
/// # Example
///
/// ```
/// use wcs_sparse_matrix::SparseBoolMatrix;
///
/// let m = SparseBoolMatrix::new(3, vec![(2, 0), (0, 1), (2, 0)]).unwrap();
/// assert_eq!(m.entries(), &[(0, 1), (2, 0)]);
/// assert!(m.contains(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct SparseBoolMatrix {
    n: usize,
    entries: Vec<(usize, usize)>,
}

#[derive(Deserialize)]
struct RawMatrix {
    n: usize,
    #[serde(default)]
    entries: Vec<(usize, usize)>,
}

impl TryFrom<RawMatrix> for SparseBoolMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> MatrixResult<Self> {
        SparseBoolMatrix::new(raw.n, raw.entries)
    }
}

impl SparseBoolMatrix {
    /// Creates a matrix of dimension `n` from a list of coordinates.
    ///
    /// The coordinates may arrive in any order and may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if a coordinate is not below `n`.
    pub fn new(n: usize, mut entries: Vec<(usize, usize)>) -> MatrixResult<Self> {
        if let Some(&(row, col)) = entries.iter().find(|&&(r, c)| r >= n || c >= n) {
            return Err(MatrixError::OutOfBounds { row, col, n });
        }
        entries.sort_unstable();
        entries.dedup();
        Ok(Self { n, entries })
    }

    /// Creates a matrix from entries that are already in ascending order.
    ///
    /// Producers that emit entries in order, such as products, skip the sort
    /// that [`SparseBoolMatrix::new`] does. The order is still checked.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if a coordinate is not below `n`,
    /// and [`MatrixError::Unsorted`] if an entry does not strictly follow the
    /// one before it.
    pub fn from_sorted(n: usize, entries: Vec<(usize, usize)>) -> MatrixResult<Self> {
        if let Some(&(row, col)) = entries.iter().find(|&&(r, c)| r >= n || c >= n) {
            return Err(MatrixError::OutOfBounds { row, col, n });
        }
        if let Some(index) = entries.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MatrixError::Unsorted { index: index + 1 });
        }
        Ok(Self { n, entries })
    }

    /// The `n × n` matrix with no entries.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            entries: Vec::new(),
        }
    }

    /// The `n × n` identity pattern.
    pub fn identity(n: usize) -> Self {
        Self {
            n,
            entries: (0..n).map(|i| (i, i)).collect(),
        }
    }

    /// Scans a dense grid row by row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_dense(grid: &[Vec<bool>]) -> MatrixResult<Self> {
        let n = grid.len();
        let mut entries = Vec::new();
        for (i, row) in grid.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            entries.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(_, &set)| set)
                    .map(|(j, _)| (i, j)),
            );
        }
        Ok(Self { n, entries })
    }

    /// Expands into a dense row-major grid.
    pub fn to_dense(&self) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; self.n]; self.n];
        for &(i, j) in &self.entries {
            grid[i][j] = true;
        }
        grid
    }

    /// Dimension of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The 1-entries in ascending `(row, col)` order.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    /// Number of 1-entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `(row, col)` is a 1-entry.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.binary_search(&(row, col)).is_ok()
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut entries: Vec<_> = self.entries.iter().map(|&(i, j)| (j, i)).collect();
        entries.sort_unstable();
        Self { n: self.n, entries }
    }

    pub fn is_symmetric(&self) -> bool {
        self.entries.iter().all(|&(i, j)| self.contains(j, i))
    }

    /// Consumes the matrix, returning its entries.
    pub fn into_entries(self) -> Vec<(usize, usize)> {
        self.entries
    }
}

impl fmt::Display for SparseBoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self.entries.iter().peekable();
        for i in 0..self.n {
            for j in 0..self.n {
                let set = cursor.next_if(|&&cell| cell == (i, j)).is_some();
                write!(f, "{}", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
