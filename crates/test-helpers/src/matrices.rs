// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use rand::Rng;
use wcs_sparse_matrix::SparseBoolMatrix;

// Reference implementations and input generators for checking the fast
// product. None of them are meant to be fast.

/// An `n × n` grid whose cells are set independently with probability
/// `density`, clamped to `[0, 1]`.
pub fn random_dense<R: Rng + ?Sized>(n: usize, density: f64, rng: &mut R) -> Vec<Vec<bool>> {
    let p = density.clamp(0.0, 1.0);
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(p)).collect())
        .collect()
}

/// Sparse form of [`random_dense`].
pub fn random_sparse<R: Rng + ?Sized>(n: usize, density: f64, rng: &mut R) -> SparseBoolMatrix {
    SparseBoolMatrix::from_dense(&random_dense(n, density, rng))
        .expect("random_dense always produces a square grid")
}

/// A random symmetric matrix: the union of a random matrix and its transpose.
pub fn random_symmetric<R: Rng + ?Sized>(
    n: usize,
    density: f64,
    rng: &mut R,
) -> SparseBoolMatrix {
    let m = random_sparse(n, density, rng);
    let mut entries = m.entries().to_vec();
    entries.extend(m.transpose().into_entries());
    SparseBoolMatrix::new(n, entries).expect("entries come from an n x n matrix")
}

/// Dense triple-loop Boolean product.
pub fn dense_multiply(a: &[Vec<bool>], b: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = a.len();
    let mut c = vec![vec![false; n]; n];
    for (i, row) in c.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..n).any(|k| a[i][k] && b[k][j]);
        }
    }
    c
}

/// Triple-loop Boolean product of two sparse matrices of equal dimension.
pub fn naive_multiply(a: &SparseBoolMatrix, b: &SparseBoolMatrix) -> SparseBoolMatrix {
    assert_eq!(a.n(), b.n(), "operands must have the same dimension");
    SparseBoolMatrix::from_dense(&dense_multiply(&a.to_dense(), &b.to_dense()))
        .expect("dense_multiply always produces a square grid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn test_dense_multiply() {
        let a = vec![vec![true, false], vec![true, true]];
        let b = vec![vec![false, true], vec![true, false]];
        assert_eq!(
            dense_multiply(&a, &b),
            vec![vec![false, true], vec![true, true]]
        );
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = seeded_rng(1);
        assert!(random_sparse(6, 0.0, &mut rng).is_empty());
        assert_eq!(random_sparse(6, 1.0, &mut rng).nnz(), 36);
        assert_eq!(random_sparse(6, 7.5, &mut rng).nnz(), 36);
    }

    #[test]
    fn test_random_symmetric() {
        let mut rng = seeded_rng(2);
        for _ in 0..10 {
            assert!(random_symmetric(7, 0.2, &mut rng).is_symmetric());
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_sparse(10, 0.3, &mut seeded_rng(42));
        let b = random_sparse(10, 0.3, &mut seeded_rng(42));
        assert_eq!(a, b);
    }
}
