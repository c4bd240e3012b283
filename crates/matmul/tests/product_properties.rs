// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use proptest::prelude::*;
use wcs_lcew::{JumpLcew, NaiveLcew, OracleKind};
use wcs_matmul::{multiply, multiply_with, multiply_with_kind, ProductConfig};
use wcs_sparse_matrix::SparseBoolMatrix;
use wcs_test_helpers::{naive_multiply, random_sparse, random_symmetric, seeded_rng};

fn arb_matrix(n: usize) -> impl Strategy<Value = SparseBoolMatrix> {
    prop::collection::vec((0..n, 0..n), 0..=n * n)
        .prop_map(move |entries| SparseBoolMatrix::new(n, entries).unwrap())
}

fn arb_pair() -> impl Strategy<Value = (SparseBoolMatrix, SparseBoolMatrix)> {
    (1usize..9).prop_flat_map(|n| (arb_matrix(n), arb_matrix(n)))
}

#[test]
fn single_witness_scenario() {
    let a = SparseBoolMatrix::new(2, vec![(0, 1)]).unwrap();
    let b = SparseBoolMatrix::new(2, vec![(1, 0)]).unwrap();
    assert_eq!(multiply(&a, &b).unwrap().entries(), &[(0, 0)]);
}

#[test]
fn exhaustive_two_by_two() {
    // every pair of 2x2 operands
    let cells = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let all: Vec<SparseBoolMatrix> = (0u8..16)
        .map(|mask| {
            let entries = cells
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &cell)| cell)
                .collect();
            SparseBoolMatrix::new(2, entries).unwrap()
        })
        .collect();

    for a in &all {
        for b in &all {
            assert_eq!(multiply(a, b).unwrap(), naive_multiply(a, b), "a={a:?} b={b:?}");
        }
    }
}

#[test]
fn random_density_sweep() {
    let mut rng = seeded_rng(2024);
    for n in [1, 5, 16, 33] {
        for p in 1..=5 {
            let density = p as f64 / n as f64;
            let a = random_sparse(n, density, &mut rng);
            let b = random_sparse(n, density, &mut rng);
            assert_eq!(multiply(&a, &b).unwrap(), naive_multiply(&a, &b));
        }
    }
}

#[test]
fn symmetric_square_is_symmetric() {
    let mut rng = seeded_rng(99);
    for n in [3, 8, 20] {
        let a = random_symmetric(n, 0.15, &mut rng);
        let product = multiply(&a, &a).unwrap();
        assert!(product.is_symmetric());
        assert_eq!(product, naive_multiply(&a, &a));
    }
}

proptest! {
    #[test]
    fn matches_naive_product((a, b) in arb_pair()) {
        let expected = naive_multiply(&a, &b);
        let config = ProductConfig::default();
        prop_assert_eq!(multiply_with::<JumpLcew>(&a, &b, &config).unwrap(), expected.clone());
        prop_assert_eq!(multiply_with::<NaiveLcew>(&a, &b, &config).unwrap(), expected);
    }

    #[test]
    fn empty_operand_gives_empty_product(a in (1usize..9).prop_flat_map(arb_matrix)) {
        let zero = SparseBoolMatrix::empty(a.n());
        prop_assert!(multiply(&a, &zero).unwrap().is_empty());
        prop_assert!(multiply(&zero, &a).unwrap().is_empty());
    }

    #[test]
    fn identity_is_neutral(a in (1usize..9).prop_flat_map(arb_matrix)) {
        let id = SparseBoolMatrix::identity(a.n());
        prop_assert_eq!(multiply(&id, &a).unwrap(), a.clone());
        prop_assert_eq!(multiply(&a, &id).unwrap(), a);
    }

    #[test]
    fn queries_bounded_by_output((a, b) in arb_pair()) {
        let (product, stats) =
            multiply_with_kind(&a, &b, &ProductConfig::default(), OracleKind::Jump).unwrap();
        // one query per recorded entry plus one closing query per diagonal
        prop_assert!(stats.queries <= product.nnz() + 2 * a.n() - 1);
    }
}
