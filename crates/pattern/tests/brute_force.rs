// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use proptest::prelude::*;
use std::collections::HashSet;
use wcs_convolution::SchoolbookConvolver;
use wcs_pattern::{match_with_wildcards, match_with_wildcards_using};
use wcs_test_helpers::{brute_force_match, random_symbols, random_wildcards, seeded_rng};

#[test]
fn exhaustive_small_alphabet() {
    // every pattern up to length 3 over {0, 1, 2} with 2 as the wildcard
    let wildcards = HashSet::from([2]);
    let text = [0, 1, 2, 1, 1, 0, 2, 2, 0];
    for m in 0..=3u32 {
        for code in 0..3i64.pow(m) {
            let pattern: Vec<i64> = (0..m).map(|k| code / 3i64.pow(k) % 3).collect();
            assert_eq!(
                match_with_wildcards(&pattern, &text, &wildcards).unwrap(),
                brute_force_match(&pattern, &text, &wildcards),
                "pattern {pattern:?}"
            );
        }
    }
}

#[test]
fn long_random_texts() {
    let mut rng = seeded_rng(11);
    for _ in 0..5 {
        let text = random_symbols(2000, 4, &mut rng);
        let pattern = random_symbols(40, 4, &mut rng);
        let wildcards = random_wildcards(4, 0.4, &mut rng);
        assert_eq!(
            match_with_wildcards(&pattern, &text, &wildcards).unwrap(),
            brute_force_match(&pattern, &text, &wildcards)
        );
    }
}

proptest! {
    #[test]
    fn matches_brute_force(
        text in prop::collection::vec(-2i64..3, 0..20),
        pattern in prop::collection::vec(-2i64..3, 0..20),
        wildcards in prop::collection::hash_set(-2i64..3, 0..3),
    ) {
        prop_assume!(pattern.len() <= text.len());
        let expected = brute_force_match(&pattern, &text, &wildcards);
        prop_assert_eq!(
            match_with_wildcards(&pattern, &text, &wildcards).unwrap(),
            expected.clone()
        );
        prop_assert_eq!(
            match_with_wildcards_using(&pattern, &text, &wildcards, &SchoolbookConvolver).unwrap(),
            expected
        );
    }
}
