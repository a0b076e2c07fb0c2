//! Property-based tests for candidate enumeration and support estimation.
//!
//! These tests use proptest to generate random attribute lists and tables
//! and verify that discovery keeps its invariants under all of them.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p fdscout --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p fdscout --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use fdscout::discovery::candidate_count;
use fdscout::{DataTable, Miner, MinerConfig, Schema, SupportEstimator, enumerate_candidates};

// =============================================================================
// Test Strategies
// =============================================================================

/// Distinct attribute names `c0..cN`.
fn attribute_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    (1..=max).prop_map(|n| (0..n).map(|i| format!("c{}", i)).collect())
}

/// A table with 1-5 columns and 1-40 rows over a small value domain, so that
/// groups collide often.
fn small_table() -> impl Strategy<Value = DataTable> {
    (1usize..=5, 1usize..=40).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![Just("0"), Just("1"), Just("2"), Just(" 1")], cols),
            rows,
        )
        .prop_map(move |cells| {
            let schema = Schema::new((0..cols).map(|i| format!("c{}", i)));
            let rows = cells
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect();
            DataTable::new(schema, rows, b',')
        })
    })
}

// =============================================================================
// Enumeration Properties
// =============================================================================

mod enumeration_tests {
    use super::*;

    proptest! {
        /// The number of candidates is the sum of binomials up to the depth.
        #[test]
        fn count_is_binomial_sum(attrs in attribute_names(10), depth in 1usize..=10) {
            let candidates = enumerate_candidates(&attrs, depth);
            prop_assert_eq!(candidates.len(), candidate_count(attrs.len(), depth));
        }

        /// Candidates are unique, bounded in length and keep schema order.
        #[test]
        fn candidates_are_ordered_and_unique(attrs in attribute_names(9), depth in 1usize..=9) {
            let candidates = enumerate_candidates(&attrs, depth);
            let mut seen = HashSet::new();

            for candidate in &candidates {
                prop_assert!(!candidate.is_empty());
                prop_assert!(candidate.len() <= depth);

                let positions: Vec<usize> = candidate
                    .attributes()
                    .iter()
                    .map(|a| attrs.iter().position(|x| x == a).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

                prop_assert!(seen.insert(candidate.clone()), "duplicate {}", candidate);
            }
        }

        /// Every prefix is emitted before its extensions.
        #[test]
        fn prefixes_come_first(attrs in attribute_names(7), depth in 2usize..=7) {
            let candidates = enumerate_candidates(&attrs, depth);

            for (i, candidate) in candidates.iter().enumerate() {
                if candidate.len() < 2 {
                    continue;
                }
                let prefix = &candidate.attributes()[..candidate.len() - 1];
                let prefix_index = candidates
                    .iter()
                    .position(|c| c.attributes() == prefix)
                    .unwrap();
                prop_assert!(prefix_index < i);
            }
        }
    }
}

// =============================================================================
// Support Properties
// =============================================================================

mod support_tests {
    use super::*;

    proptest! {
        /// Support always lies in [0, 1].
        #[test]
        fn support_is_bounded(table in small_table()) {
            let estimator = SupportEstimator::new(&table, 0.0).unwrap();
            let candidates = enumerate_candidates(&table.schema.names(), 2);

            for fd in estimator.estimate(&candidates).unwrap() {
                prop_assert!((0.0..=1.0).contains(&fd.support));
                prop_assert!(!fd.lhs.contains(&fd.rhs));
            }
        }

        /// Using a column to predict a copy of itself is exact.
        #[test]
        fn duplicated_column_is_exact(table in small_table()) {
            let mut names = table.schema.names();
            names.push("copy".to_string());
            let rows: Vec<Vec<String>> = table
                .rows
                .iter()
                .map(|row| {
                    let mut row = row.clone();
                    row.push(row[0].clone());
                    row
                })
                .collect();
            let widened = DataTable::new(Schema::new(names), rows, b',');

            let estimator = SupportEstimator::new(&widened, 0.0).unwrap();
            prop_assert_eq!(estimator.support(&["c0".to_string()], "copy").unwrap(), 1.0);
            prop_assert_eq!(estimator.support(&["copy".to_string()], "c0").unwrap(), 1.0);
        }

        /// Lowering the threshold never removes a dependency.
        #[test]
        fn threshold_is_monotone(
            table in small_table(),
            low in 0.0f64..=1.0,
            high in 0.0f64..=1.0,
        ) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };

            let at_high = Miner::with_config(MinerConfig::new(2, high))
                .discover(&table)
                .unwrap()
                .dependencies;
            let at_low = Miner::with_config(MinerConfig::new(2, low))
                .discover(&table)
                .unwrap()
                .dependencies;

            for fd in &at_high {
                prop_assert!(fd.support >= high);
                prop_assert!(at_low.contains(fd));
            }
            prop_assert!(at_low.iter().all(|fd| fd.support >= low));
        }

        /// At threshold zero every (lhs, rhs) pair is reported exactly once.
        #[test]
        fn zero_threshold_reports_every_pair(table in small_table(), depth in 1usize..=3) {
            let outcome = Miner::with_config(MinerConfig::new(depth, 0.0))
                .discover(&table)
                .unwrap();

            prop_assert_eq!(outcome.dependencies.len(), outcome.summary.pairs_evaluated);

            let keys: HashSet<(Vec<String>, String)> = outcome
                .dependencies
                .iter()
                .map(|fd| (fd.lhs.clone(), fd.rhs.clone()))
                .collect();
            prop_assert_eq!(keys.len(), outcome.dependencies.len());
        }

        /// Parallel evaluation returns exactly the sequential output.
        #[test]
        fn parallel_is_deterministic(table in small_table(), depth in 1usize..=3) {
            let sequential = Miner::with_config(MinerConfig::new(depth, 0.3))
                .discover(&table)
                .unwrap();
            let parallel = Miner::with_config(MinerConfig::new(depth, 0.3).with_parallel(true))
                .discover(&table)
                .unwrap();

            prop_assert_eq!(sequential.dependencies, parallel.dependencies);
        }
    }
}
