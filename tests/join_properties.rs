mod common;

use common::data::table_strategy;
use common::JOIN_TYPES;
use csv_join::{join, JoinAlgorithm, JoinType, OutputRow, Table};
use proptest::prelude::*;
use proptest::sample::select;

const LEFT_WIDTH: usize = 3;
const LEFT_KEY: usize = 1;
const RIGHT_WIDTH: usize = 2;
const RIGHT_KEY: usize = 0;

fn tables() -> impl Strategy<Value = (Table, Table)> {
    (
        table_strategy(LEFT_WIDTH, LEFT_KEY, 12),
        table_strategy(RIGHT_WIDTH, RIGHT_KEY, 12),
    )
}

fn run(left: &Table, right: &Table, join_type: JoinType, algorithm: JoinAlgorithm) -> Vec<OutputRow> {
    join(left, LEFT_KEY, right, RIGHT_KEY, join_type, algorithm).unwrap()
}

fn matches_in(table: &Table, column: usize, key: &str) -> usize {
    table.rows().iter().filter(|row| row[column] == key).count()
}

fn is_blank(fields: &[String]) -> bool {
    fields.iter().all(String::is_empty)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_algorithms_agree(
        (left, right) in tables(),
        join_type in select(JOIN_TYPES.to_vec()),
    ) {
        let nested = run(&left, &right, join_type, JoinAlgorithm::Nested);
        let hash = run(&left, &right, join_type, JoinAlgorithm::Hash);
        prop_assert_eq!(nested, hash);
    }

    #[test]
    fn prop_inner_cardinality((left, right) in tables()) {
        let expected: usize = left
            .rows()
            .iter()
            .map(|row| matches_in(&right, RIGHT_KEY, &row[LEFT_KEY]))
            .sum();
        let out = run(&left, &right, JoinType::Inner, JoinAlgorithm::Hash);
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn prop_left_completeness(
        (left, right) in tables(),
        join_type in select(vec![JoinType::Left, JoinType::Outer]),
    ) {
        let out = run(&left, &right, join_type, JoinAlgorithm::Hash);
        for row in left.rows() {
            let matches = matches_in(&right, RIGHT_KEY, &row[LEFT_KEY]);
            let appearances = out.iter().filter(|o| &o[..LEFT_WIDTH] == row.as_slice()).count();
            prop_assert_eq!(appearances, matches.max(1));
        }
    }

    #[test]
    fn prop_right_completeness((left, right) in tables()) {
        let out = run(&left, &right, JoinType::Right, JoinAlgorithm::Nested);
        for row in right.rows() {
            let matches = matches_in(&left, LEFT_KEY, &row[RIGHT_KEY]);
            let appearances = out.iter().filter(|o| &o[LEFT_WIDTH..] == row.as_slice()).count();
            prop_assert_eq!(appearances, matches.max(1));
        }
    }

    #[test]
    fn prop_outer_totality((left, right) in tables()) {
        let out = run(&left, &right, JoinType::Outer, JoinAlgorithm::Hash);

        for row in left.rows() {
            prop_assert!(out.iter().any(|o| &o[..LEFT_WIDTH] == row.as_slice()));
        }
        for row in right.rows() {
            prop_assert!(out.iter().any(|o| &o[LEFT_WIDTH..] == row.as_slice()));
        }

        // Unmatched right rows form the tail, once each, in right order.
        let unmatched: Vec<&Vec<String>> = right
            .rows()
            .iter()
            .filter(|row| matches_in(&left, LEFT_KEY, &row[RIGHT_KEY]) == 0)
            .collect();
        let tail = &out[out.len() - unmatched.len()..];
        for (emitted, expected) in tail.iter().zip(&unmatched) {
            prop_assert!(is_blank(&emitted[..LEFT_WIDTH]));
            prop_assert_eq!(&emitted[LEFT_WIDTH..], expected.as_slice());
        }
        let primary_part = &out[..out.len() - unmatched.len()];
        prop_assert!(primary_part.iter().all(|o| !is_blank(&o[..LEFT_WIDTH])));
    }

    #[test]
    fn prop_width_invariant(
        (left, right) in tables(),
        join_type in select(JOIN_TYPES.to_vec()),
        algorithm in select(vec![JoinAlgorithm::Nested, JoinAlgorithm::Hash]),
    ) {
        for row in run(&left, &right, join_type, algorithm) {
            prop_assert_eq!(row.len(), LEFT_WIDTH + RIGHT_WIDTH);
        }
    }

    #[test]
    fn prop_stable_across_runs(
        (left, right) in tables(),
        join_type in select(JOIN_TYPES.to_vec()),
    ) {
        let first = run(&left, &right, join_type, JoinAlgorithm::Hash);
        let second = run(&left, &right, join_type, JoinAlgorithm::Hash);
        prop_assert_eq!(first, second);
    }
}
