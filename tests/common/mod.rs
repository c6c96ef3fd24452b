#![allow(dead_code)]

pub mod data;

use csv_join::{JoinAlgorithm, JoinType, OutputRow, Table};

pub const JOIN_TYPES: [JoinType; 4] = [
    JoinType::Inner,
    JoinType::Left,
    JoinType::Right,
    JoinType::Outer,
];

pub const ALGORITHMS: [JoinAlgorithm; 2] = [JoinAlgorithm::Nested, JoinAlgorithm::Hash];

pub fn table(data: &[&[&str]]) -> Table {
    Table::load(rows(data)).unwrap()
}

pub fn rows(data: &[&[&str]]) -> Vec<OutputRow> {
    data.iter()
        .map(|r| r.iter().map(|f| f.to_string()).collect())
        .collect()
}
