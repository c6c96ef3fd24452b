use csv_join::{Row, Table};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

/// Keys drawn from a small alphabet so that duplicates and misses both occur.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1".to_string()),
        Just("2".to_string()),
        Just("01".to_string()),
        Just("a".to_string()),
        Just("A".to_string()),
        Just(String::new()),
        "[a-c]{1,2}",
    ]
}

/// A non-empty table of `width` columns. Column `key_column` holds keys from
/// [`key_strategy`]; every other field is tagged with its row and column so
/// that rows stay distinguishable in the output.
pub fn table_strategy(
    width: usize,
    key_column: usize,
    max_rows: usize,
) -> impl Strategy<Value = Table> {
    prop_vec(key_strategy(), 1..=max_rows).prop_map(move |keys| {
        let rows: Vec<Row> = keys
            .into_iter()
            .enumerate()
            .map(|(position, key)| {
                (0..width)
                    .map(|column| {
                        if column == key_column {
                            key.clone()
                        } else {
                            format!("r{}c{}", position, column)
                        }
                    })
                    .collect()
            })
            .collect();
        Table::load(rows).unwrap()
    })
}

/// `count` two-column rows cycling through `distinct_keys` keys.
pub fn generate_sequential_table(count: usize, distinct_keys: usize) -> Table {
    let rows = (0..count)
        .map(|i| {
            vec![
                format!("key_{:04}", i % distinct_keys.max(1)),
                format!("value_{}", i),
            ]
        })
        .collect();
    Table::load(rows).unwrap()
}
