// Test utilities for exprkit tests
#![allow(dead_code)]

use polars::prelude::*;

/// Evaluate `exprs` against `df` in a lazy `select`
pub fn select(df: &DataFrame, exprs: Vec<Expr>) -> DataFrame {
    df.clone().lazy().select(exprs).collect().unwrap()
}

/// Keep the rows of `df` where `mask` holds
pub fn filter(df: &DataFrame, mask: Expr) -> DataFrame {
    df.clone().lazy().filter(mask).collect().unwrap()
}

/// Frame with a single `x` column holding `1..=4`
pub fn one_to_four() -> DataFrame {
    df!("x" => [1i64, 2, 3, 4]).unwrap()
}

/// Frame with an `a` column holding `0..rows`
pub fn sequence(rows: i64) -> DataFrame {
    df!("a" => (0..rows).collect::<Vec<i64>>()).unwrap()
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

pub fn i64_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Physical integer values (days, microseconds, nanoseconds) of a column
pub fn physical_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Frame whose own `index` column differs from the row positions
pub fn with_index_column() -> DataFrame {
    df!(
        "index" => [7i64, 8, 9, 10],
        "b" => [1i64, 2, 3, 4]
    )
    .unwrap()
}

pub fn u32_values(df: &DataFrame, name: &str) -> Vec<Option<u32>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn bool_values(df: &DataFrame, name: &str) -> Vec<Option<bool>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .bool()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn str_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

/// Wrap every value in `Some`
pub fn some<T: Clone>(values: &[T]) -> Vec<Option<T>> {
    values.iter().cloned().map(Some).collect()
}
