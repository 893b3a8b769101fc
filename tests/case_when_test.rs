use exprkit::{bulk_append, case_when, Case, Condition};
use polars::prelude::*;

mod test_utils;
use test_utils::*;

fn frame() -> DataFrame {
    df!(
        "x" => [1i64, 2, 3, 4],
        "y" => [5i64, 6, 7, 8]
    )
    .unwrap()
}

fn sizes() -> Vec<Option<String>> {
    some(&["small", "medium", "medium", "large"].map(String::from))
}

#[test]
fn test_single_predicate_conditions() {
    let df = frame();
    let expr = case_when(
        [
            (col("x").lt(lit(2)), lit("small")),
            (col("x").lt(lit(4)).and(col("y").lt(lit(8))), lit("medium")),
        ],
        Some(lit("large")),
    )
    .unwrap()
    .alias("size");

    let out = select(&df, vec![expr]);
    assert_eq!(str_values(&out, "size"), sizes());
}

#[test]
fn test_all_of_conditions() {
    let df = frame();
    let cases = vec![
        Case::new(col("x").lt(lit(2)), lit("small")),
        Case::new(vec![col("x").lt(lit(4)), col("y").lt(lit(8))], lit("medium")),
    ];
    let expr = case_when(cases, Some(lit("large"))).unwrap().alias("size");

    let out = select(&df, vec![expr]);
    assert_eq!(str_values(&out, "size"), sizes());
}

#[test]
fn test_grouped_conditions() {
    let df = frame();
    let medium = Condition::Group(vec![
        Condition::from(col("x").lt(lit(4))),
        Condition::from([col("y").lt(lit(8))]),
    ]);
    let cases = vec![
        Case::new([col("x").lt(lit(2))], lit("small")),
        Case::new(medium, lit("medium")),
    ];
    let expr = case_when(cases, Some(lit("large"))).unwrap().alias("size");

    let out = select(&df, vec![expr]);
    assert_eq!(str_values(&out, "size"), sizes());
}

#[test]
fn test_first_matching_branch_wins() {
    let df = frame();
    let expr = case_when(
        [
            (col("x").gt(lit(0)), lit("first")),
            (col("x").gt(lit(2)), lit("second")),
        ],
        None,
    )
    .unwrap()
    .alias("branch");

    let out = select(&df, vec![expr]);
    assert_eq!(
        str_values(&out, "branch"),
        some(&["first", "first", "first", "first"].map(String::from))
    );
}

#[test]
fn test_missing_otherwise_yields_null() {
    let df = frame();
    let expr = case_when([(col("x").eq(lit(1)), lit(10i64))], None)
        .unwrap()
        .alias("v");

    let out = select(&df, vec![expr]);
    assert_eq!(i64_values(&out, "v"), vec![Some(10), None, None, None]);
}

#[test]
fn test_bulk_append() {
    let df = frame();
    let expr = bulk_append([col("x"), col("y"), col("x") * lit(10)]).unwrap();

    let out = select(&df, vec![expr]);
    assert_eq!(out.height(), 12);
    assert_eq!(
        i64_values(&out, "x"),
        some(&[1i64, 2, 3, 4, 5, 6, 7, 8, 10, 20, 30, 40])
    );
}

#[test]
fn test_bulk_append_rejects_single_expression() {
    let err = bulk_append(vec![col("x")]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("at least two"));
}
