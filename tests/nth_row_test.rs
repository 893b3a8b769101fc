use exprkit::config::ExprKitConfig;
use exprkit::{is_every_nth_row, is_every_nth_row_from_config};
use polars::prelude::*;

mod test_utils;
use test_utils::*;

const ROWS: i64 = 20;

fn expected_rows(n: i64, offset: i64) -> Vec<Option<i64>> {
    (offset..ROWS).step_by(n as usize).map(Some).collect()
}

#[test]
fn test_filter_matches_gathered_rows() {
    let df = sequence(ROWS);
    for n in 1..=10 {
        for offset in 0..4 {
            let mask = is_every_nth_row(n, offset, "bool_nth_row").unwrap();
            let out = filter(&df, mask);
            assert_eq!(
                i64_values(&out, "a"),
                expected_rows(n, offset),
                "n={} offset={}",
                n,
                offset
            );
        }
    }
}

#[test]
fn test_mask_preserves_row_count() {
    let df = sequence(6);
    let out = select(&df, vec![is_every_nth_row(3, 1, "keep").unwrap()]);
    assert_eq!(column_names(&out), vec!["keep"]);
    assert_eq!(
        bool_values(&out, "keep"),
        some(&[false, true, false, false, true, false])
    );
}

#[test]
fn test_offset_past_the_end() {
    let df = sequence(3);
    let out = filter(&df, is_every_nth_row(2, 5, "m").unwrap());
    assert_eq!(out.height(), 0);
}

#[test]
fn test_invalid_arguments() {
    assert!(is_every_nth_row(0, 0, "m").unwrap_err().is_invalid_argument());
    assert!(is_every_nth_row(2, -1, "m").unwrap_err().is_invalid_argument());
}

#[test]
fn test_ignores_existing_index_column() {
    let df = with_index_column();
    let out = filter(&df, is_every_nth_row(2, 0, "m").unwrap());
    assert_eq!(i64_values(&out, "index"), some(&[7i64, 9]));

    let out = filter(&df, is_every_nth_row(3, 1, "m").unwrap());
    assert_eq!(i64_values(&out, "b"), some(&[2i64]));
}

#[test]
fn test_configured_name() {
    let mut config = ExprKitConfig::default();
    config.naming.nth_row = "every_other".to_string();

    let df = sequence(4);
    let out = select(&df, vec![is_every_nth_row_from_config(&config, 2, 0).unwrap()]);
    assert_eq!(column_names(&out), vec!["every_other"]);
    assert_eq!(bool_values(&out, "every_other"), some(&[true, false, true, false]));
}
