use exprkit::config::ExprKitConfig;
use exprkit::{make_concat_str, Error, TemplateOptions};
use polars::prelude::*;

mod test_utils;
use test_utils::*;

fn frame() -> DataFrame {
    df!(
        "name" => [Some("Ada"), Some("Alan"), None],
        "born" => [1815i64, 1912, 1906]
    )
    .unwrap()
}

#[test]
fn test_fills_template_per_row() {
    let expr = make_concat_str(
        "[$X] was born in [$X].",
        ["name", "born"],
        TemplateOptions::default(),
    )
    .unwrap();

    let out = select(&frame(), vec![expr]);
    assert_eq!(column_names(&out), vec!["literal"]);
    assert_eq!(
        str_values(&out, "literal"),
        vec![
            Some("Ada was born in 1815.".to_string()),
            Some("Alan was born in 1912.".to_string()),
            None,
        ]
    );
}

#[test]
fn test_custom_placeholder_and_name() {
    let options = TemplateOptions::default()
        .with_placeholder("{}")
        .with_name("greeting");
    let expr = make_concat_str("Hi {}!", ["name"], options).unwrap();

    let out = select(&frame(), vec![expr]);
    assert_eq!(
        str_values(&out, "greeting"),
        vec![Some("Hi Ada!".to_string()), Some("Hi Alan!".to_string()), None]
    );
}

#[test]
fn test_placeholder_at_both_ends() {
    let expr = make_concat_str("[$X]-[$X]", ["born", "born"], TemplateOptions::default()).unwrap();

    let out = select(&frame(), vec![expr]);
    assert_eq!(
        str_values(&out, "literal")[0],
        Some("1815-1815".to_string())
    );
}

#[test]
fn test_options_from_config() {
    let mut config = ExprKitConfig::default();
    config.template.placeholder = "%s".to_string();
    config.naming.literal = "sentence".to_string();

    let expr = make_concat_str("born %s", ["born"], TemplateOptions::from_config(&config)).unwrap();
    let out = select(&frame(), vec![expr]);
    assert_eq!(str_values(&out, "sentence")[2], Some("born 1906".to_string()));
}

#[test]
fn test_count_mismatch_reports_counts() {
    let err = make_concat_str("[$X]", ["name", "born"], TemplateOptions::default()).unwrap_err();
    match err {
        Error::PlaceholderMismatch {
            placeholders,
            columns,
        } => {
            assert_eq!(placeholders, 1);
            assert_eq!(columns, 2);
        },
        other => panic!("unexpected error: {}", other),
    }
}
