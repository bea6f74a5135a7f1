//! Tests for label encoding fit/apply.

use catenc_transform::{
    CategoryValue, EncodeError, EncodeOptions, LabelRegistry, apply_label_encode,
    apply_label_encode_with_options, fit_label_encode,
};
use polars::prelude::*;

fn codes(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name).unwrap().i64().unwrap().into_iter().collect()
}

fn colors() -> DataFrame {
    df! {
        "id" => &[1_i32, 2, 3, 4],
        "color" => &["red", "blue", "red", "green"],
    }
    .unwrap()
}

#[test]
fn fit_assigns_codes_in_alphabetical_order() {
    let mut df = colors();
    let registry = fit_label_encode(&["color"], &mut df).unwrap();

    assert_eq!(codes(&df, "color"), vec![Some(2), Some(0), Some(2), Some(1)]);
    let state = registry.get("color").unwrap();
    assert_eq!(
        state.categories(),
        ["blue", "green", "red"].map(CategoryValue::from)
    );
}

#[test]
fn fit_preserves_width_and_column_order() {
    let mut df = colors();
    fit_label_encode(&["color"], &mut df).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(df.height(), 4);
    let names: Vec<String> = df.get_column_names().into_iter().map(|n| n.to_string()).collect();
    assert_eq!(names, ["id", "color"]);
    // untouched column keeps its dtype
    assert_eq!(df.column("id").unwrap().dtype(), &DataType::Int32);
}

#[test]
fn apply_reproduces_fit_output() {
    let train = colors();
    let mut fitted = train.clone();
    let registry = fit_label_encode(&["color"], &mut fitted).unwrap();

    let mut applied = train;
    apply_label_encode(&registry, &mut applied).unwrap();

    assert!(applied.equals_missing(&fitted));
}

#[test]
fn apply_uses_fit_mapping_on_new_rows() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();

    let mut test = df! { "color" => &["green", "green", "blue"] }.unwrap();
    apply_label_encode(&registry, &mut test).unwrap();

    assert_eq!(codes(&test, "color"), vec![Some(1), Some(1), Some(0)]);
}

#[test]
fn apply_rejects_unseen_category() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();

    let mut test = df! { "color" => &["red", "purple"] }.unwrap();
    let before = test.clone();
    let err = apply_label_encode(&registry, &mut test).unwrap_err();

    assert!(matches!(
        err,
        EncodeError::UnseenCategory { ref column, ref value, row: 1 }
            if column == "color" && value == "purple"
    ));
    assert!(test.equals_missing(&before));
}

#[test]
fn lenient_apply_writes_sentinel() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();

    let mut test = df! { "color" => &["red", "purple"] }.unwrap();
    apply_label_encode_with_options(&registry, &mut test, &EncodeOptions::lenient()).unwrap();

    assert_eq!(codes(&test, "color"), vec![Some(2), Some(-1)]);
}

#[test]
fn fit_missing_column_is_atomic() {
    let mut df = colors();
    let before = df.clone();

    let err = fit_label_encode(&["color", "shape"], &mut df).unwrap_err();

    assert!(matches!(err, EncodeError::ColumnNotFound { ref column } if column == "shape"));
    assert!(df.equals_missing(&before));
}

#[test]
fn fit_rejects_repeated_column() {
    let mut df = colors();
    let err = fit_label_encode(&["color", "color"], &mut df).unwrap_err();
    assert!(matches!(err, EncodeError::DuplicateColumn { .. }));
}

#[test]
fn apply_requires_registered_columns() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();

    let mut test = df! { "id" => &[1_i32] }.unwrap();
    let err = apply_label_encode(&registry, &mut test).unwrap_err();
    assert!(matches!(err, EncodeError::ColumnNotFound { .. }));
}

#[test]
fn apply_leaves_unregistered_columns_alone() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();

    let mut test = df! {
        "extra" => &["keep", "me"],
        "color" => &["blue", "red"],
    }
    .unwrap();
    apply_label_encode(&registry, &mut test).unwrap();

    let extra: Vec<_> = test.column("extra").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(extra, vec![Some("keep"), Some("me")]);
    assert_eq!(codes(&test, "color"), vec![Some(0), Some(2)]);
}

#[test]
fn numeric_and_null_categories() {
    let mut df = df! {
        "size" => &[Some(10_i64), None, Some(-5), Some(10)],
        "score" => &[0.5_f64, 0.25, 0.5, 1.0],
    }
    .unwrap();
    let registry = fit_label_encode(&["size", "score"], &mut df).unwrap();

    // nulls sort after every value
    assert_eq!(codes(&df, "size"), vec![Some(1), Some(2), Some(0), Some(1)]);
    assert_eq!(codes(&df, "score"), vec![Some(1), Some(0), Some(1), Some(2)]);
    assert_eq!(registry.columns().collect::<Vec<_>>(), vec!["size", "score"]);
}

#[test]
fn empty_column_list_is_a_no_op() {
    let mut df = colors();
    let before = df.clone();
    let registry = fit_label_encode::<&str>(&[], &mut df).unwrap();

    assert!(registry.is_empty());
    assert!(df.equals_missing(&before));
}

#[test]
fn registry_survives_serialization() {
    let mut train = colors();
    let registry = fit_label_encode(&["color"], &mut train).unwrap();
    let json = serde_json::to_string(&registry).unwrap();
    let restored: LabelRegistry = serde_json::from_str(&json).unwrap();

    let mut test = df! { "color" => &["red", "green"] }.unwrap();
    apply_label_encode(&restored, &mut test).unwrap();
    assert_eq!(codes(&test, "color"), vec![Some(2), Some(1)]);
}
