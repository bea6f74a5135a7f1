//! Property tests over random categorical columns.

use catenc_transform::{apply_label_encode, fit_label_encode, fit_onehot_encode};
use polars::prelude::*;
use proptest::prelude::*;

fn frame(values: &[Option<String>]) -> DataFrame {
    let column = Series::new("cat".into(), values);
    let ids: Vec<i64> = (0..values.len() as i64).collect();
    DataFrame::new(vec![Series::new("id".into(), ids).into(), column.into()]).unwrap()
}

fn values() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[a-e]"), 1..30)
}

proptest! {
    #[test]
    fn label_codes_are_contiguous(values in values()) {
        let mut df = frame(&values);
        let registry = fit_label_encode(&["cat"], &mut df).unwrap();
        let k = registry.get("cat").unwrap().len() as i64;

        let mut codes: Vec<i64> = df.column("cat").unwrap().i64().unwrap().into_no_null_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        prop_assert_eq!(codes, (0..k).collect::<Vec<_>>());
        prop_assert_eq!(df.width(), 2);
    }

    #[test]
    fn label_apply_matches_fit(values in values()) {
        let original = frame(&values);
        let mut fitted = original.clone();
        let registry = fit_label_encode(&["cat"], &mut fitted).unwrap();

        let mut applied = original.clone();
        apply_label_encode(&registry, &mut applied).unwrap();
        prop_assert!(applied.equals_missing(&fitted));

        let mut refitted = original;
        let again = fit_label_encode(&["cat"], &mut refitted).unwrap();
        prop_assert_eq!(again, registry);
    }

    #[test]
    fn onehot_rows_sum_to_one(values in values()) {
        let mut df = frame(&values);
        let registry = fit_onehot_encode(&["cat"], &mut df).unwrap();
        let state = registry.get("cat").unwrap();

        prop_assert_eq!(df.width(), 2 - 1 + state.len());
        let mut sums = vec![0.0_f64; df.height()];
        for name in state.output_columns() {
            let column = df.column(name).unwrap().f64().unwrap();
            for (row, value) in column.into_no_null_iter().enumerate() {
                sums[row] += value;
            }
        }
        prop_assert!(sums.iter().all(|sum| *sum == 1.0));
    }
}
