use std::path::Path;

use expenses_lib::aggregate::{group_small, read_totals};
use expenses_lib::chart::OTHER_LABEL;
use expenses_lib::errors::ReportError;

#[test]
fn totals_match_a_manual_sum() {
    let totals = read_totals(Path::new("tests/resources/mixed_categories.csv")).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["Food"], 200.5);
    assert_eq!(totals["Transport"], 30.0);
}

#[test]
fn comma_separated_amounts_are_parsed() {
    let totals = read_totals(Path::new("tests/resources/comma_amounts.csv")).unwrap();
    assert_eq!(totals["Rent"], 1200.0);
    assert_eq!(totals["Food"], 150.0);
}

#[test]
fn degenerate_thresholds_do_not_crash() {
    let totals = read_totals(Path::new("tests/resources/mixed_categories.csv")).unwrap();

    let keep_all = group_small(&totals, 0.0, OTHER_LABEL);
    assert_eq!(keep_all, totals);

    let fold_all = group_small(&totals, 1.0, OTHER_LABEL);
    assert_eq!(fold_all.len(), 1);
    assert_eq!(fold_all[OTHER_LABEL], 230.5);
}

#[test]
fn default_threshold_folds_the_tail() {
    let totals = read_totals(Path::new("tests/resources/mixed_categories.csv")).unwrap();
    // Transport is 30 / 230.5 = 13%, above the default 3% threshold
    let grouped = group_small(&totals, 0.03, OTHER_LABEL);
    assert_eq!(grouped, totals);
}

#[test]
fn missing_input_is_a_descriptive_error() {
    let err = read_totals(Path::new("tests/resources/does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, ReportError::InputMissing(_)));
}

#[test]
fn missing_columns_are_a_descriptive_error() {
    let err = read_totals(Path::new("tests/resources/bad_header.csv")).unwrap_err();
    match err {
        ReportError::MissingColumns(found) => {
            assert_eq!(found, vec!["when".to_string(), "how_much".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn all_blank_categories_mean_no_usable_rows() {
    let err = read_totals(Path::new("tests/resources/blank_categories.csv")).unwrap_err();
    assert!(matches!(err, ReportError::NoUsableRows));
}
