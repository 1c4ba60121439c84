use std::fs;

use expenses_lib::store::{append, ensure_initialized, read_recent};
use expenses_lib::types::Expense;
use test_utils::{create_csv, temp_path};

extern crate test_utils;

fn expense(date: &str, amount: &str, category: &str, notes: &str) -> Expense {
    Expense::new(
        date.to_string(),
        amount.to_string(),
        category.to_string(),
        notes.to_string(),
    )
}

#[test]
fn store_file_matches_expected_layout() {
    let path = temp_path("layout");
    let _ = fs::remove_file(&path);

    append(&path, &expense("2025-01-01", "120", "Food", "")).unwrap();
    append(&path, &expense("2025-01-02", "30", "Transport", "bus")).unwrap();

    let sut = fs::read_to_string(&path).unwrap();
    let expected = create_csv(vec![
        ["2025-01-01", "120", "Food", ""],
        ["2025-01-02", "30", "Transport", "bus"],
    ]);
    assert_eq!(sut, expected);
    let _ = fs::remove_file(&path);
}

#[test]
fn appending_n_records_reads_back_exactly_n_in_order() {
    let path = temp_path("append_read");
    let _ = fs::remove_file(&path);

    let records = vec![
        expense("2025-03-01", "12.5", "Coffee", ""),
        expense("2025-03-02", "200", "Rent", "march"),
        expense("2025-03-03", "8", "Transport", ""),
    ];
    for record in &records {
        append(&path, record).unwrap();
    }

    let sut = read_recent(&path, records.len()).unwrap();
    assert_eq!(sut, records);
    let _ = fs::remove_file(&path);
}

#[test]
fn initialization_never_touches_existing_rows() {
    let path = temp_path("reinit");
    let _ = fs::remove_file(&path);

    append(&path, &expense("2025-04-01", "50", "Food", "")).unwrap();
    ensure_initialized(&path).unwrap();

    let sut = fs::read_to_string(&path).unwrap();
    let expected = create_csv(vec![["2025-04-01", "50", "Food", ""]]);
    assert_eq!(sut, expected);
    let _ = fs::remove_file(&path);
}

#[test]
fn parent_directories_are_created_on_demand() {
    let dir = temp_path("nested_dir");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("inner").join("expenses.csv");

    append(&path, &expense("2025-05-01", "9.9", "Coffee", "")).unwrap();

    let sut = read_recent(&path, 5).unwrap();
    assert_eq!(sut.len(), 1);
    let _ = fs::remove_dir_all(&dir);
}
