use std::path::PathBuf;

use serde::Serialize;

#[derive(Serialize)]
struct ExpenseRow {
    date: &'static str,
    amount: &'static str,
    category: &'static str,
    notes: &'static str,
}

impl ExpenseRow {
    fn new(
        date: &'static str,
        amount: &'static str,
        category: &'static str,
        notes: &'static str,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            notes,
        }
    }
}

// Only used during testing so no need to return result
pub fn create_csv(rows: Vec<[&'static str; 4]>) -> String {
    let expense_rows: Vec<ExpenseRow> = rows
        .into_iter()
        .map(|r| ExpenseRow::new(r[0], r[1], r[2], r[3]))
        .collect();

    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in expense_rows {
        wtr.serialize(row).unwrap();
    }
    wtr.flush().unwrap();
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

/// Unique scratch path for tests that hit the filesystem.
pub fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("expense_tracker_{}_{}", tag, std::process::id()))
}
