use std::fs::{self, File, OpenOptions};
use std::path::Path;

use tracing::debug;

use crate::errors::StoreError;
use crate::types::{Expense, CSV_HEADERS};

fn is_missing_or_empty(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    }
}

/// Creates the store file with its header row when it is missing or empty.
/// Parent directories are created as needed. Idempotent.
pub fn ensure_initialized(path: &Path) -> Result<(), StoreError> {
    if !is_missing_or_empty(path) {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    writer.flush()?;
    debug!(path = %path.display(), "initialized expense store");
    Ok(())
}

/// Appends one record in header-column order. The file only ever grows; prior
/// rows are never rewritten or reordered.
pub fn append(path: &Path, expense: &Expense) -> Result<(), StoreError> {
    ensure_initialized(path)?;

    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(expense)?;
    writer.flush()?;
    debug!(path = %path.display(), category = %expense.category, "appended expense");
    Ok(())
}

/// Returns up to the last `n` records in file order.
///
/// Degrades to an empty Vec when the file is missing, empty, or its header
/// lacks any of the expected columns. Cells are located by header name, so
/// extra columns are tolerated, and a missing cell reads as an empty string.
pub fn read_recent(path: &Path, n: usize) -> Result<Vec<Expense>, StoreError> {
    if is_missing_or_empty(path) {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let indices: Vec<Option<usize>> = CSV_HEADERS.iter().map(|h| position(h)).collect();
    if indices.iter().any(Option::is_none) {
        debug!(path = %path.display(), "store header mismatch, degrading to empty");
        return Ok(Vec::new());
    }
    let cell = |record: &csv::StringRecord, header: usize| -> String {
        indices[header]
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string()
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Expense::new(
            cell(&record, 0),
            cell(&record, 1),
            cell(&record, 2),
            cell(&record, 3),
        ));
    }

    let skip = rows.len().saturating_sub(n);
    Ok(rows.split_off(skip))
}
