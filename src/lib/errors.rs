use thiserror::Error;

/// A field rejected by the normalizers. Recoverable: the interactive entry
/// loop catches these and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must not be blank")]
    EmptyDate,
    #[error("invalid date `{0}`, expected YYYY-MM-DD (e.g. 2025-12-15)")]
    InvalidDate(String),
    #[error("amount must not be blank")]
    EmptyAmount,
    #[error("invalid amount `{0}`, expected a number (e.g. 120 or 120.5)")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("category must not be blank")]
    EmptyCategory,
}

/// Hard failure on the storage path. A malformed header is deliberately not
/// represented here: reads degrade to an empty result instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access expense store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read/write expense row: {0}")]
    Csv(#[from] csv::Error),
}

/// Fatal report-side failure. The report binary exits non-zero with the
/// message.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input not found: {0}")]
    InputMissing(String),
    #[error("csv has no header row")]
    NoHeader,
    #[error("csv must contain `category` and `amount` columns, found: {0:?}")]
    MissingColumns(Vec<String>),
    #[error("invalid amount `{value}` on line {line}")]
    UnparsableAmount { line: usize, value: String },
    #[error("no valid expense data found")]
    NoUsableRows,
    #[error("failed to read report input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse report input: {0}")]
    Csv(#[from] csv::Error),
}

/// Rendering failure. Plotters backend errors are flattened to strings since
/// their concrete types are generic over the backend.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to prepare output location: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render chart: {0}")]
    Render(String),
}
