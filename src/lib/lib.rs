pub mod aggregate;
pub mod chart;
pub mod errors;
pub mod store;
pub mod types;
pub mod validate;
mod utils;

use std::path::Path;

pub use errors::{ChartError, ReportError, StoreError, ValidationError};
pub use types::{Expense, CSV_HEADERS};

/// Full report pipeline: read the store, aggregate per category, render the
/// donut to `output`.
pub fn build_report(
    input: &Path,
    title: &str,
    output: &Path,
    min_ratio: f64,
) -> anyhow::Result<()> {
    let totals = aggregate::read_totals(input)?;
    chart::render_donut(&totals, title, output, min_ratio)?;
    Ok(())
}
