use std::cmp::Ordering;
use std::fs::File;
use std::path::Path;

use im::HashMap;
use tracing::debug;

use crate::errors::ReportError;
use crate::utils::OrDefault;

/// Below this magnitude an accumulated total is considered zero and dropped.
pub const EPSILON: f64 = 1e-12;

/// Folds `(category, amount)` pairs into per-category totals.
///
/// Rows with an empty category are skipped, and categories whose amounts
/// cancel out to (nearly) zero are dropped. Amounts are `f64` here: the
/// output feeds a chart, so the exact-decimal discipline of the storage path
/// does not apply.
pub fn sum_by_category<I>(rows: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let totals = rows
        .into_iter()
        .filter(|(category, _)| !category.is_empty())
        .fold(HashMap::new(), |acc: HashMap<String, f64>, (category, amount)| {
            let current: f64 = acc.get_or_default(&category);
            acc.update(category, current + amount)
        });

    totals
        .into_iter()
        .filter(|(_, total)| total.abs() > EPSILON)
        .collect()
}

/// Reads the report input and produces per-category totals.
///
/// The `category` and `amount` columns are located case-insensitively, so the
/// report also accepts files produced by other tools as long as those two
/// columns exist. Amounts may carry thousands-separator commas.
pub fn read_totals(path: &Path) -> Result<HashMap<String, f64>, ReportError> {
    if !path.exists() {
        return Err(ReportError::InputMissing(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ReportError::NoHeader);
    }
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let (category_idx, amount_idx) = match (position("category"), position("amount")) {
        (Some(c), Some(a)) => (c, a),
        _ => {
            return Err(ReportError::MissingColumns(
                headers.iter().map(str::to_string).collect(),
            ))
        }
    };

    let mut rows: Vec<(String, f64)> = Vec::new();
    // line 1 is the header
    for (line, record) in reader.records().enumerate().map(|(i, r)| (i + 2, r)) {
        let record = record?;
        let category = record.get(category_idx).unwrap_or("").trim();
        if category.is_empty() {
            continue;
        }
        let raw_amount = record.get(amount_idx).unwrap_or("").trim();
        let amount = raw_amount
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| ReportError::UnparsableAmount {
                line,
                value: raw_amount.to_string(),
            })?;
        rows.push((category.to_string(), amount));
    }

    let totals = sum_by_category(rows);
    if totals.is_empty() {
        return Err(ReportError::NoUsableRows);
    }
    debug!(categories = totals.len(), "aggregated report input");
    Ok(totals)
}

/// Folds categories below `min_ratio` of the grand total into a single
/// `other_label` bucket.
///
/// Categories are walked from largest to smallest so the bucket absorbs the
/// long tail. A zero grand total returns the input unchanged. An existing
/// `other_label` category accumulates into the bucket rather than being
/// replaced by it.
pub fn group_small(
    totals: &HashMap<String, f64>,
    min_ratio: f64,
    other_label: &str,
) -> HashMap<String, f64> {
    let total: f64 = totals.values().sum();
    if total == 0.0 {
        return totals.clone();
    }

    let mut entries: Vec<(String, f64)> =
        totals.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let (kept, other_sum) = entries.into_iter().fold(
        (HashMap::new(), 0.0),
        |(kept, other_sum): (HashMap<String, f64>, f64), (category, value)| {
            if value.abs() / total.abs() < min_ratio {
                (kept, other_sum + value)
            } else {
                (kept.update(category, value), other_sum)
            }
        },
    );

    if other_sum.abs() > EPSILON {
        let existing: f64 = kept.get_or_default(&other_label.to_string());
        kept.update(other_label.to_string(), existing + other_sum)
    } else {
        kept
    }
}
