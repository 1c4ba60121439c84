use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Sentinels meaning "the current date". The first two are matched
// case-insensitively, the localized ones verbatim.
const TODAY_SENTINELS: [&str; 2] = ["today", "t"];
const TODAY_SENTINELS_LOCALIZED: [&str; 2] = ["今日", "今天"];

/// Normalizes a raw date string to canonical `YYYY-MM-DD`.
///
/// Accepts `-` or `/` as separator and the "today" sentinels. Idempotent over
/// its own output.
pub fn normalize_date(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDate);
    }

    let lowered = trimmed.to_lowercase();
    if TODAY_SENTINELS.contains(&lowered.as_str())
        || TODAY_SENTINELS_LOCALIZED.contains(&trimmed)
    {
        return Ok(Local::now().date_naive().format(DATE_FORMAT).to_string());
    }

    let dashed = trimmed.replace('/', "-");
    let date = NaiveDate::parse_from_str(&dashed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))?;

    Ok(date.format(DATE_FORMAT).to_string())
}

/// Normalizes a raw amount string to its canonical decimal form.
///
/// Thousands-separator commas are stripped. Parsing is exact decimal, never
/// binary floating point, so `"0.10"` cannot pick up rounding artifacts on the
/// way into the store. Canonical form has no trailing fractional zeros and no
/// decimal point on integral values.
pub fn normalize_amount(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let without_commas = trimmed.replace(',', "");
    let amount = Decimal::from_str(&without_commas)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(amount.normalize().to_string())
}

/// Trims a category label, rejecting blanks. Categories are open-ended free
/// text, so no casing or vocabulary restriction applies.
pub fn normalize_category(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(normalize_date("2025-12-15").unwrap(), "2025-12-15");
    }

    #[test]
    fn slash_separators_are_normalized() {
        assert_eq!(normalize_date("2025/12/15").unwrap(), "2025-12-15");
    }

    #[test]
    fn normalize_date_is_idempotent() {
        for raw in ["2025-01-31", "2024/2/29", "2025-7-4"] {
            let once = normalize_date(raw).unwrap();
            let twice = normalize_date(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn today_sentinels_resolve_to_current_date() {
        let expected = Local::now().date_naive().format("%Y-%m-%d").to_string();
        for sentinel in ["today", "TODAY", "t", "今日", "今天"] {
            assert_eq!(normalize_date(sentinel).unwrap(), expected);
        }
    }

    #[test]
    fn blank_date_is_rejected() {
        assert_eq!(normalize_date("   "), Err(ValidationError::EmptyDate));
    }

    #[test]
    fn garbage_date_names_expected_format() {
        let err = normalize_date("next tuesday").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        assert!(normalize_date("2025-02-30").is_err());
    }

    #[test]
    fn equivalent_amounts_share_a_canonical_form() {
        assert_eq!(normalize_amount("120").unwrap(), "120");
        assert_eq!(normalize_amount("120.00").unwrap(), "120");
        assert_eq!(normalize_amount("1,200.0").unwrap(), "1200");
        assert_eq!(normalize_amount("120.50").unwrap(), "120.5");
        assert_eq!(normalize_amount(" 0.10 ").unwrap(), "0.1");
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert_eq!(
            normalize_amount("0"),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            normalize_amount("-5"),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        assert!(matches!(
            normalize_amount("abc"),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert_eq!(normalize_amount(""), Err(ValidationError::EmptyAmount));
    }

    #[test]
    fn categories_are_trimmed() {
        assert_eq!(normalize_category(" Food ").unwrap(), "Food");
    }

    #[test]
    fn blank_category_is_rejected() {
        assert_eq!(
            normalize_category("  "),
            Err(ValidationError::EmptyCategory)
        );
    }
}
