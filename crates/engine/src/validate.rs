//! Input gate in front of the stores.
//!
//! Every function here turns raw text into a typed value or a
//! [`ValidationError`]. Nothing is persisted until all of them pass.

use chrono::NaiveDate;

use crate::{Amount, Category, Clock, Period, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD` and rejects dates after `clock.today()`.
///
/// The clock is read on every call.
pub fn validate_date(text: &str, clock: &impl Clock) -> Result<NaiveDate, ValidationError> {
    let date = parse_date(text).ok_or_else(|| ValidationError::InvalidFormat(text.to_string()))?;
    if date > clock.today() {
        return Err(ValidationError::FutureDate(date));
    }
    Ok(date)
}

/// Parses a decimal amount and requires it to be strictly positive.
///
/// Any precision is kept, as is scientific notation such as `1e-05`.
pub fn validate_amount(text: &str) -> Result<Amount, ValidationError> {
    let amount: Amount = text.parse()?;
    if !amount.is_positive() {
        return Err(ValidationError::NonPositive(amount));
    }
    Ok(amount)
}

/// Turns a menu selection into a category.
///
/// Codes 1 to 5 map to the fixed labels, 6 takes the trimmed `custom` text.
/// An empty custom label is accepted. A custom label spelled exactly like a
/// fixed one resolves to that fixed category.
pub fn resolve_category(selection: u8, custom: &str) -> Result<Category, ValidationError> {
    if selection == Category::OTHER_SELECTION {
        return Ok(Category::from_label(custom.trim()));
    }
    Category::fixed(selection).ok_or(ValidationError::InvalidSelection(selection))
}

/// Checks the month of a summary request.
pub fn validate_period(year: i32, month: u32) -> Result<Period, ValidationError> {
    Period::new(year, month).ok_or(ValidationError::InvalidMonth(month))
}

/// Strict `YYYY-MM-DD`: four digit year, two digit month and day.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}
