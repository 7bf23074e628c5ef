use crate::utils::error::{DeskError, Result};
use chrono::NaiveDate;

/// Accepted input formats, tried in order; the first match wins.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(DeskError::FormatError {
        value: trimmed.to_string(),
    })
}
