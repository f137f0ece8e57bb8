use chrono::{NaiveDateTime, ParseError};
use once_cell::sync::Lazy;
use regex::Regex;

/// `date:` headers look like `04/07/2023 10:30` (day first, 24-hour clock).
pub const ENTRY_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

// chrono accepts single-digit fields for `%d`, `%m`, `%H` and `%M`. Day,
// month and minute must be two digits; the hour may be one or two.
static ENTRY_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{1,2}:[0-9]{2}$").expect("valid date regex")
});

/// Parses the value of a `date:` header.
///
/// Returns `Err(None)` when the value does not have the `DD/MM/YYYY HH:MM`
/// shape at all, and `Err(Some(_))` when it does but chrono rejects it (e.g.
/// month 13).
pub fn parse_entry_date(value: &str) -> Result<NaiveDateTime, Option<ParseError>> {
    if !ENTRY_DATE_SHAPE.is_match(value) {
        return Err(None);
    }
    NaiveDateTime::parse_from_str(value, ENTRY_DATE_FORMAT).map_err(Some)
}
