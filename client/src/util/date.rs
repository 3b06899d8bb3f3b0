//! Human-readable calendar dates.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Format a date as `Wed Jan 01 2020`.
pub fn display_date(date: Date) -> String {
    date.format(format_description!("[weekday repr:short] [month repr:short] [day] [year]"))
        .unwrap_or_else(|_| date.to_string())
}
