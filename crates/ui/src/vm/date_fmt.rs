use chrono::NaiveDate;

/// ISO-8601 calendar date, the same shape the quiz form accepts.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}
