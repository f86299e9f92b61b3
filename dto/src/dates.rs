use chrono::NaiveDate;

/// Wire format of product expiry dates, e.g. `31-12-2025`.
pub const EXPIRY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Long form used for user-facing dates, e.g. `December 31, 2025`.
/// Never used on the wire: expiries always travel as [EXPIRY_DATE_FORMAT].
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Parse an expiry string. A malformed date yields `None`,
/// which classification must treat as expired rather than erroring out.
pub fn parse_expiry_date(expires: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(expires, EXPIRY_DATE_FORMAT).ok()
}

pub fn format_long_date(date: &NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}
