//! Shared utility functions for farm monitor crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

}

/// Text matching for list search boxes
pub mod text {
    /// Case-insensitive substring match of `term` inside `haystack`.
    ///
    /// An empty term matches everything. The term is not trimmed, so
    /// `" acres"` only matches names with a space before "acres".
    pub fn contains_ignore_case(haystack: &str, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        haystack.to_lowercase().contains(&term.to_lowercase())
    }

}
