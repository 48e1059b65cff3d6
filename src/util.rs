//! Display helpers used alongside update rendering.

use chrono::{Datelike, NaiveDate};

/// Default pattern for [`dateformat`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns English ordinal suffix for a day of month.
///
/// 11, 12 and 13 always take "th".
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats date with strftime pattern and ordinal day placeholder.
///
/// The pattern is applied first; every literal `{S}` in the result is then
/// replaced with the day of month and its ordinal suffix.
///
/// # Arguments
///
/// * `date`: Date to format
/// * `fmt`: strftime pattern, may contain `{S}`
///
/// # Returns
///
/// Formatted date like "2024-03-01" or "March 1st"
pub fn dateformat(date: NaiveDate, fmt: &str) -> String {
    let day = date.day();
    date.format(fmt)
        .to_string()
        .replace("{S}", &format!("{}{}", day, ordinal_suffix(day)))
}
