//! Locale-style date formatters and century/decade label composition.

use chrono::{Datelike, NaiveDateTime};

use crate::bounds::{century_start_of_year, decade_start_of_year};
use crate::consts::YEAR_LABEL_SEPARATOR;
use crate::range::{DateRange, get_century_range, get_decade_range};
use crate::{InputError, YearInput, get_year};

/// Renders a numeric day-first date, e.g. `15/6/2017`.
pub fn format_date(date: NaiveDateTime) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Renders the day of the month, e.g. `15`.
pub fn format_day(date: NaiveDateTime) -> String {
    date.format("%-d").to_string()
}

/// Renders a long date, e.g. `15 June 2017`.
pub fn format_long_date(date: NaiveDateTime) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Renders the month name, e.g. `June`.
pub fn format_month(date: NaiveDateTime) -> String {
    date.format("%B").to_string()
}

/// Renders the month name and year, e.g. `June 2017`.
pub fn format_month_year(date: NaiveDateTime) -> String {
    date.format("%B %Y").to_string()
}

/// Renders the abbreviated weekday name, e.g. `Thu`.
pub fn format_short_weekday(date: NaiveDateTime) -> String {
    date.format("%a").to_string()
}

/// Renders the full weekday name, e.g. `Thursday`.
pub fn format_weekday(date: NaiveDateTime) -> String {
    date.format("%A").to_string()
}

/// Renders the numeric year, e.g. `2017`.
pub fn format_year(date: NaiveDateTime) -> String {
    date.format("%Y").to_string()
}

/// Gets the first year of the century a year-like value belongs to.
///
/// # Errors
/// Returns `InputError::InvalidYear` for a non-numeric string input.
pub fn get_begin_of_century_year(value: impl Into<YearInput>) -> Result<i32, InputError> {
    Ok(century_start_of_year(get_year(value)?).year())
}

/// Gets the first year of the decade a year-like value belongs to.
///
/// # Errors
/// Returns `InputError::InvalidYear` for a non-numeric string input.
pub fn get_begin_of_decade_year(value: impl Into<YearInput>) -> Result<i32, InputError> {
    Ok(decade_start_of_year(get_year(value)?).year())
}

/// Joins the formatted start and end years of a range with an en dash.
fn to_year_label<F>(format_year_fn: F, range: &DateRange) -> String
where
    F: Fn(NaiveDateTime) -> String,
{
    format!(
        "{}{YEAR_LABEL_SEPARATOR}{}",
        format_year_fn(range.start()),
        format_year_fn(range.end())
    )
}

/// Returns a string labelling the century of a year-like value, e.g.
/// `2001 – 2100` for 2017, using the injected year formatter.
///
/// # Errors
/// Returns `InputError::InvalidYear` for a non-numeric string input.
pub fn get_century_label<F>(
    format_year_fn: F,
    value: impl Into<YearInput>,
) -> Result<String, InputError>
where
    F: Fn(NaiveDateTime) -> String,
{
    let start = century_start_of_year(get_year(value)?);
    Ok(to_year_label(format_year_fn, &get_century_range(start)))
}

/// Returns a string labelling the decade of a year-like value, e.g.
/// `2011 – 2020` for 2017, using the injected year formatter.
///
/// # Errors
/// Returns `InputError::InvalidYear` for a non-numeric string input.
pub fn get_decade_label<F>(
    format_year_fn: F,
    value: impl Into<YearInput>,
) -> Result<String, InputError>
where
    F: Fn(NaiveDateTime) -> String,
{
    let start = decade_start_of_year(get_year(value)?);
    Ok(to_year_label(format_year_fn, &get_decade_range(start)))
}
