mod bounds;
mod consts;
mod format;
mod getters;
mod prelude;
mod range;
mod types;

pub use bounds::*;
pub use consts::*;
pub use format::*;
pub use getters::*;
pub use range::*;
pub use types::{CalendarType, InvalidRangeType, RangeType, UnsupportedCalendarType};

use crate::prelude::*;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// A year-like value: a date, a raw year number, or a string holding a
/// year number. Functions accepting this reject anything that does not
/// resolve to an integer year, without coercing or guessing.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum YearInput {
    /// Take the year from a full date value
    Date(NaiveDateTime),
    /// The year itself
    Number(i32),
    /// A string expected to parse as an integer year
    Text(String),
}

impl From<&str> for YearInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// A time-like value: a date, or a colon-delimited `"HH:MM[:SS]"` string.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum TimeInput {
    /// Take the time fields from a full date value
    Date(NaiveDateTime),
    /// A string with at least hour and minute segments
    Text(String),
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Error for flexible inputs that fail to resolve to the requested field.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Value is neither a date, a number, nor a numeric string
    #[display(fmt = "{_0} must be of type Date or number or string")]
    InvalidYear(String),
    /// Time string is missing segments or holds a non-numeric segment
    #[display(fmt = "time string: {_0} is of invalid format")]
    InvalidTime(String),
}

impl std::error::Error for InputError {}

/// Gets the year from a date, a number, or a numeric string.
///
/// # Errors
/// Returns `InputError::InvalidYear` if a string input does not parse as
/// an integer year.
pub fn get_year(value: impl Into<YearInput>) -> Result<i32, InputError> {
    match value.into() {
        YearInput::Date(date) => Ok(date.year()),
        YearInput::Number(year) => Ok(year),
        YearInput::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidYear(text)),
    }
}

/// Gets hours from a date or a `"HH:MM[:SS]"` string.
///
/// # Errors
/// Returns `InputError::InvalidTime` if a string input has fewer than two
/// colon-separated segments or a non-numeric hour segment.
pub fn get_hours(value: impl Into<TimeInput>) -> Result<u32, InputError> {
    match value.into() {
        TimeInput::Date(date) => Ok(date.hour()),
        TimeInput::Text(text) => time_segment(&text, 0),
    }
}

/// Gets minutes from a date or a `"HH:MM[:SS]"` string.
///
/// # Errors
/// Returns `InputError::InvalidTime` on a malformed time string.
pub fn get_minutes(value: impl Into<TimeInput>) -> Result<u32, InputError> {
    match value.into() {
        TimeInput::Date(date) => Ok(date.minute()),
        TimeInput::Text(text) => time_segment(&text, 1),
    }
}

/// Gets seconds from a date or a `"HH:MM[:SS]"` string. A missing
/// seconds segment reads as 0.
///
/// # Errors
/// Returns `InputError::InvalidTime` on a malformed time string.
pub fn get_seconds(value: impl Into<TimeInput>) -> Result<u32, InputError> {
    match value.into() {
        TimeInput::Date(date) => Ok(date.second()),
        TimeInput::Text(text) => time_segment(&text, 2),
    }
}

/// Extracts one colon-separated segment of a time string. The string
/// must hold at least two segments; segments past the hour may be absent
/// or empty and default to zero.
fn time_segment(text: &str, index: usize) -> Result<u32, InputError> {
    let pieces: Vec<&str> = text.split(':').collect();
    if pieces.len() < 2 {
        return Err(InputError::InvalidTime(text.to_owned()));
    }

    let piece = pieces.get(index).copied().unwrap_or("").trim();
    if piece.is_empty() && index > 0 {
        return Ok(0);
    }

    piece
        .parse()
        .map_err(|_| InputError::InvalidTime(text.to_owned()))
}
