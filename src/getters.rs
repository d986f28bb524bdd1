//! Point-in-time getters: single calendar fields of a date, weekday and
//! week-number arithmetic, and ISO-like local string forms.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::bounds::{at_midnight, get_month_end, get_week_start};
use crate::consts::{
    DAYS_IN_WEEK, ISO_WEEK_ANCHOR_DAY, US_WEEK_ANCHOR_DAY, WEEK_ANCHOR_SEARCH_YEARS,
};
use crate::types::CalendarType;
use crate::{InputError, TimeInput, get_hours, get_minutes, get_seconds};

/// Gets the zero-based month of a date (0 = January).
pub fn get_month(date: NaiveDateTime) -> u32 {
    date.month0()
}

/// Gets the human-readable month of a date (1 = January).
pub fn get_month_human(date: NaiveDateTime) -> u32 {
    date.month()
}

/// Gets the day of the month of a date.
pub fn get_date(date: NaiveDateTime) -> u32 {
    date.day()
}

/// Gets the day of the week as 0–6 where day 0 is the first day of the
/// week under the given calendar type: Monday for ISO 8601, Saturday for
/// Arabic, Sunday for US and Hebrew.
pub fn get_day_of_week(date: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    match calendar_type {
        CalendarType::Iso8601 => (weekday + 6) % 7,
        CalendarType::Arabic => (weekday + 1) % 7,
        CalendarType::Hebrew | CalendarType::Us => weekday,
    }
}

/// Whether the date falls on the weekend of the given calendar type:
/// Friday/Saturday for Arabic and Hebrew, Saturday/Sunday otherwise.
pub fn is_weekend(date: NaiveDateTime, calendar_type: CalendarType) -> bool {
    let weekday = date.weekday();
    match calendar_type {
        CalendarType::Arabic | CalendarType::Hebrew => {
            matches!(weekday, Weekday::Fri | Weekday::Sat)
        }
        CalendarType::Iso8601 | CalendarType::Us => {
            matches!(weekday, Weekday::Sat | Weekday::Sun)
        }
    }
}

/// Gets the week number of a date. Week 1 is the week containing
/// January 4 (ISO 8601 numbering, also applied for Arabic and Hebrew) or
/// January 1 (US numbering); the week-start convention of the supplied
/// calendar type decides where weeks break.
pub fn get_week_number(date: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    let anchor_day = if calendar_type == CalendarType::Us {
        US_WEEK_ANCHOR_DAY
    } else {
        ISO_WEEK_ANCHOR_DAY
    };

    let begin_of_week = get_week_start(date, calendar_type);

    // Search backward, newest first, for the week-1 anchor whose week
    // does not start after the given date. Real dates resolve within
    // three year steps; the range keeps the search bounded regardless.
    let mut begin_of_first_week = begin_of_week;
    for year in (date.year() + 2 - WEEK_ANCHOR_SEARCH_YEARS..=date.year() + 1).rev() {
        let day_in_week_one = at_midnight(year, 0, anchor_day);
        begin_of_first_week = get_week_start(day_in_week_one, calendar_type);
        if begin_of_first_week <= date {
            break;
        }
    }

    let whole_weeks = (begin_of_week - begin_of_first_week).num_days() / DAYS_IN_WEEK;
    u32::try_from(whole_weeks + 1).unwrap_or(1)
}

/// Gets the number of days in the month of a date, read off the month's
/// end boundary rather than a month-length table.
pub fn get_days_in_month(date: NaiveDateTime) -> u32 {
    get_month_end(date).day()
}

/// Renders local hours and minutes (`hh:mm`).
///
/// # Errors
/// Returns `InputError::InvalidTime` on a malformed time string input.
pub fn get_hours_minutes(value: impl Into<TimeInput>) -> Result<String, InputError> {
    let value = value.into();
    Ok(format!(
        "{:02}:{:02}",
        get_hours(value.clone())?,
        get_minutes(value)?
    ))
}

/// Renders local hours, minutes and seconds (`hh:mm:ss`).
///
/// # Errors
/// Returns `InputError::InvalidTime` on a malformed time string input.
pub fn get_hours_minutes_seconds(value: impl Into<TimeInput>) -> Result<String, InputError> {
    let value = value.into();
    Ok(format!(
        "{:02}:{:02}:{:02}",
        get_hours(value.clone())?,
        get_minutes(value.clone())?,
        get_seconds(value)?
    ))
}

/// Renders the local month in ISO-like format (`YYYY-MM`).
pub fn get_iso_local_month(date: NaiveDateTime) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Renders the local date in ISO-like format (`YYYY-MM-DD`).
pub fn get_iso_local_date(date: NaiveDateTime) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Renders the local date and time in ISO-like format
/// (`YYYY-MM-DDThh:mm:ss`).
pub fn get_iso_local_date_time(date: NaiveDateTime) -> String {
    format!(
        "{}T{:02}:{:02}:{:02}",
        get_iso_local_date(date),
        date.hour(),
        date.minute(),
        date.second()
    )
}
