//! Period boundaries: the first and last instant of the century, decade,
//! year, month, week or day around a date, plus neighbor navigation.
//!
//! Every end boundary is derived as "start of the next period minus one
//! millisecond", never by direct field manipulation, so variable month
//! lengths and leap years need no tables.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::consts::{MONTHS_IN_YEAR, YEARS_IN_CENTURY, YEARS_IN_DECADE};
use crate::getters::get_day_of_week;
use crate::types::CalendarType;

/// Local midnight for the given year, zero-based month and day-of-month.
/// Overflowing month and day fields normalize the way a rolling calendar
/// expects: month 12 of year Y is January of year Y+1, day 0 is the last
/// day of the previous month.
///
/// # Panics
/// Panics if the result falls outside the span chrono can represent
/// (roughly ±262,000 years), which no calendar input reaches.
pub(crate) fn at_midnight(year: i32, month0: i32, day: i64) -> NaiveDateTime {
    let year = year + month0.div_euclid(MONTHS_IN_YEAR);
    let month0 = month0.rem_euclid(MONTHS_IN_YEAR);

    #[allow(clippy::expect_used)]
    let first = NaiveDate::from_ymd_opt(year, u32::try_from(month0 + 1).unwrap_or(1), 1)
        .expect("year is outside the representable calendar span");
    #[allow(clippy::expect_used)]
    let date = first
        .checked_add_signed(Duration::days(day - 1))
        .expect("day offset is outside the representable calendar span");

    date.and_time(NaiveTime::MIN)
}

/// The last representable instant before `next_start`.
fn last_instant_before(next_start: NaiveDateTime) -> NaiveDateTime {
    next_start - Duration::milliseconds(1)
}

/// First day of the century containing `year`. Centuries are floored to
/// years ≡ 1 (mod 100), so this never lands after the input year.
pub(crate) fn century_start_of_year(year: i32) -> NaiveDateTime {
    at_midnight(year - (year - 1).rem_euclid(YEARS_IN_CENTURY), 0, 1)
}

/// First day of the decade containing `year`, floored to years ≡ 1 (mod 10).
pub(crate) fn decade_start_of_year(year: i32) -> NaiveDateTime {
    at_midnight(year - (year - 1).rem_euclid(YEARS_IN_DECADE), 0, 1)
}

/// January 1 of `year`, local midnight.
pub(crate) fn year_start_of_year(year: i32) -> NaiveDateTime {
    at_midnight(year, 0, 1)
}

/// Gets the start of the century a date belongs to.
pub fn get_century_start(date: NaiveDateTime) -> NaiveDateTime {
    century_start_of_year(date.year())
}

/// Gets the start of the century containing the year `offset_years` away
/// from the date's year.
pub fn get_century_start_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    century_start_of_year(date.year() + offset_years)
}

/// Gets the start of the previous century.
pub fn get_previous_century_start(date: NaiveDateTime) -> NaiveDateTime {
    get_century_start_offset(date, -YEARS_IN_CENTURY)
}

/// Gets the start of the next century.
pub fn get_next_century_start(date: NaiveDateTime) -> NaiveDateTime {
    get_century_start_offset(date, YEARS_IN_CENTURY)
}

/// Gets the end of the century a date belongs to.
pub fn get_century_end(date: NaiveDateTime) -> NaiveDateTime {
    last_instant_before(get_next_century_start(date))
}

/// Gets the end of the century containing the year `offset_years` away
/// from the date's year.
pub fn get_century_end_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    last_instant_before(century_start_of_year(
        date.year() + offset_years + YEARS_IN_CENTURY,
    ))
}

/// Gets the end of the previous century.
pub fn get_previous_century_end(date: NaiveDateTime) -> NaiveDateTime {
    get_century_end_offset(date, -YEARS_IN_CENTURY)
}

/// Gets the end of the next century.
pub fn get_next_century_end(date: NaiveDateTime) -> NaiveDateTime {
    get_century_end_offset(date, YEARS_IN_CENTURY)
}

/// Gets the start of the decade a date belongs to.
pub fn get_decade_start(date: NaiveDateTime) -> NaiveDateTime {
    decade_start_of_year(date.year())
}

/// Gets the start of the decade containing the year `offset_years` away
/// from the date's year.
pub fn get_decade_start_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    decade_start_of_year(date.year() + offset_years)
}

/// Gets the start of the previous decade.
pub fn get_previous_decade_start(date: NaiveDateTime) -> NaiveDateTime {
    get_decade_start_offset(date, -YEARS_IN_DECADE)
}

/// Gets the start of the next decade.
pub fn get_next_decade_start(date: NaiveDateTime) -> NaiveDateTime {
    get_decade_start_offset(date, YEARS_IN_DECADE)
}

/// Gets the end of the decade a date belongs to.
pub fn get_decade_end(date: NaiveDateTime) -> NaiveDateTime {
    last_instant_before(get_next_decade_start(date))
}

/// Gets the end of the decade containing the year `offset_years` away
/// from the date's year.
pub fn get_decade_end_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    last_instant_before(decade_start_of_year(
        date.year() + offset_years + YEARS_IN_DECADE,
    ))
}

/// Gets the end of the previous decade.
pub fn get_previous_decade_end(date: NaiveDateTime) -> NaiveDateTime {
    get_decade_end_offset(date, -YEARS_IN_DECADE)
}

/// Gets the end of the next decade.
pub fn get_next_decade_end(date: NaiveDateTime) -> NaiveDateTime {
    get_decade_end_offset(date, YEARS_IN_DECADE)
}

/// Gets the start of the year a date belongs to.
pub fn get_year_start(date: NaiveDateTime) -> NaiveDateTime {
    year_start_of_year(date.year())
}

/// Gets January 1 of the year `offset_years` away from the date's year.
pub fn get_year_start_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    year_start_of_year(date.year() + offset_years)
}

/// Gets the start of the previous year.
pub fn get_previous_year_start(date: NaiveDateTime) -> NaiveDateTime {
    get_year_start_offset(date, -1)
}

/// Gets the start of the next year.
pub fn get_next_year_start(date: NaiveDateTime) -> NaiveDateTime {
    get_year_start_offset(date, 1)
}

/// Gets the end of the year a date belongs to.
pub fn get_year_end(date: NaiveDateTime) -> NaiveDateTime {
    last_instant_before(get_next_year_start(date))
}

/// Gets the end of the year `offset_years` away from the date's year.
pub fn get_year_end_offset(date: NaiveDateTime, offset_years: i32) -> NaiveDateTime {
    last_instant_before(year_start_of_year(date.year() + offset_years + 1))
}

/// Gets the end of the previous year.
pub fn get_previous_year_end(date: NaiveDateTime) -> NaiveDateTime {
    get_year_end_offset(date, -1)
}

/// Gets the end of the next year.
pub fn get_next_year_end(date: NaiveDateTime) -> NaiveDateTime {
    get_year_end_offset(date, 1)
}

/// Gets the start of the month a date belongs to.
pub fn get_month_start(date: NaiveDateTime) -> NaiveDateTime {
    at_midnight(date.year(), month0_of(date), 1)
}

/// Gets the start of the month `offset_months` away. The month field is
/// offset before re-deriving the boundary, so crossing a year boundary
/// rolls the year.
pub fn get_month_start_offset(date: NaiveDateTime, offset_months: i32) -> NaiveDateTime {
    at_midnight(date.year(), month0_of(date) + offset_months, 1)
}

/// Gets the start of the previous month.
pub fn get_previous_month_start(date: NaiveDateTime) -> NaiveDateTime {
    get_month_start_offset(date, -1)
}

/// Gets the start of the next month.
pub fn get_next_month_start(date: NaiveDateTime) -> NaiveDateTime {
    get_month_start_offset(date, 1)
}

/// Gets the end of the month a date belongs to.
pub fn get_month_end(date: NaiveDateTime) -> NaiveDateTime {
    last_instant_before(get_next_month_start(date))
}

/// Gets the end of the month `offset_months` away.
pub fn get_month_end_offset(date: NaiveDateTime, offset_months: i32) -> NaiveDateTime {
    last_instant_before(at_midnight(date.year(), month0_of(date) + offset_months + 1, 1))
}

/// Gets the end of the previous month.
pub fn get_previous_month_end(date: NaiveDateTime) -> NaiveDateTime {
    get_month_end_offset(date, -1)
}

/// Gets the end of the next month.
pub fn get_next_month_end(date: NaiveDateTime) -> NaiveDateTime {
    get_month_end_offset(date, 1)
}

/// Gets the start of the week a date belongs to, under the calendar
/// type's week-start convention, at local midnight.
pub fn get_week_start(date: NaiveDateTime, calendar_type: CalendarType) -> NaiveDateTime {
    let day = i64::from(date.day()) - i64::from(get_day_of_week(date, calendar_type));
    at_midnight(date.year(), month0_of(date), day)
}

/// Gets local midnight of the date's calendar day.
pub fn get_day_start(date: NaiveDateTime) -> NaiveDateTime {
    at_midnight(date.year(), month0_of(date), i64::from(date.day()))
}

/// Gets local midnight of the calendar day `offset_days` away. The day
/// field is offset before re-deriving the boundary, so crossing month or
/// year boundaries rolls the coarser fields.
pub fn get_day_start_offset(date: NaiveDateTime, offset_days: i64) -> NaiveDateTime {
    at_midnight(date.year(), month0_of(date), i64::from(date.day()) + offset_days)
}

/// Gets the start of the previous day.
pub fn get_previous_day_start(date: NaiveDateTime) -> NaiveDateTime {
    get_day_start_offset(date, -1)
}

/// Gets the start of the next day.
pub fn get_next_day_start(date: NaiveDateTime) -> NaiveDateTime {
    get_day_start_offset(date, 1)
}

/// Gets the end of the date's calendar day.
pub fn get_day_end(date: NaiveDateTime) -> NaiveDateTime {
    last_instant_before(get_next_day_start(date))
}

/// Gets the end of the calendar day `offset_days` away.
pub fn get_day_end_offset(date: NaiveDateTime, offset_days: i64) -> NaiveDateTime {
    last_instant_before(at_midnight(
        date.year(),
        month0_of(date),
        i64::from(date.day()) + offset_days + 1,
    ))
}

/// Gets the end of the previous day.
pub fn get_previous_day_end(date: NaiveDateTime) -> NaiveDateTime {
    get_day_end_offset(date, -1)
}

/// Gets the end of the next day.
pub fn get_next_day_end(date: NaiveDateTime) -> NaiveDateTime {
    get_day_end_offset(date, 1)
}

fn month0_of(date: NaiveDateTime) -> i32 {
    // month0 is 0..=11, always in i32 range
    date.month0().cast_signed()
}
