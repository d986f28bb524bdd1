use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::bounds::{
    get_century_end, get_century_start, get_day_end, get_day_start, get_decade_end,
    get_decade_end_offset, get_decade_start, get_decade_start_offset, get_month_end,
    get_month_end_offset, get_month_start, get_month_start_offset, get_next_century_start,
    get_next_decade_start, get_next_month_start, get_next_year_start, get_previous_century_end,
    get_previous_century_start, get_previous_day_start, get_previous_decade_end,
    get_previous_decade_start, get_previous_month_end, get_previous_month_start,
    get_previous_year_end, get_previous_year_start, get_year_end, get_year_end_offset,
    get_year_start, get_year_start_offset,
};
use crate::consts::{
    MONTHS_IN_YEAR, RANGE_SEPARATOR, STAMP_FORMAT, STAMP_PARSE_FORMAT, YEARS_IN_CENTURY,
    YEARS_IN_DECADE,
};
use crate::types::{InvalidRangeType, RangeType};

/// An inclusive range between two instants.
/// The start instant never exceeds the end instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start instant is after end instant.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range whose endpoints are already known to be ordered.
    pub(crate) fn from_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns the start instant of the range
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end instant of the range
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns both endpoints as a tuple
    pub const fn dates(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given instant (both endpoints
    /// inclusive)
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares any instant with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{RANGE_SEPARATOR}{}",
            self.start.format(STAMP_FORMAT),
            self.end.format(STAMP_FORMAT)
        )
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start = parse_stamp(trimmed[..pos].trim())?;
                let end = parse_stamp(trimmed[pos + 1..].trim())?;

                Self::new(start, end)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_stamp(s: &str) -> Result<NaiveDateTime, RangeError> {
    NaiveDateTime::parse_from_str(s, STAMP_PARSE_FORMAT)
        .map_err(|_| RangeError::InvalidFormat(format!("Invalid endpoint: {s}")))
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start instants first, then end instants
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Gets the `[start, end]` range of the century a date belongs to.
pub fn get_century_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_ordered(get_century_start(date), get_century_end(date))
}

/// Gets the `[start, end]` range of the decade a date belongs to.
pub fn get_decade_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_ordered(get_decade_start(date), get_decade_end(date))
}

/// Gets the `[start, end]` range of the year a date belongs to.
pub fn get_year_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_ordered(get_year_start(date), get_year_end(date))
}

/// Gets the `[start, end]` range of the month a date belongs to.
pub fn get_month_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_ordered(get_month_start(date), get_month_end(date))
}

/// Gets the `[start, end]` range of a date's calendar day.
pub fn get_day_range(date: NaiveDateTime) -> DateRange {
    DateRange::from_ordered(get_day_start(date), get_day_end(date))
}

/// Gets the beginning of a given range around a date.
pub fn get_start(range_type: RangeType, date: NaiveDateTime) -> NaiveDateTime {
    match range_type {
        RangeType::Century => get_century_start(date),
        RangeType::Decade => get_decade_start(date),
        RangeType::Year => get_year_start(date),
        RangeType::Month => get_month_start(date),
        RangeType::Day => get_day_start(date),
    }
}

/// Gets the beginning of the previous range of the given type.
pub fn get_previous_start(range_type: RangeType, date: NaiveDateTime) -> NaiveDateTime {
    match range_type {
        RangeType::Century => get_previous_century_start(date),
        RangeType::Decade => get_previous_decade_start(date),
        RangeType::Year => get_previous_year_start(date),
        RangeType::Month => get_previous_month_start(date),
        RangeType::Day => get_previous_day_start(date),
    }
}

/// Gets the beginning of the next range of the given type. Defined down
/// to month granularity.
///
/// # Errors
/// Returns `InvalidRangeType` for `RangeType::Day`.
pub fn get_next_start(
    range_type: RangeType,
    date: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidRangeType> {
    match range_type {
        RangeType::Century => Ok(get_next_century_start(date)),
        RangeType::Decade => Ok(get_next_decade_start(date)),
        RangeType::Year => Ok(get_next_year_start(date)),
        RangeType::Month => Ok(get_next_month_start(date)),
        RangeType::Day => Err(InvalidRangeType(range_type.to_string())),
    }
}

/// Gets the beginning of the previous range of the given type, jumping
/// by the next coarser unit (decade by 100 years, year by 10, month
/// by 12).
///
/// # Errors
/// Returns `InvalidRangeType` for `RangeType::Century` and
/// `RangeType::Day`.
pub fn get_previous_start2(
    range_type: RangeType,
    date: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidRangeType> {
    match range_type {
        RangeType::Decade => Ok(get_decade_start_offset(date, -YEARS_IN_CENTURY)),
        RangeType::Year => Ok(get_year_start_offset(date, -YEARS_IN_DECADE)),
        RangeType::Month => Ok(get_month_start_offset(date, -MONTHS_IN_YEAR)),
        RangeType::Century | RangeType::Day => Err(InvalidRangeType(range_type.to_string())),
    }
}

/// Gets the beginning of the next range of the given type, jumping by
/// the next coarser unit (decade by 100 years, year by 10, month by 12).
///
/// # Errors
/// Returns `InvalidRangeType` for `RangeType::Century` and
/// `RangeType::Day`.
pub fn get_next_start2(
    range_type: RangeType,
    date: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidRangeType> {
    match range_type {
        RangeType::Decade => Ok(get_decade_start_offset(date, YEARS_IN_CENTURY)),
        RangeType::Year => Ok(get_year_start_offset(date, YEARS_IN_DECADE)),
        RangeType::Month => Ok(get_month_start_offset(date, MONTHS_IN_YEAR)),
        RangeType::Century | RangeType::Day => Err(InvalidRangeType(range_type.to_string())),
    }
}

/// Gets the end of a given range around a date.
pub fn get_end(range_type: RangeType, date: NaiveDateTime) -> NaiveDateTime {
    match range_type {
        RangeType::Century => get_century_end(date),
        RangeType::Decade => get_decade_end(date),
        RangeType::Year => get_year_end(date),
        RangeType::Month => get_month_end(date),
        RangeType::Day => get_day_end(date),
    }
}

/// Gets the end of the previous range of the given type. Defined down to
/// month granularity.
///
/// # Errors
/// Returns `InvalidRangeType` for `RangeType::Day`.
pub fn get_previous_end(
    range_type: RangeType,
    date: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidRangeType> {
    match range_type {
        RangeType::Century => Ok(get_previous_century_end(date)),
        RangeType::Decade => Ok(get_previous_decade_end(date)),
        RangeType::Year => Ok(get_previous_year_end(date)),
        RangeType::Month => Ok(get_previous_month_end(date)),
        RangeType::Day => Err(InvalidRangeType(range_type.to_string())),
    }
}

/// Gets the end of the previous range of the given type, jumping by the
/// next coarser unit (decade by 100 years, year by 10, month by 12).
///
/// # Errors
/// Returns `InvalidRangeType` for `RangeType::Century` and
/// `RangeType::Day`.
pub fn get_previous_end2(
    range_type: RangeType,
    date: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidRangeType> {
    match range_type {
        RangeType::Decade => Ok(get_decade_end_offset(date, -YEARS_IN_CENTURY)),
        RangeType::Year => Ok(get_year_end_offset(date, -YEARS_IN_DECADE)),
        RangeType::Month => Ok(get_month_end_offset(date, -MONTHS_IN_YEAR)),
        RangeType::Century | RangeType::Day => Err(InvalidRangeType(range_type.to_string())),
    }
}

/// Gets the `[start, end]` range of the given type around a date.
pub fn get_range(range_type: RangeType, date: NaiveDateTime) -> DateRange {
    match range_type {
        RangeType::Century => get_century_range(date),
        RangeType::Decade => get_decade_range(date),
        RangeType::Year => get_year_range(date),
        RangeType::Month => get_month_range(date),
        RangeType::Day => get_day_range(date),
    }
}

/// Creates a range out of two instants, ordering them and widening both
/// ends to whole-period boundaries of the given type.
pub fn get_value_range(
    range_type: RangeType,
    date1: NaiveDateTime,
    date2: NaiveDateTime,
) -> DateRange {
    let (earlier, later) = if date1 <= date2 {
        (date1, date2)
    } else {
        (date2, date1)
    };
    DateRange::from_ordered(get_start(range_type, earlier), get_end(range_type, later))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, dt, last_ms};
    use chrono::Duration;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start: NaiveDateTime,
            end: NaiveDateTime,
            should_succeed: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: dt(2017, 1, 1),
                end: dt(2017, 12, 31),
                should_succeed: true,
                description: "valid range (start < end)",
            },
            TestCase {
                start: dt(2017, 12, 31),
                end: dt(2017, 1, 1),
                should_succeed: false,
                description: "invalid range (start > end)",
            },
            TestCase {
                start: dt(2017, 6, 15),
                end: dt(2017, 6, 15),
                should_succeed: true,
                description: "equal instants (start == end)",
            },
        ];

        for case in &cases {
            let range = DateRange::new(case.start, case.end);
            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(range.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_accessors() {
        let start = dt(2017, 1, 1);
        let end = dt(2017, 12, 31);
        let range = DateRange::new(start, end).expect("failed to construct range");

        assert_eq!(range.start(), start);
        assert_eq!(range.end(), end);
        assert_eq!(range.dates(), (start, end));
    }

    #[test]
    fn test_contains() {
        let range = get_month_range(dt(2017, 6, 15));

        assert!(range.contains(dt(2017, 6, 1)));
        assert!(range.contains(at(2017, 6, 30, 23, 59, 59)));
        assert!(!range.contains(dt(2017, 7, 1)));
        assert!(!range.contains(at(2017, 5, 31, 23, 59, 59)));
    }

    #[test]
    fn test_overlaps_and_is_within() {
        let june = get_month_range(dt(2017, 6, 15));
        let year = get_year_range(dt(2017, 6, 15));
        let july = get_month_range(dt(2017, 7, 15));

        assert!(june.overlaps(&year));
        assert!(year.overlaps(&june));
        assert!(!june.overlaps(&july));

        assert!(june.is_within(&year));
        assert!(!year.is_within(&june));
    }

    #[test]
    fn test_display_and_from_str_round_trip() {
        let range = get_month_range(dt(2024, 2, 15));
        assert_eq!(
            range.to_string(),
            "2024-02-01T00:00:00.000/2024-02-29T23:59:59.999"
        );

        let parsed = range.to_string().parse::<DateRange>().unwrap();
        assert_eq!(parsed, range);
    }

    #[test]
    fn test_from_str_without_fraction() {
        let range = "2017-01-01T00:00:00/2017-12-31T23:59:59"
            .parse::<DateRange>()
            .unwrap();
        assert_eq!(range.start(), dt(2017, 1, 1));
        assert_eq!(range.end(), at(2017, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_from_str_rejects_malformed_input() {
        assert!("2017-01-01T00:00:00".parse::<DateRange>().is_err());
        assert!("a/b".parse::<DateRange>().is_err());
        assert!("2017-01-01T00:00:00/2017-06-15T00:00:00/2017-12-31T00:00:00"
            .parse::<DateRange>()
            .is_err());
        // start after end
        assert!("2017-12-31T00:00:00/2017-01-01T00:00:00"
            .parse::<DateRange>()
            .is_err());
    }

    #[test]
    fn test_ordering() {
        let january = get_month_range(dt(2017, 1, 15));
        let june = get_month_range(dt(2017, 6, 15));
        let year = get_year_range(dt(2017, 6, 15));

        assert!(january < june);
        // same start, earlier end first
        assert!(january < year);
    }

    #[test]
    fn test_serde_string_format() {
        let range = get_day_range(dt(2017, 6, 15));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2017-06-15T00:00:00.000/2017-06-15T23:59:59.999""#);

        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }

    #[test]
    fn test_get_start_dispatch() {
        let date = at(2017, 6, 15, 14, 30, 0);

        struct TestCase {
            range_type: RangeType,
            expected: NaiveDateTime,
        }

        let cases = [
            TestCase { range_type: RangeType::Century, expected: dt(2001, 1, 1) },
            TestCase { range_type: RangeType::Decade, expected: dt(2011, 1, 1) },
            TestCase { range_type: RangeType::Year, expected: dt(2017, 1, 1) },
            TestCase { range_type: RangeType::Month, expected: dt(2017, 6, 1) },
            TestCase { range_type: RangeType::Day, expected: dt(2017, 6, 15) },
        ];

        for case in &cases {
            assert_eq!(
                get_start(case.range_type, date),
                case.expected,
                "start of {}",
                case.range_type
            );
        }
    }

    #[test]
    fn test_get_end_dispatch() {
        let date = at(2017, 6, 15, 14, 30, 0);

        struct TestCase {
            range_type: RangeType,
            expected: NaiveDateTime,
        }

        let cases = [
            TestCase { range_type: RangeType::Century, expected: last_ms(2100, 12, 31) },
            TestCase { range_type: RangeType::Decade, expected: last_ms(2020, 12, 31) },
            TestCase { range_type: RangeType::Year, expected: last_ms(2017, 12, 31) },
            TestCase { range_type: RangeType::Month, expected: last_ms(2017, 6, 30) },
            TestCase { range_type: RangeType::Day, expected: last_ms(2017, 6, 15) },
        ];

        for case in &cases {
            assert_eq!(
                get_end(case.range_type, date),
                case.expected,
                "end of {}",
                case.range_type
            );
        }
    }

    #[test]
    fn test_previous_and_next_start_dispatch() {
        let date = dt(2017, 6, 15);

        assert_eq!(get_previous_start(RangeType::Month, date), dt(2017, 5, 1));
        assert_eq!(get_previous_start(RangeType::Day, date), dt(2017, 6, 14));
        assert_eq!(get_next_start(RangeType::Month, date), Ok(dt(2017, 7, 1)));
        assert_eq!(get_next_start(RangeType::Century, date), Ok(dt(2101, 1, 1)));
    }

    #[test]
    fn test_next_start_rejects_day() {
        let result = get_next_start(RangeType::Day, dt(2017, 6, 15));
        assert_eq!(result, Err(InvalidRangeType("day".to_owned())));
        assert_eq!(result.unwrap_err().to_string(), "Invalid range type: day");
    }

    #[test]
    fn test_previous_end_dispatch() {
        let date = dt(2017, 6, 15);

        assert_eq!(
            get_previous_end(RangeType::Month, date),
            Ok(last_ms(2017, 5, 31))
        );
        assert_eq!(
            get_previous_end(RangeType::Year, date),
            Ok(last_ms(2016, 12, 31))
        );
        assert_eq!(
            get_previous_end(RangeType::Day, date),
            Err(InvalidRangeType("day".to_owned()))
        );
    }

    #[test]
    fn test_coarse_offset_family() {
        let date = dt(2017, 6, 15);

        assert_eq!(get_previous_start2(RangeType::Month, date), Ok(dt(2016, 6, 1)));
        assert_eq!(get_next_start2(RangeType::Month, date), Ok(dt(2018, 6, 1)));
        assert_eq!(get_previous_start2(RangeType::Year, date), Ok(dt(2007, 1, 1)));
        assert_eq!(get_next_start2(RangeType::Year, date), Ok(dt(2027, 1, 1)));
        assert_eq!(get_previous_start2(RangeType::Decade, date), Ok(dt(1911, 1, 1)));
        assert_eq!(get_next_start2(RangeType::Decade, date), Ok(dt(2111, 1, 1)));
        assert_eq!(
            get_previous_end2(RangeType::Year, date),
            Ok(last_ms(2007, 12, 31))
        );
        assert_eq!(
            get_previous_end2(RangeType::Month, date),
            Ok(last_ms(2016, 6, 30))
        );
        assert_eq!(
            get_previous_end2(RangeType::Decade, date),
            Ok(last_ms(1920, 12, 31))
        );
    }

    #[test]
    fn test_coarse_offset_family_rejects_century_and_day() {
        let date = dt(2017, 6, 15);

        for range_type in [RangeType::Century, RangeType::Day] {
            assert_eq!(
                get_previous_start2(range_type, date),
                Err(InvalidRangeType(range_type.as_str().to_owned()))
            );
            assert_eq!(
                get_next_start2(range_type, date),
                Err(InvalidRangeType(range_type.as_str().to_owned()))
            );
            assert_eq!(
                get_previous_end2(range_type, date),
                Err(InvalidRangeType(range_type.as_str().to_owned()))
            );
        }
    }

    #[test]
    fn test_get_range_dispatch() {
        let date = at(2024, 2, 15, 8, 0, 0);
        let range = get_range(RangeType::Month, date);
        assert_eq!(range.start(), dt(2024, 2, 1));
        assert_eq!(range.end(), last_ms(2024, 2, 29));
    }

    #[test]
    fn test_range_endpoints_bracket_date_for_all_types() {
        let date = at(2017, 6, 15, 14, 30, 0);
        for range_type in RangeType::ALL {
            let range = get_range(range_type, date);
            assert!(
                range.contains(date),
                "{} range should contain the source date",
                range_type
            );
            assert_eq!(range.start(), get_start(range_type, date));
            assert_eq!(range.end(), get_end(range_type, date));
        }
    }

    #[test]
    fn test_end_plus_one_millisecond_is_a_period_start() {
        let date = at(2017, 6, 15, 14, 30, 0);
        for range_type in RangeType::ALL {
            let next_instant = get_end(range_type, date) + Duration::milliseconds(1);
            assert_eq!(
                get_start(range_type, next_instant),
                next_instant,
                "end of {} should abut the next period start",
                range_type
            );
        }
    }

    #[test]
    fn test_get_value_range_orders_and_widens() {
        let range = get_value_range(RangeType::Month, dt(2017, 3, 15), dt(2017, 1, 10));
        assert_eq!(range.start(), dt(2017, 1, 1));
        assert_eq!(range.end(), last_ms(2017, 3, 31));

        // same instant twice widens to one whole period
        let single = get_value_range(RangeType::Day, dt(2017, 6, 15), dt(2017, 6, 15));
        assert_eq!(single.start(), dt(2017, 6, 15));
        assert_eq!(single.end(), last_ms(2017, 6, 15));
    }
}
