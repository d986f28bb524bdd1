use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity tag selecting which calendar period a boundary or
/// neighbor function operates on.
///
/// The wire form is the lowercase tag (`"century"`, `"decade"`, `"year"`,
/// `"month"`, `"day"`). Matching is exact: no partial matches, no case
/// folding. Some operations are defined only for a subset of variants
/// and reject the rest with [`InvalidRangeType`] instead of silently
/// falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    Century,
    Decade,
    Year,
    Month,
    Day,
}

/// Error for a range-type tag outside the closed set, carrying the
/// offending tag for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid range type: {0}")]
pub struct InvalidRangeType(pub String);

impl RangeType {
    /// All granularities, coarsest first.
    pub const ALL: [Self; 5] = [Self::Century, Self::Decade, Self::Year, Self::Month, Self::Day];

    /// Returns the wire tag for this granularity.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Century => "century",
            Self::Decade => "decade",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeType {
    type Err = InvalidRangeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "century" => Ok(Self::Century),
            "decade" => Ok(Self::Decade),
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            other => Err(InvalidRangeType(other.to_owned())),
        }
    }
}

/// Convention determining the first day of the week and which days count
/// as the weekend.
///
/// Wire tags are `"ISO 8601"`, `"US"`, `"Arabic"` and `"Hebrew"`.
/// Defaults to ISO 8601 (Monday-first) everywhere a calendar type is not
/// explicitly supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarType {
    #[default]
    #[serde(rename = "ISO 8601")]
    Iso8601,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "Arabic")]
    Arabic,
    #[serde(rename = "Hebrew")]
    Hebrew,
}

/// Error for a calendar-type tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported calendar type: {0}")]
pub struct UnsupportedCalendarType(pub String);

impl CalendarType {
    /// Returns the wire tag for this calendar type.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso8601 => "ISO 8601",
            Self::Us => "US",
            Self::Arabic => "Arabic",
            Self::Hebrew => "Hebrew",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = UnsupportedCalendarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ISO 8601" => Ok(Self::Iso8601),
            "US" => Ok(Self::Us),
            "Arabic" => Ok(Self::Arabic),
            "Hebrew" => Ok(Self::Hebrew),
            other => Err(UnsupportedCalendarType(other.to_owned())),
        }
    }
}
