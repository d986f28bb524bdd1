/// Years in a century; century N spans years `100k+1 ..= 100k+100`
pub const YEARS_IN_CENTURY: i32 = 100;

/// Years in a decade; decade N spans years `10k+1 ..= 10k+10`
pub const YEARS_IN_DECADE: i32 = 10;

/// Months in a year, used to normalize overflowing month fields
pub const MONTHS_IN_YEAR: i32 = 12;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Day of January anchoring week 1 in ISO 8601 week numbering
/// (the week containing January 4 is week 1)
pub const ISO_WEEK_ANCHOR_DAY: i64 = 4;

/// Day of January anchoring week 1 in US week numbering
/// (the week containing January 1 is week 1)
pub const US_WEEK_ANCHOR_DAY: i64 = 1;

/// Separator between the two formatted years of a century/decade label
/// (en dash surrounded by single spaces)
pub const YEAR_LABEL_SEPARATOR: &str = " – ";

/// Separator between the two endpoints of a serialized date range
pub const RANGE_SEPARATOR: char = '/';

/// Timestamp format used when rendering range endpoints
pub(crate) const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Timestamp format used when parsing range endpoints
/// (the fractional part is optional on input)
pub(crate) const STAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Upper bound on the backward week-1 anchor search, in year steps.
/// Real dates resolve within three steps; the bound keeps the loop
/// finite for any input.
pub(crate) const WEEK_ANCHOR_SEARCH_YEARS: i32 = 4;
