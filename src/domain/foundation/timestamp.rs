//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Seconds from the Unix epoch back to 0001-01-01T00:00:00Z.
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The unset timestamp, 0001-01-01T00:00:00Z.
    ///
    /// The Unix epoch is an ordinary instant, not the sentinel.
    pub fn zero() -> Self {
        Self(DateTime::<Utc>::default() + Duration::seconds(ZERO_UNIX_SECONDS))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// True for the unset timestamp.
    pub fn is_zero(&self) -> bool {
        self.0.timestamp() == ZERO_UNIX_SECONDS && self.0.timestamp_subsec_nanos() == 0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Drops sub-second precision. Storage round trips are exact at this precision.
    pub fn truncated_to_seconds(&self) -> Self {
        Self(self.0.trunc_subsecs(0))
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Returns `None` if the result leaves the representable range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Adds calendar months, keeping the time of day.
    ///
    /// A day-of-month that does not exist in the target month overflows into
    /// the following month instead of being clamped: Jan 31 + 1 month is
    /// Mar 2 in a leap year and Mar 3 otherwise.
    pub fn add_calendar_months(&self, months: i32) -> Option<Self> {
        self.add_calendar(0, months)
    }

    /// Adds calendar years with the same overflow rule: Feb 29 + 1 year is Mar 1.
    pub fn add_calendar_years(&self, years: i32) -> Option<Self> {
        self.add_calendar(years, 0)
    }

    fn add_calendar(&self, years: i32, months: i32) -> Option<Self> {
        let month_index = self
            .0
            .year()
            .checked_mul(12)?
            .checked_add(self.0.month0() as i32)?
            .checked_add(years.checked_mul(12)?)?
            .checked_add(months)?;
        let year = month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) as u32 + 1;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = first_of_month
            .checked_add_signed(Duration::days(i64::from(self.0.day()) - 1))?;

        Some(Self(date.and_time(self.0.time()).and_utc()))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
