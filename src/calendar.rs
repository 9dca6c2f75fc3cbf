//! Timezone-pinned calendar arithmetic for month and day bucketing.
//!
//! Every aggregation call resolves month and day boundaries through one
//! [`Calendar`] value, so figures computed moments apart always agree on
//! which bucket a timestamp near a boundary falls into. Callers pick the
//! zone once per session; UTC is the default.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// (year, month) pair identifying a calendar month in the calendar's zone.
pub type YearMonth = (i32, u32);

/// Resolves timestamps to calendar months and days in one fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self { tz: chrono_tz::UTC }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Calendar month containing the timestamp, in this calendar's zone.
    pub fn month_of(&self, ts: DateTime<Utc>) -> YearMonth {
        let local = ts.with_timezone(&self.tz);
        (local.year(), local.month())
    }

    /// Calendar day containing the timestamp, in this calendar's zone.
    pub fn day_of(&self, ts: DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.tz).date_naive()
    }

    /// Whether two timestamps fall in the same calendar month. The check is
    /// by (year, month), never by elapsed-day windows.
    pub fn same_month(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.month_of(a) == self.month_of(b)
    }

    /// One-based day of the month for the timestamp.
    pub fn day_of_month(&self, ts: DateTime<Utc>) -> u32 {
        ts.with_timezone(&self.tz).day()
    }

    /// Number of days in the calendar month containing the timestamp.
    pub fn days_in_month(&self, ts: DateTime<Utc>) -> u32 {
        let (year, month) = self.month_of(ts);
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match (first, next) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 0,
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}
