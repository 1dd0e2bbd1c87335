//! Month arithmetic for Sunday-first calendars.
//!
//! Everything here works on `NaiveDate` at day granularity. Results that would
//! leave chrono's representable range saturate at `NaiveDate::MIN`/`MAX`.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{CalError, CalResult};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(offset.into()))
        .unwrap_or(NaiveDate::MIN)
}

/// The Saturday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_days(Days::new(offset.into()))
        .unwrap_or(NaiveDate::MAX)
}

/// Move `delta` months forward (positive) or back (negative).
///
/// The day of month is kept when the target month has it, otherwise it is
/// clamped to the target month's last day: Jan 31 + 1 month is Feb 28 (or 29).
pub fn shift_month(reference: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());

    if delta >= 0 {
        reference
            .checked_add_months(months)
            .unwrap_or(NaiveDate::MAX)
    } else {
        reference
            .checked_sub_months(months)
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> CalResult<NaiveDate> {
    let invalid = || CalError::InvalidDate(s.to_string(), "YYYY-MM");

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Whether two dates fall in the same month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
