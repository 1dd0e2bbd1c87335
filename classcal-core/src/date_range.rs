//! Inclusive day ranges for grids and agenda listings.

use chrono::{Days, NaiveDate};

use crate::error::{CalError, CalResult};

/// Days shown by an agenda listing when no end date is given.
pub const DEFAULT_AGENDA_DAYS: u64 = 7;

/// Date range `from..=to`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> CalResult<Self> {
        if from > to {
            return Err(CalError::InvalidRange { from, to });
        }
        Ok(DateRange { from, to })
    }

    /// A range covering one day.
    pub fn day(date: NaiveDate) -> Self {
        DateRange {
            from: date,
            to: date,
        }
    }

    /// Parse agenda bounds from command line arguments.
    /// - `from`: YYYY-MM-DD, defaults to `today`
    /// - `to`: YYYY-MM-DD, defaults to `from` + DEFAULT_AGENDA_DAYS
    pub fn from_args(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> CalResult<Self> {
        let from = match from {
            Some(s) => parse_date(s)?,
            None => today,
        };

        let to = match to {
            Some(s) => parse_date(s)?,
            None => from
                .checked_add_days(Days::new(DEFAULT_AGENDA_DAYS))
                .unwrap_or(NaiveDate::MAX),
        };

        DateRange::new(from, to)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of days in the range, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalError::InvalidDate(s.to_string(), "YYYY-MM-DD"))
}
