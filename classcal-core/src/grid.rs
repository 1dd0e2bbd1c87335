//! Month grid construction.
//!
//! A grid covers one month in whole Sunday-first weeks. Days from the
//! neighbouring months fill the first and last rows. Every cell borrows the
//! events that fall on its day from the caller's slice.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::event::CalendarEvent;
use crate::month::{month_end, month_start, same_month, week_end, week_start};

pub const DAYS_PER_WEEK: usize = 7;

/// One day's slot in a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell<'a> {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous or next month.
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Events on this day, in the order they were passed in.
    pub events: Vec<&'a CalendarEvent>,
}

impl CalendarCell<'_> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Weeks of a displayed month, each exactly seven cells from Sunday to Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub weeks: Vec<Vec<CalendarCell<'a>>>,
}

impl<'a> MonthGrid<'a> {
    /// All cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell<'a>> {
        self.weeks.iter().flatten()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell<'a>> {
        self.cells().find(|c| c.date == date)
    }

    /// The span of days the grid covers, padding included.
    pub fn date_range(&self) -> DateRange {
        let from = self.cells().next().map_or(self.month, |c| c.date);
        let to = self.cells().last().map_or(self.month, |c| c.date);
        DateRange { from, to }
    }

    /// Events attached to in-month cells, in day order.
    pub fn month_events(&self) -> impl Iterator<Item = &'a CalendarEvent> + '_ {
        self.cells()
            .filter(|c| c.in_current_month)
            .flat_map(|c| c.events.iter().copied())
    }
}

/// Build the grid for the month containing `reference_month`.
///
/// `today` and `selected` are compared by day only. Events outside the grid's
/// span are ignored; events on padding days land on their padding cell.
pub fn build_month_grid<'a>(
    reference_month: NaiveDate,
    events: &'a [CalendarEvent],
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> MonthGrid<'a> {
    let month = month_start(reference_month);
    let grid_start = week_start(month);
    let grid_end = week_end(month_end(month));

    let mut by_date = index_by_date(events);

    let mut cells = grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| CalendarCell {
            date,
            in_current_month: same_month(date, month),
            is_today: date == today,
            is_selected: selected == Some(date),
            events: by_date.remove(&date).unwrap_or_default(),
        });

    let weeks = std::iter::from_fn(|| {
        let week: Vec<CalendarCell<'a>> = cells.by_ref().take(DAYS_PER_WEEK).collect();
        (!week.is_empty()).then_some(week)
    })
    .collect();

    MonthGrid { month, weeks }
}

/// Group events by day, keeping input order within each day.
fn index_by_date(events: &[CalendarEvent]) -> HashMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut by_date: HashMap<NaiveDate, Vec<&CalendarEvent>> = HashMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }
    by_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::{Datelike, Duration, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(title: &str, on: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(title, on, EventCategory::Event, None)
    }

    #[test]
    fn july_2025_has_five_weeks() {
        let unit_test = CalendarEvent::new(
            "Mathematics Unit Test",
            date(2025, 7, 18),
            EventCategory::Exam,
            Some("Grade 10-A".to_string()),
        );
        let events = vec![unit_test.clone()];

        let grid = build_month_grid(date(2025, 7, 10), &events, None, date(2025, 7, 1));

        assert_eq!(grid.month, date(2025, 7, 1));
        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks.iter().all(|w| w.len() == 7));
        assert_eq!(grid.weeks[0][0].date, date(2025, 6, 29));
        assert_eq!(grid.weeks[4][6].date, date(2025, 8, 2));

        let cell = grid.cell(date(2025, 7, 18)).unwrap();
        assert_eq!(cell.events, vec![&unit_test]);

        let others_with_events = grid
            .cells()
            .filter(|c| c.in_current_month && c.date != date(2025, 7, 18))
            .filter(|c| c.has_events())
            .count();
        assert_eq!(others_with_events, 0);
    }

    #[test]
    fn every_day_of_month_appears_once_with_minimal_padding() {
        let mut month = date(2023, 1, 1);
        while month < date(2027, 1, 1) {
            let grid = build_month_grid(month, &[], None, month);
            let in_month: Vec<_> = grid.cells().filter(|c| c.in_current_month).collect();

            assert_eq!(in_month.len() as u32, month_end(month).day());
            assert_eq!(in_month[0].date, month);

            let first = grid.cells().next().unwrap();
            let last = grid.cells().last().unwrap();
            assert_eq!(first.date.weekday(), Weekday::Sun);
            assert_eq!(last.date.weekday(), Weekday::Sat);
            // Minimal padding: the first and last rows each contain a day of the month
            assert!(grid.weeks.first().unwrap().iter().any(|c| c.in_current_month));
            assert!(grid.weeks.last().unwrap().iter().any(|c| c.in_current_month));
            assert!((4..=6).contains(&grid.weeks.len()));

            month = crate::month::shift_month(month, 1);
        }
    }

    #[test]
    fn cells_are_contiguous_days() {
        let grid = build_month_grid(date(2024, 2, 14), &[], None, date(2024, 2, 14));
        let dates: Vec<_> = grid.cells().map(|c| c.date).collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(dates.len() % 7, 0);
    }

    #[test]
    fn every_week_has_seven_days_in_order() {
        let grid = build_month_grid(date(2025, 3, 1), &[], None, date(2025, 3, 1));
        assert_eq!(grid.weeks.len(), 6);
        for week in &grid.weeks {
            assert_eq!(week.len(), DAYS_PER_WEEK);
            assert_eq!(week[0].date.weekday(), Weekday::Sun);
        }
        assert_eq!(grid.weeks[5][1].date, date(2025, 3, 31));
    }

    #[test]
    fn february_2026_fills_exactly_four_weeks() {
        // Feb 1 2026 is a Sunday and Feb 28 a Saturday
        let grid = build_month_grid(date(2026, 2, 1), &[], None, date(2026, 2, 1));
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.cells().all(|c| c.in_current_month));
    }

    #[test]
    fn six_week_month() {
        // Aug 1 2026 is a Saturday, so August spans six rows
        let grid = build_month_grid(date(2026, 8, 20), &[], None, date(2026, 8, 20));
        assert_eq!(grid.weeks.len(), 6);
    }

    #[test]
    fn events_attach_to_padding_days() {
        let events = vec![
            event("End of Term", date(2025, 6, 30)),
            event("Orientation", date(2025, 8, 2)),
            event("Too Late", date(2025, 8, 3)),
        ];

        let grid = build_month_grid(date(2025, 7, 1), &events, None, date(2025, 7, 1));

        let june_30 = grid.cell(date(2025, 6, 30)).unwrap();
        assert!(!june_30.in_current_month);
        assert_eq!(june_30.events[0].title, "End of Term");
        assert_eq!(grid.cell(date(2025, 8, 2)).unwrap().events.len(), 1);
        assert!(grid.cell(date(2025, 8, 3)).is_none());

        let pairs: usize = grid.cells().map(|c| c.events.len()).sum();
        assert_eq!(pairs, 2);
    }

    #[test]
    fn events_on_same_day_keep_input_order() {
        let day = date(2025, 7, 18);
        let events = vec![
            event("Staff Meeting", day),
            event("Unrelated", date(2025, 7, 3)),
            event("Mathematics Unit Test", day),
            event("Parent Call", day),
        ];

        let grid = build_month_grid(day, &events, None, day);
        let titles: Vec<_> = grid
            .cell(day)
            .unwrap()
            .events
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Staff Meeting", "Mathematics Unit Test", "Parent Call"]);
    }

    #[test]
    fn grouping_matches_event_dates() {
        let events: Vec<_> = (1..=40)
            .map(|i| event(&format!("event {i}"), date(2025, 6, 20) + Duration::days(i)))
            .collect();

        let grid = build_month_grid(date(2025, 7, 1), &events, None, date(2025, 7, 1));
        let range = grid.date_range();

        for cell in grid.cells() {
            for e in &cell.events {
                assert_eq!(e.date, cell.date);
            }
        }
        let pairs: usize = grid.cells().map(|c| c.events.len()).sum();
        let in_range = events.iter().filter(|e| range.contains(e.date)).count();
        assert_eq!(pairs, in_range);
    }

    #[test]
    fn today_and_selected_flags() {
        let grid = build_month_grid(
            date(2025, 7, 1),
            &[],
            Some(date(2025, 7, 18)),
            date(2025, 7, 4),
        );
        let today: Vec<_> = grid.cells().filter(|c| c.is_today).collect();
        let selected: Vec<_> = grid.cells().filter(|c| c.is_selected).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 7, 4));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2025, 7, 18));
    }

    #[test]
    fn flags_absent_when_outside_grid() {
        let grid = build_month_grid(
            date(2030, 1, 1),
            &[],
            Some(date(2025, 7, 18)),
            date(2025, 7, 4),
        );
        assert!(grid.cells().all(|c| !c.is_today && !c.is_selected));
    }

    #[test]
    fn building_twice_gives_equal_grids() {
        let events = vec![event("Science Fair", date(2025, 7, 11))];
        let a = build_month_grid(date(2025, 7, 9), &events, Some(date(2025, 7, 2)), date(2025, 7, 9));
        let b = build_month_grid(date(2025, 7, 9), &events, Some(date(2025, 7, 2)), date(2025, 7, 9));
        assert_eq!(a, b);
    }

    #[test]
    fn date_range_and_month_events() {
        let events = vec![
            event("Padding", date(2025, 6, 29)),
            event("Sports Day", date(2025, 7, 25)),
            event("Orientation", date(2025, 7, 2)),
        ];
        let grid = build_month_grid(date(2025, 7, 1), &events, None, date(2025, 7, 1));

        let range = grid.date_range();
        assert_eq!(range.from, date(2025, 6, 29));
        assert_eq!(range.to, date(2025, 8, 2));
        assert_eq!(range.len_days(), 35);

        let titles: Vec<_> = grid.month_events().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Orientation", "Sports Day"]);
    }
}
