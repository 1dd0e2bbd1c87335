use anyhow::{Context, Result};
use chrono::NaiveDate;
use classcal_core::date_range::parse_date;
use classcal_core::event::{CalendarEvent, EventFilter};
use classcal_core::grid::{MonthGrid, build_month_grid};
use classcal_core::month::{parse_month, shift_month};
use classcal_core::store::EventStore;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::render::{Render, print_agenda};

pub fn run(
    store: &EventStore,
    month: Option<&str>,
    offset: i32,
    select: Option<&str>,
    filter: EventFilter,
    today: NaiveDate,
) -> Result<()> {
    let selected = select.map(parse_date).transpose()?;
    let displayed = resolve_month(month, offset, selected, today)?;
    debug!(%displayed, ?selected, "showing month");

    let events = store
        .events()
        .with_context(|| format!("Could not read events from {}", store.path().display()))?;
    let events = filter.apply(&events);

    let grid = build_month_grid(displayed, &events, selected, today);

    println!("{}", grid.render());
    println!();

    let listed = agenda(&grid, selected);

    if listed.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    print_agenda(listed, today);

    Ok(())
}

/// Events listed under the grid: the selected day's when that day is in view,
/// otherwise every event of the displayed month.
fn agenda<'a>(grid: &MonthGrid<'a>, selected: Option<NaiveDate>) -> Vec<&'a CalendarEvent> {
    match selected.and_then(|date| grid.cell(date)) {
        Some(cell) => cell.events.clone(),
        None => grid.month_events().collect(),
    }
}

/// The month to display: `--month`, else the selected day's month, else today's,
/// then paged by `offset`.
fn resolve_month(
    month: Option<&str>,
    offset: i32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let base = match month {
        Some(m) => parse_month(m)?,
        None => selected.unwrap_or(today),
    };

    Ok(shift_month(base, offset))
}
