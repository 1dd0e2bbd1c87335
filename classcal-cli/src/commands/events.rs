use anyhow::{Context, Result};
use chrono::NaiveDate;
use classcal_core::date_range::DateRange;
use classcal_core::event::EventFilter;
use classcal_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::print_agenda;

pub fn run(
    store: &EventStore,
    from: Option<&str>,
    to: Option<&str>,
    filter: EventFilter,
    today: NaiveDate,
) -> Result<()> {
    let range = DateRange::from_args(from, to, today)?;

    let events = store
        .events_in_range(&range)
        .with_context(|| format!("Could not read events from {}", store.path().display()))?;
    let events = filter.apply(&events);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    print_agenda(&events, today);

    Ok(())
}
