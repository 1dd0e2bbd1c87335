use anyhow::{Context, Result};
use classcal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &EventStore, id: &str) -> Result<()> {
    let event = store
        .delete_event(id)
        .with_context(|| format!("Could not delete event in {}", store.path().display()))?;

    println!(
        "{}",
        format!("  Deleted: {} ({})", event.title, event.date.format("%a %b %-d %Y")).red()
    );

    Ok(())
}
