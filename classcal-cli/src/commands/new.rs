use anyhow::{Context, Result};
use chrono::NaiveDate;
use classcal_core::config::ClasscalConfig;
use classcal_core::date_range::parse_date;
use classcal_core::event::{CalendarEvent, EventCategory};
use classcal_core::store::EventStore;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    store: &EventStore,
    config: &ClasscalConfig,
    title: Option<String>,
    date: Option<String>,
    category: Option<EventCategory>,
    group: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => parse_event_date(&d)?,
        None => prompt_date("  When?")?,
    };

    // --- Category ---
    let category = match category {
        Some(c) => c,
        None if interactive => prompt_category()?,
        None => EventCategory::default(),
    };

    // --- Group ---
    let group = match group {
        Some(g) => Some(g),
        None if interactive => {
            let default = config.default_group.clone().unwrap_or_default();
            let g: String = Input::new()
                .with_prompt("  Class or section? (skip)")
                .default(default)
                .allow_empty(true)
                .interact_text()?;
            Some(g)
        }
        None => config.default_group.clone(),
    }
    .map(|g| g.trim().to_string())
    .filter(|g| !g.is_empty());

    let event = CalendarEvent::new(title, date, category, group);

    store
        .create_event(&event)
        .with_context(|| format!("Could not write event to {}", store.path().display()))?;

    if interactive {
        println!();
    }
    println!("{} {}", "  Created:".green(), event.render());
    println!("{}", format!("  {} · {}", date.format("%a %b %-d %Y"), event.id).dimmed());

    Ok(())
}

/// Prompt for a date until one parses.
fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_event_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_category() -> Result<EventCategory> {
    let items: Vec<&str> = EventCategory::ALL.iter().map(|c| c.as_str()).collect();
    let default = EventCategory::ALL
        .iter()
        .position(|c| *c == EventCategory::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(EventCategory::ALL[selection])
}

/// Parse `YYYY-MM-DD`, falling back to natural language ("next friday", "march 20").
fn parse_event_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(input) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let lower = input.to_lowercase();

    lower
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
