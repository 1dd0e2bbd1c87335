//! Terminal rendering for classcal types.
//!
//! Layout (padding, markers, labels) is plain text; colors are applied on top
//! with owo_colors.

use chrono::{Datelike, NaiveDate};
use classcal_core::event::{CalendarEvent, EventCategory};
use classcal_core::grid::{CalendarCell, MonthGrid};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Width of one grid column: two digits, an event marker, a space.
const CELL_WIDTH: usize = 4;

const EVENT_MARKER: char = '•';

/// Badge colors: exam red, assignment green, holiday yellow, meeting blue
fn colorize_category(category: EventCategory, text: &str) -> String {
    match category {
        EventCategory::Exam => text.red().to_string(),
        EventCategory::Assignment => text.green().to_string(),
        EventCategory::Holiday => text.yellow().to_string(),
        EventCategory::Meeting => text.blue().to_string(),
        EventCategory::Event => text.to_string(),
    }
}

impl Render for EventCategory {
    fn render(&self) -> String {
        colorize_category(*self, &format!("[{}]", self))
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let group = self
            .related_group
            .as_deref()
            .map(|g| format!(" {}", g.dimmed()))
            .unwrap_or_default();

        format!("{} {}{}", self.category.render(), self.title, group)
    }
}

/// Day number and event marker, e.g. `18•` or ` 3 `.
pub fn cell_text(cell: &CalendarCell) -> String {
    let marker = if cell.has_events() { EVENT_MARKER } else { ' ' };
    format!("{:>2}{}", cell.date.day(), marker)
}

impl Render for CalendarCell<'_> {
    fn render(&self) -> String {
        let text = cell_text(self);
        let (day, marker) = text.split_at(2);

        let day = if !self.in_current_month {
            day.dimmed().to_string()
        } else if self.is_today {
            day.reversed().bold().to_string()
        } else {
            day.to_string()
        };
        let day = if self.is_selected {
            day.underline().to_string()
        } else {
            day
        };

        // Marker takes the color of the day's first event
        let marker = match self.events.first() {
            Some(event) => colorize_category(event.category, marker),
            None => marker.to_string(),
        };

        format!("{}{}", day, marker)
    }
}

/// Title line, e.g. `July 2025`, centered over the grid.
pub fn month_title(grid: &MonthGrid) -> String {
    let width = CELL_WIDTH * WEEKDAY_HEADER.len() - 1;
    let title = grid.month.format("%B %Y").to_string();
    format!("{:^width$}", title)
}

pub fn weekday_header() -> String {
    WEEKDAY_HEADER
        .iter()
        .map(|d| format!("{:>2}  ", d))
        .collect::<String>()
        .trim_end()
        .to_string()
}

impl Render for MonthGrid<'_> {
    fn render(&self) -> String {
        let mut lines = vec![
            month_title(self).bold().to_string(),
            weekday_header().dimmed().to_string(),
        ];

        for week in &self.weeks {
            let row = week
                .iter()
                .map(|cell| cell.render())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(row);
        }

        lines.join("\n")
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Print events grouped under day labels. Events must already be in day order.
pub fn print_agenda<'a>(events: impl IntoIterator<Item = &'a CalendarEvent>, today: NaiveDate) {
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.date, today).bold());
            current_date = Some(event.date);
        }

        println!("  {}", event.render());
    }
}
