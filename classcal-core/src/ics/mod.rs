//! ICS file generation and parsing.
//!
//! Each event is stored as a VCALENDAR holding one all-day VEVENT.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::parse_event;

/// Non-standard property carrying `CalendarEvent::related_group`.
pub(crate) const GROUP_PROPERTY: &str = "X-CLASSCAL-GROUP";
