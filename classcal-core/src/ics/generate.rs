//! ICS file generation.

use chrono::NaiveDate;
use icalendar::{Calendar, Component, Property, ValueType};

use crate::error::{CalError, CalResult};
use crate::event::CalendarEvent;
use crate::ics::GROUP_PROPERTY;

/// Generate .ics content for an event
pub fn generate_ics(event: &CalendarEvent) -> CalResult<String> {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.id);
    ics_event.summary(&event.title);

    // All-day: DTEND is the exclusive following day per RFC 5545
    let end = event.date.succ_opt().ok_or_else(|| {
        CalError::Store(format!("Event '{}' has no following day", event.id))
    })?;
    add_date_property(&mut ics_event, "DTSTART", event.date);
    add_date_property(&mut ics_event, "DTEND", end);

    ics_event.add_property("CATEGORIES", event.category.as_str().to_uppercase());

    if let Some(ref group) = event.related_group {
        ics_event.add_property(GROUP_PROPERTY, group);
    }

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with CLASSCAL
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:CLASSCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}
