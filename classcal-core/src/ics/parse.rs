//! ICS file parsing using the icalendar crate's parser.

use chrono::NaiveDate;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::event::{CalendarEvent, EventCategory};
use crate::ics::GROUP_PROPERTY;

/// Parse ICS content into a CalendarEvent.
///
/// Only the first VEVENT is read. Timed DTSTART values are reduced to their date.
pub fn parse_event(content: &str) -> Option<CalendarEvent> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    // Required fields
    let id = vevent.find_prop("UID")?.val.to_string();
    let date = to_date(DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?);

    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(No title)".to_string());

    // First listed category wins; anything unknown is a generic event
    let category = vevent
        .find_prop("CATEGORIES")
        .and_then(|p| p.val.as_ref().split(',').next()?.parse().ok())
        .unwrap_or(EventCategory::Event);

    let related_group = vevent
        .find_prop(GROUP_PROPERTY)
        .map(|p| p.val.to_string())
        .filter(|g| !g.trim().is_empty());

    Some(CalendarEvent {
        id,
        date,
        title,
        category,
        related_group,
    })
}

fn to_date(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.date_naive(),
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::generate_ics;

    #[test]
    fn test_parse_generated_event() {
        let event = CalendarEvent {
            id: "test-event-123@classcal".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
            title: "Mathematics Unit Test".to_string(),
            category: EventCategory::Exam,
            related_group: Some("Grade 10-A".to_string()),
        };

        let ics = generate_ics(&event).unwrap();
        let parsed = parse_event(&ics).expect("Should parse generated ICS");

        assert_eq!(parsed, event);
    }

    #[test]
    fn test_parse_timed_start_keeps_date() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-123
SUMMARY:Parent-Teacher Meeting
DTSTART:20240119T140000Z
DTEND:20240119T160000Z
CATEGORIES:MEETING
END:VEVENT
END:VCALENDAR"#;

        let event = parse_event(ics).expect("Should parse");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 1, 19).unwrap());
        assert_eq!(event.category, EventCategory::Meeting);
        assert_eq!(event.related_group, None);
    }

    #[test]
    fn test_parse_defaults_for_missing_fields() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-456
DTSTART;VALUE=DATE:20240122
CATEGORIES:URGENT
END:VEVENT
END:VCALENDAR"#;

        let event = parse_event(ics).expect("Should parse");
        assert_eq!(event.title, "(No title)");
        assert_eq!(event.category, EventCategory::Event);
    }

    #[test]
    fn test_parse_requires_uid_and_start() {
        let no_uid = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
SUMMARY:Orphan
DTSTART;VALUE=DATE:20240122
END:VEVENT
END:VCALENDAR"#;
        assert!(parse_event(no_uid).is_none());

        let no_start = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-789
SUMMARY:Undated
END:VEVENT
END:VCALENDAR"#;
        assert!(parse_event(no_start).is_none());
    }

    #[test]
    fn test_parse_rejects_non_ics() {
        assert!(parse_event("title = \"not an ics file\"").is_none());
    }
}
