//! School calendar events.
//!
//! An event sits on exactly one day. There is no time of day, duration or
//! recurrence; the category is a presentation tag only.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalError;

/// A dated school event (exam, assignment deadline, holiday, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub category: EventCategory,
    /// Class or section label, e.g. "Grade 10-A". Free text.
    pub related_group: Option<String>,
}

impl CalendarEvent {
    /// Create a new event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        category: EventCategory,
        related_group: Option<String>,
    ) -> Self {
        CalendarEvent {
            id: format!("{}@classcal", uuid::Uuid::new_v4()),
            date,
            title: title.into(),
            category,
            related_group,
        }
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Exam,
    Assignment,
    Holiday,
    Meeting,
    #[default]
    Event,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Exam,
        EventCategory::Assignment,
        EventCategory::Holiday,
        EventCategory::Meeting,
        EventCategory::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Exam => "exam",
            EventCategory::Assignment => "assignment",
            EventCategory::Holiday => "holiday",
            EventCategory::Meeting => "meeting",
            EventCategory::Event => "event",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        EventCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CalError::UnknownCategory(s.to_string()))
    }
}

/// Predicate over events, applied by callers before building a grid.
/// Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub group: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }

        match &self.group {
            Some(group) => event
                .related_group
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(group)),
            None => true,
        }
    }

    /// Keep matching events, preserving their order.
    pub fn apply(&self, events: &[CalendarEvent]) -> Vec<CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
