// File: ./src/model/item.rs
use chrono::DateTime;
use chrono_tz::Tz;

/// One timed event. `begin` may fall after `end`; nothing reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub name: String,
    pub begin: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl CalendarEvent {
    pub fn new(name: impl Into<String>, begin: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            name: name.into(),
            begin,
            end,
        }
    }
}

/// Events collected during one run, in insertion order.
///
/// Identical name/time pairs are kept as separate events. The book only grows
/// and is consumed once when the calendar is written.
#[derive(Debug, Clone, Default)]
pub struct EventBook {
    events: Vec<CalendarEvent>,
}

impl EventBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter()
    }
}
