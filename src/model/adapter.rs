// File: src/model/adapter.rs
//! Conversion of collected events into iCalendar text.
use crate::model::item::{CalendarEvent, EventBook};
use chrono::Utc;
use icalendar::{Calendar, Component, Event, EventLike};
use uuid::Uuid;

impl CalendarEvent {
    /// Begin and end are written as UTC instants, which keeps the wall-clock
    /// times of the configured zone without emitting a VTIMEZONE block.
    pub fn to_vevent(&self) -> Event {
        Event::new()
            .uid(&Uuid::new_v4().to_string())
            .summary(&self.name)
            .starts(self.begin.with_timezone(&Utc))
            .ends(self.end.with_timezone(&Utc))
            .timestamp(Utc::now())
            .done()
    }
}

impl EventBook {
    pub fn to_calendar(&self, name: Option<&str>) -> Calendar {
        let mut calendar = Calendar::new();
        if let Some(name) = name {
            calendar.name(name);
        }
        for event in self.iter() {
            calendar.push(event.to_vevent());
        }
        calendar
    }

    pub fn to_ics_string(&self, name: Option<&str>) -> String {
        self.to_calendar(name).to_string()
    }
}
