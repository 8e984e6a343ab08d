// File: ./src/model/mod.rs
pub mod adapter;
pub mod item;
pub mod line;
pub mod parser;

pub use item::{CalendarEvent, EventBook};
pub use line::{LineOutcome, add_event_line, parse_event_line};
pub use parser::{
    DateDirective, DateResolver, ParseSettings, ResolvedDate, TimeCombiner, TimeOfDay,
};
