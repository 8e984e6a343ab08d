// File: ./src/model/line.rs
//! Validation of one `<start> <end> <name...>` line.
use crate::error::ParseError;
use crate::model::item::{CalendarEvent, EventBook};
use crate::model::parser::{ResolvedDate, TimeCombiner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Added,
    Rejected(ParseError),
}

impl LineOutcome {
    /// The console message for `line`. Rejections never say which field failed.
    pub fn message(&self, line: &str) -> String {
        match self {
            LineOutcome::Added => format!("Added event: {}", line),
            LineOutcome::Rejected(_) => format!("Invalid input {}. Event not added.", line),
        }
    }
}

/// Builds an event from a line without touching any collection.
///
/// The name is every token after the two times, joined by single spaces, so
/// runs of whitespace inside the title collapse.
pub fn parse_event_line(
    line: &str,
    date: ResolvedDate,
    combiner: &TimeCombiner,
) -> Result<CalendarEvent, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::MalformedEventLine(line.to_string()));
    }

    let begin = combiner.combine(date, tokens[0])?;
    let end = combiner.combine(date, tokens[1])?;
    let name = tokens[2..].join(" ");

    Ok(CalendarEvent::new(name, begin, end))
}

/// Adds exactly one event to `book`, or nothing.
pub fn add_event_line(
    line: &str,
    date: ResolvedDate,
    combiner: &TimeCombiner,
    book: &mut EventBook,
) -> LineOutcome {
    match parse_event_line(line, date, combiner) {
        Ok(event) => {
            log::debug!("Accepted '{}' as {} -> {}", event.name, event.begin, event.end);
            book.push(event);
            LineOutcome::Added
        }
        Err(e) => {
            log::debug!("Rejected line '{}': {}", line, e);
            LineOutcome::Rejected(e)
        }
    }
}
