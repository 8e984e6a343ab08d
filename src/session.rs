// File: ./src/session.rs
//! Run orchestration for file mode and interactive mode.
//!
//! Both modes read through `BufRead` and report through `Write`, so a run can
//! be driven from a terminal, a file or an in-memory buffer alike.
use crate::model::{
    DateResolver, EventBook, LineOutcome, ParseSettings, ResolvedDate, TimeCombiner,
    add_event_line,
};
use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::io::{self, BufRead, Write};
use std::path::Path;

pub const EVENT_FORMAT_HINT: &str = "[start time (e.g. 3:00pm)] [end time] [name]";

#[derive(Debug, Clone)]
pub struct Session {
    resolver: DateResolver,
    combiner: TimeCombiner,
    now: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(settings: ParseSettings) -> Self {
        Self {
            resolver: DateResolver::new(settings.clone()),
            combiner: TimeCombiner::new(settings),
            now: None,
        }
    }

    /// Pins "now" for `today` / `tomorrow` instead of reading the system clock.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn settings(&self) -> &ParseSettings {
        self.resolver.settings()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Opens `path` and runs file mode on it. The file is closed before any
    /// error reaches the caller.
    pub fn collect_from_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<EventBook> {
        let reader = LocalStorage::open_input(path)?;
        self.collect_from_reader(reader, out)
            .with_context(|| format!("Failed to process '{}'", path.display()))
    }

    /// File mode: the first line is the date directive and an invalid one
    /// aborts the run. Every later line is trimmed and validated, blank ones
    /// included.
    pub fn collect_from_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
    ) -> Result<EventBook> {
        let mut lines = reader.split(b'\n');
        let first = lines
            .next()
            .transpose()
            .context("Failed to read the date line")?
            .map(|bytes| decode_line(&bytes))
            .unwrap_or_default();

        let date = self.resolver.resolve_at(first.trim(), self.now())?;
        self.announce_date(date, out)?;

        let mut book = EventBook::new();
        for line in lines {
            let line = decode_line(&line.context("Failed to read an event line")?);
            self.feed_line(line.trim(), date, &mut book, out)?;
        }
        Ok(book)
    }

    /// Interactive mode: re-prompts until a valid date, then reads events
    /// until a blank line or end of input.
    pub fn collect_interactive<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<EventBook> {
        let date = self.prompt_for_date(input, out)?;
        self.announce_date(date, out)?;

        writeln!(out, "Enter your events one line at a time in the following format:")?;
        writeln!(out, "{}\n\n", EVENT_FORMAT_HINT)?;

        let mut book = EventBook::new();
        loop {
            write!(out, "Enter your event (blank line to stop): ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                break;
            };
            if line.is_empty() {
                break;
            }
            self.feed_line(&line, date, &mut book, out)?;
        }
        Ok(book)
    }

    /// Validates one line against `date` and prints the outcome.
    pub fn feed_line<W: Write>(
        &self,
        line: &str,
        date: ResolvedDate,
        book: &mut EventBook,
        out: &mut W,
    ) -> io::Result<LineOutcome> {
        let outcome = add_event_line(line, date, &self.combiner, book);
        writeln!(out, "{}", outcome.message(line))?;
        Ok(outcome)
    }

    fn prompt_for_date<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<ResolvedDate> {
        let example = self
            .settings()
            .format_date(self.resolver.today_at(self.now()));
        loop {
            write!(out, "Enter the date (today, tomorrow or e.g. {}): ", example)?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                anyhow::bail!("Input ended before a valid date was entered");
            };
            let directive = line.trim();
            match self.resolver.resolve_at(directive, self.now()) {
                Ok(date) => return Ok(date),
                Err(e) => {
                    log::debug!("Date prompt: {}", e);
                    writeln!(out, "Invalid date {}. Try again.", directive)?;
                }
            }
        }
    }

    fn announce_date<W: Write>(&self, date: ResolvedDate, out: &mut W) -> io::Result<()> {
        log::debug!("Resolved date {}", date);
        writeln!(out, "Using date {}", self.settings().format_date(date))
    }
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(decode_line(&buf)))
}

/// Invalid UTF-8 becomes U+FFFD so a badly encoded line is judged like any
/// other line instead of ending the run.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
