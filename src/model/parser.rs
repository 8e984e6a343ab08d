// File: src/model/parser.rs
//! Short-hand date and time parsing.
//!
//! Every parser here is strict: a token either matches its fixed format or the
//! caller gets a `ParseError`. There are no fallback spellings.
use crate::error::{ConfigError, ParseError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

/// The calendar day every event of a run (or file) is anchored to.
pub type ResolvedDate = NaiveDate;

pub const DEFAULT_TIMEZONE: &str = "US/Eastern";
pub const DEFAULT_DATE_FORMAT: &str = "%m-%d-%Y";
const TIME_FORMAT: &str = "%I:%M%p";

/// `None` when the format holds items a bare date cannot render (`%H`, `%Z`, ...).
fn render_date(date: NaiveDate, date_format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(date_format)).ok()?;
    Some(out)
}

/// Zone and date format shared by `DateResolver` and `TimeCombiner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSettings {
    tz: Tz,
    date_format: String,
}

impl ParseSettings {
    /// Rejects date formats that cannot render and re-read a full calendar date.
    pub fn new(tz: Tz, date_format: impl Into<String>) -> Result<Self, ConfigError> {
        let date_format = date_format.into();
        let invalid = || ConfigError::InvalidDateFormat(date_format.clone());

        if date_format.trim().is_empty()
            || StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(invalid());
        }

        let sample = NaiveDate::from_ymd_opt(2024, 3, 7).ok_or_else(invalid)?;
        let rendered = render_date(sample, &date_format).ok_or_else(invalid)?;
        let reads_back = matches!(
            NaiveDate::parse_from_str(&rendered, &date_format),
            Ok(back) if back == sample
        );
        if !reads_back {
            return Err(invalid());
        }
        Ok(Self { tz, date_format })
    }

    pub fn from_names(timezone: &str, date_format: &str) -> Result<Self, ConfigError> {
        let tz = timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(timezone.to_string()))?;
        Self::new(tz, date_format)
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn format_date(&self, date: ResolvedDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            tz: chrono_tz::US::Eastern,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// A 12-hour clock reading such as `3:00pm` or `11:45AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    is_pm: bool,
}

impl TimeOfDay {
    /// Accepts `H:MMam` / `HH:MMpm` with the marker in any letter case.
    /// Whitespace, 24-hour readings and single-digit minutes are rejected.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidTimeFormat(token.to_string());
        let lower = token.to_ascii_lowercase();

        let (clock, is_pm) = if let Some(stripped) = lower.strip_suffix("am") {
            (stripped, false)
        } else if let Some(stripped) = lower.strip_suffix("pm") {
            (stripped, true)
        } else {
            return Err(invalid());
        };

        let (h_str, m_str) = clock.split_once(':').ok_or_else(invalid)?;
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if h_str.len() > 2 || m_str.len() != 2 || !all_digits(h_str) || !all_digits(m_str) {
            return Err(invalid());
        }

        let hour = h_str.parse::<u32>().map_err(|_| invalid())?;
        let minute = m_str.parse::<u32>().map_err(|_| invalid())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(invalid());
        }

        Ok(Self {
            hour,
            minute,
            is_pm,
        })
    }

    pub fn hour_24(&self) -> u32 {
        if self.hour == 12 {
            if self.is_pm { 12 } else { 0 }
        } else if self.is_pm {
            self.hour + 12
        } else {
            self.hour
        }
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDirective {
    Today,
    Tomorrow,
    Explicit(NaiveDate),
}

impl DateDirective {
    /// `today` and `tomorrow` match case-insensitively. Anything else must be a
    /// real calendar date written exactly as `date_format` renders it.
    pub fn parse(input: &str, date_format: &str) -> Result<Self, ParseError> {
        if input.eq_ignore_ascii_case("today") {
            return Ok(Self::Today);
        }
        if input.eq_ignore_ascii_case("tomorrow") {
            return Ok(Self::Tomorrow);
        }

        let invalid = || ParseError::InvalidDateFormat(input.to_string());
        let date = NaiveDate::parse_from_str(input, date_format).map_err(|_| invalid())?;
        // "3-7-2024" parses under %m-%d-%Y, so require an exact re-render.
        if render_date(date, date_format).as_deref() != Some(input) {
            return Err(invalid());
        }
        Ok(Self::Explicit(date))
    }
}

#[derive(Debug, Clone)]
pub struct DateResolver {
    settings: ParseSettings,
}

impl DateResolver {
    pub fn new(settings: ParseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParseSettings {
        &self.settings
    }

    pub fn resolve(&self, directive: &str) -> Result<ResolvedDate, ParseError> {
        self.resolve_at(directive, Utc::now())
    }

    /// Same as `resolve`, with "now" supplied by the caller.
    pub fn resolve_at(
        &self,
        directive: &str,
        now: DateTime<Utc>,
    ) -> Result<ResolvedDate, ParseError> {
        match DateDirective::parse(directive, &self.settings.date_format)? {
            DateDirective::Today => Ok(self.today_at(now)),
            DateDirective::Tomorrow => self
                .today_at(now)
                .succ_opt()
                .ok_or_else(|| ParseError::InvalidDateFormat(directive.to_string())),
            DateDirective::Explicit(date) => Ok(date),
        }
    }

    pub fn today_at(&self, now: DateTime<Utc>) -> ResolvedDate {
        now.with_timezone(&self.settings.tz).date_naive()
    }
}

#[derive(Debug, Clone)]
pub struct TimeCombiner {
    settings: ParseSettings,
}

impl TimeCombiner {
    pub fn new(settings: ParseSettings) -> Self {
        Self { settings }
    }

    /// Anchors a clock token to `date` in the configured zone.
    ///
    /// The date and the raw token are joined into one string and read back with
    /// a single fixed format, so the token must stand on its own.
    pub fn combine(&self, date: ResolvedDate, token: &str) -> Result<DateTime<Tz>, ParseError> {
        let time = TimeOfDay::parse(token)?;

        let combined = format!(
            "{} {}",
            self.settings.format_date(date),
            token.to_ascii_uppercase()
        );
        let format = format!("{} {}", self.settings.date_format, TIME_FORMAT);
        let naive = NaiveDateTime::parse_from_str(&combined, &format)
            .map_err(|_| ParseError::InvalidTimeFormat(token.to_string()))?;
        if (naive.hour(), naive.minute()) != (time.hour_24(), time.minute()) {
            return Err(ParseError::InvalidTimeFormat(token.to_string()));
        }

        // Ambiguous wall-clock times (DST fold) take the earlier instant.
        if let Some(dt) = self.settings.tz.from_local_datetime(&naive).earliest() {
            return Ok(dt);
        }
        self.across_gap(naive)
            .ok_or(ParseError::NonexistentLocalTime(combined))
    }

    /// A wall-clock time skipped by a DST jump is read with the offset in force
    /// before the jump, which moves it forward by the length of the gap
    /// (2:30am becomes 3:30am on a one-hour spring-forward).
    fn across_gap(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        let tz = self.settings.tz;
        let before = tz.from_local_datetime(&(naive - Duration::days(1))).earliest()?;
        let offset = before.offset().fix();
        let shifted = offset.from_local_datetime(&naive).single()?;
        Some(shifted.with_timezone(&tz))
    }
}
