use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Wall-clock shapes accepted from forms and API payloads, tried in order
const WALL_CLOCK_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses a `YYYY-MM-DDTHH:MM` wall-clock string (seconds optional)
pub fn parse_wall_clock(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();

    for format in WALL_CLOCK_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(parsed);
        }
    }

    Err(format!("Unable to parse timestamp: {s}"))
}

/// Formats a timestamp back into the `YYYY-MM-DDTHH:MM` shape that
/// `datetime-local` inputs and API payloads use
pub fn format_wall_clock(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// A half-open `[start, end)` interval of wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open intersection; a shared endpoint does not count as overlap
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    /// Parses a `start/end` pair, e.g. `2025-08-16T14:00/2025-08-16T16:00`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('/')
            .ok_or_else(|| format!("Expected start/end pair: {s}"))?;

        Ok(Self {
            start: parse_wall_clock(start)?,
            end: parse_wall_clock(end)?,
        })
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}/{}",
            format_wall_clock(self.start),
            format_wall_clock(self.end)
        )
    }
}
