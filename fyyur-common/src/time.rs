//! Show time utilities
//!
//! Show times are naive local date-times: a show starts at 8pm wherever the
//! venue is, and "now" is the server's local wall clock.

use crate::{Error, Result};
use chrono::{Local, NaiveDateTime, Timelike};

/// Current local wall-clock time, truncated to whole seconds
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Display formats for show times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTimeFormat {
    /// `Sat 05, 21, 2019 9:30PM`
    Medium,
    /// `Saturday May, 21, 2019 at 9:30PM`
    Full,
}

impl ShowTimeFormat {
    fn pattern(self) -> &'static str {
        match self {
            ShowTimeFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
            ShowTimeFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        }
    }
}

/// Format a show time for display
pub fn format_show_time(time: NaiveDateTime, format: ShowTimeFormat) -> String {
    time.format(format.pattern()).to_string()
}

/// Accepted input layouts for submitted start times
const START_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a submitted start time (`YYYY-MM-DD HH:MM[:SS]`, space or `T` separator)
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    START_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| Error::Validation(format!("Invalid start time: {}", input)))
}
