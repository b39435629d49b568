//! Purpose: Turn dates, byte counts, and free text into display strings.
//! Exports: `DateInput`, `INVALID_DATE`, `parse_date`, `format_date`, `format_relative_time`,
//!          `format_relative_time_at`, `format_bytes`, `format_bytes_with_decimals`,
//!          `slugify`, `capitalize`.
//! Role: Pure helpers; no clock access except `format_relative_time`.
//! Invariants: Date helpers never panic; unparseable input yields `INVALID_DATE`.
//! Invariants: Dates render in UTC with English month names.
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

/// Sentinel returned by the date helpers when the input cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

pub const DEFAULT_BYTE_DECIMALS: usize = 2;

const BYTE_UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];
const BYTE_BASE: u64 = 1024;

const LONG_DATE_FORMAT: &str = "[month repr:long] [day padding:none], [year]";
const ISO_DATE_FORMAT: &str = "[year]-[month]-[day]";

/// A date handed to the formatting helpers: either an instant or ISO text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateInput<'a> {
    Instant(OffsetDateTime),
    Text(&'a str),
}

impl From<OffsetDateTime> for DateInput<'_> {
    fn from(value: OffsetDateTime) -> Self {
        DateInput::Instant(value)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Option<OffsetDateTime> {
        match self {
            DateInput::Instant(value) => Some(value),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

/// Parses RFC 3339 timestamps, or bare `YYYY-MM-DD` dates as UTC midnight.
pub fn parse_date(input: &str) -> Option<OffsetDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(parsed);
    }
    let format = time::format_description::parse(ISO_DATE_FORMAT).ok()?;
    let date = Date::parse(trimmed, &format).ok()?;
    Some(date.midnight().assume_utc())
}

/// Renders a long-form date such as `December 25, 2023`.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    let Some(instant) = input.into().resolve() else {
        return INVALID_DATE.to_string();
    };
    let Ok(format) = time::format_description::parse(LONG_DATE_FORMAT) else {
        return INVALID_DATE.to_string();
    };
    instant
        .to_offset(time::UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| INVALID_DATE.to_string())
}

pub fn format_relative_time<'a>(input: impl Into<DateInput<'a>>) -> String {
    format_relative_time_at(input, OffsetDateTime::now_utc())
}

/// Describes `input` relative to `now` using the largest whole unit that fits.
///
/// Anything under a minute away (including instants in the future) is
/// reported as `just now`.
pub fn format_relative_time_at<'a>(input: impl Into<DateInput<'a>>, now: OffsetDateTime) -> String {
    let Some(then) = input.into().resolve() else {
        return INVALID_DATE.to_string();
    };
    let seconds = (now - then).whole_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }
    ago(hours / 24, "day")
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with_decimals(bytes, DEFAULT_BYTE_DECIMALS)
}

/// Formats a byte count in the largest binary unit that keeps the value >= 1.
///
/// Ties round half-up (`1152` is `1.13 KB`), and a value that rounds up to
/// 1024 moves to the next unit. Trailing zeros are trimmed, so `1024` renders
/// as `1 KB` rather than `1.00 KB`.
pub fn format_bytes_with_decimals(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < BYTE_UNITS.len() && bytes / scale >= BYTE_BASE {
        scale *= BYTE_BASE;
        unit += 1;
    }

    let mut value = round_half_up(bytes as f64 / scale as f64, decimals);
    if value >= BYTE_BASE as f64 && unit + 1 < BYTE_UNITS.len() {
        scale *= BYTE_BASE;
        unit += 1;
        value = round_half_up(bytes as f64 / scale as f64, decimals);
    }

    let rendered = format!("{value:.decimals$}");
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };
    format!("{trimmed} {}", BYTE_UNITS[unit])
}

/// Rounds to `decimals` places with ties away from zero; precision beyond f64 range is left as is.
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Lowercase, hyphen-separated, ASCII-only slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
