//! Timestamp parsing and formatting for date columns

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Result, TableError};
use crate::value::CellValue;

/// Default display format, e.g. `4/1/2021, 4:00:00 AM`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
];

/// Checks that a strftime format string can render a naive timestamp
///
/// Rejects unknown specifiers as well as zone specifiers such as `%z`, which
/// have no offset to print for a naive value.
pub fn validate_date_format(format: &str) -> Result<()> {
	let sample = DateTime::<Utc>::UNIX_EPOCH.naive_utc();
	if StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
		|| render(&sample, format).is_none()
	{
		return Err(TableError::InvalidDateFormat(format.to_string()));
	}
	Ok(())
}

fn render(dt: &NaiveDateTime, format: &str) -> Option<String> {
	let mut out = String::new();
	write!(out, "{}", dt.format(format)).ok()?;
	Some(out)
}

/// Interprets a cell value as a timestamp
///
/// Text is tried as RFC 3339, then as a local ISO-8601 date-time, then as a
/// bare date. Integers are epoch milliseconds. Anything else yields `None`.
pub fn parse_timestamp(value: &CellValue) -> Option<NaiveDateTime> {
	match value {
		CellValue::Text(s) => parse_text(s.trim()),
		CellValue::Integer(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.naive_utc()),
		CellValue::Float(ms) if ms.is_finite() => {
			DateTime::from_timestamp_millis(ms.trunc() as i64).map(|dt| dt.naive_utc())
		}
		_ => None,
	}
}

fn parse_text(s: &str) -> Option<NaiveDateTime> {
	if s.is_empty() {
		return None;
	}
	if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
		return Some(dt.naive_local());
	}
	DATETIME_FORMATS
		.iter()
		.find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
		.or_else(|| {
			NaiveDate::parse_from_str(s, "%Y-%m-%d")
				.ok()
				.and_then(|d| d.and_hms_opt(0, 0, 0))
		})
}

/// Formats a cell value as a date
///
/// Returns `None` when the value is not a timestamp or `format` cannot render
/// it.
pub fn format_timestamp(value: &CellValue, format: &str) -> Option<String> {
	parse_timestamp(value).and_then(|dt| render(&dt, format))
}
