//! Absolute date formatting for tooltips
//!
//! Uses Django/PHP style format codes so hosts can configure the tooltip
//! pattern without touching code.
//!
//! Supported codes:
//! - Y / y: 4-digit / 2-digit year
//! - m / n: month with / without leading zero
//! - F / M: full / abbreviated month name
//! - d / j: day with / without leading zero
//! - l / D: full / abbreviated weekday name
//! - H / G: 24-hour with / without leading zero
//! - h / g: 12-hour with / without leading zero
//! - i / s: minutes / seconds
//! - A / a: AM/PM, am/pm
//! - T: time zone abbreviation (e.g. CET)
//! - O: UTC offset (e.g. +0100)
//! - U: Unix timestamp
//!
//! A backslash outputs the next character literally.

use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Tooltip pattern used when none is configured: "Oct 27, 2024, 04:05 CET"
pub const DEFAULT_TOOLTIP_FORMAT: &str = "M j, Y, H:i T";

/// Format `dt` in its own time zone using `pattern`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Europe::Berlin;
/// use reltime_core::dateformat::format;
///
/// let dt = Utc.with_ymd_and_hms(2024, 10, 27, 3, 5, 30).unwrap();
/// assert_eq!(format(&dt, "Y-m-d H:i:s"), "2024-10-27 03:05:30");
/// assert_eq!(format(&dt.with_timezone(&Berlin), "M j, Y, H:i T"), "Oct 27, 2024, 04:05 CET");
/// ```
pub fn format<Tz>(dt: &DateTime<Tz>, pattern: &str) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	let mut result = String::with_capacity(pattern.len() * 2);
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		match c {
			'\\' => {
				if let Some(next) = chars.next() {
					result.push(next);
				}
			}
			'Y' => result.push_str(&format!("{:04}", dt.year())),
			'y' => result.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
			'm' => result.push_str(&format!("{:02}", dt.month())),
			'n' => result.push_str(&dt.month().to_string()),
			'F' => result.push_str(month_name(dt.month())),
			'M' => result.push_str(&month_name(dt.month())[..3]),
			'd' => result.push_str(&format!("{:02}", dt.day())),
			'j' => result.push_str(&dt.day().to_string()),
			'l' => result.push_str(weekday_name(dt.weekday())),
			'D' => result.push_str(&weekday_name(dt.weekday())[..3]),
			'H' => result.push_str(&format!("{:02}", dt.hour())),
			'G' => result.push_str(&dt.hour().to_string()),
			'h' => result.push_str(&format!("{:02}", hour12(dt.hour()))),
			'g' => result.push_str(&hour12(dt.hour()).to_string()),
			'i' => result.push_str(&format!("{:02}", dt.minute())),
			's' => result.push_str(&format!("{:02}", dt.second())),
			'A' => result.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
			'a' => result.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
			'T' => result.push_str(&dt.offset().to_string()),
			'O' => result.push_str(&dt.format("%z").to_string()),
			'U' => result.push_str(&dt.timestamp().to_string()),
			_ => result.push(c),
		}
	}

	result
}

/// Format `instant` as seen in time zone `tz`
///
/// # Examples
///
/// ```
/// use chrono_tz::America::New_York;
/// use reltime_core::dateformat::{DEFAULT_TOOLTIP_FORMAT, format_absolute};
/// use reltime_core::parse_timestamp;
///
/// let instant = parse_timestamp("2024-10-27T01:00:00+02:00").unwrap();
/// assert_eq!(format_absolute(&instant, &New_York, DEFAULT_TOOLTIP_FORMAT), "Oct 26, 2024, 19:00 EDT");
/// ```
pub fn format_absolute<A, Tz>(instant: &DateTime<A>, tz: &Tz, pattern: &str) -> String
where
	A: TimeZone,
	Tz: TimeZone,
	Tz::Offset: Display,
{
	format(&instant.with_timezone(tz), pattern)
}

fn hour12(hour: u32) -> u32 {
	match hour % 12 {
		0 => 12,
		h => h,
	}
}

fn month_name(month: u32) -> &'static str {
	match month {
		1 => "January",
		2 => "February",
		3 => "March",
		4 => "April",
		5 => "May",
		6 => "June",
		7 => "July",
		8 => "August",
		9 => "September",
		10 => "October",
		11 => "November",
		_ => "December",
	}
}

fn weekday_name(weekday: Weekday) -> &'static str {
	match weekday {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}
