//! Relative time classification
//!
//! Distant buckets come from calendar differences in the display time zone;
//! hours and minutes come from the exact elapsed time, so a DST switch never
//! skips or repeats an hour.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::bucket::{Classification, TimeBucket};
use crate::calendar::{days_between, months_between};
use crate::error::ParseError;

/// Parse a timestamp attribute in RFC 3339 form
///
/// The offset (or `Z`) is mandatory; instants are compared in absolute time.
///
/// # Examples
///
/// ```
/// use reltime_core::parse_timestamp;
///
/// let dt = parse_timestamp("2024-10-27T01:00:00+02:00").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-10-27T01:00:00+02:00");
/// assert!(parse_timestamp("yesterday").is_err());
/// assert!(parse_timestamp("   ").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ParseError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err(ParseError::Empty);
	}
	DateTime::parse_from_rfc3339(trimmed).map_err(|source| ParseError::Invalid {
		input: trimmed.to_string(),
		source,
	})
}

/// Classify `then` relative to `now`, using the calendar of `tz`
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use reltime_core::{classify, parse_timestamp, TimeBucket, ONE_HOUR};
///
/// let now = parse_timestamp("2024-10-27T04:05:30+01:00").unwrap();
/// let then = parse_timestamp("2024-10-27T01:00:00+02:00").unwrap();
///
/// let result = classify(then, now, &Utc);
/// assert_eq!(result.bucket, TimeBucket::Hours(4));
/// assert_eq!(result.next_refresh, ONE_HOUR);
/// ```
pub fn classify<A, B, Tz>(then: DateTime<A>, now: DateTime<B>, tz: &Tz) -> Classification
where
	A: TimeZone,
	B: TimeZone,
	Tz: TimeZone,
{
	let then = then.with_timezone(&Utc);
	let now = now.with_timezone(&Utc);
	Classification::new(bucket_for(then, now, tz))
}

fn bucket_for<Tz: TimeZone>(then: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> TimeBucket {
	if now < then {
		return TimeBucket::Future;
	}

	let months = months_between(then, now, tz);
	if months >= 12 {
		return TimeBucket::Years(months / 12);
	}
	if months >= 1 {
		return TimeBucket::Months(months);
	}

	let days = days_between(then, now, tz);
	if days >= 7 {
		return TimeBucket::Weeks(days / 7);
	}
	if days >= 1 {
		return TimeBucket::Days(days);
	}

	let elapsed = now - then;
	let hours = elapsed.num_hours().unsigned_abs();
	if hours >= 1 {
		return TimeBucket::Hours(hours);
	}
	let minutes = elapsed.num_minutes().unsigned_abs();
	if minutes >= 1 {
		return TimeBucket::Minutes(minutes);
	}
	TimeBucket::Now
}

/// Classify a raw timestamp attribute
///
/// A missing or unparseable timestamp yields `None`, which callers treat as
/// "show nothing and do not schedule a refresh".
pub fn classify_timestamp<Tz: TimeZone>(
	raw: Option<&str>,
	now: DateTime<Utc>,
	tz: &Tz,
) -> Option<Classification> {
	let raw = raw?;
	match parse_timestamp(raw) {
		Ok(then) => Some(classify(then, now, tz)),
		Err(err) => {
			tracing::warn!(error = %err, "cannot classify timestamp");
			None
		}
	}
}
