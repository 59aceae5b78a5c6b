//! Calendar differences between two instants
//!
//! Months and days are counted on the wall clock of a time zone: `then + n`
//! calendar units must not pass `now`. Adding months clamps the day of month
//! (Jan 31 + 1 month = Feb 29 in a leap year), and adding days keeps the wall
//! clock time even when a DST switch makes the day 23 or 25 hours long.

use chrono::{DateTime, Datelike, Days, LocalResult, Months, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Whole calendar months from `then` to `now` in `tz`
///
/// Returns 0 when `now` is not after `then`.
pub fn months_between<Tz: TimeZone>(then: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> u64 {
	if now <= then {
		return 0;
	}
	let start = then.with_timezone(tz).naive_local();
	let end = now.with_timezone(tz).naive_local();

	let mut months = i64::from(end.year() - start.year()) * 12
		+ i64::from(end.month()) - i64::from(start.month());
	while months > 0 && !reached(tz, add_months(start, months), now) {
		months -= 1;
	}
	u64::try_from(months).unwrap_or(0)
}

/// Whole calendar days from `then` to `now` in `tz`
///
/// Returns 0 when `now` is not after `then`.
pub fn days_between<Tz: TimeZone>(then: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> u64 {
	if now <= then {
		return 0;
	}
	let start = then.with_timezone(tz).naive_local();
	let end = now.with_timezone(tz).naive_local();

	let mut days = (end.date() - start.date()).num_days();
	while days > 0 && !reached(tz, add_days(start, days), now) {
		days -= 1;
	}
	u64::try_from(days).unwrap_or(0)
}

fn add_months(start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
	start.checked_add_months(Months::new(u32::try_from(months).ok()?))
}

fn add_days(start: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
	start.checked_add_days(Days::new(u64::try_from(days).ok()?))
}

/// Whether the wall clock time `local` in `tz` is at or before `now`
fn reached<Tz: TimeZone>(tz: &Tz, local: Option<NaiveDateTime>, now: DateTime<Utc>) -> bool {
	local.is_some_and(|local| resolve_local(tz, local).with_timezone(&Utc) <= now)
}

/// Map a wall clock time to an instant
///
/// Ambiguous times (DST fall back) take the earlier instant. Times inside a
/// DST gap are pushed forward by the length of the gap.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
	match tz.from_local_datetime(&local) {
		LocalResult::Single(dt) => dt,
		LocalResult::Ambiguous(earliest, _) => earliest,
		LocalResult::None => (1..=24)
			.find_map(|hours| {
				tz.from_local_datetime(&(local + TimeDelta::hours(hours)))
					.earliest()
			})
			.unwrap_or_else(|| tz.from_utc_datetime(&local)),
	}
}
