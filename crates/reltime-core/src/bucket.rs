//! Time buckets and refresh delays

use std::fmt;
use std::time::Duration;

/// Refresh delay for the "now" bucket
pub const HALF_MINUTE: Duration = Duration::from_secs(30);
pub const ONE_MINUTE: Duration = Duration::from_secs(60);
pub const ONE_HOUR: Duration = Duration::from_secs(60 * 60);
pub const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Translation key of the "in the future" message
pub const FUTURE_KEY: &str = "relativetime.future";
/// Translation key of the "now" message
pub const NOW_KEY: &str = "relativetime.now";

/// Unit of a counted bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
	Minute,
	Hour,
	Day,
	Week,
	Month,
	Year,
}

impl TimeUnit {
	pub const ALL: [TimeUnit; 6] = [
		TimeUnit::Minute,
		TimeUnit::Hour,
		TimeUnit::Day,
		TimeUnit::Week,
		TimeUnit::Month,
		TimeUnit::Year,
	];

	/// Plural translation key for this unit
	pub fn key(self) -> &'static str {
		match self {
			TimeUnit::Minute => "relativetime.mins",
			TimeUnit::Hour => "relativetime.hours",
			TimeUnit::Day => "relativetime.days",
			TimeUnit::Week => "relativetime.weeks",
			TimeUnit::Month => "relativetime.months",
			TimeUnit::Year => "relativetime.years",
		}
	}

	/// English singular name
	pub fn name(self) -> &'static str {
		match self {
			TimeUnit::Minute => "minute",
			TimeUnit::Hour => "hour",
			TimeUnit::Day => "day",
			TimeUnit::Week => "week",
			TimeUnit::Month => "month",
			TimeUnit::Year => "year",
		}
	}
}

/// Coarse distance between an instant and now
///
/// Variants are ordered from nearest to most distant, so comparing two
/// buckets tells which one is further in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeBucket {
	Future,
	Now,
	Minutes(u64),
	Hours(u64),
	Days(u64),
	Weeks(u64),
	Months(u64),
	Years(u64),
}

impl TimeBucket {
	/// Build a counted bucket for `unit`
	pub fn counted(unit: TimeUnit, n: u64) -> Self {
		match unit {
			TimeUnit::Minute => TimeBucket::Minutes(n),
			TimeUnit::Hour => TimeBucket::Hours(n),
			TimeUnit::Day => TimeBucket::Days(n),
			TimeUnit::Week => TimeBucket::Weeks(n),
			TimeUnit::Month => TimeBucket::Months(n),
			TimeUnit::Year => TimeBucket::Years(n),
		}
	}

	/// Unit and count, or `None` for `Future` and `Now`
	pub fn unit_count(self) -> Option<(TimeUnit, u64)> {
		match self {
			TimeBucket::Future | TimeBucket::Now => None,
			TimeBucket::Minutes(n) => Some((TimeUnit::Minute, n)),
			TimeBucket::Hours(n) => Some((TimeUnit::Hour, n)),
			TimeBucket::Days(n) => Some((TimeUnit::Day, n)),
			TimeBucket::Weeks(n) => Some((TimeUnit::Week, n)),
			TimeBucket::Months(n) => Some((TimeUnit::Month, n)),
			TimeBucket::Years(n) => Some((TimeUnit::Year, n)),
		}
	}

	/// How long the classification stays valid before it should be recomputed
	pub fn refresh_delay(self) -> Duration {
		match self {
			TimeBucket::Future | TimeBucket::Minutes(_) => ONE_MINUTE,
			TimeBucket::Now => HALF_MINUTE,
			TimeBucket::Hours(_) => ONE_HOUR,
			TimeBucket::Days(_)
			| TimeBucket::Weeks(_)
			| TimeBucket::Months(_)
			| TimeBucket::Years(_) => ONE_DAY,
		}
	}
}

impl fmt::Display for TimeBucket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.unit_count() {
			Some((unit, n)) => write!(f, "{}({})", unit.name(), n),
			None if *self == TimeBucket::Future => f.write_str("future"),
			None => f.write_str("now"),
		}
	}
}

/// Result of classifying an instant against the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
	pub bucket: TimeBucket,
	/// Delay before the classification should be recomputed
	pub next_refresh: Duration,
}

impl Classification {
	pub fn new(bucket: TimeBucket) -> Self {
		Self {
			bucket,
			next_refresh: bucket.refresh_delay(),
		}
	}

	/// Refresh delay in whole milliseconds, as host timer APIs expect
	pub fn next_refresh_millis(&self) -> u64 {
		u64::try_from(self.next_refresh.as_millis()).unwrap_or(u64::MAX)
	}
}
