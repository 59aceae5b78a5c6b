//! One-call parse, classify, render and tooltip

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use reltime_i18n::LocaleContext;

use crate::bucket::TimeBucket;
use crate::classify::{classify, parse_timestamp};
use crate::config::RelativeTimeConfig;
use crate::dateformat;
use crate::error::ConfigError;
use crate::render::render;

/// Everything a host applies to a timestamp element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
	/// Relative label, e.g. "3 days ago"
	pub text: String,
	/// Absolute time for the hover tooltip
	pub tooltip: String,
	pub bucket: TimeBucket,
	/// Delay before the label should be recomputed
	pub next_refresh: Duration,
}

impl Rendered {
	pub fn next_refresh_millis(&self) -> u64 {
		u64::try_from(self.next_refresh.as_millis()).unwrap_or(u64::MAX)
	}
}

/// Relative time formatter bound to a locale and a display time zone
///
/// Cheap to clone; the locale tables are shared.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::{TimeZone, Utc};
/// use reltime_core::{RelativeTimeFormatter, ONE_MINUTE};
/// use reltime_i18n::LocaleContext;
///
/// let locale = LocaleContext::builder()
///     .current_plural("relativetime.mins", ["%d minute ago", "%d minutes ago"])
///     .build();
/// let formatter = RelativeTimeFormatter::with_locale(Arc::new(locale));
/// let now = Utc.with_ymd_and_hms(2024, 10, 27, 3, 5, 30).unwrap();
///
/// let rendered = formatter.format(Some("2024-10-27T04:06:30+02:00"), now).unwrap();
/// assert_eq!(rendered.text, "59 minutes ago");
/// assert_eq!(rendered.tooltip, "Oct 27, 2024, 02:06 UTC");
/// assert_eq!(rendered.next_refresh, ONE_MINUTE);
///
/// assert!(formatter.format(Some("garbage"), now).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter {
	locale: Arc<LocaleContext>,
	tz: Tz,
	tooltip_format: String,
}

impl RelativeTimeFormatter {
	pub fn new(locale: Arc<LocaleContext>, config: &RelativeTimeConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			locale,
			tz: config.tz()?,
			tooltip_format: config.tooltip_format.clone(),
		})
	}

	/// Formatter with the default configuration (UTC calendar)
	pub fn with_locale(locale: Arc<LocaleContext>) -> Self {
		Self {
			locale,
			tz: Tz::UTC,
			tooltip_format: dateformat::DEFAULT_TOOLTIP_FORMAT.to_string(),
		}
	}

	pub fn locale(&self) -> &LocaleContext {
		&self.locale
	}

	pub fn time_zone(&self) -> Tz {
		self.tz
	}

	/// Render a raw timestamp attribute
	///
	/// Returns `None` for a missing or unparseable timestamp; the host should
	/// keep its placeholder and must not schedule a refresh.
	pub fn format(&self, raw: Option<&str>, now: DateTime<Utc>) -> Option<Rendered> {
		let raw = raw?;
		match parse_timestamp(raw) {
			Ok(then) => Some(self.format_instant(then, now)),
			Err(err) => {
				tracing::warn!(error = %err, "ignoring relative time with invalid timestamp");
				None
			}
		}
	}

	/// Render an already parsed instant
	pub fn format_instant<A: TimeZone>(&self, then: DateTime<A>, now: DateTime<Utc>) -> Rendered {
		let classification = classify(then.clone(), now, &self.tz);
		Rendered {
			text: render(classification.bucket, &self.locale),
			tooltip: self.tooltip(then),
			bucket: classification.bucket,
			next_refresh: classification.next_refresh,
		}
	}

	/// Absolute time of `then` in the display time zone
	pub fn tooltip<A: TimeZone>(&self, then: DateTime<A>) -> String {
		dateformat::format_absolute(&then, &self.tz, &self.tooltip_format)
	}
}
