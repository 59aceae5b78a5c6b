//! # Reltime
//!
//! Localized relative time labels ("3 hours ago", "yesterday") that keep
//! themselves up to date.
//!
//! Reltime turns an absolute timestamp into a coarse, human-readable distance
//! from now, in the viewer's language, and tells the host when that label
//! will go stale so each displayed timestamp can refresh itself.
//!
//! ## Core Principles
//!
//! - **Calendar-aware**: months and years follow the calendar of a configurable
//!   time zone, hours and minutes follow exact elapsed time, so DST switches
//!   neither skip nor repeat an hour
//! - **Data-driven locales**: plural rules live in an extensible table and
//!   curated special forms ("yesterday", "two weeks ago") come from data
//! - **No global loop**: every displayed timestamp owns a single-shot timer that
//!   is cancelled when the element goes away
//!
//! ## Feature Flags
//!
//! - `scheduler` (default) - [`RelativeTimeElement`] and the manual timer driver
//! - `tokio` - `TokioTimers` and `TokioClock` on a `LocalSet`
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use reltime::{LocaleContext, RelativeTimeFormatter, ONE_HOUR};
//!
//! let locale = LocaleContext::from_page_data(r#"{
//!     "PLURAL_RULE_LANG": 0,
//!     "PLURAL_RULE_FALLBACK": 0,
//!     "PLURALSTRINGS_LANG": { "relativetime.hours": ["%d hour ago", "%d hours ago"] },
//!     "SPECIALFORMS": { "relativetime.days": { "1": "yesterday" } }
//! }"#).unwrap();
//! let formatter = RelativeTimeFormatter::with_locale(Arc::new(locale));
//! let now = Utc.with_ymd_and_hms(2024, 10, 27, 3, 5, 30).unwrap();
//!
//! let rendered = formatter.format(Some("2024-10-27T01:00:00+02:00"), now).unwrap();
//! assert_eq!(rendered.text, "4 hours ago");
//! assert_eq!(rendered.next_refresh, ONE_HOUR);
//!
//! let rendered = formatter.format(Some("2024-10-26T01:00:00Z"), now).unwrap();
//! assert_eq!(rendered.text, "yesterday");
//! ```

pub mod core;
pub mod i18n;
#[cfg(feature = "scheduler")]
pub mod scheduler;

// Re-export locale types
pub use reltime_i18n::{
	I18nError, LocaleContext, LocaleContextBuilder, PluralCategory, PluralRule, PluralRuleId,
	PluralRuleTable, rule_for_language,
};

// Re-export classification and rendering
pub use reltime_core::{
	Classification, ConfigError, HALF_MINUTE, ONE_DAY, ONE_HOUR, ONE_MINUTE, ParseError,
	RelativeTimeConfig, RelativeTimeFormatter, Rendered, TimeBucket, TimeUnit, classify,
	classify_timestamp, parse_timestamp, render,
};

// Re-export the refresh loop
#[cfg(feature = "scheduler")]
pub use reltime_scheduler::{
	Clock, DisplayState, DisplayTarget, ManualTimers, MemoryTarget, RelativeTimeElement,
	SystemClock, TimerDriver, TimerId,
};

#[cfg(feature = "tokio")]
pub use reltime_scheduler::{TokioClock, TokioTimers};

/// Prelude module for convenient imports
///
/// Import everything needed to render and refresh relative timestamps:
/// ```rust
/// use reltime::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		LocaleContext, RelativeTimeConfig, RelativeTimeFormatter, Rendered, TimeBucket, classify,
		render,
	};

	#[cfg(feature = "scheduler")]
	pub use crate::{Clock, DisplayTarget, ManualTimers, RelativeTimeElement, SystemClock, TimerDriver};

	#[cfg(feature = "tokio")]
	pub use crate::{TokioClock, TokioTimers};
}
