//! # reltime-core
//!
//! Calendar-aware relative time classification and localized rendering.
//!
//! ## Overview
//!
//! - [`classify`] - turn a past (or future) instant into a [`TimeBucket`]
//!   plus the delay after which the label goes stale
//! - [`render`] - localized text for a bucket, via [`reltime_i18n::LocaleContext`]
//! - [`RelativeTimeFormatter`] - parse, classify, render and build the
//!   absolute tooltip in one call
//!
//! Years, months, weeks and days are counted on the calendar of a
//! configurable time zone; hours and minutes use exact elapsed time.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use reltime_core::{classify, parse_timestamp, render, TimeBucket};
//! use reltime_i18n::LocaleContext;
//!
//! let locale = LocaleContext::builder()
//!     .fallback_plural("relativetime.months", ["%d month ago", "%d months ago"])
//!     .build();
//!
//! let now = parse_timestamp("2024-10-27T04:05:30+01:00").unwrap();
//! let then = parse_timestamp("2024-07-29T23:00:00Z").unwrap();
//! let classification = classify(then, now, &Utc);
//!
//! assert_eq!(classification.bucket, TimeBucket::Months(2));
//! assert_eq!(render(classification.bucket, &locale), "2 months ago");
//! ```

pub mod bucket;
pub mod calendar;
pub mod classify;
pub mod config;
pub mod dateformat;
pub mod error;
pub mod formatter;
pub mod render;

pub use bucket::{
	Classification, FUTURE_KEY, HALF_MINUTE, NOW_KEY, ONE_DAY, ONE_HOUR, ONE_MINUTE, TimeBucket,
	TimeUnit,
};
pub use classify::{classify, classify_timestamp, parse_timestamp};
pub use config::RelativeTimeConfig;
pub use dateformat::format_absolute;
pub use error::{ConfigError, ParseError};
pub use formatter::{RelativeTimeFormatter, Rendered};
pub use render::{generic, render};
