//! Property-based tests for relative time classification
//!
//! Uses proptest to verify:
//! 1. For a fixed instant, buckets only move forward as time passes
//! 2. The refresh delay is always positive
//! 3. Only instants after `now` are classified as future
//! 4. Rendering never yields an empty label or a raw placeholder

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use proptest::prelude::*;
use reltime_core::{TimeBucket, classify, render};
use reltime_i18n::LocaleContext;

// 2000-01-01 .. 2040-01-01
const MIN_SECS: i64 = 946_684_800;
const MAX_SECS: i64 = 2_208_988_800;
const TEN_YEARS: i64 = 10 * 366 * 24 * 3600;

fn instant(secs: i64) -> DateTime<Utc> {
	Utc.timestamp_opt(secs, 0).unwrap()
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(500))]

	/// Property: a later `now` never yields a nearer bucket
	#[test]
	fn test_classify_is_monotonic(
		then in MIN_SECS..MAX_SECS,
		first in 0i64..TEN_YEARS,
		extra in 0i64..TEN_YEARS,
	) {
		let then = instant(then);
		let earlier = then + chrono::TimeDelta::seconds(first);
		let later = earlier + chrono::TimeDelta::seconds(extra);

		let a = classify(then, earlier, &Utc).bucket;
		let b = classify(then, later, &Utc).bucket;
		prop_assert!(a <= b, "{} then {} for {}", a, b, then);

		let a = classify(then, earlier, &Berlin).bucket;
		let b = classify(then, later, &Berlin).bucket;
		prop_assert!(a <= b, "{} then {} for {} in Berlin", a, b, then);
	}

	/// Property: every classification asks for a positive refresh delay
	#[test]
	fn test_refresh_delay_is_positive(then in MIN_SECS..MAX_SECS, now in MIN_SECS..MAX_SECS) {
		let result = classify(instant(then), instant(now), &Utc);

		prop_assert!(!result.next_refresh.is_zero());
	}

	/// Property: future exactly when `then` is after `now`
	#[test]
	fn test_future_iff_then_after_now(then in MIN_SECS..MAX_SECS, now in MIN_SECS..MAX_SECS) {
		let result = classify(instant(then), instant(now), &Utc);

		prop_assert_eq!(result.bucket == TimeBucket::Future, then > now);
	}

	/// Property: the built-in wording covers every bucket
	#[test]
	fn test_render_never_blank(then in MIN_SECS..MAX_SECS, now in MIN_SECS..MAX_SECS) {
		let locale = LocaleContext::builder().strict(true).build();
		let bucket = classify(instant(then), instant(now), &Utc).bucket;

		let text = render(bucket, &locale);

		prop_assert!(!text.is_empty());
		prop_assert!(!text.contains("%d"));
	}
}
