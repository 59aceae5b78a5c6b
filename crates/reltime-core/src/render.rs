//! Localized text for a time bucket
//!
//! Lookup order for counted buckets:
//!
//! 1. curated special form for the exact count ("yesterday", "two days ago")
//! 2. plural template of the viewer's language
//! 3. plural template of the fallback language
//! 4. built-in English wording, so the label is never blank

use reltime_i18n::LocaleContext;

use crate::bucket::{FUTURE_KEY, NOW_KEY, TimeBucket, TimeUnit};

const DEFAULT_FUTURE: &str = "in the future";
const DEFAULT_NOW: &str = "now";

/// Render `bucket` with the strings of `locale`
///
/// # Examples
///
/// ```
/// use reltime_core::{render, TimeBucket};
/// use reltime_i18n::LocaleContext;
///
/// let locale = LocaleContext::builder()
///     .current_plural("relativetime.days", ["%d day ago", "%d days ago"])
///     .special_form("relativetime.days", 1, "yesterday")
///     .build();
///
/// assert_eq!(render(TimeBucket::Days(1), &locale), "yesterday");
/// assert_eq!(render(TimeBucket::Days(3), &locale), "3 days ago");
/// assert_eq!(render(TimeBucket::Years(3), &locale), "3 years ago");
/// assert_eq!(render(TimeBucket::Now, &locale), "now");
/// ```
pub fn render(bucket: TimeBucket, locale: &LocaleContext) -> String {
	let Some((unit, n)) = bucket.unit_count() else {
		let (key, default) = if bucket == TimeBucket::Future {
			(FUTURE_KEY, DEFAULT_FUTURE)
		} else {
			(NOW_KEY, DEFAULT_NOW)
		};
		return locale
			.message(key)
			.filter(|s| !s.is_empty())
			.unwrap_or(default)
			.to_string();
	};

	let key = unit.key();
	if let Some(special) = locale.special_form(key, n) {
		return special.to_string();
	}
	locale
		.pluralize(key, n, true)
		.or_else(|| locale.fallback(key, n))
		.unwrap_or_else(|| {
			tracing::debug!(key, count = n, "no translation, using built-in wording");
			generic(unit, n)
		})
}

/// Built-in English wording, e.g. "3 years ago"
pub fn generic(unit: TimeUnit, n: u64) -> String {
	if n == 1 {
		format!("1 {} ago", unit.name())
	} else {
		format!("{} {}s ago", n, unit.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reltime_i18n::PluralRuleId;
	use rstest::{fixture, rstest};

	#[fixture]
	fn english() -> LocaleContext {
		LocaleContext::builder()
			.message(FUTURE_KEY, "future")
			.message(NOW_KEY, "just now")
			.current_plural("relativetime.mins", ["%d minute ago", "%d minutes ago"])
			.current_plural("relativetime.days", ["%d day ago", "%d days ago"])
			.special_form("relativetime.days", 1, "yesterday")
			.special_form("relativetime.days", 2, "two days ago")
			.special_form("relativetime.weeks", 1, "last week")
			.build()
	}

	#[rstest]
	#[case(TimeBucket::Future, "future")]
	#[case(TimeBucket::Now, "just now")]
	#[case(TimeBucket::Minutes(1), "1 minute ago")]
	#[case(TimeBucket::Minutes(59), "59 minutes ago")]
	#[case(TimeBucket::Days(1), "yesterday")]
	#[case(TimeBucket::Days(2), "two days ago")]
	#[case(TimeBucket::Days(3), "3 days ago")]
	#[case(TimeBucket::Weeks(1), "last week")]
	#[case(TimeBucket::Weeks(2), "2 weeks ago")]
	#[case(TimeBucket::Hours(1), "1 hour ago")]
	fn test_render_english(english: LocaleContext, #[case] bucket: TimeBucket, #[case] expected: &str) {
		// Act
		let result = render(bucket, &english);

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	fn test_special_form_wins_over_plural_template(english: LocaleContext) {
		// Arrange: both a template and a special form exist for days=1
		assert_eq!(english.pluralize("relativetime.days", 1, true).as_deref(), Some("1 day ago"));

		// Act
		let result = render(TimeBucket::Days(1), &english);

		// Assert
		assert_eq!(result, "yesterday");
	}

	#[rstest]
	fn test_missing_current_uses_fallback_language() {
		// Arrange
		let locale = LocaleContext::builder()
			.current_rule(PluralRuleId::RUSSIAN)
			.current_plural("relativetime.hours", ["%d час назад", "%d часа назад", "%d часов назад"])
			.fallback_plural("relativetime.months", ["%d month ago", "%d months ago"])
			.build();

		// Act
		let hours = render(TimeBucket::Hours(21), &locale);
		let months = render(TimeBucket::Months(5), &locale);

		// Assert
		assert_eq!(hours, "21 час назад");
		assert_eq!(months, "5 months ago");
	}

	#[rstest]
	fn test_defaults_without_any_strings() {
		// Arrange: strict mode must not trip, rendering never forces the fallback
		let locale = LocaleContext::builder().strict(true).build();

		// Act & Assert
		assert_eq!(render(TimeBucket::Future, &locale), "in the future");
		assert_eq!(render(TimeBucket::Now, &locale), "now");
		assert_eq!(render(TimeBucket::Years(1), &locale), "1 year ago");
		assert_eq!(render(TimeBucket::Months(8), &locale), "8 months ago");
	}
}
