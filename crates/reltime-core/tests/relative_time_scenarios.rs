//! End-to-end scenarios: raw timestamp in, rendered label and delay out
//!
//! `now` sits one hour after the CET switchover of 2024-10-27, so several
//! inputs straddle a DST transition or use unusual offsets.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reltime_core::{
	FUTURE_KEY, HALF_MINUTE, NOW_KEY, ONE_DAY, ONE_HOUR, ONE_MINUTE, RelativeTimeConfig,
	RelativeTimeFormatter, TimeBucket, parse_timestamp,
};
use reltime_i18n::LocaleContext;
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
	parse_timestamp("2024-10-27T04:05:30+01:00")
		.unwrap()
		.with_timezone(&Utc)
}

#[fixture]
fn english() -> Arc<LocaleContext> {
	let locale = LocaleContext::builder()
		.strict(true)
		.message(FUTURE_KEY, "future")
		.message(NOW_KEY, "now")
		.current_plural("relativetime.mins", ["%d minute ago", "%d minutes ago"])
		.current_plural("relativetime.hours", ["%d hour ago", "%d hours ago"])
		.current_plural("relativetime.days", ["%d day ago", "%d days ago"])
		.current_plural("relativetime.weeks", ["%d week ago", "%d weeks ago"])
		.current_plural("relativetime.months", ["%d month ago", "%d months ago"])
		.current_plural("relativetime.years", ["%d year ago", "%d years ago"])
		.special_form("relativetime.days", 1, "yesterday")
		.special_form("relativetime.days", 2, "two days ago")
		.special_form("relativetime.weeks", 1, "last week")
		.special_form("relativetime.weeks", 2, "two weeks ago")
		.special_form("relativetime.months", 1, "last month")
		.special_form("relativetime.months", 2, "two months ago")
		.special_form("relativetime.years", 1, "last year")
		.special_form("relativetime.years", 2, "two years ago")
		.build();
	Arc::new(locale)
}

#[rstest]
#[case("2024-10-27T04:05:40+01:00", "future", ONE_MINUTE)]
#[case("2024-10-27T04:05:10+01:00", "now", HALF_MINUTE)]
#[case("2024-10-27T04:04:30+01:00", "1 minute ago", ONE_MINUTE)]
#[case("2024-10-27T04:04:00+01:00", "1 minute ago", ONE_MINUTE)]
#[case("2024-10-27T04:03:20+01:00", "2 minutes ago", ONE_MINUTE)]
#[case("2024-10-27T04:00:00+01:00", "5 minutes ago", ONE_MINUTE)]
#[case("2024-10-27T03:59:30+01:00", "6 minutes ago", ONE_MINUTE)]
#[case("2024-10-27T03:01:00+01:00", "1 hour ago", ONE_HOUR)]
#[case("2024-10-27T01:00:00+02:00", "4 hours ago", ONE_HOUR)]
#[case("2024-10-27T00:01:00+02:00", "5 hours ago", ONE_HOUR)]
#[case("2024-10-26T22:00:00+02:00", "7 hours ago", ONE_HOUR)]
#[case("2024-10-26T05:08:00+02:00", "23 hours ago", ONE_HOUR)]
#[case("2024-10-26T04:00:00+02:00", "yesterday", ONE_DAY)]
#[case("2024-10-25T01:00:00+02:00", "two days ago", ONE_DAY)]
#[case("2024-10-21T01:00:00+02:00", "6 days ago", ONE_DAY)]
#[case("2024-10-20T01:00:00+02:00", "last week", ONE_DAY)]
#[case("2024-10-14T01:00:00+02:00", "last week", ONE_DAY)]
#[case("2024-10-13T01:00:00+02:00", "two weeks ago", ONE_DAY)]
#[case("2024-10-06T01:00:00+02:00", "3 weeks ago", ONE_DAY)]
#[case("2024-09-25T01:00:00+02:00", "last month", ONE_DAY)]
#[case("2024-08-30T01:00:00+02:00", "last month", ONE_DAY)]
#[case("2024-07-30T01:00:00+02:00", "two months ago", ONE_DAY)]
#[case("2024-05-30T01:00:00+02:00", "4 months ago", ONE_DAY)]
#[case("2024-03-01T01:00:00+01:00", "7 months ago", ONE_DAY)]
#[case("2024-02-29T01:00:00+01:00", "7 months ago", ONE_DAY)]
#[case("2024-02-27T01:00:00-03:00", "7 months ago", ONE_DAY)]
#[case("2023-11-15T01:00:00+03:00", "11 months ago", ONE_DAY)]
#[case("2023-10-20T01:00:00+08:00", "last year", ONE_DAY)]
#[case("2022-10-30T01:00:00-05:30", "last year", ONE_DAY)]
#[case("2022-10-20T01:00:00+10:00", "two years ago", ONE_DAY)]
#[case("2021-10-20T01:00:00+02:00", "3 years ago", ONE_DAY)]
#[case("2014-10-20T01:00:00+02:00", "10 years ago", ONE_DAY)]
fn test_labels_across_all_buckets(
	now: DateTime<Utc>,
	english: Arc<LocaleContext>,
	#[case] then: &str,
	#[case] expected_text: &str,
	#[case] expected_delay: Duration,
) {
	// Arrange
	let formatter = RelativeTimeFormatter::with_locale(english);

	// Act
	let rendered = formatter.format(Some(then), now).unwrap();

	// Assert
	assert_eq!(rendered.text, expected_text, "{}", then);
	assert_eq!(rendered.next_refresh, expected_delay, "{}", then);
}

#[rstest]
#[case("2024-10-27T01:01:00-05:00", "future")]
#[case("2024-10-27T05:05:25+02:00", "now")]
#[case("2024-10-27T05:04:00+02:00", "1 minute ago")]
#[case("2024-10-27T05:02:00+02:00", "3 minutes ago")]
#[case("2024-10-27T04:06:00+02:00", "59 minutes ago")]
#[case("2024-10-27T04:05:00+02:00", "1 hour ago")]
#[case("2024-10-27T01:00:00+02:00", "4 hours ago")]
#[case("2024-10-27T01:00:00+04:00", "6 hours ago")]
#[case("2024-10-27T01:00:00+10:00", "12 hours ago")]
#[case("2024-10-27T01:00:00Z", "2 hours ago")]
#[case("2024-10-26T15:00:00-01:00", "11 hours ago")]
#[case("2024-10-25T19:00:00-11:00", "21 hours ago")]
fn test_offsets_compare_absolute_instants(
	now: DateTime<Utc>,
	english: Arc<LocaleContext>,
	#[case] then: &str,
	#[case] expected_text: &str,
) {
	// Arrange
	let formatter = RelativeTimeFormatter::with_locale(english);

	// Act
	let rendered = formatter.format(Some(then), now).unwrap();

	// Assert
	assert_eq!(rendered.text, expected_text, "{}", then);
}

#[rstest]
fn test_long_berlin_day_delays_yesterday(now: DateTime<Utc>, english: Arc<LocaleContext>) {
	// Arrange: 24h35m elapsed, but the Berlin day of 2024-10-27 has 25 hours
	let then = "2024-10-26T04:30:00+02:00";
	let utc = RelativeTimeFormatter::with_locale(english.clone());
	let config = RelativeTimeConfig::default().with_time_zone("Europe/Berlin");
	let berlin = RelativeTimeFormatter::new(english, &config).unwrap();

	// Act
	let in_utc = utc.format(Some(then), now).unwrap();
	let in_berlin = berlin.format(Some(then), now).unwrap();

	// Assert
	assert_eq!(in_utc.bucket, TimeBucket::Days(1));
	assert_eq!(in_utc.text, "yesterday");
	assert_eq!(in_berlin.bucket, TimeBucket::Hours(24));
	assert_eq!(in_berlin.text, "24 hours ago");
	assert_eq!(in_berlin.tooltip, "Oct 26, 2024, 04:30 CEST");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("2024-13-01T00:00:00Z"))]
#[case(Some("1729998330"))]
fn test_invalid_timestamp_renders_nothing(
	now: DateTime<Utc>,
	english: Arc<LocaleContext>,
	#[case] raw: Option<&str>,
) {
	// Arrange
	let formatter = RelativeTimeFormatter::with_locale(english);

	// Act
	let rendered = formatter.format(raw, now);

	// Assert
	assert_eq!(rendered, None);
}

#[rstest]
fn test_page_data_locale_end_to_end(now: DateTime<Utc>) {
	// Arrange: Polish viewer, English site default
	let page_data = r#"{
		"PLURAL_RULE_LANG": 7,
		"PLURAL_RULE_FALLBACK": 0,
		"PLURALSTRINGS_LANG": {
			"relativetime.mins": ["%d minutę temu", "%d minuty temu", "%d minut temu"]
		},
		"PLURALSTRINGS_FALLBACK": {
			"relativetime.mins": ["%d minute ago", "%d minutes ago"],
			"relativetime.hours": ["%d hour ago", "%d hours ago"]
		},
		"DATETIMESTRINGS": { "relativetime.now": "teraz" }
	}"#;
	let locale = Arc::new(LocaleContext::from_page_data(page_data).unwrap());
	let formatter = RelativeTimeFormatter::with_locale(locale);

	// Act
	let now_label = formatter.format(Some("2024-10-27T03:05:30Z"), now).unwrap();
	let minutes = formatter.format(Some("2024-10-27T03:03:00Z"), now).unwrap();
	let many_minutes = formatter.format(Some("2024-10-27T02:43:00Z"), now).unwrap();
	let hours = formatter.format(Some("2024-10-27T00:00:00Z"), now).unwrap();

	// Assert
	assert_eq!(now_label.text, "teraz");
	assert_eq!(minutes.text, "2 minuty temu");
	assert_eq!(many_minutes.text, "22 minuty temu");
	assert_eq!(hours.text, "3 hours ago");
}
