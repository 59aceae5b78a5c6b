//! Locale tables for pluralized strings with a fallback language
//!
//! A [`LocaleContext`] is populated once per page load and never mutated
//! afterwards. It holds the viewer's language and the site default language,
//! each with its own plural rule and table of templates.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::I18nError;
use crate::plural::{PluralRuleId, PluralRuleTable};

/// Placeholder replaced by the count in plural templates
pub const COUNT_PLACEHOLDER: &str = "%d";

/// Fallback-aware pluralized string tables
///
/// # Example
///
/// ```
/// use reltime_i18n::{LocaleContext, PluralRuleId};
///
/// let locale = LocaleContext::builder()
///     .current_rule(PluralRuleId::RUSSIAN)
///     .current_plural("relativetime.days", ["%d день назад", "%d дня назад", "%d дней назад"])
///     .fallback_plural("relativetime.days", ["%d day ago", "%d days ago"])
///     .fallback_plural("relativetime.hours", ["%d hour ago", "%d hours ago"])
///     .build();
///
/// assert_eq!(locale.pluralize("relativetime.days", 22, false).as_deref(), Some("22 дня назад"));
/// // Missing in Russian: the English fallback is used
/// assert_eq!(locale.pluralize("relativetime.hours", 3, false).as_deref(), Some("3 hours ago"));
/// assert_eq!(locale.pluralize("relativetime.hours", 3, true), None);
/// ```
#[derive(Debug, Clone)]
pub struct LocaleContext {
	rules: PluralRuleTable,
	current_rule: PluralRuleId,
	fallback_rule: PluralRuleId,
	current_strings: HashMap<String, Vec<String>>,
	fallback_strings: HashMap<String, Vec<String>>,
	special_forms: HashMap<String, BTreeMap<u64, String>>,
	messages: HashMap<String, String>,
	strict: bool,
}

impl Default for LocaleContext {
	fn default() -> Self {
		LocaleContextBuilder::default().build()
	}
}

impl LocaleContext {
	pub fn builder() -> LocaleContextBuilder {
		LocaleContextBuilder::default()
	}

	/// Build a context from the page data payload rendered by the server
	///
	/// The payload is parsed as plain data and its rule ids are checked
	/// against the built-in table.
	///
	/// ```json
	/// {
	///   "PLURAL_RULE_LANG": 6,
	///   "PLURAL_RULE_FALLBACK": 0,
	///   "PLURALSTRINGS_LANG": { "relativetime.mins": ["...", "...", "..."] },
	///   "PLURALSTRINGS_FALLBACK": { "relativetime.mins": ["%d minute ago", "%d minutes ago"] },
	///   "DATETIMESTRINGS": { "relativetime.now": "now" },
	///   "SPECIALFORMS": { "relativetime.days": { "1": "yesterday" } }
	/// }
	/// ```
	pub fn from_page_data(json: &str) -> Result<Self, I18nError> {
		let data: PageData = serde_json::from_str(json)?;
		Self::from_parts(PluralRuleTable::builtin(), data)
	}

	/// Same as [`from_page_data`](Self::from_page_data) with a custom rule table
	pub fn from_page_data_with_rules(json: &str, rules: PluralRuleTable) -> Result<Self, I18nError> {
		let data: PageData = serde_json::from_str(json)?;
		Self::from_parts(rules, data)
	}

	fn from_parts(rules: PluralRuleTable, data: PageData) -> Result<Self, I18nError> {
		for id in [data.current_rule, data.fallback_rule] {
			if !rules.contains(id) {
				return Err(I18nError::UnknownRule(id));
			}
		}

		Ok(LocaleContextBuilder {
			rules,
			current_rule: data.current_rule,
			fallback_rule: data.fallback_rule,
			current_strings: data.current_strings,
			fallback_strings: data.fallback_strings,
			special_forms: data.special_forms,
			messages: data.messages,
			strict: cfg!(debug_assertions),
		}
		.build())
	}

	pub fn rules(&self) -> &PluralRuleTable {
		&self.rules
	}

	pub fn current_rule(&self) -> PluralRuleId {
		self.current_rule
	}

	pub fn fallback_rule(&self) -> PluralRuleId {
		self.fallback_rule
	}

	/// Whether missing fallback translations panic instead of degrading
	pub fn is_strict(&self) -> bool {
		self.strict
	}

	/// Form index for `n` in the viewer's language
	pub fn select_form(&self, n: u64) -> usize {
		self.rules.select_form(self.current_rule, n)
	}

	/// Fixed (non-plural) string, e.g. `relativetime.now`
	pub fn message(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Curated exact string for `key` at count `n`, e.g. "yesterday"
	pub fn special_form(&self, key: &str, n: u64) -> Option<&str> {
		self.special_forms
			.get(key)?
			.get(&n)
			.map(String::as_str)
			.filter(|s| !s.is_empty())
	}

	/// Localized plural string for `key` at count `n`
	///
	/// Looks in the viewer's language first. When the key or the form is
	/// missing there, returns `None` if `allow_missing` is set, otherwise the
	/// fallback language's string. A fallback miss is a configuration error:
	/// it panics in strict mode and yields the raw key otherwise.
	pub fn pluralize(&self, key: &str, n: u64, allow_missing: bool) -> Option<String> {
		match self.try_pluralize(key, n, allow_missing) {
			Ok(result) => result,
			Err(err) => {
				tracing::error!(key, count = n, error = %err, "translation missing in fallback language");
				assert!(!self.strict, "{err}");
				Some(key.to_string())
			}
		}
	}

	/// Like [`pluralize`](Self::pluralize) but reports a fallback miss as an error
	pub fn try_pluralize(
		&self,
		key: &str,
		n: u64,
		allow_missing: bool,
	) -> Result<Option<String>, I18nError> {
		if let Some(template) = lookup(&self.current_strings, key, self.select_form(n)) {
			return Ok(Some(substitute(template, n)));
		}
		if allow_missing {
			return Ok(None);
		}
		self.fallback(key, n)
			.map(Some)
			.ok_or_else(|| I18nError::MissingTranslation {
				key: key.to_string(),
				count: n,
			})
	}

	/// Fallback language string for `key` at count `n`, skipping the viewer's language
	pub fn fallback(&self, key: &str, n: u64) -> Option<String> {
		let form = self.rules.select_form(self.fallback_rule, n);
		lookup(&self.fallback_strings, key, form).map(|template| substitute(template, n))
	}

	/// Check every plural list against the form count of its rule
	///
	/// Returns all mismatches so a host can report them at once.
	pub fn validate(&self) -> Vec<I18nError> {
		let mut problems = Vec::new();
		for (rule_id, table) in [
			(self.current_rule, &self.current_strings),
			(self.fallback_rule, &self.fallback_strings),
		] {
			let Some(rule) = self.rules.get(rule_id) else {
				problems.push(I18nError::UnknownRule(rule_id));
				continue;
			};
			let mut keys: Vec<&String> = table.keys().collect();
			keys.sort();
			for key in keys {
				let found = table[key].len();
				if found != rule.form_count() {
					problems.push(I18nError::FormCountMismatch {
						key: key.clone(),
						rule: rule_id,
						expected: rule.form_count(),
						found,
					});
				}
			}
		}
		problems
	}
}

fn lookup<'a>(table: &'a HashMap<String, Vec<String>>, key: &str, form: usize) -> Option<&'a str> {
	table
		.get(key)?
		.get(form)
		.map(String::as_str)
		.filter(|s| !s.is_empty())
}

/// Replace the count placeholder in `template` with `n`
pub fn substitute(template: &str, n: u64) -> String {
	template.replace(COUNT_PLACEHOLDER, &n.to_string())
}

#[derive(Debug, Deserialize)]
struct PageData {
	#[serde(rename = "PLURAL_RULE_LANG")]
	current_rule: PluralRuleId,
	#[serde(rename = "PLURAL_RULE_FALLBACK")]
	fallback_rule: PluralRuleId,
	#[serde(rename = "PLURALSTRINGS_LANG", default)]
	current_strings: HashMap<String, Vec<String>>,
	#[serde(rename = "PLURALSTRINGS_FALLBACK", default)]
	fallback_strings: HashMap<String, Vec<String>>,
	#[serde(rename = "DATETIMESTRINGS", default)]
	messages: HashMap<String, String>,
	#[serde(rename = "SPECIALFORMS", default)]
	special_forms: HashMap<String, BTreeMap<u64, String>>,
}

/// Builder for [`LocaleContext`]
#[derive(Debug, Clone)]
pub struct LocaleContextBuilder {
	rules: PluralRuleTable,
	current_rule: PluralRuleId,
	fallback_rule: PluralRuleId,
	current_strings: HashMap<String, Vec<String>>,
	fallback_strings: HashMap<String, Vec<String>>,
	special_forms: HashMap<String, BTreeMap<u64, String>>,
	messages: HashMap<String, String>,
	strict: bool,
}

impl Default for LocaleContextBuilder {
	fn default() -> Self {
		Self {
			rules: PluralRuleTable::builtin(),
			current_rule: PluralRuleId::DEFAULT,
			fallback_rule: PluralRuleId::DEFAULT,
			current_strings: HashMap::new(),
			fallback_strings: HashMap::new(),
			special_forms: HashMap::new(),
			messages: HashMap::new(),
			strict: cfg!(debug_assertions),
		}
	}
}

impl LocaleContextBuilder {
	pub fn rules(mut self, rules: PluralRuleTable) -> Self {
		self.rules = rules;
		self
	}

	pub fn current_rule(mut self, rule: PluralRuleId) -> Self {
		self.current_rule = rule;
		self
	}

	pub fn fallback_rule(mut self, rule: PluralRuleId) -> Self {
		self.fallback_rule = rule;
		self
	}

	pub fn current_plural<I, S>(mut self, key: impl Into<String>, forms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.current_strings
			.insert(key.into(), forms.into_iter().map(Into::into).collect());
		self
	}

	pub fn fallback_plural<I, S>(mut self, key: impl Into<String>, forms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fallback_strings
			.insert(key.into(), forms.into_iter().map(Into::into).collect());
		self
	}

	/// Curated exact string for `key` at count `n`
	pub fn special_form(
		mut self,
		key: impl Into<String>,
		n: u64,
		text: impl Into<String>,
	) -> Self {
		self.special_forms
			.entry(key.into())
			.or_default()
			.insert(n, text.into());
		self
	}

	pub fn message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
		self.messages.insert(key.into(), text.into());
		self
	}

	/// Panic on fallback misses (defaults to `cfg!(debug_assertions)`)
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	pub fn build(self) -> LocaleContext {
		LocaleContext {
			rules: self.rules,
			current_rule: self.current_rule,
			fallback_rule: self.fallback_rule,
			current_strings: self.current_strings,
			fallback_strings: self.fallback_strings,
			special_forms: self.special_forms,
			messages: self.messages,
			strict: self.strict,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn polish_over_english() -> LocaleContext {
		LocaleContext::builder()
			.current_rule(PluralRuleId::POLISH)
			.fallback_rule(PluralRuleId::DEFAULT)
			.current_plural(
				"relativetime.mins",
				["%d minutę temu", "%d minuty temu", "%d minut temu"],
			)
			.fallback_plural("relativetime.mins", ["%d minute ago", "%d minutes ago"])
			.fallback_plural("relativetime.hours", ["%d hour ago", "%d hours ago"])
			.strict(false)
			.build()
	}

	#[rstest]
	#[case(1, "1 minutę temu")]
	#[case(3, "3 minuty temu")]
	#[case(5, "5 minut temu")]
	#[case(22, "22 minuty temu")]
	#[case(112, "112 minut temu")]
	fn test_pluralize_current_language(
		polish_over_english: LocaleContext,
		#[case] n: u64,
		#[case] expected: &str,
	) {
		// Act
		let result = polish_over_english.pluralize("relativetime.mins", n, false);

		// Assert
		assert_eq!(result.as_deref(), Some(expected));
	}

	#[rstest]
	fn test_pluralize_uses_fallback_rule_for_fallback_table(polish_over_english: LocaleContext) {
		// Act: Polish would pick form 2 for 5, English must pick form 1
		let result = polish_over_english.pluralize("relativetime.hours", 5, false);

		// Assert
		assert_eq!(result.as_deref(), Some("5 hours ago"));
	}

	#[rstest]
	fn test_pluralize_allow_missing_returns_none(polish_over_english: LocaleContext) {
		// Act
		let result = polish_over_english.pluralize("relativetime.hours", 5, true);

		// Assert
		assert_eq!(result, None);
	}

	#[rstest]
	fn test_empty_template_counts_as_missing() {
		// Arrange: untranslated entries are shipped as empty strings
		let locale = LocaleContext::builder()
			.current_plural("relativetime.days", ["", ""])
			.fallback_plural("relativetime.days", ["%d day ago", "%d days ago"])
			.build();

		// Act
		let result = locale.pluralize("relativetime.days", 4, false);

		// Assert
		assert_eq!(result.as_deref(), Some("4 days ago"));
	}

	#[rstest]
	fn test_fallback_miss_degrades_to_key_when_not_strict(polish_over_english: LocaleContext) {
		// Act
		let result = polish_over_english.pluralize("relativetime.years", 2, false);
		let reported = polish_over_english.try_pluralize("relativetime.years", 2, false);

		// Assert
		assert_eq!(result.as_deref(), Some("relativetime.years"));
		assert!(matches!(
			reported,
			Err(I18nError::MissingTranslation { ref key, count: 2 }) if key == "relativetime.years"
		));
	}

	#[rstest]
	#[should_panic(expected = "relativetime.years")]
	fn test_fallback_miss_panics_when_strict() {
		// Arrange
		let locale = LocaleContext::builder().strict(true).build();

		// Act
		let _ = locale.pluralize("relativetime.years", 2, false);
	}

	#[rstest]
	fn test_special_form_lookup() {
		// Arrange
		let locale = LocaleContext::builder()
			.special_form("relativetime.days", 1, "yesterday")
			.special_form("relativetime.days", 2, "two days ago")
			.special_form("relativetime.weeks", 1, "")
			.build();

		// Act & Assert
		assert_eq!(locale.special_form("relativetime.days", 1), Some("yesterday"));
		assert_eq!(locale.special_form("relativetime.days", 2), Some("two days ago"));
		assert_eq!(locale.special_form("relativetime.days", 3), None);
		assert_eq!(locale.special_form("relativetime.weeks", 1), None);
	}

	#[rstest]
	fn test_from_page_data() {
		// Arrange
		let json = r#"{
			"PLURAL_RULE_LANG": 13,
			"PLURAL_RULE_FALLBACK": 0,
			"PLURALSTRINGS_LANG": {
				"relativetime.days": ["0 %d", "1 %d", "2 %d", "few %d", "many %d", "other %d"]
			},
			"PLURALSTRINGS_FALLBACK": {
				"relativetime.days": ["%d day ago", "%d days ago"]
			},
			"DATETIMESTRINGS": { "relativetime.now": "الآن" },
			"SPECIALFORMS": { "relativetime.days": { "1": "أمس" } }
		}"#;

		// Act
		let locale = LocaleContext::from_page_data(json).unwrap();

		// Assert
		assert_eq!(locale.current_rule(), PluralRuleId::ARABIC);
		assert_eq!(locale.pluralize("relativetime.days", 11, false).as_deref(), Some("many 11"));
		assert_eq!(locale.pluralize("relativetime.days", 104, false).as_deref(), Some("few 104"));
		assert_eq!(locale.message("relativetime.now"), Some("الآن"));
		assert_eq!(locale.special_form("relativetime.days", 1), Some("أمس"));
		assert!(locale.validate().is_empty());
	}

	#[rstest]
	fn test_from_page_data_rejects_unknown_rule() {
		// Arrange
		let json = r#"{ "PLURAL_RULE_LANG": 42, "PLURAL_RULE_FALLBACK": 0 }"#;

		// Act
		let result = LocaleContext::from_page_data(json);

		// Assert
		assert!(matches!(result, Err(I18nError::UnknownRule(PluralRuleId(42)))));
	}

	#[rstest]
	fn test_from_page_data_rejects_malformed_json() {
		// Act
		let result = LocaleContext::from_page_data("window.config = {}");

		// Assert
		assert!(matches!(result, Err(I18nError::InvalidPageData(_))));
	}

	#[rstest]
	fn test_validate_reports_form_count_mismatch(polish_over_english: LocaleContext) {
		// Arrange
		let locale = LocaleContext::builder()
			.current_rule(PluralRuleId::RUSSIAN)
			.current_plural("relativetime.mins", ["%d минуту назад", "%d минуты назад"])
			.build();

		// Act
		let problems = locale.validate();

		// Assert
		assert!(polish_over_english.validate().is_empty());
		assert_eq!(problems.len(), 1);
		assert!(matches!(
			&problems[0],
			I18nError::FormCountMismatch { expected: 3, found: 2, .. }
		));
	}
}
