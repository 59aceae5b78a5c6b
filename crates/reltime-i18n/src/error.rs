//! Error types for locale tables

use crate::plural::PluralRuleId;

/// Errors that can occur while loading or querying locale tables
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("Unknown plural rule: {0}")]
	UnknownRule(PluralRuleId),
	#[error("Missing translation for '{key}' (count {count}) in fallback language")]
	MissingTranslation { key: String, count: u64 },
	#[error("Plural list '{key}' has {found} forms, rule {rule} expects {expected}")]
	FormCountMismatch {
		key: String,
		rule: PluralRuleId,
		expected: usize,
		found: usize,
	},
	#[error("Invalid page data: {0}")]
	InvalidPageData(#[from] serde_json::Error),
}
