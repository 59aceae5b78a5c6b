//! Error types for timestamp parsing and configuration

/// Errors that can occur while parsing a timestamp attribute
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	#[error("Timestamp is empty")]
	Empty,
	#[error("Invalid timestamp '{input}': {source}")]
	Invalid {
		input: String,
		#[source]
		source: chrono::ParseError,
	},
}

/// Errors in [`RelativeTimeConfig`](crate::RelativeTimeConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Unknown time zone: {0}")]
	UnknownTimeZone(String),
	#[error("Invalid configuration: {0}")]
	Invalid(#[from] serde_json::Error),
}
