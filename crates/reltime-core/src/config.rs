//! Formatter configuration

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dateformat::DEFAULT_TOOLTIP_FORMAT;
use crate::error::ConfigError;

/// Settings shared by every displayed timestamp on a page
///
/// # Example
///
/// ```
/// use reltime_core::RelativeTimeConfig;
///
/// let config = RelativeTimeConfig::from_json(r#"{ "time_zone": "Europe/Berlin" }"#).unwrap();
/// assert_eq!(config.time_zone, "Europe/Berlin");
/// assert_eq!(config.tooltip_format, "M j, Y, H:i T");
/// assert_eq!(config.tz().unwrap(), chrono_tz::Europe::Berlin);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeTimeConfig {
	/// IANA zone whose calendar decides day, month and year boundaries
	pub time_zone: String,

	/// Pattern for the absolute time tooltip (see [`dateformat`](crate::dateformat))
	pub tooltip_format: String,
}

impl Default for RelativeTimeConfig {
	fn default() -> Self {
		Self {
			time_zone: "UTC".to_string(),
			tooltip_format: DEFAULT_TOOLTIP_FORMAT.to_string(),
		}
	}
}

impl RelativeTimeConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
		self.time_zone = time_zone.into();
		self
	}

	pub fn with_tooltip_format(mut self, pattern: impl Into<String>) -> Self {
		self.tooltip_format = pattern.into();
		self
	}

	/// Resolve the configured zone name
	pub fn tz(&self) -> Result<Tz, ConfigError> {
		self.time_zone
			.parse::<Tz>()
			.map_err(|_| ConfigError::UnknownTimeZone(self.time_zone.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config() {
		// Act
		let config = RelativeTimeConfig::default();

		// Assert
		assert_eq!(config.tz().unwrap(), Tz::UTC);
		assert_eq!(config.tooltip_format, DEFAULT_TOOLTIP_FORMAT);
	}

	#[rstest]
	fn test_unknown_time_zone() {
		// Arrange
		let config = RelativeTimeConfig::default().with_time_zone("Mars/Olympus_Mons");

		// Act
		let result = config.tz();

		// Assert
		assert!(matches!(result, Err(ConfigError::UnknownTimeZone(ref name)) if name == "Mars/Olympus_Mons"));
	}

	#[rstest]
	fn test_from_json_rejects_wrong_types() {
		// Act
		let result = RelativeTimeConfig::from_json(r#"{ "time_zone": 3 }"#);

		// Assert
		assert!(matches!(result, Err(ConfigError::Invalid(_))));
	}
}
