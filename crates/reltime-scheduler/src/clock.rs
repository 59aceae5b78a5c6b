//! Wall clock abstraction

use chrono::{DateTime, Utc};

/// Source of the current instant
pub trait Clock {
	fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_system_clock_moves_forward() {
		// Arrange
		let clock = SystemClock;

		// Act
		let first = clock.now();
		let second = clock.now();

		// Assert
		assert!(second >= first);
	}
}
