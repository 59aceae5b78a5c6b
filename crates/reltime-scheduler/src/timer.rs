//! Single-shot timers
//!
//! [`TimerDriver`] is the seam to the host's timer primitive. [`ManualTimers`]
//! is a virtual-time implementation for hosts that run their own loop and
//! for deterministic tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::Clock;

/// Callback run once when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + 'static>;

/// Handle of an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "timer#{}", self.0)
	}
}

/// Host timer primitive
pub trait TimerDriver {
	/// Run `callback` once after `delay`
	fn arm(&self, delay: Duration, callback: TimerCallback) -> TimerId;

	/// Cancel a pending timer; unknown or already fired ids are ignored
	fn cancel(&self, id: TimerId);
}

struct PendingTimer {
	due: DateTime<Utc>,
	callback: TimerCallback,
}

struct ManualState {
	now: DateTime<Utc>,
	next_id: u64,
	pending: BTreeMap<TimerId, PendingTimer>,
}

/// Virtual-time timer driver and clock
///
/// Time only moves when [`advance`](Self::advance) is called. Timers due in
/// the advanced window fire in due order, and the clock reads each timer's
/// due instant while its callback runs.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use chrono::{TimeZone, Utc};
/// use reltime_scheduler::{Clock, ManualTimers, TimerDriver};
///
/// let timers = ManualTimers::new(Utc.with_ymd_and_hms(2024, 10, 27, 3, 0, 0).unwrap());
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// timers.arm(Duration::from_secs(30), Box::new(move || flag.set(true)));
///
/// timers.advance(Duration::from_secs(29));
/// assert!(!fired.get());
/// timers.advance(Duration::from_secs(1));
/// assert!(fired.get());
/// assert_eq!(timers.now(), Utc.with_ymd_and_hms(2024, 10, 27, 3, 0, 30).unwrap());
/// ```
pub struct ManualTimers {
	state: RefCell<ManualState>,
}

impl ManualTimers {
	pub fn new(start: DateTime<Utc>) -> Self {
		Self {
			state: RefCell::new(ManualState {
				now: start,
				next_id: 0,
				pending: BTreeMap::new(),
			}),
		}
	}

	/// Number of armed timers that have not fired or been cancelled
	pub fn pending(&self) -> usize {
		self.state.borrow().pending.len()
	}

	/// Instant at which the next timer fires
	pub fn next_due(&self) -> Option<DateTime<Utc>> {
		self.state.borrow().pending.values().map(|timer| timer.due).min()
	}

	/// Move the clock forward, firing every timer that falls due
	///
	/// Timers armed by callbacks fire too if they fall inside the window.
	/// Returns the number of callbacks run.
	pub fn advance(&self, by: Duration) -> usize {
		let target = {
			let state = self.state.borrow();
			add(state.now, by)
		};

		let mut fired = 0;
		while let Some(callback) = self.pop_due(target) {
			callback();
			fired += 1;
		}
		self.state.borrow_mut().now = target;
		fired
	}

	/// Advance straight to the next due timer and fire it
	pub fn fire_next(&self) -> bool {
		match self.next_due() {
			Some(due) => {
				let by = (due - self.now()).to_std().unwrap_or(Duration::ZERO);
				self.advance(by) > 0
			}
			None => false,
		}
	}

	fn pop_due(&self, until: DateTime<Utc>) -> Option<TimerCallback> {
		let mut state = self.state.borrow_mut();
		let (id, due) = state
			.pending
			.iter()
			.filter(|(_, timer)| timer.due <= until)
			.map(|(id, timer)| (*id, timer.due))
			.min_by_key(|(id, due)| (*due, *id))?;
		state.now = due;
		let timer = state.pending.remove(&id)?;
		tracing::trace!(%id, %due, "manual timer fired");
		Some(timer.callback)
	}
}

impl fmt::Debug for ManualTimers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("ManualTimers")
			.field("now", &state.now)
			.field("pending", &state.pending.len())
			.finish()
	}
}

impl TimerDriver for ManualTimers {
	fn arm(&self, delay: Duration, callback: TimerCallback) -> TimerId {
		let mut state = self.state.borrow_mut();
		let id = TimerId(state.next_id);
		state.next_id += 1;
		let due = add(state.now, delay);
		state.pending.insert(id, PendingTimer { due, callback });
		id
	}

	fn cancel(&self, id: TimerId) {
		self.state.borrow_mut().pending.remove(&id);
	}
}

impl Clock for ManualTimers {
	fn now(&self) -> DateTime<Utc> {
		self.state.borrow().now
	}
}

fn add(now: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
	TimeDelta::from_std(delay)
		.ok()
		.and_then(|delta| now.checked_add_signed(delta))
		.unwrap_or(DateTime::<Utc>::MAX_UTC)
}
