//! Tokio timer driver
//!
//! Timers are `!Send` local tasks, so [`TokioTimers`] must be used from inside
//! a [`tokio::task::LocalSet`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::clock::Clock;
use crate::timer::{TimerCallback, TimerDriver, TimerId};

/// Timer driver backed by `tokio::time::sleep` on the current `LocalSet`
///
/// Cancelling aborts the sleeping task. Dropping the driver aborts every
/// pending timer.
#[derive(Debug, Default)]
pub struct TokioTimers {
	next_id: Cell<u64>,
	tasks: Rc<RefCell<HashMap<TimerId, JoinHandle<()>>>>,
}

impl TokioTimers {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of timers still sleeping
	pub fn pending(&self) -> usize {
		self.tasks.borrow().len()
	}
}

impl TimerDriver for TokioTimers {
	/// # Panics
	///
	/// Panics when called outside a `LocalSet`.
	fn arm(&self, delay: Duration, callback: TimerCallback) -> TimerId {
		let id = TimerId(self.next_id.get());
		self.next_id.set(id.0 + 1);

		let tasks = Rc::downgrade(&self.tasks);
		let handle = tokio::task::spawn_local(async move {
			tokio::time::sleep(delay).await;
			if let Some(tasks) = tasks.upgrade() {
				tasks.borrow_mut().remove(&id);
			}
			callback();
		});
		self.tasks.borrow_mut().insert(id, handle);
		id
	}

	fn cancel(&self, id: TimerId) {
		if let Some(handle) = self.tasks.borrow_mut().remove(&id) {
			handle.abort();
		}
	}
}

impl Drop for TokioTimers {
	fn drop(&mut self) {
		for (_, handle) in self.tasks.borrow_mut().drain() {
			handle.abort();
		}
	}
}

/// Wall clock that follows tokio's clock
///
/// Reads `origin + elapsed tokio time`, so paused and auto-advanced test time
/// moves it consistently with [`TokioTimers`].
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
	origin: DateTime<Utc>,
	started: Instant,
}

impl TokioClock {
	pub fn new() -> Self {
		Self::starting_at(Utc::now())
	}

	/// Clock reading `origin` at the current tokio instant
	pub fn starting_at(origin: DateTime<Utc>) -> Self {
		Self {
			origin,
			started: Instant::now(),
		}
	}
}

impl Default for TokioClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for TokioClock {
	fn now(&self) -> DateTime<Utc> {
		let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::zero());
		self.origin + elapsed
	}
}
