//! Per-element refresh loop
//!
//! A [`RelativeTimeElement`] owns the [`DisplayState`] of one displayed
//! timestamp. While active it renders, arms a single-shot timer for the
//! returned delay, and re-renders when that timer fires.
//!
//! Two guards keep a torn-down element from being mutated:
//!
//! - deactivation cancels the pending timer through the [`TimerDriver`]
//! - a timer that fires anyway is ignored unless the element is alive and
//!   the timer belongs to the current arming

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use reltime_core::{RelativeTimeFormatter, Rendered};

use crate::clock::Clock;
use crate::target::DisplayTarget;
use crate::timer::{TimerDriver, TimerId};

/// Mutable state behind one displayed timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
	raw: Option<String>,
	last_text: Option<String>,
	last_tooltip: Option<String>,
	timer: Option<TimerId>,
	generation: u64,
	alive: bool,
}

impl DisplayState {
	/// Raw timestamp attribute
	pub fn raw(&self) -> Option<&str> {
		self.raw.as_deref()
	}

	pub fn last_text(&self) -> Option<&str> {
		self.last_text.as_deref()
	}

	pub fn last_tooltip(&self) -> Option<&str> {
		self.last_tooltip.as_deref()
	}

	/// Currently armed timer
	pub fn timer(&self) -> Option<TimerId> {
		self.timer
	}

	pub fn is_alive(&self) -> bool {
		self.alive
	}
}

struct ElementInner {
	state: DisplayState,
	formatter: RelativeTimeFormatter,
	target: Rc<dyn DisplayTarget>,
	timers: Rc<dyn TimerDriver>,
	clock: Rc<dyn Clock>,
}

/// Host writes decided by one render, applied once the borrow is released
enum Update {
	Keep,
	Clear,
	Show {
		rendered: Rendered,
		text_changed: bool,
		tooltip_changed: bool,
	},
}

/// Lifecycle adapter for one displayed timestamp
///
/// The host calls the three hooks from its element lifecycle:
/// [`on_activate`](Self::on_activate) when the element is attached,
/// [`on_deactivate`](Self::on_deactivate) when it is detached, and
/// [`on_value_changed`](Self::on_value_changed) when its timestamp attribute
/// changes. Dropping the element deactivates it.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use std::sync::Arc;
/// use std::time::Duration;
/// use chrono::{TimeZone, Utc};
/// use reltime_core::{RelativeTimeFormatter, Rendered};
/// use reltime_i18n::LocaleContext;
/// use reltime_scheduler::{ManualTimers, MemoryTarget, RelativeTimeElement};
///
/// let locale = Arc::new(LocaleContext::default());
/// let timers = Rc::new(ManualTimers::new(Utc.with_ymd_and_hms(2024, 10, 27, 3, 5, 30).unwrap()));
/// let target = Rc::new(MemoryTarget::new());
///
/// let element = RelativeTimeElement::new(
///     RelativeTimeFormatter::with_locale(locale),
///     target.clone(),
///     timers.clone(),
///     timers.clone(),
/// )
/// .with_value("2024-10-27T03:04:00Z");
///
/// element.on_activate();
/// assert_eq!(target.text().as_deref(), Some("1 minute ago"));
///
/// timers.advance(Duration::from_secs(60));
/// assert_eq!(target.text().as_deref(), Some("2 minutes ago"));
///
/// element.on_deactivate();
/// assert_eq!(timers.pending(), 0);
/// ```
pub struct RelativeTimeElement {
	inner: Rc<RefCell<ElementInner>>,
}

impl RelativeTimeElement {
	pub fn new(
		formatter: RelativeTimeFormatter,
		target: Rc<dyn DisplayTarget>,
		timers: Rc<dyn TimerDriver>,
		clock: Rc<dyn Clock>,
	) -> Self {
		Self {
			inner: Rc::new(RefCell::new(ElementInner {
				state: DisplayState::default(),
				formatter,
				target,
				timers,
				clock,
			})),
		}
	}

	/// Set the initial timestamp attribute
	pub fn with_value(self, raw: impl Into<String>) -> Self {
		self.inner.borrow_mut().state.raw = Some(raw.into());
		self
	}

	/// Element attached: render now and start the refresh loop
	///
	/// Activating an already active element does nothing.
	pub fn on_activate(&self) {
		{
			let mut inner = self.inner.borrow_mut();
			if inner.state.alive {
				return;
			}
			inner.state.alive = true;
		}
		refresh(&self.inner);
	}

	/// Element detached: stop the refresh loop
	///
	/// The label is left as is; no further mutation happens until the next
	/// activation.
	pub fn on_deactivate(&self) {
		let (pending, timers) = {
			let mut inner = self.inner.borrow_mut();
			inner.state.alive = false;
			(inner.state.timer.take(), inner.timers.clone())
		};
		cancel(timers.as_ref(), pending);
	}

	/// Timestamp attribute changed
	///
	/// While active the element re-renders immediately and replaces the
	/// pending timer. While inactive the value is only stored.
	pub fn on_value_changed(&self, raw: Option<&str>) {
		let active = {
			let mut inner = self.inner.borrow_mut();
			if inner.state.raw.as_deref() == raw {
				return;
			}
			inner.state.raw = raw.map(str::to_string);
			inner.state.alive
		};
		if active {
			refresh(&self.inner);
		}
	}

	pub fn is_active(&self) -> bool {
		self.inner.borrow().state.alive
	}

	/// Snapshot of the display state
	pub fn state(&self) -> DisplayState {
		self.inner.borrow().state.clone()
	}
}

impl Drop for RelativeTimeElement {
	fn drop(&mut self) {
		self.on_deactivate();
	}
}

fn cancel(timers: &dyn TimerDriver, pending: Option<TimerId>) {
	if let Some(id) = pending {
		tracing::trace!(%id, "cancelling relative time timer");
		timers.cancel(id);
	}
}

/// Whether no newer render or deactivation has superseded `generation`
fn is_current(cell: &RefCell<ElementInner>, generation: u64) -> bool {
	let inner = cell.borrow();
	inner.state.alive && inner.state.generation == generation
}

// Host code (target writes, timer arming) may call back into the element,
// so the state borrow is never held across it.
fn refresh(cell: &Rc<RefCell<ElementInner>>) {
	let (generation, pending, timers, clock) = {
		let mut inner = cell.borrow_mut();
		inner.state.generation += 1;
		(
			inner.state.generation,
			inner.state.timer.take(),
			inner.timers.clone(),
			inner.clock.clone(),
		)
	};
	cancel(timers.as_ref(), pending);
	let now = clock.now();

	let (target, update) = {
		let mut guard = cell.borrow_mut();
		let inner = &mut *guard;
		let update = match inner.formatter.format(inner.state.raw.as_deref(), now) {
			None => {
				tracing::debug!(raw = ?inner.state.raw, "no relative time to show, not scheduling");
				inner.state.last_tooltip = None;
				match inner.state.last_text.take() {
					Some(_) => Update::Clear,
					None => Update::Keep,
				}
			}
			Some(rendered) => {
				let text_changed = inner.state.last_text.as_deref() != Some(rendered.text.as_str());
				let tooltip_changed =
					inner.state.last_tooltip.as_deref() != Some(rendered.tooltip.as_str());
				inner.state.last_text = Some(rendered.text.clone());
				inner.state.last_tooltip = Some(rendered.tooltip.clone());
				Update::Show {
					rendered,
					text_changed,
					tooltip_changed,
				}
			}
		};
		(inner.target.clone(), update)
	};

	let rendered = match update {
		Update::Keep => return,
		Update::Clear => {
			target.clear();
			return;
		}
		Update::Show {
			rendered,
			text_changed,
			tooltip_changed,
		} => {
			if text_changed {
				target.set_text(&rendered.text);
			}
			if tooltip_changed && is_current(cell, generation) {
				target.set_tooltip(&rendered.tooltip);
			}
			rendered
		}
	};

	if !is_current(cell, generation) {
		tracing::trace!(generation, "render superseded during host update, not arming");
		return;
	}
	let weak = Rc::downgrade(cell);
	let id = timers.arm(
		rendered.next_refresh,
		Box::new(move || on_timer(&weak, generation)),
	);
	if !is_current(cell, generation) {
		cancel(timers.as_ref(), Some(id));
		return;
	}
	cell.borrow_mut().state.timer = Some(id);
	tracing::debug!(
		text = %rendered.text,
		delay_ms = rendered.next_refresh_millis(),
		%id,
		"relative time refreshed"
	);
}

fn on_timer(weak: &Weak<RefCell<ElementInner>>, generation: u64) {
	let Some(cell) = weak.upgrade() else {
		tracing::trace!("timer fired for a dropped element");
		return;
	};
	{
		let mut inner = cell.borrow_mut();
		if !inner.state.alive || inner.state.generation != generation {
			tracing::debug!(generation, current = inner.state.generation, "ignoring stale timer");
			return;
		}
		inner.state.timer = None;
	}
	refresh(&cell);
}
