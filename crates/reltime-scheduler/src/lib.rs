//! # reltime-scheduler
//!
//! Self-rescheduling refresh loop for displayed relative timestamps.
//!
//! ## Overview
//!
//! Each displayed timestamp gets its own [`RelativeTimeElement`]. There is no
//! global loop: an element renders, arms one single-shot timer for the delay
//! its classification asks for, and repeats when the timer fires. Elements
//! never share mutable state; only the read-only locale is shared.
//!
//! Host seams:
//!
//! - [`DisplayTarget`] - the visible element
//! - [`TimerDriver`] - the host timer primitive ([`ManualTimers`], or
//!   `TokioTimers` with the `tokio` feature)
//! - [`Clock`] - the current instant ([`SystemClock`], [`ManualTimers`], or
//!   `TokioClock`)
//!
//! Everything is single-threaded (`Rc`/`RefCell`).

pub mod clock;
pub mod element;
pub mod target;
pub mod timer;
#[cfg(feature = "tokio")]
pub mod tokio_timers;

pub use clock::{Clock, SystemClock};
pub use element::{DisplayState, RelativeTimeElement};
pub use target::{DisplayTarget, MemoryTarget};
pub use timer::{ManualTimers, TimerCallback, TimerDriver, TimerId};
#[cfg(feature = "tokio")]
pub use tokio_timers::{TokioClock, TokioTimers};
