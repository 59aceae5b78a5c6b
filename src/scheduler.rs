//! Per-element refresh loop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reltime::scheduler::{ManualTimers, MemoryTarget, RelativeTimeElement};
//! ```

#[cfg(feature = "scheduler")]
pub use reltime_scheduler::*;
