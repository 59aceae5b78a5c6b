//! Classification, rendering and tooltip formatting.
//!
//! # Examples
//!
//! ```rust
//! use reltime::core::{TimeBucket, TimeUnit};
//!
//! assert_eq!(TimeBucket::counted(TimeUnit::Week, 2), TimeBucket::Weeks(2));
//! ```

pub use reltime_core::*;
