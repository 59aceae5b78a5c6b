//! Plural rules and locale tables.
//!
//! # Examples
//!
//! ```rust
//! use reltime::i18n::{PluralRuleTable, rule_for_language};
//!
//! let table = PluralRuleTable::builtin();
//! assert_eq!(table.select_form(rule_for_language("ru"), 22), 1);
//! ```

pub use reltime_i18n::*;
