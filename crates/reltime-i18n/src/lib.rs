//! # reltime-i18n
//!
//! Plural rule tables and fallback-aware locale strings.
//!
//! ## Overview
//!
//! - [`PluralRuleTable`] - ordered list of pure `count -> form index` rules,
//!   one per language family, addressed by [`PluralRuleId`]
//! - [`LocaleContext`] - the viewer's and the site default language's plural
//!   templates, curated special forms and fixed messages
//!
//! ## Example
//!
//! ```
//! use reltime_i18n::{LocaleContext, PluralRuleId, rule_for_language};
//!
//! let locale = LocaleContext::builder()
//!     .current_rule(rule_for_language("cs"))
//!     .current_plural("relativetime.hours", ["před %d hodinou", "před %d hodinami", "před %d hodinami"])
//!     .build();
//!
//! assert_eq!(locale.current_rule(), PluralRuleId::CZECH);
//! assert_eq!(
//!     locale.pluralize("relativetime.hours", 3, true).as_deref(),
//!     Some("před 3 hodinami")
//! );
//! ```

pub mod error;
pub mod locale;
pub mod plural;

pub use error::I18nError;
pub use locale::{COUNT_PLACEHOLDER, LocaleContext, LocaleContextBuilder, substitute};
pub use plural::{PluralCategory, PluralRule, PluralRuleId, PluralRuleTable, PluralSelector, rule_for_language};
