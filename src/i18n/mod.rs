//! Internationalization (i18n) module for the bilingual edition.
//!
//! Every article arrives from the newsroom in both English and Chinese, and
//! every piece of page chrome (mastheads, bylines, refresh labels) has a fixed
//! translation. All language-related logic lives here.
//!
//! # Architecture
//!
//! - `language`: the closed set of display languages (`en`, `zh`)
//! - `localized`: bilingual text values and the resolver with English fallback
//! - `strings`: centralized localized chrome strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{resolve, Language, LocalizedText};
//!
//! let headline = LocalizedText::new("Markets Rally", "市场上涨");
//! assert_eq!(resolve(Some(&headline), Language::Zh), "市场上涨");
//! ```

mod language;
mod localized;
mod strings;

pub use language::Language;
pub use localized::{resolve, LocalizedText};
pub use strings::{english_long_date, long_date, LanguageStrings};
