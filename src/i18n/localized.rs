//! Bilingual text values and the display-string resolver.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// A pair of strings keyed by language tag.
///
/// `en` is always present in well-formed provider output; `zh` may be missing
/// on degraded paths, in which case resolution falls back to English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: Some(zh.into()),
        }
    }

    /// English-only text, as produced when a translation is missing.
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: None,
        }
    }

    /// The raw value stored for `lang`, without fallback.
    pub fn raw(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::En => Some(self.en.as_str()),
            Language::Zh => self.zh.as_deref(),
        }
    }

    /// Display string for `lang`, falling back to English.
    pub fn get(&self, lang: Language) -> &str {
        match self.raw(lang) {
            Some(text) if !text.is_empty() => text,
            _ => &self.en,
        }
    }

    /// True when neither language carries any text.
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.zh.as_deref().map_or(true, str::is_empty)
    }
}

/// Resolve an optional bilingual value to the string shown for `lang`.
///
/// Absent text resolves to `""`; otherwise the requested language if
/// non-empty, then English, then `""`.
pub fn resolve(text: Option<&LocalizedText>, lang: Language) -> &str {
    text.map_or("", |t| t.get(lang))
}
