//! Language type: the two display languages of the edition.

use crate::i18n::LanguageStrings;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display language.
///
/// English is canonical: it is the language every `LocalizedText` falls back
/// to when the requested translation is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code ("en" or "zh", case-insensitive)
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => bail!("Unknown language code: '{}'", other),
        }
    }

    /// Get the canonical (fallback) language.
    pub fn canonical() -> Language {
        Language::En
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
        }
    }

    /// Get the label shown in the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "中文",
        }
    }

    /// Value for the `lang` attribute of the rendered document.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh-CN",
        }
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        *self == Language::canonical()
    }

    /// Localized chrome strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
