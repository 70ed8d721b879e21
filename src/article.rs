use crate::i18n::{Language, LocalizedText};
use serde::{Deserialize, Serialize};

/// A normalized newspaper article, as handed to layout and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique within one fetched batch
    pub id: String,
    pub headline: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<LocalizedText>,
    pub category: LocalizedText,
    pub author: LocalizedText,
    pub location: LocalizedText,
    /// Full text; paragraphs are separated by line breaks
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<LocalizedText>,
    #[serde(default)]
    pub is_hero: bool,
}

/// Ordered articles of one edition: hero first, then major, then minor stories.
///
/// A batch is never edited after it is produced; a refresh replaces it.
pub type Batch = Vec<Article>;

impl Article {
    /// Content for `lang` split into display paragraphs.
    ///
    /// Splits on line breaks and drops whitespace-only segments.
    pub fn paragraphs(&self, lang: Language) -> Vec<&str> {
        split_paragraphs(self.content.get(lang))
    }
}

/// Split text on line breaks, discarding empty and whitespace-only segments.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|p| p.trim_end_matches('\r'))
        .filter(|p| !p.trim().is_empty())
        .collect()
}
