//! HTML rendering of the edition.
//!
//! - `card`: per-article themed composition ([`card::render_article`])
//! - `header`: per-theme masthead with language/theme switchers
//! - `page`: the full document, grid placement and loading skeleton

pub mod card;
pub mod header;
pub mod page;

pub use card::{render_article, Block, CardView};
pub use page::{render_page, PageView};

use crate::i18n::Language;
use crate::theme::Theme;

pub(crate) fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Link to the page with the given display settings
pub(crate) fn settings_href(language: Language, theme: Theme) -> String {
    format!("/?lang={}&amp;theme={}", language.code(), theme.code())
}
