//! Article renderer.
//!
//! [`render_article`] is a pure function from (article, theme, language) to a
//! [`CardView`]: an ordered description of the card's blocks. The three theme
//! templates differ in image placement, headline scale, how many paragraphs
//! they preview, and decorative chrome. [`CardView::to_html`] writes the
//! description out as HTML.

use crate::article::Article;
use crate::i18n::{resolve, Language};
use crate::render::html_escape;
use crate::theme::Theme;

/// Paragraphs previewed by the modern template
const MODERN_HERO_PREVIEW: usize = 4;
const MODERN_PREVIEW: usize = 2;

/// One structural element of a card, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Category and location chips
    Chips { category: String, location: String },
    Headline(String),
    Subheadline(String),
    Byline { prefix: &'static str, author: String },
    Figure {
        src: String,
        alt: String,
        caption: Option<String>,
    },
    /// Location printed above the body (wizard)
    Dateline(String),
    Body {
        paragraphs: Vec<String>,
        drop_cap: bool,
        columns: u8,
    },
    /// Author line closing the card (modern)
    Signature(String),
}

/// Themed composition of one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub theme: Theme,
    pub hero: bool,
    pub blocks: Vec<Block>,
}

/// Compose the card for `article`.
///
/// Missing optional fields drop their block: no image url means no figure,
/// an empty subheadline means no subheadline.
pub fn render_article(article: &Article, theme: Theme, lang: Language) -> CardView {
    let text = ResolvedText::new(article, lang);
    let blocks = match theme {
        Theme::Classic => classic_blocks(article, &text, lang),
        Theme::Modern => modern_blocks(article, &text),
        Theme::Wizard => wizard_blocks(article, &text, lang),
    };

    CardView {
        theme,
        hero: article.is_hero,
        blocks,
    }
}

/// Every display string of an article, resolved for one language
struct ResolvedText<'a> {
    headline: &'a str,
    subheadline: &'a str,
    category: &'a str,
    author: &'a str,
    location: &'a str,
    caption: &'a str,
    paragraphs: Vec<&'a str>,
}

impl<'a> ResolvedText<'a> {
    fn new(article: &'a Article, lang: Language) -> Self {
        Self {
            headline: resolve(Some(&article.headline), lang),
            subheadline: resolve(article.subheadline.as_ref(), lang),
            category: resolve(Some(&article.category), lang),
            author: resolve(Some(&article.author), lang),
            location: resolve(Some(&article.location), lang),
            caption: resolve(article.image_caption.as_ref(), lang),
            paragraphs: article.paragraphs(lang),
        }
    }

    fn chips(&self) -> Block {
        Block::Chips {
            category: self.category.to_string(),
            location: self.location.to_string(),
        }
    }

    fn body(&self, limit: Option<usize>, drop_cap: bool, columns: u8) -> Block {
        let take = limit.unwrap_or(self.paragraphs.len());
        Block::Body {
            paragraphs: self
                .paragraphs
                .iter()
                .take(take)
                .map(|p| p.to_string())
                .collect(),
            drop_cap,
            columns,
        }
    }
}

fn figure(src: Option<&str>, alt: &str, caption: Option<&str>) -> Option<Block> {
    src.filter(|s| !s.is_empty()).map(|src| Block::Figure {
        src: src.to_string(),
        alt: alt.to_string(),
        caption: caption.filter(|c| !c.is_empty()).map(str::to_string),
    })
}

fn classic_blocks(article: &Article, text: &ResolvedText<'_>, lang: Language) -> Vec<Block> {
    let mut blocks = vec![text.chips(), Block::Headline(text.headline.to_string())];

    if !text.subheadline.is_empty() {
        blocks.push(Block::Subheadline(text.subheadline.to_string()));
    }
    blocks.push(Block::Byline {
        prefix: lang.strings().byline_prefix,
        author: text.author.to_string(),
    });

    let alt = if text.caption.is_empty() {
        text.headline
    } else {
        text.caption
    };
    blocks.extend(figure(article.image_url.as_deref(), alt, Some(text.caption)));

    let columns = if article.is_hero { 2 } else { 1 };
    blocks.push(text.body(None, true, columns));
    blocks
}

fn modern_blocks(article: &Article, text: &ResolvedText<'_>) -> Vec<Block> {
    let mut blocks: Vec<Block> = figure(article.image_url.as_deref(), text.caption, None)
        .into_iter()
        .collect();

    blocks.push(text.chips());
    blocks.push(Block::Headline(text.headline.to_string()));

    if article.is_hero && !text.subheadline.is_empty() {
        blocks.push(Block::Subheadline(text.subheadline.to_string()));
    }

    let limit = if article.is_hero {
        MODERN_HERO_PREVIEW
    } else {
        MODERN_PREVIEW
    };
    blocks.push(text.body(Some(limit), false, 1));
    blocks.push(Block::Signature(text.author.to_string()));
    blocks
}

fn wizard_blocks(article: &Article, text: &ResolvedText<'_>, lang: Language) -> Vec<Block> {
    let mut blocks = vec![Block::Headline(text.headline.to_string())];

    let caption = if text.caption.is_empty() {
        lang.strings().wizard_caption_fallback
    } else {
        text.caption
    };
    blocks.extend(figure(article.image_url.as_deref(), text.caption, Some(caption)));

    blocks.push(Block::Dateline(text.location.to_string()));
    blocks.push(text.body(None, true, 1));
    blocks
}

impl CardView {
    /// Position of the figure block, if the card has one
    pub fn figure_position(&self) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| matches!(b, Block::Figure { .. }))
    }

    /// Position of the headline block
    pub fn headline_position(&self) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| matches!(b, Block::Headline(_)))
    }

    /// Paragraphs previewed in the body
    pub fn paragraphs(&self) -> &[String] {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::Body { paragraphs, .. } => Some(paragraphs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn has_drop_cap(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Body { drop_cap: true, .. }))
    }

    pub fn has_chips(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Chips { .. }))
    }

    fn scale(&self) -> &'static str {
        if self.hero {
            "hero"
        } else {
            "standard"
        }
    }

    /// Write the card as an HTML `<article>` element
    pub fn to_html(&self) -> String {
        let theme = self.theme.code();
        let mut html = format!("<article class=\"card card-{} {}\">\n", theme, self.scale());

        if self.theme == Theme::Wizard {
            html.push_str(
                "<span class=\"corner tl\"></span><span class=\"corner tr\"></span>\
                 <span class=\"corner bl\"></span><span class=\"corner br\"></span>\n",
            );
        }

        for block in &self.blocks {
            html.push_str(&self.block_html(block));
        }

        html.push_str("</article>\n");
        html
    }

    fn block_html(&self, block: &Block) -> String {
        let theme = self.theme.code();
        match block {
            Block::Chips { category, location } => {
                let mut chips = format!("<div class=\"chips chips-{}\">", theme);
                if !category.is_empty() {
                    chips.push_str(&format!(
                        "<span class=\"chip category\">{}</span>",
                        html_escape(category)
                    ));
                }
                if !location.is_empty() {
                    chips.push_str(&format!(
                        "<span class=\"chip location\">{}</span>",
                        html_escape(location)
                    ));
                }
                chips.push_str("</div>\n");
                chips
            }
            Block::Headline(text) => format!(
                "<h2 class=\"headline headline-{} headline-{}\">{}</h2>\n",
                theme,
                self.scale(),
                html_escape(text)
            ),
            Block::Subheadline(text) => format!(
                "<h3 class=\"subheadline subheadline-{}\">{}</h3>\n",
                self.scale(),
                html_escape(text)
            ),
            Block::Byline { prefix, author } => format!(
                "<div class=\"byline\">{}<strong>{}</strong></div>\n",
                html_escape(prefix),
                html_escape(author)
            ),
            Block::Figure { src, alt, caption } => {
                let mut figure = format!(
                    "<figure class=\"figure figure-{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    theme,
                    html_escape(src),
                    html_escape(alt)
                );
                if let Some(caption) = caption {
                    figure.push_str(&format!(
                        "<figcaption>{}</figcaption>",
                        html_escape(caption)
                    ));
                }
                figure.push_str("</figure>\n");
                figure
            }
            Block::Dateline(location) => format!(
                "<div class=\"dateline\">{}</div>\n",
                html_escape(location)
            ),
            Block::Body {
                paragraphs,
                drop_cap,
                columns,
            } => {
                let mut body = format!("<div class=\"body body-{} columns-{}\">\n", theme, columns);
                for (idx, paragraph) in paragraphs.iter().enumerate() {
                    let class = if *drop_cap && idx == 0 { " class=\"drop-cap\"" } else { "" };
                    body.push_str(&format!("<p{}>{}</p>\n", class, html_escape(paragraph)));
                }
                body.push_str("</div>\n");
                body
            }
            Block::Signature(author) => format!(
                "<footer class=\"signature\"><span>{}</span><span>●</span></footer>\n",
                html_escape(author)
            ),
        }
    }
}
