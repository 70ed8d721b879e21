//! Theme layout engine.
//!
//! Maps a batch and a theme to one placement decision per article. Pure: the
//! same inputs always yield the same placements, in input order.

use crate::article::Article;
use crate::theme::Theme;

/// Grid units of the classic broadsheet
pub const CLASSIC_COLUMNS: u8 = 12;

/// Columns of the modern bento grid
pub const MODERN_COLUMNS: u8 = 4;

/// Every 4th item closes a visual row of the classic grid
const CLASSIC_ROW_LENGTH: usize = 4;

/// How much of the theme's grid an article occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// `span` of `of` horizontal grid units
    Columns { span: u8, of: u8 },
    /// `cols` columns by `rows` rows
    Block { cols: u8, rows: u8 },
    /// No explicit span; flows into masonry columns
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub span: Span,
    /// Vertical rule drawn to the right of the article
    pub divider_right: bool,
}

/// Place every article of `batch` for `theme`.
///
/// Position rules only apply to positions that exist, so short and empty
/// batches are fine.
pub fn layout(batch: &[Article], theme: Theme) -> Vec<Placement> {
    batch
        .iter()
        .enumerate()
        .map(|(index, article)| place(index, article.is_hero, theme))
        .collect()
}

/// Placement of the article at `index`
pub fn place(index: usize, is_hero: bool, theme: Theme) -> Placement {
    match theme {
        Theme::Classic => {
            let span = if is_hero {
                8
            } else if index == 1 {
                4
            } else {
                3
            };
            Placement {
                span: Span::Columns {
                    span,
                    of: CLASSIC_COLUMNS,
                },
                divider_right: !is_hero && (index + 1) % CLASSIC_ROW_LENGTH != 0,
            }
        }
        Theme::Modern => Placement {
            span: if is_hero {
                Span::Block { cols: 2, rows: 2 }
            } else {
                Span::Block { cols: 1, rows: 1 }
            },
            divider_right: false,
        },
        Theme::Wizard => Placement {
            span: Span::Flow,
            divider_right: false,
        },
    }
}

impl Placement {
    /// CSS classes for the grid cell
    pub fn css_class(&self) -> String {
        match self.span {
            Span::Columns { span, .. } => format!("cell col-span-{}", span),
            Span::Block { cols, rows } => format!("cell col-span-{} row-span-{}", cols, rows),
            Span::Flow => "cell flow".to_string(),
        }
    }
}

/// CSS classes for the grid container of `theme`
pub fn grid_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Classic => "grid grid-classic",
        Theme::Modern => "grid grid-modern",
        Theme::Wizard => "masonry",
    }
}
