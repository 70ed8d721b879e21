use crate::article::Article;
use crate::i18n::Language;
use crate::layout::{grid_class, layout};
use crate::render::card::render_article;
use crate::render::header::{render_header, HeaderView};
use crate::render::html_escape;
use crate::theme::Theme;
use chrono::{Datelike, NaiveDate};

const STYLESHEET: &str = include_str!("newspaper.css");

/// Seconds between reloads while an edition is printing
const LOADING_RELOAD_SECS: u32 = 5;

/// Everything needed to render one page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub theme: Theme,
    pub language: Language,
    pub date: NaiveDate,
    /// `None` until the first edition has arrived
    pub batch: Option<&'a [Article]>,
    pub loading: bool,
    pub refresh_enabled: bool,
}

/// Render the full HTML document
pub fn render_page(view: &PageView<'_>) -> String {
    let strings = view.language.strings();
    let theme = view.theme.code();

    let mut html = String::new();
    html.push_str(&format!(
        "<!doctype html>\n<html lang=\"{}\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        view.language.html_lang()
    ));
    let batch = view.batch.filter(|_| !view.loading);
    if batch.is_none() {
        html.push_str(&format!(
            "  <meta http-equiv=\"refresh\" content=\"{}\">\n",
            LOADING_RELOAD_SECS
        ));
    }
    html.push_str(&format!(
        "  <title>{}</title>\n  <style>\n{}</style>\n</head>\n",
        html_escape(strings.title_classic),
        STYLESHEET
    ));
    html.push_str(&format!(
        "<body class=\"theme-{}\">\n<main class=\"edition\">\n",
        theme
    ));

    html.push_str(&render_header(&HeaderView {
        theme: view.theme,
        language: view.language,
        date: view.date,
        loading: view.loading,
        refresh_enabled: view.refresh_enabled,
    }));

    match batch {
        Some(batch) => {
            if view.theme == Theme::Classic {
                html.push_str("<div class=\"top-rule\"></div>\n");
            }
            html.push_str(&render_grid(batch, view.theme, view.language));
        }
        None => html.push_str(&render_skeleton()),
    }

    html.push_str(&format!(
        "<footer class=\"page-footer footer-{}\"><p>{} © {} • {}</p></footer>\n",
        theme,
        html_escape(strings.footer_name),
        view.date.year(),
        html_escape(strings.footer_credit)
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Grid of placed cards; an empty batch yields an empty grid
pub fn render_grid(batch: &[Article], theme: Theme, language: Language) -> String {
    let mut html = format!("<section class=\"{}\">\n", grid_class(theme));

    for (article, placement) in batch.iter().zip(layout(batch, theme)) {
        html.push_str(&format!(
            "<div class=\"{}\" id=\"{}\">\n",
            placement.css_class(),
            html_escape(&article.id)
        ));
        html.push_str(&render_article(article, theme, language).to_html());
        if placement.divider_right {
            html.push_str("<div class=\"divider\"></div>\n");
        }
        html.push_str("</div>\n");
    }

    html.push_str("</section>\n");
    html
}

/// Placeholder shown while the first edition is printing
fn render_skeleton() -> String {
    let mut html = String::from(
        "<section class=\"skeleton\">\n<div class=\"skeleton-hero\">\
         <div class=\"bar w-3-4\"></div><div class=\"bar tall\"></div>\
         <div class=\"bar image\"></div><div class=\"line\"></div>\
         <div class=\"line\"></div><div class=\"line w-5-6\"></div></div>\n",
    );
    for _ in 0..4 {
        html.push_str(
            "<div class=\"skeleton-card\"><div class=\"bar w-1-3\"></div>\
             <div class=\"bar\"></div><div class=\"bar image-small\"></div>\
             <div class=\"line\"></div><div class=\"line w-4-5\"></div></div>\n",
        );
    }
    html.push_str("</section>\n");
    html
}
