use crate::i18n::{long_date, Language};
use crate::render::{html_escape, settings_href};
use crate::theme::Theme;
use chrono::NaiveDate;

/// Inputs of the masthead
#[derive(Debug, Clone, Copy)]
pub struct HeaderView {
    pub theme: Theme,
    pub language: Language,
    pub date: NaiveDate,
    pub loading: bool,
    /// Whether the public refresh control is offered
    pub refresh_enabled: bool,
}

/// Render the masthead for the view's theme
pub fn render_header(view: &HeaderView) -> String {
    match view.theme {
        Theme::Classic => classic_header(view),
        Theme::Modern => modern_header(view),
        Theme::Wizard => wizard_header(view),
    }
}

fn theme_switcher(view: &HeaderView) -> String {
    let links: Vec<String> = Theme::ALL
        .iter()
        .map(|theme| {
            let class = if *theme == view.theme { "active" } else { "inactive" };
            format!(
                "<a class=\"switch {}\" href=\"{}\">{}</a>",
                class,
                settings_href(view.language, *theme),
                theme.label()
            )
        })
        .collect();
    format!("<nav class=\"theme-switcher\">{}</nav>", links.join(""))
}

fn language_switcher(view: &HeaderView) -> String {
    let links: Vec<String> = Language::ALL
        .iter()
        .map(|language| {
            let class = if *language == view.language { "active" } else { "inactive" };
            format!(
                "<a class=\"switch {}\" href=\"{}\">{}</a>",
                class,
                settings_href(*language, view.theme),
                language.native_name()
            )
        })
        .collect();
    format!(
        "<nav class=\"lang-switcher\">{}</nav>",
        links.join("<span class=\"sep\">|</span>")
    )
}

/// POST form that triggers a refresh and returns to the same settings
fn refresh_form(view: &HeaderView, class: &str, label: &str) -> String {
    if !view.refresh_enabled {
        return String::new();
    }
    let disabled = if view.loading { " disabled" } else { "" };
    format!(
        "<form class=\"refresh {}\" method=\"post\" action=\"/refresh\">\
         <input type=\"hidden\" name=\"lang\" value=\"{}\">\
         <input type=\"hidden\" name=\"theme\" value=\"{}\">\
         <button type=\"submit\"{}>{}</button></form>",
        class,
        view.language.code(),
        view.theme.code(),
        disabled,
        html_escape(label)
    )
}

fn classic_header(view: &HeaderView) -> String {
    let t = view.language.strings();
    let date = html_escape(&long_date(view.date, view.language));
    let edition_status = if view.loading { t.loading } else { t.latest };
    let mobile_label = if view.loading {
        t.mobile_refresh_loading
    } else {
        t.mobile_refresh
    };

    let mut html = String::from("<header class=\"masthead masthead-classic\">\n");
    html.push_str(&format!(
        "<div class=\"meta-bar\"><div><span>{}</span><span class=\"price\">{}</span></div>\
         <span class=\"date\">{}</span><div class=\"switchers\">{}{}</div></div>\n",
        html_escape(t.volume),
        html_escape(t.price),
        date,
        language_switcher(view),
        theme_switcher(view)
    ));
    html.push_str(&format!(
        "<div class=\"title-row\">\
         <div class=\"ear ear-left\"><h4>{}</h4><p>{}</p></div>\
         <h1 class=\"title\">{}</h1>\
         <div class=\"ear ear-right\"><h4>{}</h4><p>{}</p>{}</div></div>\n",
        html_escape(t.weather_title),
        html_escape(t.weather_description),
        html_escape(t.title_classic),
        html_escape(t.edition_title),
        html_escape(edition_status),
        refresh_form(view, "ear-refresh", t.refresh)
    ));
    html.push_str(&format!(
        "<div class=\"tagline\"><p>{}</p></div>\n",
        html_escape(t.tagline)
    ));
    html.push_str(&format!(
        "<div class=\"mobile-bar\"><span>{}</span>{}</div>\n",
        date,
        refresh_form(view, "mobile-refresh", mobile_label)
    ));
    html.push_str("</header>\n");
    html
}

fn modern_header(view: &HeaderView) -> String {
    let t = view.language.strings();
    let refresh_label = if view.loading {
        t.modern_loading.to_string()
    } else {
        format!("● {}", t.latest)
    };

    format!(
        "<header class=\"masthead masthead-modern\">\n\
         <h1 class=\"title\">{}</h1>\n\
         <div class=\"controls\"><div class=\"switchers\">{}{}</div>\
         <span class=\"date-chip\">{}</span>{}</div>\n\
         </header>\n",
        html_escape(t.title_modern),
        theme_switcher(view),
        language_switcher(view),
        html_escape(&long_date(view.date, view.language)),
        refresh_form(view, "modern-refresh", &refresh_label)
    )
}

fn wizard_header(view: &HeaderView) -> String {
    let t = view.language.strings();
    let refresh_label = if view.loading { t.wizard_loading } else { t.refresh };

    format!(
        "<header class=\"masthead masthead-wizard\">\n\
         <div class=\"top-bar\">{}<span class=\"date\">{}</span>{}</div>\n\
         <div class=\"title-row\"><div class=\"flank flank-left\"><span>{}</span></div>\
         <h1 class=\"title\">{}</h1>\
         <div class=\"flank flank-right\"><span>{}</span></div></div>\n\
         <div class=\"status-bar\">{}<span class=\"sparkle\">✨</span>\
         <span class=\"price\">{} / 5 Knuts</span></div>\n\
         </header>\n",
        language_switcher(view),
        html_escape(&long_date(view.date, view.language)),
        theme_switcher(view),
        html_escape(t.wizard_flank_left),
        html_escape(t.title_wizard),
        html_escape(t.wizard_flank_right),
        refresh_form(view, "wizard-refresh", refresh_label),
        html_escape(t.price)
    )
}
