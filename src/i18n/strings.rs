use crate::i18n::Language;
use chrono::{Datelike, NaiveDate, Weekday};

/// All localized page-chrome strings for a language
///
/// Strings are stored raw and unescaped. The renderer escapes them when
/// writing HTML.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Mastheads ====================
    /// Masthead title of the classic broadsheet
    pub title_classic: &'static str,

    /// Masthead title of the modern bento layout
    pub title_modern: &'static str,

    /// Masthead title of the wizard tabloid
    pub title_wizard: &'static str,

    /// Volume and issue line in the classic meta bar
    pub volume: &'static str,

    /// Cover price
    pub price: &'static str,

    /// Motto printed under the classic masthead
    pub tagline: &'static str,

    // ==================== Ear Pieces ====================
    pub weather_title: &'static str,
    pub weather_description: &'static str,
    pub edition_title: &'static str,

    /// Left and right words on the wizard masthead flanks
    pub wizard_flank_left: &'static str,
    pub wizard_flank_right: &'static str,

    // ==================== Refresh Controls ====================
    /// Classic ear piece while an edition is being fetched
    pub loading: &'static str,
    pub latest: &'static str,
    pub refresh: &'static str,
    pub mobile_refresh: &'static str,
    pub mobile_refresh_loading: &'static str,

    /// Wizard refresh label while loading
    pub wizard_loading: &'static str,

    /// Modern refresh label while loading
    pub modern_loading: &'static str,

    // ==================== Articles ====================
    /// Prefix placed before the author in classic bylines
    pub byline_prefix: &'static str,

    /// Caption used on wizard figures that carry none
    pub wizard_caption_fallback: &'static str,

    // ==================== Footer ====================
    /// Publication name printed in the footer
    pub footer_name: &'static str,

    /// Provider credit, appended after the year
    pub footer_credit: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    title_classic: "The Daily Chronicle",
    title_modern: "DAILY NOW",
    title_wizard: "The Daily Prophet",
    volume: "Vol. CXXIV, No. 42,102",
    price: "$1.50",
    tagline: "\"All the News That's Fit to Print — And Nothing Else.\"",

    weather_title: "Weather",
    weather_description: "Clear skies, light breeze.",
    edition_title: "Edition",
    wizard_flank_left: "Owl",
    wizard_flank_right: "Post",

    loading: "Printing...",
    latest: "Latest",
    refresh: "Click to Refresh",
    mobile_refresh: "Refresh",
    mobile_refresh_loading: "Updating...",
    wizard_loading: "Owls are on the way...",
    modern_loading: "Syncing to Cloud...",

    byline_prefix: "By ",
    wizard_caption_fallback: "Moving Picture",

    footer_name: "The Daily Chronicle",
    footer_credit: "Powered by Gemini",
};

// ==================== Chinese Strings ====================

/// Chinese (Simplified) language strings
pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    title_classic: "每日纪事报",
    title_modern: "今日新闻",
    title_wizard: "预言家日报",
    volume: "第124卷 第42,102期",
    price: "¥ 1.50",
    tagline: "“刊载一切适宜刊登的新闻——仅此而已。”",

    weather_title: "天气",
    weather_description: "晴朗，微风。",
    edition_title: "版本",
    wizard_flank_left: "邮",
    wizard_flank_right: "局",

    loading: "印刷中...",
    latest: "最新",
    refresh: "点击刷新",
    mobile_refresh: "刷新",
    mobile_refresh_loading: "更新中...",
    wizard_loading: "猫头鹰正在路上...",
    modern_loading: "云端同步中...",

    byline_prefix: "文 / ",
    wizard_caption_fallback: "Moving Picture",

    footer_name: "每日纪事报",
    footer_credit: "Powered by Gemini",
};

impl LanguageStrings {
    /// Get the string table for a language
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language {
            Language::En => &ENGLISH_STRINGS,
            Language::Zh => &CHINESE_STRINGS,
        }
    }
}

/// Format a date the way the masthead prints it.
///
/// English: `Monday, October 19, 2026`. Chinese: `2026年10月19日星期一`.
pub fn long_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => english_long_date(date),
        Language::Zh => format!(
            "{}年{}月{}日{}",
            date.year(),
            date.month(),
            date.day(),
            chinese_weekday(date.weekday())
        ),
    }
}

/// en-US long date, used both on the masthead and in provider prompts.
pub fn english_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn chinese_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}
