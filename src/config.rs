use crate::i18n::Language;
use crate::theme::Theme;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub gemini_temperature: f32,

    // Display defaults
    pub default_language: Language,
    pub default_theme: Theme,

    // Server
    pub api_key: Option<String>,
    pub schedule_times: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Gemini
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY not set")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_api_url: std::env::var("GEMINI_API_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            gemini_temperature: std::env::var("GEMINI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.3),

            // Display defaults
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(&code).context("Invalid DEFAULT_LANGUAGE")?,
                Err(_) => Language::default(),
            },
            default_theme: match std::env::var("DEFAULT_THEME") {
                Ok(code) => Theme::from_code(&code).context("Invalid DEFAULT_THEME")?,
                Err(_) => Theme::default(),
            },

            // Server
            api_key: std::env::var("API_KEY").ok().filter(|k| !k.is_empty()),
            schedule_times: std::env::var("SCHEDULE_TIMES")
                .map(|v| parse_schedule_times(&v))
                .unwrap_or_default(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Split a comma-separated `HH:MM` list, dropping blanks
fn parse_schedule_times(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
