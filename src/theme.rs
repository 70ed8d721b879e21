use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme of the edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Structured broadsheet on a 12-unit grid with vertical rules
    #[default]
    Classic,
    /// Asymmetric bento grid on four columns
    Modern,
    /// Masonry tabloid, order preserved
    Wizard,
}

impl Theme {
    /// All themes, in switcher order.
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Modern, Theme::Wizard];

    pub fn from_code(code: &str) -> Result<Theme> {
        match code.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "modern" => Ok(Theme::Modern),
            "wizard" => Ok(Theme::Wizard),
            other => bail!("Unknown theme: '{}'", other),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Modern => "modern",
            Theme::Wizard => "wizard",
        }
    }

    /// Label shown in the theme switcher
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Modern => "Modern",
            Theme::Wizard => "Wizard",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
