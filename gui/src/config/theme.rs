// Theme specific configurations (colors applied outside the chart/gauge
// styling that comes from default.json).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub accent: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            muted: "#787b86".to_string(),
            accent: "#00cfbe".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#131722".to_string(),
            muted: "#9598a1".to_string(),
            accent: "#009688".to_string(),
        }
    }

    /// Palette for the theme name used in AppConfig ("dark" / "light").
    /// Unknown names fall back to dark.
    pub fn for_name(name: &str) -> Self {
        match name {
            "light" => Self::default_light(),
            _ => Self::default_dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name_selects_palette() {
        assert_eq!(ThemePalette::for_name("light"), ThemePalette::default_light());
        assert_eq!(ThemePalette::for_name("dark"), ThemePalette::default_dark());
        assert_eq!(ThemePalette::for_name("solarized"), ThemePalette::default_dark());
    }
}
