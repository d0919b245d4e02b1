//! Theming system for coursedeck

mod tokyo_night;

pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Lesson content
    pub code: Color,
    pub quote: Color,

    // Course color tags
    pub palette: Palette,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

/// Named colors that course color tags resolve to
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Palette {
    pub blue: Color,
    pub purple: Color,
    pub green: Color,
    pub orange: Color,
    pub red: Color,
    pub cyan: Color,
    pub yellow: Color,
    pub pink: Color,
}

impl Theme {
    /// Look up a built-in theme by name, ignoring case, spaces, dashes and underscores
    pub fn by_name(name: &str) -> Option<Theme> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "tokyonight" => Some(Theme::tokyo_night()),
            _ => None,
        }
    }

    /// Resolve a course color tag; unknown tags use the primary accent
    pub fn tag_color(&self, tag: &str) -> Color {
        match tag.trim().to_ascii_lowercase().as_str() {
            "blue" => self.palette.blue,
            "purple" | "violet" => self.palette.purple,
            "green" => self.palette.green,
            "orange" => self.palette.orange,
            "red" => self.palette.red,
            "cyan" | "teal" => self.palette.cyan,
            "yellow" => self.palette.yellow,
            "pink" => self.palette.pink,
            _ => self.accent_primary,
        }
    }

    /// Color for a difficulty badge
    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Beginner => self.success,
            Difficulty::Intermediate => self.warning,
            Difficulty::Advanced => self.error,
            Difficulty::Unrated => self.fg_muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn themes_resolve_by_name() {
        assert_eq!(Theme::by_name("Tokyo Night").map(|t| t.name), Some("Tokyo Night".into()));
        assert!(Theme::by_name("tokyo-night").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn known_color_tags_resolve() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color("green"), theme.palette.green);
        assert_eq!(theme.tag_color(" Blue "), theme.palette.blue);
    }

    #[test]
    fn unknown_color_tag_falls_back_to_accent() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color("chartreuse"), theme.accent_primary);
        assert_eq!(theme.tag_color(""), theme.accent_primary);
    }

    #[test]
    fn difficulty_colors_are_semantic() {
        let theme = Theme::default();
        assert_eq!(theme.difficulty_color(Difficulty::Beginner), theme.success);
        assert_eq!(theme.difficulty_color(Difficulty::Advanced), theme.error);
        assert_eq!(theme.difficulty_color(Difficulty::Unrated), theme.fg_muted);
    }
}
