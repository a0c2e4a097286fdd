//! Colour palette resolved from the configuration.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Resolved colours used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub ball_primary: Color,
    pub ball_hit: Color,
    pub ball_miss: Color,
    pub ball_hot: Color,
    pub ball_cold: Color,
    pub ball_text: Color,
    pub accent: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Build a theme, falling back to named colours for unparseable values.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            ball_primary: parse(&config.ball_primary, Color::Magenta),
            ball_hit: parse(&config.ball_hit, Color::Green),
            ball_miss: parse(&config.ball_miss, Color::Red),
            ball_hot: parse(&config.ball_hot, Color::LightRed),
            ball_cold: parse(&config.ball_cold, Color::Blue),
            ball_text: parse(&config.ball_text, Color::White),
            accent: parse(&config.accent, Color::Cyan),
            border: parse(&config.border, Color::DarkGray),
            muted: parse(&config.muted, Color::Gray),
        }
    }

    /// Style for block borders.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for section headings.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

fn parse(value: &str, fallback: Color) -> Color {
    match Color::from_str(value.trim()) {
        Ok(color) => color,
        Err(_) => {
            tracing::warn!(value, "invalid theme colour, using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colours_parsed() {
        let theme = Theme::default();
        assert_eq!(theme.ball_primary, Color::Rgb(0x7c, 0x3a, 0xed));
        assert_eq!(theme.ball_text, Color::Rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn test_named_and_invalid_colours() {
        let config = ThemeConfig {
            accent: "yellow".to_string(),
            ball_hit: "not-a-colour".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.ball_hit, Color::Green);
    }
}
