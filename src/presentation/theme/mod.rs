//! Accent-color driven styling.

pub mod adapter;

use adapter::ColorConverter;
use ratatui::style::{Color, Style};
use std::str::FromStr;

/// Styles derived from the configured accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub panel_title_style: Style,
    pub badge_style: Style,
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Blue")
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a concrete accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut selection_bg_hsl = accent_hsl;
        selection_bg_hsl.l = 0.2;
        selection_bg_hsl.s = 0.3;
        let selection_bg = ColorConverter::to_ratatui(selection_bg_hsl);

        let mut title_bg_hsl = accent_hsl;
        title_bg_hsl.l = 0.25;
        title_bg_hsl.s = 0.6;
        let title_bg = ColorConverter::to_ratatui(title_bg_hsl);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            panel_title_style: Style::default().bg(title_bg).fg(Color::White),
            badge_style: Style::default().bg(Color::Red).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    Color::Blue
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() || s.len() != 6 {
        return Err(());
    }

    let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
    let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
    let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let theme = Theme::new("Green");
        assert_eq!(theme.accent, Color::Green);
    }

    #[test]
    fn test_hex_color() {
        let theme = Theme::new("#1f3a93");
        assert_eq!(theme.accent, Color::Rgb(31, 58, 147));
    }

    #[test]
    fn test_unknown_falls_back_to_blue() {
        let theme = Theme::new("definitely-not-a-color");
        assert_eq!(theme.accent, Color::Blue);
    }
}
