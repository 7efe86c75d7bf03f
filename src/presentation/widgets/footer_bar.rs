use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Which page the footer describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageContext {
    #[default]
    MainPage,
    Payment,
    Basket,
}

impl PageContext {
    /// Key hints shown for the page, as (key, label) pairs.
    #[must_use]
    pub const fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::MainPage => &[
                ("w", "Warenkorb"),
                ("p", "Aufladen"),
                ("Tab", "Filter"),
                ("↑↓", "Blättern"),
                ("s", "Stände"),
                ("q", "Beenden"),
            ],
            Self::Payment => &[
                ("Tab", "Feld"),
                ("←→", "Methode"),
                ("Leertaste", "AGB"),
                ("Enter", "Bestätigen"),
                ("Esc", "Abbrechen"),
            ],
            Self::Basket => &[
                ("↑↓", "Auswahl"),
                ("Enter", "Menge"),
                ("d", "Entfernen"),
                ("b", "Bestellen"),
                ("Esc", "Schließen"),
            ],
        }
    }
}

pub struct FooterBarStyle {
    pub key_style: Style,
    pub label_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            key_style: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::Gray),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// One-line footer listing the keybindings of the active page.
pub struct FooterBar {
    context: PageContext,
    style: FooterBarStyle,
}

impl FooterBar {
    #[must_use]
    pub fn new(context: PageContext) -> Self {
        Self {
            context,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for FooterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in self.context.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.style.label_style));
            }
            spans.push(Span::styled(format!("{key}:"), self.style.key_style));
            spans.push(Span::styled(*label, self.style.label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_hints() {
        for context in [PageContext::MainPage, PageContext::Payment, PageContext::Basket] {
            assert!(!context.hints().is_empty());
        }
    }

    #[test]
    fn test_main_page_lists_navigation_keys() {
        let keys: Vec<&str> = PageContext::MainPage
            .hints()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        assert!(keys.contains(&"w"));
        assert!(keys.contains(&"p"));
    }
}
