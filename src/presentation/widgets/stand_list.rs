//! Collapsible "Stand Übersicht" panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::FoodStand;
use crate::presentation::theme::Theme;

pub struct StandListStyle {
    pub title: Style,
    pub name: Style,
    pub dimmed: Style,
}

impl StandListStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.panel_title_style.add_modifier(Modifier::BOLD),
            name: Style::default().add_modifier(Modifier::BOLD),
            dimmed: theme.dimmed_style,
        }
    }
}

impl Default for StandListStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Stand overview; collapsing hides everything but the title row.
pub struct StandList<'a> {
    stands: &'a [FoodStand],
    collapsed: bool,
    style: StandListStyle,
}

impl<'a> StandList<'a> {
    #[must_use]
    pub fn new(stands: &'a [FoodStand]) -> Self {
        Self {
            stands,
            collapsed: false,
            style: StandListStyle::default(),
        }
    }

    #[must_use]
    pub const fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    #[must_use]
    pub fn style(mut self, style: StandListStyle) -> Self {
        self.style = style;
        self
    }

    fn card_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for stand in self.stands {
            lines.push(Line::from(vec![
                Span::raw(format!("{}  ", stand.emblem())),
                Span::styled(stand.name().to_string(), self.style.name),
                Span::styled(
                    format!("  ⏳ {}", stand.wait_time()),
                    self.style.dimmed,
                ),
            ]));

            let mut offer_spans = vec![Span::styled(
                "  Verfügbar: ".to_string(),
                self.style.dimmed,
            )];
            for (i, offer) in stand.offers().iter().enumerate() {
                if i > 0 {
                    offer_spans.push(Span::raw("  "));
                }
                offer_spans.push(Span::raw(format!(
                    "{} {}",
                    offer.icon(),
                    offer.available()
                )));
            }
            lines.push(Line::from(offer_spans));
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Widget for StandList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let marker = if self.collapsed { "▸" } else { "▾" };
        let title_area = Rect::new(area.x, area.y, area.width, 1);
        for x in title_area.left()..title_area.right() {
            buf[(x, title_area.y)].set_char(' ').set_style(self.style.title);
        }
        Paragraph::new(Line::from(Span::styled(
            format!(" {marker} Stand Übersicht"),
            self.style.title,
        )))
        .render(title_area, buf);

        if self.collapsed || area.height < 2 {
            return;
        }

        let content_area = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height - 1,
        );
        Paragraph::new(self.card_lines())
            .style(Style::default().fg(Color::Reset))
            .render(content_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::catalog::seed_stands;

    #[test]
    fn test_card_lines_cover_all_stands() {
        let stands = seed_stands();
        let list = StandList::new(&stands);

        let text: String = list
            .card_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Pizza Place"));
        assert!(text.contains("Asia Place"));
        assert!(text.contains("1 Std"));
        assert!(text.contains("Verfügbar"));
    }
}
