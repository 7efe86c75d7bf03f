use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

pub struct HeaderBarStyle {
    pub background: Style,
    pub identity: Style,
    pub badge: Style,
    pub credits: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: Style::default(),
            identity: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            badge: theme.badge_style,
            credits: theme.panel_title_style,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Top bar of the visitor landing page: login number on the left, basket
/// and notification badges plus the credit balance on the right.
pub struct HeaderBar<'a> {
    login_number: &'a str,
    basket_count: usize,
    notification_count: usize,
    credit_balance: f64,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(login_number: &'a str, credit_balance: f64) -> Self {
        Self {
            login_number,
            basket_count: 0,
            notification_count: 0,
            credit_balance,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn basket_count(mut self, count: usize) -> Self {
        self.basket_count = count;
        self
    }

    #[must_use]
    pub const fn notification_count(mut self, count: usize) -> Self {
        self.notification_count = count;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn right_spans(&self) -> (Vec<Span<'static>>, u16) {
        let basket = format!(" 🛒 {} ", self.basket_count);
        let bell = format!(" 🔔 {} ", self.notification_count);
        let credits = format!(" 💳 {:.2} [+] ", self.credit_balance);

        #[allow(clippy::cast_possible_truncation)]
        let width = (basket.width() + 1 + bell.width() + 1 + credits.width()) as u16;

        let spans = vec![
            Span::styled(basket, self.style.badge),
            Span::raw(" "),
            Span::styled(bell, self.style.badge),
            Span::raw(" "),
            Span::styled(credits, self.style.credits),
        ];

        (spans, width)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let identity = format!(" ☰ 👤 {} ", self.login_number);
        let identity_width = (identity.width() as u16).min(area.width);
        let left_area = Rect::new(area.x, area.y, identity_width, 1);
        Paragraph::new(Line::from(Span::styled(identity, self.style.identity)))
            .render(left_area, buf);

        let (right_spans, right_width) = self.right_spans();
        if right_width < area.width.saturating_sub(identity_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(right_spans)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bar_creation() {
        let header = HeaderBar::new("B-111-111", 20.0)
            .basket_count(0)
            .notification_count(0);

        assert_eq!(header.login_number, "B-111-111");
        assert!((header.credit_balance - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_balance_is_rendered_with_two_decimals() {
        let header = HeaderBar::new("B-111-111", 12.0);
        let (spans, _) = header.right_spans();
        let credits = spans.last().unwrap().content.clone();
        assert!(credits.contains("12.00"));
    }
}
