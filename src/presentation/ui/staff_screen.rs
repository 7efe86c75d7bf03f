//! Placeholder screen for admin and vendor logins.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::Session;

/// Screen shown to Admin and Verkäufer roles.
pub struct StaffScreen {
    session: Session,
}

impl StaffScreen {
    /// Creates new staff screen.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Widget for &StaffScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Festival Food Buddy ");

        let inner = block.inner(area);
        block.render(area, buf);

        let welcome_layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = welcome_layout.areas(inner);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, message_area, _] = horizontal.areas(center);

        let lines = vec![
            Line::from(Span::styled(
                format!("Willkommen, {}!", self.session.role().label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Angemeldet als: "),
                Span::styled(
                    self.session.login_number().to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Die Ansicht für diese Rolle ist noch in Arbeit...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(lines).render(message_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn test_staff_screen_creation() {
        let session = Session::new("A-000-001", Role::Admin);
        let screen = StaffScreen::new(session);

        assert_eq!(screen.session().role(), Role::Admin);
    }
}
