//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::widgets::{Checkbox, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    SwitchToRegister,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    LoginNumber,
    Password,
    Remember,
}

/// Login screen UI.
pub struct LoginScreen {
    login_input: TextInput,
    password_input: TextInput,
    remember: Checkbox,
    focus: Focus,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut login_input = TextInput::new("Login-Nr.").placeholder("B-111-111");
        login_input.set_focused(true);
        let password_input = TextInput::new("Passwort").password();

        Self {
            login_input,
            password_input,
            remember: Checkbox::new("Angemeldet bleiben"),
            focus: Focus::LoginNumber,
        }
    }

    /// Returns the entered login number.
    #[must_use]
    pub fn login_number(&self) -> &str {
        self.login_input.value()
    }

    /// Clears both text fields after a failed attempt.
    pub fn clear(&mut self) {
        self.login_input.clear();
        self.password_input.clear();
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::LoginNumber => Focus::Password,
            Focus::Password => Focus::Remember,
            Focus::Remember => Focus::LoginNumber,
        };
        self.login_input.set_focused(self.focus == Focus::LoginNumber);
        self.password_input.set_focused(self.focus == Focus::Password);
        self.remember.set_focused(self.focus == Focus::Remember);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return LoginAction::SwitchToRegister;
        }

        match key.code {
            // Submits are swallowed until a password was typed. Nothing
            // checks it afterwards.
            KeyCode::Enter => {
                if !self.password_input.value().is_empty() {
                    return LoginAction::Submit;
                }
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::Char(' ') if self.focus == Focus::Remember => self.remember.toggle(),
            _ => match self.focus {
                Focus::LoginNumber => {
                    self.login_input.handle_key(key);
                }
                Focus::Password => {
                    self.password_input.handle_key(key);
                }
                Focus::Remember => {}
            },
        }
        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Festival Food Buddy ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<6>(inner);

        Paragraph::new("Mit Login-Nr. anmelden")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.login_input).render(areas[1], buf);
        (&self.password_input).render(areas[2], buf);
        (&self.remember).render(areas[3], buf);

        let hints = Line::from(vec![
            Span::styled("Enter: Anmelden", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Feld", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Strg+R: Registrieren", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Beenden", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[5], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill(screen: &mut LoginScreen, login: &str, password: &str) {
        for ch in login.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        screen.handle_key(key(KeyCode::Tab));
        for ch in password.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_typing() {
        let mut screen = LoginScreen::new();
        fill(&mut screen, "V-123", "pw");

        assert_eq!(screen.login_number(), "V-123");
        assert_eq!(screen.password_input.value(), "pw");
    }

    #[test]
    fn test_submit_requires_password() {
        let mut screen = LoginScreen::new();
        for ch in "B-111-111".chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_ctrl_r_switches_to_register() {
        let mut screen = LoginScreen::new();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(ctrl_r), LoginAction::SwitchToRegister);
    }

    #[test]
    fn test_remember_toggle() {
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert!(!screen.remember.is_checked());

        screen.handle_key(key(KeyCode::Char(' ')));
        assert!(screen.remember.is_checked());
    }

    #[test]
    fn test_clear_wipes_both_fields() {
        let mut screen = LoginScreen::new();
        fill(&mut screen, "X-999", "pw");
        screen.clear();

        assert!(screen.login_number().is_empty());
        assert!(screen.password_input.value().is_empty());
    }
}
