//! Registration screen.

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
pub enum RegisterAction {
    None,
    Submit,
    SwitchToLogin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    LoginNumber,
    Password,
    PasswordConfirm,
    Remember,
}

/// Registration screen UI.
pub struct RegisterScreen {
    login_input: TextInput,
    password_input: TextInput,
    confirm_input: TextInput,
    remember: Checkbox,
    focus: Focus,
}

impl RegisterScreen {
    /// Creates new registration screen.
    #[must_use]
    pub fn new() -> Self {
        let mut login_input =
            TextInput::new("Login-Nr.").placeholder("Login-Nr. vom Festivalband");
        login_input.set_focused(true);

        Self {
            login_input,
            password_input: TextInput::new("Passwort").password(),
            confirm_input: TextInput::new("Passwort bestätigen").password(),
            remember: Checkbox::new("Angemeldet bleiben"),
            focus: Focus::LoginNumber,
        }
    }

    /// Returns the entered login number.
    #[must_use]
    pub fn login_number(&self) -> &str {
        self.login_input.value()
    }

    /// Clears all three text fields after a failed attempt.
    pub fn clear(&mut self) {
        self.login_input.clear();
        self.password_input.clear();
        self.confirm_input.clear();
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::LoginNumber => Focus::Password,
            Focus::Password => Focus::PasswordConfirm,
            Focus::PasswordConfirm => Focus::Remember,
            Focus::Remember => Focus::LoginNumber,
        };
        self.login_input.set_focused(self.focus == Focus::LoginNumber);
        self.password_input.set_focused(self.focus == Focus::Password);
        self.confirm_input
            .set_focused(self.focus == Focus::PasswordConfirm);
        self.remember.set_focused(self.focus == Focus::Remember);
    }

    fn passwords_match(&self) -> bool {
        let password = self.password_input.value();
        !password.is_empty() && password == self.confirm_input.value()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> RegisterAction {
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return RegisterAction::SwitchToLogin;
        }

        match key.code {
            // Submits are swallowed unless both password fields agree.
            KeyCode::Enter => {
                if self.passwords_match() {
                    return RegisterAction::Submit;
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
                Focus::PasswordConfirm => {
                    self.confirm_input.handle_key(key);
                }
                Focus::Remember => {}
            },
        }
        RegisterAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
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
            .title(" Registrieren ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<7>(inner);

        Paragraph::new("Neues Konto mit Login-Nr. anlegen")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.login_input).render(areas[1], buf);
        (&self.password_input).render(areas[2], buf);
        (&self.confirm_input).render(areas[3], buf);
        (&self.remember).render(areas[4], buf);

        let hints = Line::from(vec![
            Span::styled("Enter: Registrieren", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Feld", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Strg+L: Anmelden", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Beenden", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[6], buf);
    }
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &RegisterScreen {
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

    fn fill(screen: &mut RegisterScreen, login: &str, password: &str, confirm: &str) {
        for ch in login.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        screen.handle_key(key(KeyCode::Tab));
        for ch in password.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        screen.handle_key(key(KeyCode::Tab));
        for ch in confirm.chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_submit_requires_matching_passwords() {
        let mut screen = RegisterScreen::new();
        fill(&mut screen, "B-111-111", "pw", "other");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), RegisterAction::None);
    }

    #[test]
    fn test_submit_with_matching_passwords() {
        let mut screen = RegisterScreen::new();
        fill(&mut screen, "B-111-111", "pw", "pw");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            RegisterAction::Submit
        );
        assert_eq!(screen.login_number(), "B-111-111");
    }

    #[test]
    fn test_empty_passwords_do_not_submit() {
        let mut screen = RegisterScreen::new();
        for ch in "B-111-111".chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), RegisterAction::None);
    }

    #[test]
    fn test_ctrl_l_switches_to_login() {
        let mut screen = RegisterScreen::new();
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(ctrl_l), RegisterAction::SwitchToLogin);
    }

    #[test]
    fn test_clear_wipes_all_fields() {
        let mut screen = RegisterScreen::new();
        fill(&mut screen, "X-999", "pw", "pw");
        screen.clear();

        assert!(screen.login_number().is_empty());
        assert!(screen.password_input.value().is_empty());
        assert!(screen.confirm_input.value().is_empty());
    }
}
