//! Checkbox widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A labeled checkbox toggled with the space key.
#[derive(Debug, Clone)]
pub struct Checkbox {
    label: String,
    checked: bool,
    focused: bool,
}

impl Checkbox {
    /// Creates an unchecked checkbox.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            focused: false,
        }
    }

    /// Returns whether the box is checked.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flips the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Widget for &Checkbox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let marker = if self.checked { "[x]" } else { "[ ]" };
        let marker_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let line = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(" "),
            Span::raw(self.label.as_str()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut checkbox = Checkbox::new("Angemeldet bleiben");
        assert!(!checkbox.is_checked());

        checkbox.toggle();
        assert!(checkbox.is_checked());

        checkbox.toggle();
        assert!(!checkbox.is_checked());
    }
}
