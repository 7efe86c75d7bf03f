//! Shopping basket dialog ("Warenkorb").

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::Cart;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

/// Outcome of a basket key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketAction {
    /// Nothing to do for the caller.
    None,
    /// Close the basket and return to the landing page.
    Close,
    /// Place the order ("Bestellen").
    Checkout,
}

/// Selection and inline quantity editor of the basket dialog.
#[derive(Debug, Clone, Default)]
pub struct BasketState {
    selected: usize,
    editor: Option<TextInput>,
}

impl BasketState {
    /// Returns the selected row index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Returns whether the quantity editor is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Handles a key press against the given basket.
    pub fn handle_key(&mut self, key: KeyEvent, cart: &mut Cart) -> BasketAction {
        if let Some(ref mut editor) = self.editor {
            match key.code {
                KeyCode::Enter => {
                    // Whatever was typed is stored as-is; an unparseable
                    // edit becomes NaN.
                    let quantity = editor.value().trim().parse::<f64>().unwrap_or(f64::NAN);
                    cart.set_quantity(self.selected, quantity);
                    self.editor = None;
                }
                KeyCode::Esc => {
                    self.editor = None;
                }
                _ => {
                    editor.handle_key(key);
                }
            }
            return BasketAction::None;
        }

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < cart.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(item) = cart.items().get(self.selected) {
                    let mut editor = TextInput::new("Menge").numeric();
                    editor.set_value(format_quantity(item.quantity()));
                    editor.set_focused(true);
                    self.editor = Some(editor);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                cart.remove(self.selected);
                if self.selected >= cart.len() && self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Char('b') => return BasketAction::Checkout,
            KeyCode::Esc => return BasketAction::Close,
            _ => {}
        }

        BasketAction::None
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.is_finite() && quantity.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        return format!("{}", quantity as i64);
    }
    format!("{quantity}")
}

pub struct BasketStyle {
    pub border: Style,
    pub selection: Style,
    pub total: Style,
    pub dimmed: Style,
    pub editor: Style,
}

impl BasketStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            selection: theme.selection_style,
            total: Style::default().add_modifier(Modifier::BOLD),
            dimmed: theme.dimmed_style,
            editor: Style::default().bg(Color::White).fg(Color::Black),
        }
    }
}

impl Default for BasketStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// The basket dialog widget.
pub struct BasketView<'a> {
    cart: &'a Cart,
    prep_time: &'a str,
    style: BasketStyle,
}

impl<'a> BasketView<'a> {
    #[must_use]
    pub fn new(cart: &'a Cart, prep_time: &'a str) -> Self {
        Self {
            cart,
            prep_time,
            style: BasketStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: BasketStyle) -> Self {
        self.style = style;
        self
    }

    fn row_line(&self, index: usize, state: &BasketState) -> Line<'static> {
        let item = &self.cart.items()[index];
        let selected = index == state.selected;

        let name_style = if selected {
            self.style.selection
        } else {
            Style::default()
        };

        let quantity_span = match (&state.editor, selected) {
            (Some(editor), true) => {
                Span::styled(format!(" {} ", editor.value()), self.style.editor)
            }
            _ => Span::styled(format!("x {}", format_quantity(item.quantity())), name_style),
        };

        Line::from(vec![
            Span::styled(format!(" {:<24}", item.name()), name_style),
            quantity_span,
            Span::styled(
                format!("   {:.2} 🪙", item.unit_price()),
                if selected { self.style.selection } else { self.style.dimmed },
            ),
        ])
    }
}

impl StatefulWidget for BasketView<'_> {
    type State = BasketState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(" Warenkorb ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for index in 0..self.cart.len() {
            lines.push(self.row_line(index, state));
        }
        if self.cart.is_empty() {
            lines.push(Line::from(Span::styled(
                " Der Warenkorb ist leer".to_string(),
                self.style.dimmed,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Gesamt".to_string(), self.style.total),
            Span::styled(
                format!("  {:.2} 🪙", self.cart.total()),
                self.style.total,
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" geschätzte Zubereitungszeit ⏳ {}", self.prep_time),
            self.style.dimmed,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [b] Bestellen".to_string(),
            self.style.total,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::catalog::seed_cart;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Up), &mut cart);
        assert_eq!(state.selected(), 0);

        for _ in 0..10 {
            state.handle_key(key(KeyCode::Down), &mut cart);
        }
        assert_eq!(state.selected(), cart.len() - 1);
    }

    #[test]
    fn test_delete_removes_selected_row() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Down), &mut cart);
        state.handle_key(key(KeyCode::Char('d')), &mut cart);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[1].name(), "Pommes Frites");
    }

    #[test]
    fn test_delete_last_row_moves_selection_up() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Down), &mut cart);
        state.handle_key(key(KeyCode::Down), &mut cart);
        state.handle_key(key(KeyCode::Char('d')), &mut cart);

        assert_eq!(state.selected(), cart.len() - 1);
    }

    #[test]
    fn test_quantity_edit_overwrites_value() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Enter), &mut cart);
        assert!(state.is_editing());

        // Replace the prefilled "3" with "12".
        state.handle_key(key(KeyCode::Backspace), &mut cart);
        state.handle_key(key(KeyCode::Char('1')), &mut cart);
        state.handle_key(key(KeyCode::Char('2')), &mut cart);
        state.handle_key(key(KeyCode::Enter), &mut cart);

        assert!(!state.is_editing());
        assert!((cart.items()[0].quantity() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_quantity_edit_stores_nan() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Enter), &mut cart);
        state.handle_key(key(KeyCode::Backspace), &mut cart);
        state.handle_key(key(KeyCode::Enter), &mut cart);

        assert!(cart.items()[0].quantity().is_nan());
        assert!(cart.total().is_nan());
    }

    #[test]
    fn test_escape_closes_or_cancels() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        state.handle_key(key(KeyCode::Enter), &mut cart);
        assert_eq!(state.handle_key(key(KeyCode::Esc), &mut cart), BasketAction::None);
        assert!(!state.is_editing());

        assert_eq!(state.handle_key(key(KeyCode::Esc), &mut cart), BasketAction::Close);
    }

    #[test]
    fn test_checkout_leaves_cart_untouched() {
        let mut cart = seed_cart();
        let mut state = BasketState::default();

        let action = state.handle_key(key(KeyCode::Char('b')), &mut cart);
        assert_eq!(action, BasketAction::Checkout);
        assert_eq!(cart.len(), 3);
    }
}
