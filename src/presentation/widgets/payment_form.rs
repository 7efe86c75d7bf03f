//! Credit top-up dialog ("Guthaben aufladen").

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Checkbox, TextInput};

/// Selectable payment providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    ApplePay,
    GooglePay,
    Mastercard,
    Visa,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::ApplePay, Self::GooglePay, Self::Mastercard, Self::Visa];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApplePay => "Apple Pay",
            Self::GooglePay => "Google Pay",
            Self::Mastercard => "Mastercard",
            Self::Visa => "Visa",
        }
    }
}

/// Outcome of a top-up form key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentAction {
    None,
    /// Close the dialog without charging anything.
    Cancel,
    /// Top up the ledger by the entered amount.
    Confirm(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Amount,
    Method,
    Terms,
}

/// Input state of the top-up dialog.
#[derive(Debug, Clone)]
pub struct PaymentFormState {
    amount: TextInput,
    method_index: usize,
    terms: Checkbox,
    focus: Focus,
}

impl Default for PaymentFormState {
    fn default() -> Self {
        let mut amount = TextInput::new("Betrag").numeric().placeholder("0.00");
        amount.set_focused(true);
        Self {
            amount,
            method_index: 0,
            terms: Checkbox::new("Ich akzeptiere die AGB"),
            focus: Focus::Amount,
        }
    }
}

impl PaymentFormState {
    #[must_use]
    pub fn method(&self) -> PaymentMethod {
        PaymentMethod::ALL[self.method_index]
    }

    /// The entered amount; anything unparseable counts as zero.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount.value().trim().parse::<f64>().unwrap_or(0.0)
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Amount => Focus::Method,
            Focus::Method => Focus::Terms,
            Focus::Terms => Focus::Amount,
        };
        self.amount.set_focused(self.focus == Focus::Amount);
        self.terms.set_focused(self.focus == Focus::Terms);
    }

    /// Handles a key press and reports what the caller should do.
    pub fn handle_key(&mut self, key: KeyEvent) -> PaymentAction {
        match key.code {
            KeyCode::Esc => return PaymentAction::Cancel,
            KeyCode::Enter => return PaymentAction::Confirm(self.amount()),
            KeyCode::Tab => self.focus_next(),
            KeyCode::Up | KeyCode::Left if self.focus == Focus::Method => {
                self.method_index =
                    (self.method_index + PaymentMethod::ALL.len() - 1) % PaymentMethod::ALL.len();
            }
            KeyCode::Down | KeyCode::Right if self.focus == Focus::Method => {
                self.method_index = (self.method_index + 1) % PaymentMethod::ALL.len();
            }
            KeyCode::Char(' ') if self.focus == Focus::Terms => self.terms.toggle(),
            _ if self.focus == Focus::Amount => {
                self.amount.handle_key(key);
            }
            _ => {}
        }
        PaymentAction::None
    }
}

pub struct PaymentFormStyle {
    pub border: Style,
    pub selection: Style,
    pub dimmed: Style,
    pub hint: Style,
}

impl PaymentFormStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            selection: theme.selection_style,
            dimmed: theme.dimmed_style,
            hint: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for PaymentFormStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// The top-up dialog widget.
pub struct PaymentForm {
    style: PaymentFormStyle,
}

impl PaymentForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: PaymentFormStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: PaymentFormStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for PaymentForm {
    type State = PaymentFormState;

    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(" Guthaben aufladen ");
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(PaymentMethod::ALL.len() as u16 + 1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        (&state.amount).render(chunks[0], buf);

        let mut method_lines = vec![Line::from(Span::styled(
            "Zahlungsart".to_string(),
            self.style.dimmed,
        ))];
        for (index, method) in PaymentMethod::ALL.iter().enumerate() {
            let marker = if index == state.method_index { "●" } else { "○" };
            let style = if index == state.method_index && state.focus == Focus::Method {
                self.style.selection
            } else {
                Style::default()
            };
            method_lines.push(Line::from(Span::styled(
                format!(" {marker} {}", method.label()),
                style,
            )));
        }
        Paragraph::new(method_lines).render(chunks[1], buf);

        (&state.terms).render(chunks[2], buf);

        Paragraph::new(Line::from(Span::styled(
            " [Enter] Aufladen  [Esc] Abbrechen".to_string(),
            self.style.hint,
        )))
        .render(chunks[3], buf);
    }
}
