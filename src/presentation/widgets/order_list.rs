//! Order history panel with a status tab strip.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::{Order, OrderStatus};
use crate::presentation::theme::Theme;

/// Tab labels, in display order. The first tab shows everything.
pub const ORDER_TABS: [&str; 5] = [
    "alle",
    "in Bearbeitung",
    "Abholbereit",
    "Abgeholt",
    "Storniert",
];

/// Selected tab and scroll position of the order panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderListState {
    active_tab: usize,
    scroll: u16,
}

impl OrderListState {
    /// Selects the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % ORDER_TABS.len();
        self.scroll = 0;
    }

    /// Selects the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        self.active_tab = (self.active_tab + ORDER_TABS.len() - 1) % ORDER_TABS.len();
        self.scroll = 0;
    }

    /// Returns the index of the active tab.
    #[must_use]
    pub const fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Returns the status filter of the active tab; `None` shows everything.
    #[must_use]
    pub const fn active_filter(&self) -> Option<OrderStatus> {
        match self.active_tab {
            1 => Some(OrderStatus::InProgress),
            2 => Some(OrderStatus::ReadyForPickup),
            3 => Some(OrderStatus::PickedUp),
            4 => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Scrolls the order cards up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls the order cards down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

pub struct OrderListStyle {
    pub title: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub place: Style,
    pub dimmed: Style,
}

impl OrderListStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.panel_title_style.add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_inactive: Style::default().fg(Color::Gray),
            place: Style::default().add_modifier(Modifier::BOLD),
            dimmed: theme.dimmed_style,
        }
    }
}

impl Default for OrderListStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// The "Bestellungen" panel of the landing page.
pub struct OrderList<'a> {
    orders: &'a [Order],
    timestamp_format: &'a str,
    style: OrderListStyle,
}

impl<'a> OrderList<'a> {
    #[must_use]
    pub fn new(orders: &'a [Order], timestamp_format: &'a str) -> Self {
        Self {
            orders,
            timestamp_format,
            style: OrderListStyle::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: OrderListStyle) -> Self {
        self.style = style;
        self
    }

    fn tab_line(&self, state: &OrderListState) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in ORDER_TABS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" │ "));
            }
            let style = if i == state.active_tab() {
                self.style.tab_active
            } else {
                self.style.tab_inactive
            };
            spans.push(Span::styled((*tab).to_string(), style));
        }
        Line::from(spans)
    }

    fn card_lines(&self, state: &OrderListState) -> Vec<Line<'static>> {
        let filter = state.active_filter();
        let mut lines = Vec::new();

        for order in self
            .orders
            .iter()
            .filter(|o| filter.is_none_or(|status| o.status() == status))
        {
            lines.push(Line::from(vec![
                Span::styled(order.place().to_string(), self.style.place),
                Span::raw("  "),
                Span::styled(order.status_label().to_string(), self.style.dimmed),
                Span::styled(
                    format!(
                        " · {}",
                        order.placed_at().format(self.timestamp_format)
                    ),
                    self.style.dimmed,
                ),
            ]));
            for line in order.lines() {
                lines.push(Line::from(format!(
                    "  {}  x{}",
                    line.name(),
                    line.quantity()
                )));
            }
            lines.push(Line::from(""));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Keine Bestellungen".to_string(),
                self.style.dimmed,
            )));
        }

        lines
    }
}

impl StatefulWidget for OrderList<'_> {
    type State = OrderListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height < 3 {
            return;
        }

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [title_area, tab_area, content_area] = layout.areas(area);

        for x in title_area.left()..title_area.right() {
            buf[(x, title_area.y)].set_char(' ').set_style(self.style.title);
        }
        Paragraph::new(Line::from(Span::styled(" Bestellungen", self.style.title)))
            .render(title_area, buf);

        Paragraph::new(self.tab_line(state)).render(tab_area, buf);

        Paragraph::new(self.card_lines(state))
            .scroll((state.scroll, 0))
            .render(content_area, buf);
    }
}
