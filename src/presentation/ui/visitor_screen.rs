//! Visitor landing page with basket and top-up dialogs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};
use tracing::info;

use crate::application::services::catalog::{self, PREP_TIME_LABEL};
use crate::domain::{Cart, CreditLedger, FoodStand, Order, Session};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BasketAction, BasketState, BasketStyle, BasketView, FooterBar, FooterBarStyle, HeaderBar,
    HeaderBarStyle, OrderList, OrderListState, OrderListStyle, PageContext, PaymentAction,
    PaymentForm, PaymentFormState, PaymentFormStyle, StandList, StandListStyle,
};

/// Which page of the visitor view is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    MainPage,
    Basket,
    Payment,
}

/// Result of a visitor screen key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisitorAction {
    None,
    Quit,
    /// An order was placed for the given total.
    OrderPlaced { total: f64 },
    /// Credits were added via the top-up dialog.
    CreditsAdded { amount: f64 },
}

/// The visitor landing page and its dialogs.
pub struct VisitorScreen {
    session: Session,
    cart: Cart,
    ledger: CreditLedger,
    orders: Vec<Order>,
    stands: Vec<FoodStand>,
    page: ActivePage,
    stands_collapsed: bool,
    order_list_state: OrderListState,
    basket_state: BasketState,
    payment_state: PaymentFormState,
    timestamp_format: String,
    theme: Theme,
}

impl VisitorScreen {
    /// Creates the landing page with the seeded demo data.
    #[must_use]
    pub fn new(session: Session, timestamp_format: String, theme: Theme) -> Self {
        Self {
            session,
            cart: catalog::seed_cart(),
            ledger: CreditLedger::new(catalog::OPENING_BALANCE),
            orders: catalog::seed_orders(),
            stands: catalog::seed_stands(),
            page: ActivePage::MainPage,
            stands_collapsed: false,
            order_list_state: OrderListState::default(),
            basket_state: BasketState::default(),
            payment_state: PaymentFormState::default(),
            timestamp_format,
            theme,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn page(&self) -> ActivePage {
        self.page
    }

    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adjusts the balance and returns to the landing page.
    pub fn add_credits(&mut self, delta: f64) {
        self.ledger.apply(delta);
        self.page = ActivePage::MainPage;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> VisitorAction {
        match self.page {
            ActivePage::MainPage => self.handle_main_key(key),
            ActivePage::Basket => self.handle_basket_key(key),
            ActivePage::Payment => self.handle_payment_key(key),
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> VisitorAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return VisitorAction::Quit,
            KeyCode::Char('w') => self.page = ActivePage::Basket,
            KeyCode::Char('p') => {
                self.payment_state = PaymentFormState::default();
                self.page = ActivePage::Payment;
            }
            KeyCode::Char('s') => self.stands_collapsed = !self.stands_collapsed,
            KeyCode::Tab => self.order_list_state.next_tab(),
            KeyCode::BackTab => self.order_list_state.prev_tab(),
            KeyCode::Up => self.order_list_state.scroll_up(),
            KeyCode::Down => self.order_list_state.scroll_down(),
            _ => {}
        }
        VisitorAction::None
    }

    fn handle_basket_key(&mut self, key: KeyEvent) -> VisitorAction {
        match self.basket_state.handle_key(key, &mut self.cart) {
            BasketAction::None => VisitorAction::None,
            BasketAction::Close => {
                self.page = ActivePage::MainPage;
                VisitorAction::None
            }
            BasketAction::Checkout => {
                let total = self.cart.total();
                info!(total, "order placed");
                self.add_credits(-total);
                VisitorAction::OrderPlaced { total }
            }
        }
    }

    fn handle_payment_key(&mut self, key: KeyEvent) -> VisitorAction {
        match self.payment_state.handle_key(key) {
            PaymentAction::None => VisitorAction::None,
            PaymentAction::Cancel => {
                self.page = ActivePage::MainPage;
                VisitorAction::None
            }
            PaymentAction::Confirm(amount) => {
                info!(amount, method = self.payment_state.method().label(), "credits added");
                self.add_credits(amount);
                VisitorAction::CreditsAdded { amount }
            }
        }
    }

    fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(width),
            Constraint::Fill(1),
        ]);
        let [_, centered, _] = horizontal.areas(area);

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Max(height),
            Constraint::Fill(1),
        ]);
        let [_, dialog, _] = vertical.areas(centered);
        dialog
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_inner(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, content_area, footer_area] = layout.areas(area);

        HeaderBar::new(self.session.login_number(), self.ledger.balance())
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let stand_height = if self.stands_collapsed {
            1
        } else {
            self.stands.len() as u16 * 4 + 1
        };
        let content = Layout::vertical([Constraint::Fill(1), Constraint::Length(stand_height)]);
        let [orders_area, stands_area] = content.areas(content_area);

        OrderList::new(&self.orders, &self.timestamp_format)
            .style(OrderListStyle::from_theme(&self.theme))
            .render(orders_area, buf, &mut self.order_list_state);

        StandList::new(&self.stands)
            .collapsed(self.stands_collapsed)
            .style(StandListStyle::from_theme(&self.theme))
            .render(stands_area, buf);

        let context = match self.page {
            ActivePage::MainPage => PageContext::MainPage,
            ActivePage::Basket => PageContext::Basket,
            ActivePage::Payment => PageContext::Payment,
        };
        FooterBar::new(context)
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer_area, buf);

        match self.page {
            ActivePage::MainPage => {}
            ActivePage::Basket => {
                let dialog = Self::dialog_area(area, 50, self.cart.len() as u16 + 7);
                Clear.render(dialog, buf);
                BasketView::new(&self.cart, PREP_TIME_LABEL)
                    .style(BasketStyle::from_theme(&self.theme))
                    .render(dialog, buf, &mut self.basket_state);
            }
            ActivePage::Payment => {
                let dialog = Self::dialog_area(area, 50, 13);
                Clear.render(dialog, buf);
                PaymentForm::new()
                    .style(PaymentFormStyle::from_theme(&self.theme))
                    .render(dialog, buf, &mut self.payment_state);
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> VisitorScreen {
        let session = Session::new("V-123-456", Role::Visitor);
        VisitorScreen::new(session, "%H:%M".to_string(), Theme::default())
    }

    #[test]
    fn test_starts_on_main_page_with_opening_balance() {
        let screen = screen();
        assert_eq!(screen.page(), ActivePage::MainPage);
        assert!((screen.balance() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_basket_opens_and_closes() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('w')));
        assert_eq!(screen.page(), ActivePage::Basket);

        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.page(), ActivePage::MainPage);
    }

    #[test]
    fn test_checkout_charges_total_and_keeps_items() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('w')));
        let action = screen.handle_key(key(KeyCode::Char('b')));

        assert_eq!(action, VisitorAction::OrderPlaced { total: 72.0 });
        assert_eq!(screen.page(), ActivePage::MainPage);
        assert!((screen.balance() - (20.0 - 72.0)).abs() < f64::EPSILON);
        assert_eq!(screen.cart().len(), 3);
    }

    #[test]
    fn test_top_up_adds_credits_and_returns_to_main_page() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('p')));
        assert_eq!(screen.page(), ActivePage::Payment);

        for ch in "25".chars() {
            screen.handle_key(key(KeyCode::Char(ch)));
        }
        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, VisitorAction::CreditsAdded { amount: 25.0 });
        assert_eq!(screen.page(), ActivePage::MainPage);
        assert!((screen.balance() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_payment_cancel_leaves_balance_unchanged() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('p')));
        screen.handle_key(key(KeyCode::Esc));

        assert_eq!(screen.page(), ActivePage::MainPage);
        assert!((screen.balance() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quit_only_from_main_page() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), VisitorAction::Quit);

        screen.handle_key(key(KeyCode::Char('w')));
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), VisitorAction::None);
    }

    #[test]
    fn test_stand_panel_toggles() {
        let mut screen = screen();
        assert!(!screen.stands_collapsed);
        screen.handle_key(key(KeyCode::Char('s')));
        assert!(screen.stands_collapsed);
    }
}
