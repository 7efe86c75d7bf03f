//! Reusable TUI widgets.

pub mod basket;
pub mod checkbox;
pub mod footer_bar;
pub mod header_bar;
pub mod input;
pub mod notification_popup;
pub mod order_list;
pub mod payment_form;
pub mod stand_list;

pub use basket::{BasketAction, BasketState, BasketStyle, BasketView};
pub use checkbox::Checkbox;
pub use footer_bar::{FooterBar, FooterBarStyle, PageContext};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use notification_popup::NotificationPopup;
pub use order_list::{OrderList, OrderListState, OrderListStyle, ORDER_TABS};
pub use payment_form::{
    PaymentAction, PaymentForm, PaymentFormState, PaymentFormStyle, PaymentMethod,
};
pub use stand_list::{StandList, StandListStyle};
