//! Domain layer with the core mockup entities.

/// Shopping basket line items.
pub mod cart;
/// Festival credit balance.
pub mod credits;
/// Error types.
pub mod errors;
/// Transient notifications.
pub mod notification;
/// Order history entities.
pub mod order;
/// Role resolution.
pub mod role;
/// In-memory session.
pub mod session;
/// Food stand catalog.
pub mod stand;

pub use cart::{Cart, CartItem};
pub use credits::CreditLedger;
pub use errors::AccessError;
pub use notification::{Notification, NotificationLevel};
pub use order::{Order, OrderLine, OrderStatus};
pub use role::Role;
pub use session::Session;
pub use stand::{FoodStand, StandOffer};
