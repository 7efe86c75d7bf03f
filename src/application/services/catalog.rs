//! Hardcoded demo data backing the mockup screens.
//!
//! There is no backend; everything a fresh visitor session sees comes from
//! these seed functions.

use chrono::{Duration, Local};

use crate::domain::{Cart, CartItem, FoodStand, Order, OrderLine, OrderStatus, StandOffer};

/// Credits every visitor session starts with.
pub const OPENING_BALANCE: f64 = 20.0;

/// Estimated preparation time shown in the basket.
pub const PREP_TIME_LABEL: &str = "30 Min";

/// Returns the pre-filled shopping basket.
#[must_use]
pub fn seed_cart() -> Cart {
    Cart::new(vec![
        CartItem::new("Cheeseburger*", 3.0, 8.0),
        CartItem::new("Hamburger", 3.0, 8.0),
        CartItem::new("Pommes Frites", 3.0, 8.0),
    ])
}

/// Returns the order history shown on the landing page.
#[must_use]
pub fn seed_orders() -> Vec<Order> {
    let now = Local::now();

    vec![
        Order::new(
            "Pizza Place",
            OrderStatus::InProgress,
            now - Duration::minutes(12),
            vec![
                OrderLine::new("Pizza Hawai", 1),
                OrderLine::new("Pizza Salame", 2),
                OrderLine::new("Pizza Speciale", 3),
            ],
        )
        .with_status_label("30 Min"),
        Order::new(
            "Burger Place",
            OrderStatus::PickedUp,
            now - Duration::hours(1),
            vec![
                OrderLine::new("Cheeseburger", 1),
                OrderLine::new("Hamburger", 2),
                OrderLine::new("Pommes Frites", 3),
            ],
        ),
        Order::new(
            "Sushi Place",
            OrderStatus::Cancelled,
            now - Duration::hours(2),
            vec![
                OrderLine::new("Nori Rolls", 1),
                OrderLine::new("Maki Rolls", 2),
                OrderLine::new("California Rolls", 3),
            ],
        ),
    ]
}

/// Returns the stand overview entries.
#[must_use]
pub fn seed_stands() -> Vec<FoodStand> {
    vec![
        FoodStand::new(
            "Pizza Place",
            "🍕",
            "30 Min",
            vec![StandOffer::new("🍕", 30), StandOffer::new("🍗", 20)],
        ),
        FoodStand::new(
            "Asia Place",
            "🍣",
            "1 Std",
            vec![
                StandOffer::new("🐟", 30),
                StandOffer::new("🍗", 15),
                StandOffer::new("🍗", 20),
            ],
        ),
    ]
}
