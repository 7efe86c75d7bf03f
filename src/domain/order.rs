//! Order history entities.

use chrono::{DateTime, Local};

/// Lifecycle state of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Being prepared ("in Bearbeitung").
    InProgress,
    /// Ready for pickup ("Abholbereit").
    ReadyForPickup,
    /// Picked up ("Abgeholt").
    PickedUp,
    /// Cancelled ("Storniert").
    Cancelled,
}

impl OrderStatus {
    /// German label as shown in the tab strip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in Bearbeitung",
            Self::ReadyForPickup => "Abholbereit",
            Self::PickedUp => "Abgeholt",
            Self::Cancelled => "Storniert",
        }
    }
}

/// A single position within an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    name: String,
    quantity: u32,
}

impl OrderLine {
    /// Creates an order line.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Returns the dish name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A past or running order at a food stand.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    place: String,
    status: OrderStatus,
    status_label: String,
    placed_at: DateTime<Local>,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an order whose displayed status equals the status label.
    #[must_use]
    pub fn new(
        place: impl Into<String>,
        status: OrderStatus,
        placed_at: DateTime<Local>,
        lines: Vec<OrderLine>,
    ) -> Self {
        Self {
            place: place.into(),
            status,
            status_label: status.label().to_string(),
            placed_at,
            lines,
        }
    }

    /// Overrides the displayed status label, e.g. a remaining wait time.
    #[must_use]
    pub fn with_status_label(mut self, label: impl Into<String>) -> Self {
        self.status_label = label.into();
        self
    }

    /// Returns the stand name.
    #[must_use]
    pub fn place(&self) -> &str {
        &self.place
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the label shown next to the stand name.
    #[must_use]
    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    /// Returns when the order was placed.
    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Local> {
        self.placed_at
    }

    /// Returns the ordered positions.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label_defaults_to_status() {
        let order = Order::new("Burger Place", OrderStatus::PickedUp, Local::now(), vec![]);
        assert_eq!(order.status_label(), "Abgeholt");
    }

    #[test]
    fn test_status_label_override() {
        let order = Order::new("Pizza Place", OrderStatus::InProgress, Local::now(), vec![])
            .with_status_label("30 Min");
        assert_eq!(order.status(), OrderStatus::InProgress);
        assert_eq!(order.status_label(), "30 Min");
    }
}
