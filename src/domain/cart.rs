//! Shopping basket line items.

/// A single basket line.
///
/// Quantities are stored exactly as entered. Nothing clamps or validates
/// them; an unparseable edit leaves `NaN` in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    name: String,
    quantity: f64,
    unit_price: f64,
}

impl CartItem {
    /// Creates a basket line.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current quantity.
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the unit price in festival credits.
    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Returns quantity times unit price.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// The in-memory shopping basket.
///
/// Items have no identity beyond their list position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a basket from initial line items.
    #[must_use]
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Returns all line items in order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Overwrites the quantity of the line at `index`.
    ///
    /// Out-of-range indices are ignored. The value is taken as-is.
    pub fn set_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }

    /// Removes the line at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Returns the sum of all line totals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basket() -> Cart {
        Cart::new(vec![
            CartItem::new("Cheeseburger*", 3.0, 8.0),
            CartItem::new("Hamburger", 3.0, 8.0),
            CartItem::new("Pommes Frites", 3.0, 8.0),
        ])
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let cart = basket();
        assert!((cart.total() - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantity_overwrite_changes_total() {
        let mut cart = basket();
        cart.set_quantity(0, 1.0);
        assert!((cart.total() - 56.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_shrinks_by_one() {
        let mut cart = basket();
        let before = cart.len();
        cart.remove(1);
        assert_eq!(cart.len(), before - 1);
        assert_eq!(cart.items()[1].name(), "Pommes Frites");
    }

    #[test]
    fn test_out_of_range_ops_are_ignored() {
        let mut cart = basket();
        cart.set_quantity(99, 5.0);
        cart.remove(99);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_quantities_are_not_clamped() {
        let mut cart = basket();
        cart.set_quantity(0, -2.0);
        assert!((cart.items()[0].line_total() + 16.0).abs() < f64::EPSILON);

        cart.set_quantity(0, f64::NAN);
        assert!(cart.total().is_nan());
    }
}
