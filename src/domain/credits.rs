//! Festival credit balance.

/// A single credit balance mutated by additive deltas.
///
/// Nothing prevents the balance from going negative; top-ups and checkouts
/// both go through [`CreditLedger::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditLedger {
    balance: f64,
}

impl CreditLedger {
    /// Creates a ledger with an opening balance.
    #[must_use]
    pub const fn new(opening_balance: f64) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds `delta` to the balance. Negative deltas pay for orders.
    pub fn apply(&mut self, delta: f64) {
        self.balance += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_accumulate_in_any_order() {
        let mut a = CreditLedger::new(20.0);
        a.apply(20.0);
        a.apply(-8.0);

        let mut b = CreditLedger::new(20.0);
        b.apply(-8.0);
        b.apply(20.0);

        assert!((a.balance() - 32.0).abs() < f64::EPSILON);
        assert!((a.balance() - b.balance()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let mut ledger = CreditLedger::new(5.0);
        ledger.apply(-72.0);
        assert!(ledger.balance() < 0.0);
    }
}
