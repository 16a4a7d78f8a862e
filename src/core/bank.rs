//! The bank as an explicit context value.
//!
//! There is no process-global instance: whoever needs the bank gets
//! handed a reference. Single-threaded use only.

use serde::{Deserialize, Serialize};

/// Cash-holding bank context.
///
/// Created once at setup and passed by reference to whichever component
/// needs it. The bank is also the default holder of unpurchased
/// properties; see [`Owner::Bank`](crate::core::Owner::Bank).
///
/// ## Example
///
/// ```
/// use landlord::core::Bank;
///
/// let mut bank = Bank::new(0);
/// bank.set_cash(1000);
/// assert_eq!(bank.cash(), 1000);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    cash: i64,
}

impl Bank {
    /// Create a bank holding `cash`.
    #[must_use]
    pub fn new(cash: i64) -> Self {
        Self { cash }
    }

    /// Current holdings.
    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Replace the holdings.
    pub fn set_cash(&mut self, cash: i64) {
        self.cash = cash;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_accessors() {
        let mut bank = Bank::new(0);
        assert_eq!(bank.cash(), 0);

        bank.set_cash(1000);
        assert_eq!(bank.cash(), 1000);

        bank.set_cash(500);
        assert_eq!(bank.cash(), 500);
    }

    #[test]
    fn test_shared_by_reference() {
        fn collect(bank: &mut Bank, amount: i64) {
            bank.set_cash(bank.cash() + amount);
        }

        let mut bank = Bank::default();
        collect(&mut bank, 200);
        collect(&mut bank, 400);
        assert_eq!(bank.cash(), 600);
    }
}
