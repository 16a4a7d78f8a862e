//! Players: a name and a cash balance.

use serde::{Deserialize, Serialize};

/// A player. The name is identity and immutable; the balance mutates.
///
/// ## Example
///
/// ```
/// use landlord::players::Player;
///
/// let mut alice = Player::new("Alice", 1500);
/// alice.set_cash(alice.cash() + 100);
/// assert_eq!(alice.cash(), 1600);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cash: i64,
}

impl Player {
    /// Create a player with a starting balance.
    #[must_use]
    pub fn new(name: impl Into<String>, cash: i64) -> Self {
        Self {
            name: name.into(),
            cash,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance.
    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Replace the balance.
    pub fn set_cash(&mut self, cash: i64) {
        self.cash = cash;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.cash)
    }
}
