//! Property ownership.
//!
//! The original domain marks "owned by the bank" with a sentinel owner
//! value. Here ownership is a tagged enum: a property either sits with
//! the bank or is held by a named player.

use serde::{Deserialize, Serialize};

/// Who holds a property.
///
/// `Owner::Bank` marks an unpurchased property and is the default.
/// Player identity is by name, matching player identity everywhere else
/// in the crate. An owner naming neither the bank nor a given player is
/// simply "someone else" - there is no error case.
///
/// ## Example
///
/// ```
/// use landlord::core::Owner;
///
/// let owner = Owner::player("Alice");
/// assert!(!owner.is_bank());
/// assert!(owner.is_player("Alice"));
/// assert!(!owner.is_player("Bob"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Unpurchased: the bank holds it.
    #[default]
    Bank,
    /// Held by the named player.
    Player(String),
}

impl Owner {
    /// Create a player owner.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Owner::Player(name.into())
    }

    /// Check whether the bank holds the property.
    #[must_use]
    pub fn is_bank(&self) -> bool {
        matches!(self, Owner::Bank)
    }

    /// Check whether the named player holds the property.
    #[must_use]
    pub fn is_player(&self, name: &str) -> bool {
        matches!(self, Owner::Player(n) if n == name)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Bank => write!(f, "Bank"),
            Owner::Player(name) => write!(f, "{}", name),
        }
    }
}
