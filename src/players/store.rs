//! In-memory player store keyed by name.
//!
//! Add and update collapse into one key-based `upsert`; removing an
//! absent name is a no-op. Listing at this scale is O(n) and fine.

use log::trace;
use rustc_hash::FxHashMap;

use super::player::Player;

/// Name-keyed player store.
///
/// ## Example
///
/// ```
/// use landlord::players::{Player, PlayerStore};
///
/// let mut store = PlayerStore::new();
/// store.upsert(Player::new("Alice", 1500));
/// store.upsert(Player::new("Alice", 1600)); // update, same key
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.get("Alice").unwrap().cash(), 1600);
/// assert!(store.remove("Nobody").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerStore {
    players: FxHashMap<String, Player>,
}

impl PlayerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the player with this name.
    pub fn upsert(&mut self, player: Player) {
        trace!("upsert player {}", player.name());
        self.players.insert(player.name().to_string(), player);
    }

    /// Look up a player by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    /// Remove a player by name, returning them if present.
    ///
    /// Absent names are silently ignored.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        trace!("remove player {}", name);
        self.players.remove(name)
    }

    /// Check if a name is stored.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    /// Number of stored players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in map order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Players sorted by name, for deterministic listing.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Player> {
        let mut players: Vec<_> = self.players.values().collect();
        players.sort_by(|a, b| a.name().cmp(b.name()));
        players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PlayerStore {
        let mut store = PlayerStore::new();
        store.upsert(Player::new("Alice", 1500));
        store.upsert(Player::new("Bob", 1500));
        store.upsert(Player::new("Charlie", 1500));
        store
    }

    #[test]
    fn test_upsert_adds_and_updates() {
        let mut store = PlayerStore::new();
        assert!(store.is_empty());

        store.upsert(Player::new("Alice", 1500));
        assert_eq!(store.len(), 1);
        assert!(store.contains("Alice"));

        store.upsert(Player::new("Alice", 1600));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Alice").unwrap().cash(), 1600);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = seeded();
        assert!(store.get("Nobody").is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut store = seeded();
        if let Some(bob) = store.get_mut("Bob") {
            bob.set_cash(2000);
        }
        assert_eq!(store.get("Bob").unwrap().cash(), 2000);
    }

    #[test]
    fn test_remove() {
        let mut store = seeded();

        let removed = store.remove("Alice");
        assert_eq!(removed.unwrap().name(), "Alice");
        assert_eq!(store.len(), 2);

        // Absent name: no-op, no error
        assert!(store.remove("Alice").is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sorted_listing() {
        let store = seeded();
        let names: Vec<_> = store.sorted().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    }
}
