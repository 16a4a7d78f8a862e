//! Board squares.

use serde::{Deserialize, Serialize};

/// A named square at a fixed board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    position: usize,
    name: String,
}

impl Square {
    /// Create a square.
    #[must_use]
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }

    /// Position on the board, 0-based from the start square.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Square name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendering used by board listings.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Square {}: {}", self.position, self.name)
    }
}
