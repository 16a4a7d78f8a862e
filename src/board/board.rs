//! The board: an ordered, finite, restartable square sequence.

use serde::{Deserialize, Serialize};

use super::square::Square;

/// Ordered square sequence with forward traversal.
///
/// Positions are assigned in insertion order. Traversal is forward-only
/// and restarts by calling [`iter`](Board::iter) again.
///
/// ## Example
///
/// ```
/// use landlord::board::Board;
///
/// let mut board = Board::new();
/// board.add("Go");
/// board.add("Boulevard de Belleville");
///
/// let names: Vec<_> = board.iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["Go", "Boulevard de Belleville"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a square, auto-assigning the next position.
    ///
    /// Returns the assigned position.
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        let position = self.squares.len();
        self.squares.push(Square::new(position, name));
        position
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Check if the board has no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Square at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Square> {
        self.squares.get(position)
    }

    /// Forward traversal from the first square.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
