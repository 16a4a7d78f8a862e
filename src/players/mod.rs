//! Players, the name-keyed store, and the sheet view/controller.
//!
//! ## Key Types
//!
//! - `Player`: immutable name, mutable balance
//! - `PlayerStore`: in-memory store with key-based upsert/delete
//! - `PlayerView` / `PlayerController`: read-only projection plus the
//!   balance mutation entry point

pub mod player;
pub mod store;
pub mod view;

pub use player::Player;
pub use store::PlayerStore;
pub use view::{PlayerController, PlayerView};
