//! Read-only player projection and its mutation entry point.
//!
//! The view renders to a `String`; printing is the caller's business.

use super::player::Player;

/// Renders a player sheet from its fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerView;

impl PlayerView {
    /// Create a view.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a sheet for the given fields.
    #[must_use]
    pub fn render(&self, name: &str, cash: i64) -> String {
        format!("Player sheet:\nname: {name}\ncash: {cash}")
    }
}

/// Pairs a player with a view.
///
/// The single mutation entry point of the triad: [`add_cash`]
/// adjusts the balance with no bound checks, [`sheet`] renders the
/// current model state through the view.
///
/// [`add_cash`]: PlayerController::add_cash
/// [`sheet`]: PlayerController::sheet
#[derive(Clone, Debug)]
pub struct PlayerController {
    player: Player,
    view: PlayerView,
}

impl PlayerController {
    /// Create a controller over a player and a view.
    #[must_use]
    pub fn new(player: Player, view: PlayerView) -> Self {
        Self { player, view }
    }

    /// Add to the balance. Negative amounts subtract.
    pub fn add_cash(&mut self, amount: i64) {
        let cash = self.player.cash() + amount;
        self.player.set_cash(cash);
    }

    /// Render the current model state.
    #[must_use]
    pub fn sheet(&self) -> String {
        self.view.render(self.player.name(), self.player.cash())
    }

    /// The underlying model.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }
}
