//! Client configuration.
use game_core::GameConfig;

/// Settings for a client run.
///
/// Only the player's display name is configurable; the roster and inventory
/// come from [`game_core::SessionConfig::standard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub player_name: String,
}

impl ClientConfig {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_PLAYER_NAME)
    }
}
