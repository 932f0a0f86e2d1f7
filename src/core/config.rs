//! Game configuration.
//!
//! The board geometry is fixed; everything a presentation layer may want
//! to tune lives in `GameConfig`.

use serde::{Deserialize, Serialize};

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 6;

/// What happens when the opponent has no piece that can move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StalemateRule {
    /// The opponent forfeits the ply and the player moves again.
    #[default]
    PassTurn,
    /// The game ends and the player is declared the winner.
    PlayerWins,
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Random seed for setup and opponent choices.
    /// Same seed produces deterministic games.
    pub seed: u64,

    /// Length of the setup countdown, in ticks (one tick per second).
    pub setup_seconds: u32,

    /// Delay the presentation layer should wait before calling
    /// `opponent_turn`. The engine itself never sleeps.
    pub opponent_delay_ms: u64,

    /// Resolution of an opponent with no legal move.
    pub stalemate: StalemateRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            setup_seconds: 30,
            opponent_delay_ms: 1000,
            stalemate: StalemateRule::PassTurn,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom setup countdown.
    pub fn with_setup_seconds(mut self, seconds: u32) -> Self {
        self.setup_seconds = seconds;
        self
    }

    /// Create a new config with a custom opponent delay.
    pub fn with_opponent_delay_ms(mut self, delay: u64) -> Self {
        self.opponent_delay_ms = delay;
        self
    }

    /// Create a new config with a custom stalemate rule.
    pub fn with_stalemate(mut self, rule: StalemateRule) -> Self {
        self.stalemate = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.setup_seconds, 30);
        assert_eq!(config.opponent_delay_ms, 1000);
        assert_eq!(config.stalemate, StalemateRule::PassTurn);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_setup_seconds(5)
            .with_opponent_delay_ms(0)
            .with_stalemate(StalemateRule::PlayerWins);

        assert_eq!(config.seed, 123);
        assert_eq!(config.setup_seconds, 5);
        assert_eq!(config.opponent_delay_ms, 0);
        assert_eq!(config.stalemate, StalemateRule::PlayerWins);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
