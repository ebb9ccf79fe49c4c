//! Engine configuration.
//!
//! `LudoConfig` fixes the seat count and the presentation delays that split
//! `roll_dice` and `move_token` into an immediate and a deferred phase.
//! Defaults match a typical frontend: 800 ms dice animation, 500 ms token
//! animation, 1 s grace before an unplayable roll is passed automatically.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table (one seat per color).
pub const MAX_PLAYERS: usize = 4;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoConfig {
    /// Number of seated players (2-4).
    pub player_count: usize,

    /// Delay between `roll_dice` and the sampled value being committed.
    pub roll_delay: Duration,

    /// Delay between `move_token` and the move being resolved.
    pub move_delay: Duration,

    /// Grace period before a roll with no legal move passes the turn.
    pub auto_pass_delay: Duration,

    /// Seed for the default dice RNG.
    /// Same seed produces the same sequence of rolls.
    pub seed: u64,
}

impl Default for LudoConfig {
    fn default() -> Self {
        Self {
            player_count: MAX_PLAYERS,
            roll_delay: Duration::from_millis(800),
            move_delay: Duration::from_millis(500),
            auto_pass_delay: Duration::from_millis(1000),
            seed: 42,
        }
    }
}

impl LudoConfig {
    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the dice animation delay.
    #[must_use]
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Set the token animation delay.
    #[must_use]
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    /// Set the auto-pass grace period.
    #[must_use]
    pub fn with_auto_pass_delay(mut self, delay: Duration) -> Self {
        self.auto_pass_delay = delay;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Zero every delay. Deferred phases still exist but fire on the next
    /// `advance`, which suits headless drivers.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_roll_delay(Duration::ZERO)
            .with_move_delay(Duration::ZERO)
            .with_auto_pass_delay(Duration::ZERO)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_player_count(self.player_count)
    }
}

/// Player count must be 2, 3 or 4.
pub fn validate_player_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount(count))
    }
}
