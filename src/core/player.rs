//! Player identification and per-player board data.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Turn order follows seat order.
//!
//! ## Player
//!
//! A color plus exactly four tokens. `home_count` mirrors how many of those
//! tokens are `Home` and is kept in sync by the rules engine.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::token::{Position, Token, TOKENS_PER_PLAYER};

/// Player identifier (seat index, 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_ludo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player and their tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub tokens: [Token; TOKENS_PER_PLAYER],
    /// Number of tokens in `Home` (0..=4).
    pub home_count: u8,
}

impl Player {
    /// A fresh player with every token in base.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            tokens: [Token::new(); TOKENS_PER_PLAYER],
            home_count: 0,
        }
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// All four tokens are home.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.home_count as usize == TOKENS_PER_PLAYER
    }

    /// Count tokens whose position is `Home` (independent of `home_count`).
    #[must_use]
    pub fn tokens_home(&self) -> usize {
        self.tokens.iter().filter(|t| t.position.is_home()).count()
    }

    /// Count tokens still in base.
    #[must_use]
    pub fn tokens_in_base(&self) -> usize {
        self.tokens.iter().filter(|t| t.position.is_base()).count()
    }

    /// Index of another of this player's tokens sitting at `path_index`.
    pub fn occupant_at(&self, path_index: usize, except: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .find(|&(i, t)| i != except && t.position == Position::Path(path_index as u8))
            .map(|(i, _)| i)
    }
}
