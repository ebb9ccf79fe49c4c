//! Tokens and their positions.

use serde::{Deserialize, Serialize};

/// Every player owns exactly this many tokens.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Where a token currently sits.
///
/// `Path(n)` indexes into the owning player's path table and never reaches
/// the final index: landing there turns the token into `Home`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Waiting in the yard; needs a six to enter play.
    #[default]
    Base,
    /// On the board at this index of the owner's path.
    Path(u8),
    /// Finished. Terminal.
    Home,
}

impl Position {
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Position::Base)
    }

    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    /// Path index if the token is on the board.
    #[must_use]
    pub const fn path_index(self) -> Option<usize> {
        match self {
            Position::Path(index) => Some(index as usize),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Base => f.write_str("base"),
            Position::Path(index) => write!(f, "path[{}]", index),
            Position::Home => f.write_str("home"),
        }
    }
}

/// A single playing piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub position: Position,

    /// Cells advanced along the owner's path. Display only.
    pub steps_moved: u32,
}

impl Token {
    /// A token waiting in base.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Position::Base,
            steps_moved: 0,
        }
    }

    /// Send the token back to base after a capture.
    pub fn send_to_base(&mut self) {
        self.position = Position::Base;
        self.steps_moved = 0;
    }
}
