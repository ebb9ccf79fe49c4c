//! Committed actions and the history log.
//!
//! Every deferred phase that commits appends one `ActionRecord` to the game
//! history. The log is a persistent vector, so snapshots stay cheap to clone.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A committed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Dice rolled and kept.
    Roll { value: u8 },
    /// Third six in a row: roll discarded, turn lost.
    Forfeit,
    /// A token was moved.
    Move { token: u8 },
    /// The roll had no legal move and the turn passed automatically.
    AutoPass,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
