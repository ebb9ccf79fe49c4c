//! Game events.
//!
//! Committing a deferred phase returns the events it produced, in order, so
//! a presentation layer can animate a capture or announce a placement
//! without diffing snapshots.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::Capture;
use super::token::Position;
use crate::board::CellId;

/// Something that happened while committing a phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die face was sampled.
    DiceRolled { player: PlayerId, value: u8 },

    /// Third consecutive six: the roll is discarded.
    TripleSixForfeit { player: PlayerId },

    /// A token left base for its start cell.
    TokenEntered { player: PlayerId, token: usize },

    /// A token advanced along its path.
    TokenMoved {
        player: PlayerId,
        token: usize,
        from: Position,
        to: Position,
    },

    /// A token reached home.
    TokenHome { player: PlayerId, token: usize },

    /// An opposing token was sent back to base.
    TokenCaptured {
        by: PlayerId,
        victim: Capture,
        cell: CellId,
    },

    /// A player brought all four tokens home. `place` is 1 for the winner.
    PlayerFinished { player: PlayerId, place: usize },

    /// A roll had no legal move and was passed after the grace period.
    AutoPassed { player: PlayerId },

    /// The turn moved to another player.
    TurnPassed { from: PlayerId, to: PlayerId },

    /// Every player has been placed.
    GameOver { standings: Vec<PlayerId> },
}

impl GameEvent {
    /// Player the event is about.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::DiceRolled { player, .. }
            | GameEvent::TripleSixForfeit { player }
            | GameEvent::TokenEntered { player, .. }
            | GameEvent::TokenMoved { player, .. }
            | GameEvent::TokenHome { player, .. }
            | GameEvent::PlayerFinished { player, .. }
            | GameEvent::AutoPassed { player } => Some(*player),
            GameEvent::TokenCaptured { victim, .. } => Some(victim.player),
            GameEvent::TurnPassed { to, .. } => Some(*to),
            GameEvent::GameOver { .. } => None,
        }
    }
}
