//! Error types.
//!
//! Every failure is recoverable by the caller: a rejected operation leaves
//! the game state untouched and the presentation layer can simply re-prompt.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Status;

/// Broad classification of a rejected operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation attempted in the wrong status.
    InvalidTransition,
    /// Bad token index, or the token cannot move with the current roll.
    InvalidMoveRequest,
    /// Unsupported player count.
    Configuration,
    /// A snapshot handed to the engine is malformed.
    Snapshot,
}

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("cannot {operation} while the game is {status}")]
    InvalidTransition {
        operation: &'static str,
        status: Status,
    },

    #[error("token index {token} is out of range")]
    TokenOutOfRange { token: usize },

    #[error("token {token} cannot move with the current roll")]
    IllegalMove { token: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid game state: {0}")]
    InvalidState(#[from] InvariantViolation),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl RulesError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulesError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            RulesError::TokenOutOfRange { .. } | RulesError::IllegalMove { .. } => {
                ErrorKind::InvalidMoveRequest
            }
            RulesError::Config(_) => ErrorKind::Configuration,
            RulesError::InvalidState(_) | RulesError::Snapshot(_) => ErrorKind::Snapshot,
        }
    }
}

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be 2, 3 or 4 (got {0})")]
    PlayerCount(usize),
}

/// A broken game-state invariant, reported by `GameState::check_invariants`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player count {0} is not 2, 3 or 4")]
    PlayerCount(usize),

    #[error("{player} has the wrong color for its seat")]
    SeatColor { player: PlayerId },

    #[error("current player {0} does not exist")]
    CurrentPlayerOutOfRange(PlayerId),

    #[error("{player} home count {recorded} but {actual} tokens are home")]
    HomeCount {
        player: PlayerId,
        recorded: u8,
        actual: usize,
    },

    #[error("{player} token {token} is at path index {index}, past the last board cell")]
    PathIndex {
        player: PlayerId,
        token: usize,
        index: usize,
    },

    #[error("{player} has two tokens stacked at path index {index}")]
    SelfStacked { player: PlayerId, index: usize },

    #[error("dice value {0} is not a die face")]
    DiceValue(u8),

    #[error("consecutive six count {0} exceeds 2")]
    SixCounter(u8),

    #[error("{0} is placed but has not finished")]
    UnfinishedPlacement(PlayerId),

    #[error("{0} has finished but is not placed")]
    UnplacedFinisher(PlayerId),

    #[error("{0} appears more than once in the standings")]
    DuplicatePlacement(PlayerId),

    #[error("runner-ups recorded without a winner")]
    RunnerUpWithoutWinner,

    #[error("{0} is to play but has already finished")]
    CurrentPlayerFinished(PlayerId),

    #[error("status {0} is transient and cannot be restored")]
    TransientStatus(Status),

    #[error("status does not agree with the standings")]
    OverMismatch,

    #[error("selecting a token without a dice value")]
    SelectingWithoutDice,
}
