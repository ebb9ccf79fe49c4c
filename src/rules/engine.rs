//! Rules engine trait: the surface a presentation layer drives.
//!
//! A frontend reads the state, issues intents (`roll_dice`, `move_token`)
//! and feeds elapsed time through `advance` so deferred phases can commit.
//!
//! ## Implementation Notes
//!
//! - Intents only move the status into a transient value; the mutation
//!   happens when the returned `Deferred` fires
//! - A rejected intent never touches state
//! - `reset` is legal in every status

use std::time::Duration;

use crate::core::{GameEvent, GameState, PlayerId, RulesError, Status, TOKENS_PER_PLAYER};

use super::timer::Deferred;

/// Rules engine operations.
pub trait RulesEngine {
    /// Read-only view of the current state.
    fn state(&self) -> &GameState;

    /// Start a roll. Requires `Idle`.
    fn roll_dice(&mut self) -> Result<Deferred, RulesError>;

    /// Start moving a token of the current player. Requires `Selecting` and
    /// a legal move.
    fn move_token(&mut self, token: usize) -> Result<Deferred, RulesError>;

    /// Can the current player move this token with the current roll?
    fn is_valid_move(&self, token: usize) -> bool;

    /// Does the current player have any legal move?
    fn has_any_valid_move(&self) -> bool;

    /// Start a fresh game with `player_count` players.
    fn reset(&mut self, player_count: usize) -> Result<(), RulesError>;

    /// Let `elapsed` time pass, committing every phase that falls due.
    fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent>;

    // === Convenience Methods ===

    /// Snapshot of the current state.
    fn snapshot(&self) -> GameState {
        self.state().clone()
    }

    /// Tokens of the current player that can move.
    fn valid_moves(&self) -> Vec<usize> {
        (0..TOKENS_PER_PLAYER)
            .filter(|&token| self.is_valid_move(token))
            .collect()
    }

    fn current_player(&self) -> PlayerId {
        self.state().current_player
    }

    fn status(&self) -> Status {
        self.state().status
    }

    fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// Placement of a finished player (1 = winner).
    fn placement(&self, player: PlayerId) -> Option<usize> {
        self.state().placement(player)
    }
}
