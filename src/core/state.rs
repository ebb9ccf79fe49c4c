//! Game state.
//!
//! `GameState` is the single aggregate the rules engine mutates. The
//! presentation layer only ever sees it through `&GameState` or a cloned
//! snapshot. Fields are public for reading; every invariant below is upheld
//! by the engine and can be re-checked with `check_invariants`.
//!
//! ## Invariants
//!
//! - `home_count` equals the number of `Home` tokens and never exceeds 4
//! - board tokens sit at path indices `0..HOME_INDEX`
//! - `winner` is set once and never changes; `runner_ups` holds distinct
//!   players other than the winner, in finishing order
//! - `consecutive_sixes` is at most 2 between operations

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::color::Color;
use super::config::validate_player_count;
use super::error::{ConfigError, InvariantViolation, RulesError};
use super::player::{Player, PlayerId};
use crate::board::HOME_INDEX;

/// Turn state machine.
///
/// `Rolling` and `Moving` are transient: they last while the presentation
/// layer animates, and no other mutating operation is accepted meanwhile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the current player to roll.
    #[default]
    Idle,
    /// Dice animation in flight.
    Rolling,
    /// Dice value known, waiting for a token choice.
    Selecting,
    /// Token animation in flight.
    Moving,
    /// Every player has been placed.
    Over,
}

impl Status {
    /// `Rolling` or `Moving`.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Status::Rolling | Status::Moving)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Idle => "idle",
            Status::Rolling => "rolling",
            Status::Selecting => "selecting",
            Status::Moving => "moving",
            Status::Over => "over",
        };
        f.write_str(name)
    }
}

/// A captured token. The captor is not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub player: PlayerId,
    pub token: usize,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players in turn order.
    pub players: Vec<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Last kept roll, if any.
    pub dice_value: Option<u8>,

    /// Sixes rolled in a row by the current player.
    pub consecutive_sixes: u8,

    pub status: Status,

    /// First player to bring all tokens home. Never reassigned.
    pub winner: Option<PlayerId>,

    /// Later finishers in finishing order (placement 2, 3, ...).
    pub runner_ups: Vec<PlayerId>,

    /// Most recent capture, cleared by every move that captures nothing.
    pub last_capture: Option<Capture>,

    /// Token being animated while `Moving`.
    pub selected_token: Option<usize>,

    /// Turn number (starts at 1, increments when the turn passes).
    pub turn_number: u32,

    /// Every sampled roll, including forfeited ones.
    pub roll_count: u32,

    /// Committed actions, oldest first.
    pub history: Vector<ActionRecord>,

    /// Action sequence within the current turn.
    pub action_sequence: u32,
}

impl GameState {
    /// Fresh game: every token in base, player 0 to roll.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        validate_player_count(player_count)?;

        let players = Color::ALL[..player_count]
            .iter()
            .map(|&color| Player::new(color))
            .collect();

        Ok(Self {
            players,
            current_player: PlayerId::new(0),
            dice_value: None,
            consecutive_sixes: 0,
            status: Status::Idle,
            winner: None,
            runner_ups: Vec::new(),
            last_capture: None,
            selected_token: None,
            turn_number: 1,
            roll_count: 0,
            history: Vector::new(),
            action_sequence: 0,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    /// Winner or runner-up.
    #[must_use]
    pub fn has_finished(&self, id: PlayerId) -> bool {
        self.winner == Some(id) || self.runner_ups.contains(&id)
    }

    /// 1 for the winner, 2.. for runner-ups, `None` while still playing.
    #[must_use]
    pub fn placement(&self, id: PlayerId) -> Option<usize> {
        if self.winner == Some(id) {
            return Some(1);
        }
        self.runner_ups
            .iter()
            .position(|&p| p == id)
            .map(|i| i + 2)
    }

    /// Finishers so far, winner first.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerId> {
        self.winner
            .into_iter()
            .chain(self.runner_ups.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    /// Append a committed action to the history.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Verify every state invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let count = self.player_count();
        if validate_player_count(count).is_err() {
            return Err(InvariantViolation::PlayerCount(count));
        }
        if self.current_player.index() >= count {
            return Err(InvariantViolation::CurrentPlayerOutOfRange(self.current_player));
        }

        for (id, player) in self.player_ids().zip(&self.players) {
            if Color::for_seat(id.index()) != Some(player.color) {
                return Err(InvariantViolation::SeatColor { player: id });
            }

            let actual = player.tokens_home();
            if player.home_count as usize != actual {
                return Err(InvariantViolation::HomeCount {
                    player: id,
                    recorded: player.home_count,
                    actual,
                });
            }

            for (token, t) in player.tokens.iter().enumerate() {
                let Some(index) = t.position.path_index() else {
                    continue;
                };
                if index >= HOME_INDEX {
                    return Err(InvariantViolation::PathIndex {
                        player: id,
                        token,
                        index,
                    });
                }
                // Stacking on the start cell is allowed when leaving base
                if index > 0 && player.occupant_at(index, token).is_some() {
                    return Err(InvariantViolation::SelfStacked { player: id, index });
                }
            }
        }

        if let Some(value) = self.dice_value {
            if !(1..=6).contains(&value) {
                return Err(InvariantViolation::DiceValue(value));
            }
        }
        if self.status == Status::Selecting && self.dice_value.is_none() {
            return Err(InvariantViolation::SelectingWithoutDice);
        }
        if self.consecutive_sixes > 2 {
            return Err(InvariantViolation::SixCounter(self.consecutive_sixes));
        }

        if self.winner.is_none() && !self.runner_ups.is_empty() {
            return Err(InvariantViolation::RunnerUpWithoutWinner);
        }
        let standings = self.standings();
        for (i, &id) in standings.iter().enumerate() {
            if id.index() >= count || !self.player(id).has_finished() {
                return Err(InvariantViolation::UnfinishedPlacement(id));
            }
            if standings[..i].contains(&id) {
                return Err(InvariantViolation::DuplicatePlacement(id));
            }
        }
        for id in self.player_ids() {
            if self.player(id).has_finished() && !standings.contains(&id) {
                return Err(InvariantViolation::UnplacedFinisher(id));
            }
        }

        let all_placed = self.runner_ups.len() == count - 1;
        if all_placed != (self.status == Status::Over) {
            return Err(InvariantViolation::OverMismatch);
        }
        if !all_placed && self.has_finished(self.current_player) {
            return Err(InvariantViolation::CurrentPlayerFinished(self.current_player));
        }

        Ok(())
    }

    /// Encode a snapshot as bytes.
    pub fn encode(&self) -> Result<Vec<u8>, RulesError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, RulesError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
