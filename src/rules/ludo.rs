//! The Ludo rules engine.
//!
//! Owns the `GameState`, the board tables and the dice. All mutation happens
//! in `commit_*`, the deferred half of each operation; the intent half only
//! validates and flips the status, which doubles as the lock that rejects
//! overlapping operations.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::{PathTables, SafeCells, HOME_INDEX};
use crate::core::{
    Action, DiceSource, GameEvent, GameRng, GameState, InvariantViolation, LudoConfig, Position,
    RulesError, Status, TOKENS_PER_PLAYER,
};

use super::engine::RulesEngine;
use super::movement;
use super::timer::{Deferred, Phase, Timeline};
use super::turn;

/// Ludo rules engine, generic over its dice.
#[derive(Debug)]
pub struct LudoEngine<D = GameRng> {
    config: LudoConfig,
    paths: PathTables,
    safe_cells: SafeCells,
    state: GameState,
    timeline: Timeline,
    dice: D,
}

impl LudoEngine<GameRng> {
    /// Engine rolling a `GameRng` seeded from the config.
    pub fn new(config: LudoConfig) -> Result<Self, RulesError> {
        let rng = GameRng::new(config.seed);
        Self::with_dice(config, rng)
    }
}

impl<D: DiceSource> LudoEngine<D> {
    /// Engine rolling the given dice.
    pub fn with_dice(config: LudoConfig, dice: D) -> Result<Self, RulesError> {
        config.validate()?;
        let state = GameState::new(config.player_count)?;

        Ok(Self {
            config,
            paths: PathTables::new(),
            safe_cells: SafeCells::standard(),
            state,
            timeline: Timeline::new(),
            dice,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    #[must_use]
    pub fn paths(&self) -> &PathTables {
        &self.paths
    }

    #[must_use]
    pub fn safe_cells(&self) -> &SafeCells {
        &self.safe_cells
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Engine time, advanced by `advance`.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.timeline.clock()
    }

    /// The phase waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Deferred> {
        self.timeline.pending()
    }

    /// Commit every pending phase now, ignoring delays.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(deferred) = self.timeline.take_due(Duration::MAX) {
            self.commit(deferred, &mut events);
        }
        events
    }

    /// Commit a specific ticket, for callers running their own timers.
    ///
    /// A ticket that is no longer pending (overtaken by a move, a reset or a
    /// restore) is discarded and yields no events.
    pub fn fire(&mut self, deferred: &Deferred) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.timeline.take(deferred) {
            Some(deferred) => self.commit(deferred, &mut events),
            None => trace!(?deferred, "discarding stale deferred phase"),
        }
        events
    }

    /// Replace the state with a snapshot.
    ///
    /// The snapshot must be in a stable status and satisfy every invariant.
    /// Any pending phase is invalidated; a `Selecting` snapshot with no legal
    /// move gets a fresh auto-pass.
    pub fn restore(&mut self, state: GameState) -> Result<(), RulesError> {
        if state.status.is_transient() {
            return Err(InvariantViolation::TransientStatus(state.status).into());
        }
        state.check_invariants()?;

        self.timeline.cancel();
        self.config.player_count = state.player_count();
        self.state = state;
        debug!(player = %self.state.current_player, status = %self.state.status, "state restored");

        if self.state.status == Status::Selecting && !movement::has_any_valid_move(&self.state) {
            self.timeline
                .schedule(Phase::AutoPass, self.config.auto_pass_delay);
        }
        Ok(())
    }

    fn commit(&mut self, deferred: Deferred, events: &mut Vec<GameEvent>) {
        match (deferred.phase, self.state.status) {
            (Phase::Roll, Status::Rolling) => self.commit_roll(events),
            (Phase::Move { token }, Status::Moving) => self.commit_move(token, events),
            (Phase::AutoPass, Status::Selecting) if !movement::has_any_valid_move(&self.state) => {
                self.commit_auto_pass(events)
            }
            (phase, status) => {
                trace!(?phase, %status, "discarding deferred phase that no longer applies")
            }
        }
    }

    fn commit_roll(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.state.current_player;
        let value = self.dice.roll();
        self.state.roll_count += 1;
        events.push(GameEvent::DiceRolled { player, value });

        let sixes = if value == 6 {
            self.state.consecutive_sixes + 1
        } else {
            0
        };

        if sixes == 3 {
            debug!(%player, "third six in a row, turn forfeited");
            self.state.record(player, Action::Forfeit);
            self.state.status = Status::Idle;
            events.push(GameEvent::TripleSixForfeit { player });
            self.pass_turn(events);
            return;
        }

        self.state.dice_value = Some(value);
        self.state.consecutive_sixes = sixes;
        self.state.status = Status::Selecting;
        self.state.record(player, Action::Roll { value });
        debug!(%player, value, sixes, "dice rolled");

        if !movement::has_any_valid_move(&self.state) {
            let ticket = self
                .timeline
                .schedule(Phase::AutoPass, self.config.auto_pass_delay);
            debug!(%player, value, due = ?ticket.due, "no legal move, auto-pass scheduled");
        }
    }

    fn commit_move(&mut self, token: usize, events: &mut Vec<GameEvent>) {
        let mover = self.state.current_player;
        let player = self.state.player(mover);
        let color = player.color;
        let from = player.tokens[token].position;

        let target = self
            .state
            .dice_value
            .filter(|_| movement::is_valid_move(&self.state, token))
            .and_then(|dice| movement::destination(&player.tokens[token], dice).map(|to| (dice, to)));
        let Some((dice, to)) = target else {
            trace!(%mover, token, "move no longer legal, back to selecting");
            self.state.status = Status::Selecting;
            self.state.selected_token = None;
            return;
        };

        let left_base = from.is_base();
        let moved = &mut self.state.player_mut(mover).tokens[token];
        moved.position = to;
        moved.steps_moved = match to {
            Position::Path(index) => index as u32,
            Position::Home => HOME_INDEX as u32,
            Position::Base => 0,
        };

        if left_base {
            events.push(GameEvent::TokenEntered { player: mover, token });
        } else {
            events.push(GameEvent::TokenMoved {
                player: mover,
                token,
                from,
                to,
            });
        }
        debug!(player = %mover, token, %from, %to, dice, "token moved");

        self.state.last_capture = None;
        let mut captured = false;
        match to {
            Position::Home => {
                self.state.player_mut(mover).home_count += 1;
                events.push(GameEvent::TokenHome { player: mover, token });
            }
            Position::Path(index) if to != from => {
                let cell = self.paths.path_for(color)[index as usize];
                let captures =
                    movement::captures_at(&self.state, &self.paths, &self.safe_cells, mover, cell);

                for &victim in &captures {
                    self.state.player_mut(victim.player).tokens[victim.token].send_to_base();
                    debug!(by = %mover, victim = %victim.player, token = victim.token, %cell, "token captured");
                    events.push(GameEvent::TokenCaptured {
                        by: mover,
                        victim,
                        cell,
                    });
                }
                captured = !captures.is_empty();
                self.state.last_capture = captures.last().copied();
            }
            _ => {}
        }

        let finished = to.is_home() && self.state.player(mover).has_finished();
        if finished {
            let place = if self.state.winner.is_none() {
                self.state.winner = Some(mover);
                1
            } else {
                self.state.runner_ups.push(mover);
                self.state.runner_ups.len() + 1
            };
            info!(player = %mover, place, "player finished");
            events.push(GameEvent::PlayerFinished {
                player: mover,
                place,
            });
        }

        self.state.record(mover, Action::Move { token: token as u8 });
        self.state.selected_token = None;

        if self.state.runner_ups.len() == self.state.player_count() - 1 {
            self.state.status = Status::Over;
            self.state.dice_value = None;
            self.state.consecutive_sixes = 0;
            let standings = self.state.standings();
            info!(?standings, "game over");
            events.push(GameEvent::GameOver { standings });
            return;
        }

        self.state.status = Status::Idle;
        let bonus = dice == 6 || left_base || captured;
        if finished || !bonus {
            self.pass_turn(events);
        } else if dice != 6 {
            self.state.dice_value = None;
        }
    }

    fn commit_auto_pass(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.state.current_player;
        debug!(%player, dice = ?self.state.dice_value, "auto-passing unplayable roll");

        self.state.record(player, Action::AutoPass);
        self.state.status = Status::Idle;
        events.push(GameEvent::AutoPassed { player });
        self.pass_turn(events);
    }

    fn pass_turn(&mut self, events: &mut Vec<GameEvent>) {
        let (from, to) = turn::pass_turn(&mut self.state);
        debug!(%from, %to, turn = self.state.turn_number, "turn passed");
        events.push(GameEvent::TurnPassed { from, to });
    }
}

impl<D: DiceSource> RulesEngine for LudoEngine<D> {
    fn state(&self) -> &GameState {
        &self.state
    }

    fn roll_dice(&mut self) -> Result<Deferred, RulesError> {
        let status = self.state.status;
        if status != Status::Idle {
            trace!(%status, "roll rejected");
            return Err(RulesError::InvalidTransition {
                operation: "roll the dice",
                status,
            });
        }

        self.state.status = Status::Rolling;
        let ticket = self.timeline.schedule(Phase::Roll, self.config.roll_delay);
        debug!(player = %self.state.current_player, due = ?ticket.due, "rolling");
        Ok(ticket)
    }

    fn move_token(&mut self, token: usize) -> Result<Deferred, RulesError> {
        let status = self.state.status;
        if status != Status::Selecting {
            trace!(%status, token, "move rejected");
            return Err(RulesError::InvalidTransition {
                operation: "move a token",
                status,
            });
        }
        if token >= TOKENS_PER_PLAYER {
            return Err(RulesError::TokenOutOfRange { token });
        }
        if !movement::is_valid_move(&self.state, token) {
            trace!(player = %self.state.current_player, token, "illegal move rejected");
            return Err(RulesError::IllegalMove { token });
        }

        self.state.status = Status::Moving;
        self.state.selected_token = Some(token);
        let ticket = self
            .timeline
            .schedule(Phase::Move { token }, self.config.move_delay);
        debug!(player = %self.state.current_player, token, due = ?ticket.due, "moving");
        Ok(ticket)
    }

    fn is_valid_move(&self, token: usize) -> bool {
        movement::is_valid_move(&self.state, token)
    }

    fn has_any_valid_move(&self) -> bool {
        movement::has_any_valid_move(&self.state)
    }

    fn reset(&mut self, player_count: usize) -> Result<(), RulesError> {
        let state = GameState::new(player_count)?;

        self.timeline.cancel();
        self.state = state;
        self.config.player_count = player_count;
        info!(player_count, "game reset");
        Ok(())
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let until = self.timeline.clock().saturating_add(elapsed);
        let mut events = Vec::new();

        while let Some(deferred) = self.timeline.take_due(until) {
            self.commit(deferred, &mut events);
        }
        self.timeline.advance_to(until);
        events
    }
}
