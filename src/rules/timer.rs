//! Deferred phases.
//!
//! `roll_dice` and `move_token` only flip the status to a transient value and
//! schedule the real mutation after a presentation delay. A roll with no
//! legal move schedules an auto-pass after a grace period. At most one phase
//! is pending at a time.
//!
//! Each scheduled phase carries a generation number. Cancelling, resetting
//! or scheduling again bumps the generation, so a ticket fired late is
//! recognised as stale and discarded.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a pending phase will do when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Sample the dice.
    Roll,
    /// Resolve a move of this token.
    Move { token: usize },
    /// Pass a turn that has no legal move.
    AutoPass,
}

/// Ticket for a scheduled phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deferred {
    pub phase: Phase,
    pub generation: u64,
    /// Engine clock time at which the phase fires.
    pub due: Duration,
}

/// Logical clock plus the single pending slot.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    clock: Duration,
    generation: u64,
    pending: Option<Deferred>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current engine time.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Deferred> {
        self.pending.as_ref()
    }

    /// Schedule `phase` to fire `delay` from now, replacing anything pending.
    pub fn schedule(&mut self, phase: Phase, delay: Duration) -> Deferred {
        self.generation += 1;
        let deferred = Deferred {
            phase,
            generation: self.generation,
            due: self.clock.saturating_add(delay),
        };
        self.pending = Some(deferred);
        deferred
    }

    /// Drop the pending phase and invalidate every outstanding ticket.
    pub fn cancel(&mut self) -> Option<Deferred> {
        self.generation += 1;
        self.pending.take()
    }

    /// Is this ticket the one currently pending?
    #[must_use]
    pub fn is_current(&self, deferred: &Deferred) -> bool {
        self.pending.as_ref() == Some(deferred)
    }

    /// Take the pending phase if it is due by `until`, moving the clock to
    /// its due time.
    pub fn take_due(&mut self, until: Duration) -> Option<Deferred> {
        match self.pending {
            Some(deferred) if deferred.due <= until => {
                self.pending = None;
                self.clock = self.clock.max(deferred.due);
                Some(deferred)
            }
            _ => None,
        }
    }

    /// Take a specific ticket if it is still current.
    pub fn take(&mut self, deferred: &Deferred) -> Option<Deferred> {
        if !self.is_current(deferred) {
            return None;
        }
        self.take_due(Duration::MAX)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn advance_to(&mut self, until: Duration) {
        self.clock = self.clock.max(until);
    }
}
