//! Turn order.
//!
//! One rule decides who plays next, and every turn-passing path (triple-six
//! forfeit, post-move pass, auto-pass) goes through it: advance seat by seat,
//! skipping players who have already finished, unless every player but one
//! has finished.

use crate::core::{GameState, PlayerId};

/// Next player to act after `from`.
#[must_use]
pub fn next_player(state: &GameState, from: PlayerId) -> PlayerId {
    let count = state.player_count();
    let mut next = from.next(count);

    for _ in 0..count {
        let skip = state.has_finished(next) && state.runner_ups.len() < count - 1;
        if !skip {
            break;
        }
        next = next.next(count);
    }

    next
}

/// Hand the turn to the next player. Clears the roll and the six streak.
///
/// Returns `(from, to)`.
pub fn pass_turn(state: &mut GameState) -> (PlayerId, PlayerId) {
    let from = state.current_player;
    let to = next_player(state, from);

    state.current_player = to;
    state.dice_value = None;
    state.consecutive_sixes = 0;
    state.selected_token = None;
    state.turn_number += 1;
    state.action_sequence = 0;

    (from, to)
}
