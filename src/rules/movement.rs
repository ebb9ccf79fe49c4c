//! Move legality and capture resolution.
//!
//! Pure functions over a `GameState`: nothing here mutates. The engine calls
//! them both to answer `is_valid_move` and to resolve a committed move.

use smallvec::SmallVec;

use crate::board::{target_index, CellId, PathTables, SafeCells, HOME_INDEX};
use crate::core::{Capture, GameState, Player, PlayerId, Position, Token, TOKENS_PER_PLAYER};

/// Where a token would end up with this roll, ignoring blocking.
///
/// A token in base needs exactly a six and always lands on index 0.
#[must_use]
pub fn destination(token: &Token, dice: u8) -> Option<Position> {
    match token.position {
        Position::Base => (dice == 6).then_some(Position::Path(0)),
        Position::Home => None,
        Position::Path(index) => target_index(index as usize, dice as usize).map(|target| {
            if target == HOME_INDEX {
                Position::Home
            } else {
                Position::Path(target as u8)
            }
        }),
    }
}

/// Can `player` move token `token` by `dice`?
///
/// Board moves are blocked when another of the player's own tokens already
/// sits on the destination cell. Leaving base and entering home never block.
#[must_use]
pub fn can_move(player: &Player, token: usize, dice: u8) -> bool {
    let Some(t) = player.token(token) else {
        return false;
    };

    match (t.position, destination(t, dice)) {
        (_, None) => false,
        (Position::Base, Some(_)) | (_, Some(Position::Home)) => true,
        (_, Some(Position::Path(target))) => player.occupant_at(target as usize, token).is_none(),
        (_, Some(Position::Base)) => false,
    }
}

/// Is moving `token` legal for the current player with the current roll?
#[must_use]
pub fn is_valid_move(state: &GameState, token: usize) -> bool {
    match state.dice_value {
        Some(dice) => can_move(state.current(), token, dice),
        None => false,
    }
}

/// Does any of the current player's tokens have a legal move?
#[must_use]
pub fn has_any_valid_move(state: &GameState) -> bool {
    (0..TOKENS_PER_PLAYER).any(|token| is_valid_move(state, token))
}

/// Current player's tokens that can legally move.
#[must_use]
pub fn valid_moves(state: &GameState) -> SmallVec<[usize; TOKENS_PER_PLAYER]> {
    (0..TOKENS_PER_PLAYER)
        .filter(|&token| is_valid_move(state, token))
        .collect()
}

/// Opposing tokens that would be captured by `mover` landing on `cell`.
///
/// Nothing is captured on a safe cell. Every opposing board token resolving
/// to the same cell is captured, whichever player owns it.
#[must_use]
pub fn captures_at(
    state: &GameState,
    paths: &PathTables,
    safe: &SafeCells,
    mover: PlayerId,
    cell: CellId,
) -> SmallVec<[Capture; 4]> {
    let mut captures = SmallVec::new();
    if safe.is_safe(cell) {
        return captures;
    }

    for (id, player) in state.player_ids().zip(&state.players) {
        if id == mover {
            continue;
        }
        let path = paths.path_for(player.color);
        for (token, t) in player.tokens.iter().enumerate() {
            if let Some(index) = t.position.path_index() {
                if path.cell(index) == Some(cell) {
                    captures.push(Capture { player: id, token });
                }
            }
        }
    }

    captures
}
