//! End-to-end rule scenarios.
//!
//! Each test drives the engine the way a presentation layer would: issue an
//! intent, let the presentation delay elapse, inspect the committed state.

use std::time::Duration;

use rust_ludo::board::target_index;
use rust_ludo::rules::movement;
use rust_ludo::{
    Capture, CellId, Color, GameEvent, GameState, LudoConfig, LudoEngine, Phase, Player,
    PlayerId, Position, RulesEngine, ScriptedDice, Status, Token, HOME_INDEX,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn on_path(index: u8) -> Token {
    Token {
        position: Position::Path(index),
        steps_moved: index as u32,
    }
}

fn home() -> Token {
    Token {
        position: Position::Home,
        steps_moved: HOME_INDEX as u32,
    }
}

fn engine(players: usize, faces: &[u8]) -> LudoEngine<ScriptedDice> {
    let config = LudoConfig::default().with_player_count(players);
    LudoEngine::with_dice(config, ScriptedDice::new(faces.iter().copied())).unwrap()
}

fn engine_at(state: GameState, faces: &[u8]) -> LudoEngine<ScriptedDice> {
    let mut engine = engine(state.player_count(), faces);
    engine.restore(state).unwrap();
    engine
}

/// Roll and let the dice animation finish.
fn roll(engine: &mut LudoEngine<ScriptedDice>) -> Vec<GameEvent> {
    engine.roll_dice().unwrap();
    let delay = engine.config().roll_delay;
    engine.advance(delay)
}

/// Move and let the token animation finish.
fn play(engine: &mut LudoEngine<ScriptedDice>, token: usize) -> Vec<GameEvent> {
    engine.move_token(token).unwrap();
    let delay = engine.config().move_delay;
    engine.advance(delay)
}

// =============================================================================
// Scenario A: leaving base
// =============================================================================

/// A six brings a token out of base onto its start cell and keeps the turn.
#[test]
fn test_six_leaves_base_and_grants_bonus() {
    let mut engine = engine(4, &[6]);

    roll(&mut engine);
    assert_eq!(engine.status(), Status::Selecting);
    assert_eq!(engine.valid_moves(), vec![0, 1, 2, 3]);

    let events = play(&mut engine, 0);
    assert!(events.contains(&GameEvent::TokenEntered {
        player: p(0),
        token: 0,
    }));

    let state = engine.state();
    assert_eq!(state.players[0].tokens[0].position, Position::Path(0));
    assert_eq!(state.players[0].tokens[0].steps_moved, 0);
    assert_eq!(state.current_player, p(0));
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.consecutive_sixes, 1);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::TurnPassed { .. })));
}

/// Anything but a six leaves base tokens where they are.
#[test]
fn test_base_needs_six() {
    for face in 1..=5 {
        let mut engine = engine(2, &[face]);
        roll(&mut engine);

        for token in 0..4 {
            assert!(!engine.is_valid_move(token));
        }
        assert!(!engine.has_any_valid_move());
    }
}

// =============================================================================
// Scenario B: overshooting home
// =============================================================================

/// Home must be hit exactly: index 5 plus 54 lands past index 57.
#[test]
fn test_overshoot_is_invalid() {
    assert_eq!(target_index(5, 54), None);

    let mut player = Player::new(Color::Red);
    player.tokens[0] = on_path(5);
    assert_eq!(movement::destination(&player.tokens[0], 54), None);
    assert!(!movement::can_move(&player, 0, 54));
}

#[test]
fn test_exact_roll_enters_home() {
    let mut state = GameState::new(2).unwrap();
    state.players[0].tokens[0] = on_path(55);
    state.players[0].tokens[1] = on_path(20);

    let mut engine = engine_at(state, &[3, 2]);

    // 55 + 3 overshoots; only the token at 20 can move
    roll(&mut engine);
    assert!(!engine.is_valid_move(0));
    assert!(engine.is_valid_move(1));
    play(&mut engine, 1);
    assert_eq!(engine.current_player(), p(1));

    // Hand the turn back and roll the exact two
    let mut state = engine.snapshot();
    state.current_player = p(0);
    engine.restore(state).unwrap();

    roll(&mut engine);
    assert!(engine.is_valid_move(0));
    let events = play(&mut engine, 0);

    let red = &engine.state().players[0];
    assert_eq!(red.tokens[0].position, Position::Home);
    assert_eq!(red.tokens[0].steps_moved, HOME_INDEX as u32);
    assert_eq!(red.home_count, 1);
    assert!(events.contains(&GameEvent::TokenHome {
        player: p(0),
        token: 0,
    }));
}

/// Home tokens never move again.
#[test]
fn test_home_is_terminal() {
    let mut state = GameState::new(2).unwrap();
    state.players[0].tokens[0] = home();
    state.players[0].home_count = 1;

    let mut engine = engine_at(state, &[6]);
    roll(&mut engine);

    assert!(!engine.is_valid_move(0));
    assert!(engine.is_valid_move(1));
}

// =============================================================================
// Scenario C: captures
// =============================================================================

/// Landing on an opponent on an unsafe cell sends it home and keeps the turn.
#[test]
fn test_capture_sends_opponent_to_base() {
    let mut state = GameState::new(4).unwrap();
    // Red index 2 + 3 = ring 5; blue index 44 = ring (13 + 44) % 52 = 5
    state.players[0].tokens[0] = on_path(2);
    state.players[1].tokens[1] = on_path(44);

    let mut engine = engine_at(state, &[3]);
    roll(&mut engine);
    let events = play(&mut engine, 0);

    let state = engine.state();
    assert_eq!(state.players[0].tokens[0].position, Position::Path(5));
    assert_eq!(state.players[1].tokens[1], Token::new());
    assert_eq!(
        state.last_capture,
        Some(Capture {
            player: p(1),
            token: 1,
        })
    );

    // Capture is a bonus: same player, fresh roll needed
    assert_eq!(state.current_player, p(0));
    assert_eq!(state.dice_value, None);
    assert_eq!(state.status, Status::Idle);

    assert!(events.contains(&GameEvent::TokenCaptured {
        by: p(0),
        victim: Capture {
            player: p(1),
            token: 1,
        },
        cell: CellId::Ring(5),
    }));
}

/// Two opponents sharing the landing cell are both captured.
#[test]
fn test_capture_multiple_opponents() {
    let mut state = GameState::new(3).unwrap();
    // Ring 30: red 30, blue 17, green 4
    state.players[0].tokens[0] = on_path(26);
    state.players[1].tokens[0] = on_path(17);
    state.players[2].tokens[2] = on_path(4);

    let mut engine = engine_at(state, &[4]);
    roll(&mut engine);
    let events = play(&mut engine, 0);

    let captured = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TokenCaptured { .. }))
        .count();
    assert_eq!(captured, 2);
    assert!(engine.state().players[1].tokens[0].position.is_base());
    assert!(engine.state().players[2].tokens[2].position.is_base());
    assert!(engine.state().last_capture.is_some());
}

/// Safe cells protect: both tokens share the cell and the turn passes.
#[test]
fn test_no_capture_on_safe_cell() {
    let mut state = GameState::new(2).unwrap();
    // Red index 8 is ring 8 (safe); blue index 47 is ring 8 as well
    state.players[0].tokens[0] = on_path(5);
    state.players[1].tokens[0] = on_path(47);

    let mut engine = engine_at(state, &[3]);
    roll(&mut engine);
    play(&mut engine, 0);

    let state = engine.state();
    assert!(engine.safe_cells().is_safe(CellId::Ring(8)));
    assert_eq!(state.players[0].tokens[0].position, Position::Path(8));
    assert_eq!(state.players[1].tokens[0].position, Position::Path(47));
    assert_eq!(state.last_capture, None);
    assert_eq!(state.current_player, p(1));
}

/// Opponents on another color's start cell are safe.
#[test]
fn test_no_capture_on_start_cell() {
    let mut state = GameState::new(2).unwrap();
    // Blue's start (ring 13) is red index 13
    state.players[0].tokens[0] = on_path(10);
    state.players[1].tokens[0] = on_path(0);

    let mut engine = engine_at(state, &[3]);
    roll(&mut engine);
    play(&mut engine, 0);

    assert_eq!(engine.state().players[1].tokens[0].position, Position::Path(0));
    assert_eq!(engine.state().last_capture, None);
}

/// A move that captures nothing clears the previous capture record.
#[test]
fn test_last_capture_is_cleared() {
    let mut state = GameState::new(2).unwrap();
    state.players[0].tokens[0] = on_path(2);
    state.players[1].tokens[1] = on_path(44);

    let mut engine = engine_at(state, &[3, 1]);
    roll(&mut engine);
    play(&mut engine, 0);
    assert!(engine.state().last_capture.is_some());

    roll(&mut engine);
    play(&mut engine, 0);
    assert_eq!(engine.state().last_capture, None);
}

/// A player may not land on a cell already holding one of their own tokens.
#[test]
fn test_self_block() {
    let mut state = GameState::new(2).unwrap();
    state.players[0].tokens[0] = on_path(10);
    state.players[0].tokens[1] = on_path(14);

    let mut engine = engine_at(state, &[4]);
    roll(&mut engine);

    assert!(!engine.is_valid_move(0));
    assert!(engine.is_valid_move(1));
    assert!(engine.move_token(0).is_err());
}

// =============================================================================
// Scenario D: auto-pass
// =============================================================================

/// An unplayable roll passes the turn once the grace period elapses.
#[test]
fn test_auto_pass_after_grace_period() {
    let mut engine = engine(4, &[3]);
    roll(&mut engine);

    assert_eq!(engine.status(), Status::Selecting);
    assert!(!engine.has_any_valid_move());
    assert_eq!(engine.pending().map(|d| d.phase), Some(Phase::AutoPass));

    let grace = engine.config().auto_pass_delay;
    assert!(engine.advance(grace - Duration::from_millis(1)).is_empty());
    assert_eq!(engine.status(), Status::Selecting);

    let events = engine.advance(Duration::from_millis(1));
    assert_eq!(
        events,
        vec![
            GameEvent::AutoPassed { player: p(0) },
            GameEvent::TurnPassed {
                from: p(0),
                to: p(1),
            },
        ]
    );

    let state = engine.state();
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.dice_value, None);
    assert_eq!(state.consecutive_sixes, 0);
    assert_eq!(state.current_player, p(1));
}

/// One long advance commits the roll and the auto-pass it schedules.
#[test]
fn test_auto_pass_chains_within_one_advance() {
    let mut engine = engine(3, &[2]);
    engine.roll_dice().unwrap();

    let events = engine.advance(Duration::from_secs(5));
    assert_eq!(events.len(), 3);
    assert_eq!(engine.current_player(), p(1));
    assert_eq!(engine.clock(), Duration::from_secs(5));
}

/// An auto-pass ticket overtaken by a reset is discarded.
#[test]
fn test_stale_auto_pass_is_discarded() {
    let mut engine = engine(4, &[3]);
    roll(&mut engine);
    let ticket = *engine.pending().unwrap();

    engine.reset(4).unwrap();
    assert!(engine.fire(&ticket).is_empty());

    let state = engine.state();
    assert_eq!(state.current_player, p(0));
    assert_eq!(state.turn_number, 1);
    assert!(state.history.is_empty());
}

/// Restoring a playable position invalidates the pending auto-pass.
#[test]
fn test_auto_pass_overtaken_by_restore() {
    let mut engine = engine(2, &[3]);
    roll(&mut engine);
    let ticket = *engine.pending().unwrap();

    let mut state = engine.snapshot();
    state.players[0].tokens[0] = on_path(4);
    engine.restore(state).unwrap();

    assert!(engine.has_any_valid_move());
    assert!(engine.pending().is_none());
    assert!(engine.fire(&ticket).is_empty());
    assert_eq!(engine.status(), Status::Selecting);
    assert_eq!(engine.current_player(), p(0));
}

// =============================================================================
// Scenario E: winner and runner-ups
// =============================================================================

fn nearly_done(state: &mut GameState, player: usize, last_index: u8) {
    for token in 0..3 {
        state.players[player].tokens[token] = home();
    }
    state.players[player].tokens[3] = on_path(last_index);
    state.players[player].home_count = 3;
}

#[test]
fn test_winner_then_runner_up() {
    let mut state = GameState::new(3).unwrap();
    nearly_done(&mut state, 0, 56);
    nearly_done(&mut state, 1, 55);

    let mut engine = engine_at(state, &[1, 2]);

    roll(&mut engine);
    let events = play(&mut engine, 3);
    assert!(events.contains(&GameEvent::PlayerFinished {
        player: p(0),
        place: 1,
    }));
    assert_eq!(engine.state().winner, Some(p(0)));
    assert_eq!(engine.current_player(), p(1));

    roll(&mut engine);
    let events = play(&mut engine, 3);
    assert!(events.contains(&GameEvent::PlayerFinished {
        player: p(1),
        place: 2,
    }));

    let state = engine.state();
    assert_eq!(state.winner, Some(p(0)));
    assert_eq!(state.runner_ups, vec![p(1)]);
    assert_eq!(engine.placement(p(1)), Some(2));
    assert_eq!(engine.placement(p(2)), None);

    // Green keeps playing for placement
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.current_player, p(2));
}

#[test]
fn test_game_over_when_all_placed() {
    let mut state = GameState::new(2).unwrap();
    nearly_done(&mut state, 0, 56);
    nearly_done(&mut state, 1, 56);

    let mut engine = engine_at(state, &[1, 1]);

    roll(&mut engine);
    play(&mut engine, 3);
    assert!(!engine.is_over());
    assert_eq!(engine.current_player(), p(1));

    roll(&mut engine);
    let events = play(&mut engine, 3);

    assert!(engine.is_over());
    assert_eq!(engine.state().standings(), vec![p(0), p(1)]);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            standings: vec![p(0), p(1)],
        })
    );
    assert!(engine.roll_dice().is_err());
}

/// The winner is fixed once set, however the rest of the game goes.
#[test]
fn test_winner_never_reassigned() {
    let mut state = GameState::new(4).unwrap();
    nearly_done(&mut state, 1, 56);
    nearly_done(&mut state, 2, 56);
    nearly_done(&mut state, 3, 56);
    state.current_player = p(1);

    let mut engine = engine_at(state, &[1, 1, 1]);
    for _ in 0..3 {
        roll(&mut engine);
        play(&mut engine, 3);
        assert_eq!(engine.state().winner, Some(p(1)));
    }

    assert_eq!(engine.state().runner_ups, vec![p(2), p(3)]);
    assert!(!engine.is_over());
    assert_eq!(engine.current_player(), p(0));
}
