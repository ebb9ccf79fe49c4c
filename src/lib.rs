//! # rust-ludo
//!
//! Rules engine for four-player Ludo: token movement, captures, turn order
//! and placement tracking, driven by dice rolls.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, no animation, no input handling. A
//!    presentation layer reads `GameState` snapshots and issues intents.
//!
//! 2. **Shared Cell Identifiers**: Each color indexes its own path table;
//!    tokens of different colors meet by comparing `CellId`s, not indices.
//!
//! 3. **Two-Phase Operations**: `roll_dice` and `move_token` return a
//!    `Deferred` ticket. The state commits when the ticket fires, after the
//!    presentation delay. Stale tickets are discarded by generation.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_ludo::{LudoConfig, LudoEngine, RulesEngine, Status};
//!
//! let mut engine = LudoEngine::new(LudoConfig::default().with_seed(7)).unwrap();
//! engine.roll_dice().unwrap();
//! assert_eq!(engine.status(), Status::Rolling);
//!
//! engine.advance(Duration::from_millis(800));
//! assert!(engine.state().dice_value.is_some() || engine.status() == Status::Idle);
//! ```
//!
//! ## Modules
//!
//! - `core`: Colors, players, tokens, state, actions, events, dice, config, errors
//! - `board`: Cell identifiers, path tables, safe-cell registry
//! - `rules`: Movement, turn order, deferred phases, the engine

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Capture, Color, ConfigError, DiceSource, ErrorKind, GameEvent,
    GameRng, GameRngState, GameState, InvariantViolation, LudoConfig, Player, PlayerId,
    Position, RulesError, ScriptedDice, Status, Token, TOKENS_PER_PLAYER,
};

pub use crate::board::{CellId, PathTable, PathTables, SafeCells, HOME_INDEX, PATH_LEN};

pub use crate::rules::{Deferred, LudoEngine, Phase, RulesEngine};
