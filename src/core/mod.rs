//! Core types: colors, players, tokens, state, actions, events, dice,
//! configuration and errors.

pub mod color;
pub mod token;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;
pub mod action;
pub mod event;
pub mod state;

pub use color::Color;
pub use token::{Position, Token, TOKENS_PER_PLAYER};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use dice::{DiceSource, ScriptedDice};
pub use config::{LudoConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, ErrorKind, InvariantViolation, RulesError};
pub use action::{Action, ActionRecord};
pub use event::GameEvent;
pub use state::{Capture, GameState, Status};
