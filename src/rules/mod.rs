//! Rules engine.
//!
//! - `movement`: move legality and capture detection (pure)
//! - `turn`: who plays next
//! - `timer`: deferred phases and stale-ticket detection
//! - `engine`: the `RulesEngine` trait a presentation layer drives
//! - `ludo`: the engine itself

pub mod movement;
pub mod turn;
pub mod timer;
pub mod engine;
pub mod ludo;

pub use engine::RulesEngine;
pub use ludo::LudoEngine;
pub use timer::{Deferred, Phase, Timeline};
