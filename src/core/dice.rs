//! Dice sources.
//!
//! The engine samples every roll through `DiceSource`, so a presentation
//! layer, a replay or a test can swap the seeded RNG for fixed values.

use std::collections::VecDeque;

use super::rng::GameRng;

/// Something that produces die faces in `1..=6`.
pub trait DiceSource {
    /// Sample the next face.
    fn roll(&mut self) -> u8;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Replays a fixed sequence of faces, then falls back to a seeded RNG.
///
/// ```
/// use rust_ludo::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 6, 2]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 2);
/// assert_eq!(dice.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Script the given faces. Panics if a face is outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let script: VecDeque<u8> = faces.into_iter().collect();
        assert!(
            script.iter().all(|f| (1..=6).contains(f)),
            "Die faces must be 1-6"
        );

        Self {
            script,
            fallback: GameRng::new(0),
        }
    }

    /// Seed used once the script runs out.
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback = GameRng::new(seed);
        self
    }

    /// Append more faces to the script.
    pub fn push(&mut self, face: u8) {
        assert!((1..=6).contains(&face), "Die faces must be 1-6");
        self.script.push_back(face);
    }

    /// Scripted faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.fallback.roll_die())
    }
}
