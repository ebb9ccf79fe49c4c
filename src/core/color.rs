//! Player colors and seat assignment.
//!
//! Colors are handed out from a fixed order: a 2-player game uses red and
//! blue, a 3-player game adds green, a 4-player game adds yellow. A player's
//! color never changes and doubles as the key into the path tables.

use serde::{Deserialize, Serialize};

/// One of the four player colors, in seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in seat order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Position of this color in seat order (red = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color assigned to the given seat, if the seat exists.
    #[must_use]
    pub fn for_seat(seat: usize) -> Option<Color> {
        Self::ALL.get(seat).copied()
    }

    /// Lowercase name, as used in cell labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
