//! Canonical cell identifiers.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Cells on the shared ring.
pub const RING_LEN: u8 = 52;

/// Ring distance between consecutive colors' start cells.
pub const START_SPACING: u8 = RING_LEN / 4;

/// Cells in each color's home stretch.
pub const STRETCH_LEN: u8 = 6;

/// A physical square on the board.
///
/// Ring cells are shared by every color. Stretch and home cells belong to a
/// single color and can never be reached by anyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellId {
    /// Shared ring cell `0..RING_LEN`, numbered from red's start.
    Ring(u8),
    /// Home-stretch cell `1..=STRETCH_LEN` of a color.
    Stretch { color: Color, step: u8 },
    /// Terminal home cell of a color.
    Home(Color),
}

impl CellId {
    /// Start cell of a color.
    #[must_use]
    pub const fn start_of(color: Color) -> Self {
        CellId::Ring(color.index() as u8 * START_SPACING)
    }

    #[must_use]
    pub const fn is_ring(self) -> bool {
        matches!(self, CellId::Ring(_))
    }

    /// Owning color for stretch and home cells; `None` for ring cells.
    #[must_use]
    pub const fn owner(self) -> Option<Color> {
        match self {
            CellId::Ring(_) => None,
            CellId::Stretch { color, .. } | CellId::Home(color) => Some(color),
        }
    }

    /// Color whose start cell this is, if any.
    #[must_use]
    pub fn start_color(self) -> Option<Color> {
        match self {
            CellId::Ring(n) if n % START_SPACING == 0 => Color::for_seat((n / START_SPACING) as usize),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            CellId::Ring(n) => match self.start_color() {
                Some(color) => write!(f, "{}-0", color),
                None => write!(f, "cell-{}", n),
            },
            CellId::Stretch { color, step } => write!(f, "{}H{}", color, step),
            CellId::Home(color) => write!(f, "{}-home", color),
        }
    }
}
