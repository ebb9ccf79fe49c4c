//! Per-color path tables.
//!
//! Every color walks the same shape: 51 ring cells starting at its own start
//! cell, then its 6 home-stretch cells, then its home cell. All tables have
//! length `PATH_LEN`, and `Position::Path(n)` always indexes the owner's table.

use std::ops::Index;

use crate::core::Color;

use super::cell::{CellId, RING_LEN, START_SPACING, STRETCH_LEN};

/// Ring cells a token travels before turning into its home stretch.
pub const RING_STEPS: usize = RING_LEN as usize - 1;

/// Length of every color's path.
pub const PATH_LEN: usize = RING_STEPS + STRETCH_LEN as usize + 1;

/// Final path index; landing here means entering `Home`.
pub const HOME_INDEX: usize = PATH_LEN - 1;

/// Index reached by moving `steps` from `index`, or `None` on overshoot.
///
/// Home must be reached exactly: no wraparound and no bounce-back.
///
/// ```
/// use rust_ludo::board::{target_index, HOME_INDEX};
///
/// assert_eq!(target_index(50, 4), Some(54));
/// assert_eq!(target_index(HOME_INDEX - 3, 3), Some(HOME_INDEX));
/// assert_eq!(target_index(5, 54), None);
/// ```
#[must_use]
pub fn target_index(index: usize, steps: usize) -> Option<usize> {
    let target = index + steps;
    (target <= HOME_INDEX).then_some(target)
}

/// Ordered cells of one color's route from start to home.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTable {
    color: Color,
    cells: Vec<CellId>,
}

impl PathTable {
    /// Build the route for a color.
    #[must_use]
    pub fn new(color: Color) -> Self {
        let offset = color.index() * START_SPACING as usize;
        let ring = (0..RING_STEPS).map(|i| CellId::Ring(((offset + i) % RING_LEN as usize) as u8));
        let stretch = (1..=STRETCH_LEN).map(|step| CellId::Stretch { color, step });

        let cells: Vec<CellId> = ring
            .chain(stretch)
            .chain(std::iter::once(CellId::Home(color)))
            .collect();
        debug_assert_eq!(cells.len(), PATH_LEN);

        Self { color, cells }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a path index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<CellId> {
        self.cells.get(index).copied()
    }

    /// The color's start cell (index 0).
    #[must_use]
    pub fn start(&self) -> CellId {
        self.cells[0]
    }

    /// Path index of a cell on this route.
    #[must_use]
    pub fn index_of(&self, cell: CellId) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}

impl Index<usize> for PathTable {
    type Output = CellId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// The four path tables, indexed by color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTables {
    tables: [PathTable; 4],
}

impl PathTables {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Color::ALL.map(PathTable::new),
        }
    }

    /// Route for a color.
    #[must_use]
    pub fn path_for(&self, color: Color) -> &PathTable {
        &self.tables[color.index()]
    }

    /// Resolve a color-relative path index to its shared cell.
    #[must_use]
    pub fn cell_at(&self, color: Color, index: usize) -> Option<CellId> {
        self.path_for(color).cell(index)
    }
}

impl Default for PathTables {
    fn default() -> Self {
        Self::new()
    }
}
