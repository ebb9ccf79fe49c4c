//! Safe-cell registry.
//!
//! A token on a safe cell cannot be captured. The standard set is every
//! color's start cell and the ring cell eight steps past it. Home-stretch and
//! home cells are color-exclusive, so they are safe as well.

use rustc_hash::FxHashSet;

use crate::core::Color;

use super::cell::{CellId, STRETCH_LEN};

/// Ring distance from a start cell to the second safe cell of that quarter.
const STAR_OFFSET: u8 = 8;

/// Set of capture-immune cells.
#[derive(Clone, Debug)]
pub struct SafeCells {
    cells: FxHashSet<CellId>,
}

impl SafeCells {
    /// The standard safe set.
    #[must_use]
    pub fn standard() -> Self {
        let mut cells = FxHashSet::default();

        for color in Color::ALL {
            let start = CellId::start_of(color);
            cells.insert(start);
            if let CellId::Ring(n) = start {
                cells.insert(CellId::Ring(n + STAR_OFFSET));
            }
            for step in 1..=STRETCH_LEN {
                cells.insert(CellId::Stretch { color, step });
            }
            cells.insert(CellId::Home(color));
        }

        Self { cells }
    }

    /// Is this cell immune to capture?
    #[must_use]
    pub fn is_safe(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Safe cells on the shared ring, sorted.
    #[must_use]
    pub fn ring_cells(&self) -> Vec<CellId> {
        let mut ring: Vec<_> = self.cells.iter().copied().filter(|c| c.is_ring()).collect();
        ring.sort();
        ring
    }
}

impl Default for SafeCells {
    fn default() -> Self {
        Self::standard()
    }
}
