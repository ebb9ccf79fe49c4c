//! Board geometry: cell identifiers, per-color path tables and safe cells.
//!
//! The board is a shared ring of 52 cells plus a private home stretch per
//! color. Each color's path is a view onto that ring starting at the color's
//! own start cell, so tokens of different colors meet by comparing `CellId`s,
//! never raw path indices.

pub mod cell;
pub mod path;
pub mod safe;

pub use cell::{CellId, RING_LEN, START_SPACING, STRETCH_LEN};
pub use path::{target_index, PathTable, PathTables, HOME_INDEX, PATH_LEN, RING_STEPS};
pub use safe::SafeCells;
