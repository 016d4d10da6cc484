//! The board: sparse occupancy, overlay scoring, placement legality.
//!
//! ## Overlay rules
//!
//! For each of the six cells a card covers:
//! - empty cell: the tree is planted with score 0
//! - same species: the score climbs 0 → 1 → 3 → 6 (and stays at 6)
//! - different species: the cell rots (score −3)
//! - rot cell: the whole placement is invalid
//!
//! A placement is legal when every cell is on the board and none is invalid,
//! the per-game rot cap holds, and at least one cell matches an existing tree.
//! Cells past the right edge wrap onto the next row; the bottom edge is hard.

pub mod board;
pub mod cell;

pub use board::{Orchard, Placement, Rejection};
pub use cell::{escalate, CellKind, OrchardCell, PlacementDelta, Projection, ROT_SCORE};
