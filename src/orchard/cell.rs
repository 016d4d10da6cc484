//! Board cells and placement projections.
//!
//! `OrchardCell` is what the board stores for an occupied position.
//! `PlacementDelta` is what one card cell *would* do to the board if the
//! card were committed; it is computed fresh for every preview and never
//! stored.

use serde::{Deserialize, Serialize};

use crate::cards::TreeType;

/// Score carried by a rot cell.
pub const ROT_SCORE: i32 = -3;

/// Occupant of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Tree(TreeType),
    /// Mismatched overlap; blocks any further overlap at this cell.
    Rot,
}

/// Projected outcome for one card cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Tree(TreeType),
    Rot,
    /// Overlaps an existing rot cell; poisons the whole placement.
    Invalid,
}

impl Projection {
    /// The cell this projection commits as, if it can be committed.
    #[must_use]
    pub fn cell_kind(self) -> Option<CellKind> {
        match self {
            Projection::Tree(tree) => Some(CellKind::Tree(tree)),
            Projection::Rot => Some(CellKind::Rot),
            Projection::Invalid => None,
        }
    }
}

/// An occupied board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrchardCell {
    pub position: usize,
    pub kind: CellKind,
    pub score: i32,
}

impl OrchardCell {
    #[must_use]
    pub fn is_rot(&self) -> bool {
        self.kind == CellKind::Rot
    }
}

/// Effect of one card cell on its target board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementDelta {
    pub position: usize,
    pub projection: Projection,
    /// Score the cell would hold after the placement.
    pub score: i32,
    /// Change relative to the current occupant.
    pub diff: i32,
}

impl PlacementDelta {
    /// Project `tree` landing on `existing`.
    #[must_use]
    pub fn project(position: usize, tree: TreeType, existing: Option<&OrchardCell>) -> Self {
        let (projection, score, diff) = match existing {
            None => (Projection::Tree(tree), 0, 0),
            Some(cell) => match cell.kind {
                CellKind::Tree(under) if under == tree => {
                    let (score, diff) = escalate(cell.score);
                    (Projection::Tree(tree), score, diff)
                }
                CellKind::Rot => (Projection::Invalid, 0, 0),
                CellKind::Tree(_) => (Projection::Rot, ROT_SCORE, ROT_SCORE - cell.score),
            },
        };
        Self {
            position,
            projection,
            score,
            diff,
        }
    }

    #[must_use]
    pub fn is_rot(&self) -> bool {
        self.projection == Projection::Rot
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.projection == Projection::Invalid
    }
}

/// Same-species overlap ladder: 0 → 1 → 3 → 6 → 6.
///
/// Returns the new score and the gain.
#[must_use]
pub const fn escalate(score: i32) -> (i32, i32) {
    match score {
        1 => (3, 2),
        3 => (6, 3),
        6 => (6, 0),
        _ => (1, 1),
    }
}
