//! Card orientation and the fixed tree permutation tables.
//!
//! Rotating a card clockwise re-reads its printed trees through a fixed
//! index table. The rotated layouts, read row-major, are:
//!
//! ```text
//! Top      Right      Down     Left
//! [0 1]    [4 2 0]    [5 4]    [1 3 5]
//! [2 3]    [5 3 1]    [3 2]    [0 2 4]
//! [4 5]               [1 0]
//! ```

use serde::{Deserialize, Serialize};

use super::definition::{TreeType, TREES_PER_CARD};

const TOP: [usize; TREES_PER_CARD] = [0, 1, 2, 3, 4, 5];
const RIGHT: [usize; TREES_PER_CARD] = [4, 2, 0, 5, 3, 1];
const DOWN: [usize; TREES_PER_CARD] = [5, 4, 3, 2, 1, 0];
const LEFT: [usize; TREES_PER_CARD] = [1, 3, 5, 0, 2, 4];

/// Which way the top edge of the printed card faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Unrotated.
    #[default]
    Top,
    /// Rotated 90° clockwise.
    Right,
    /// Rotated 180°.
    Down,
    /// Rotated 270° clockwise.
    Left,
}

impl Orientation {
    /// Clockwise order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Top,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Next orientation clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Orientation::Top => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Top,
        }
    }

    /// Index table mapping rotated cell -> printed cell.
    #[must_use]
    pub const fn permutation(self) -> &'static [usize; TREES_PER_CARD] {
        match self {
            Orientation::Top => &TOP,
            Orientation::Right => &RIGHT,
            Orientation::Down => &DOWN,
            Orientation::Left => &LEFT,
        }
    }

    /// Top and Down cover a 2-wide × 3-tall block; Right and Left 3 × 2.
    #[must_use]
    pub const fn is_upright(self) -> bool {
        matches!(self, Orientation::Top | Orientation::Down)
    }

    /// Footprint width in cells.
    #[must_use]
    pub const fn columns(self) -> usize {
        if self.is_upright() {
            2
        } else {
            3
        }
    }

    /// Apply this orientation's table to a printed layout.
    #[must_use]
    pub fn apply(self, printed: &[TreeType; TREES_PER_CARD]) -> [TreeType; TREES_PER_CARD] {
        self.permutation().map(|i| printed[i])
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Top => "top",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        };
        f.write_str(name)
    }
}
