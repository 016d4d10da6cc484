//! Session phases and hand slots.

use serde::{Deserialize, Serialize};

/// Turn phase gating which session actions are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Filling empty hand slots from the pile.
    Draw,
    /// Waiting for the player to choose a hand card.
    Pick,
    /// A hand card is active and can be rotated, moved, and placed.
    Play,
    /// A draw transition is playing; no action is accepted.
    Transition,
    /// Game over until the next `start_game`.
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One of the two hand slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandSlot {
    Left,
    Right,
}

impl HandSlot {
    /// Draw order: left is always filled before right.
    pub const ALL: [HandSlot; 2] = [HandSlot::Left, HandSlot::Right];

    /// Array index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            HandSlot::Left => 0,
            HandSlot::Right => 1,
        }
    }
}

impl std::fmt::Display for HandSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HandSlot::Left => "left",
            HandSlot::Right => "right",
        })
    }
}
