//! Presentation snapshot.
//!
//! `SessionView` is a plain copy of what a renderer needs. The board map is
//! a persistent `im::OrdMap`, so taking a view does not copy the cells.
//! Compare `revision` against the last rendered view to skip redundant work.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::achievement::Achievement;
use super::phase::{HandSlot, Phase};
use crate::cards::Card;
use crate::orchard::OrchardCell;

/// Read-only state of a session at one revision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub revision: u64,
    pub phase: Option<Phase>,
    pub left: Option<Card>,
    pub right: Option<Card>,
    pub active: Option<HandSlot>,
    pub pile_remaining: usize,
    pub cells: OrdMap<usize, OrchardCell>,
    pub total_score: i32,
    pub transitional_score: i32,
    pub rot_count: u32,
    pub achievement: Option<Achievement>,
}

impl SessionView {
    /// Card in the given hand slot.
    #[must_use]
    pub fn hand(&self, slot: HandSlot) -> Option<&Card> {
        match slot {
            HandSlot::Left => self.left.as_ref(),
            HandSlot::Right => self.right.as_ref(),
        }
    }

    /// Whether anything changed since `previous`.
    #[must_use]
    pub fn is_newer_than(&self, previous: &SessionView) -> bool {
        self.revision > previous.revision
    }
}
