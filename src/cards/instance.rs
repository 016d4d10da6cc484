//! Card instances - runtime card state.
//!
//! `Card` is a specific card dealt into a game. It tracks the mutable
//! orientation and board position and keeps `trees` in sync with the
//! orientation. `trees` is always a permutation of `definition.trees`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, TreeType, TREES_PER_CARD};
use super::orientation::Orientation;
use crate::core::CardId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance id.
    pub id: CardId,

    /// Printed face, shared with the catalog.
    pub definition: Arc<CardDefinition>,

    orientation: Orientation,

    /// Cell index of the footprint's top-left corner.
    pub position: usize,

    trees: [TreeType; TREES_PER_CARD],
}

impl Card {
    /// Create an unrotated card at position 0.
    #[must_use]
    pub fn new(id: CardId, definition: Arc<CardDefinition>) -> Self {
        let trees = definition.trees;
        Self {
            id,
            definition,
            orientation: Orientation::Top,
            position: 0,
            trees,
        }
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Trees in row-major order for the current orientation.
    #[must_use]
    pub fn trees(&self) -> &[TreeType; TREES_PER_CARD] {
        &self.trees
    }

    /// Rotate to `target`, or one step clockwise when `None`.
    ///
    /// Returns the new orientation.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use orchard::cards::{Card, CardDefinition, Orientation, TreeType::*};
    /// use orchard::core::CardId;
    ///
    /// let def = Arc::new(CardDefinition::new(0, [Apple, Pear, Plum, Apple, Pear, Plum]));
    /// let mut card = Card::new(CardId(0), def);
    ///
    /// assert_eq!(card.rotate(None), Orientation::Right);
    /// assert_eq!(card.rotate(Some(Orientation::Top)), Orientation::Top);
    /// ```
    pub fn rotate(&mut self, target: Option<Orientation>) -> Orientation {
        self.orientation = target.unwrap_or_else(|| self.orientation.next());
        self.trees = self.orientation.apply(&self.definition.trees);
        self.orientation
    }

    /// Absolute board cells covered by this card, in `trees` order.
    #[must_use]
    pub fn footprint(&self, deck_size: usize) -> [usize; TREES_PER_CARD] {
        self.footprint_at(self.position, deck_size)
    }

    /// Cells this card would cover if its top-left corner sat at `position`.
    ///
    /// The last entry is always the highest cell index.
    #[must_use]
    pub fn footprint_at(&self, position: usize, deck_size: usize) -> [usize; TREES_PER_CARD] {
        let columns = self.orientation.columns();
        std::array::from_fn(|i| position + deck_size * (i / columns) + i % columns)
    }
}
