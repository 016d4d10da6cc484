//! Card catalog for definition lookup.
//!
//! The `CardCatalog` holds the 18 printed card faces. It is built once and
//! shared read-only by every game a session plays.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, TreeType, TREES_PER_CARD};
use crate::error::{EngineError, EngineResult};

/// Number of faces in the standard catalog.
pub const CATALOG_SIZE: usize = 18;

const A: TreeType = TreeType::Apple;
const P: TreeType = TreeType::Pear;
const U: TreeType = TreeType::Plum;

/// Printed layouts of the standard catalog, by index.
const STANDARD_LAYOUTS: [[TreeType; TREES_PER_CARD]; CATALOG_SIZE] = [
    [A, A, P, P, U, U],
    [A, P, A, P, U, U],
    [A, P, U, A, P, U],
    [P, P, A, A, U, U],
    [P, A, U, U, A, P],
    [U, U, A, A, P, P],
    [U, A, P, U, A, P],
    [A, A, A, P, P, U],
    [P, P, P, U, U, A],
    [U, U, U, A, A, P],
    [A, U, P, P, U, A],
    [P, U, A, A, U, P],
    [U, P, A, P, U, A],
    [A, A, U, U, P, P],
    [P, P, U, A, A, U],
    [U, U, P, P, A, A],
    [A, P, P, U, U, A],
    [P, U, U, A, A, P],
];

/// Registry of card definitions keyed by catalog index.
///
/// ```
/// use orchard::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 18);
/// assert!(catalog.get(17).is_ok());
/// assert!(catalog.get(18).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<u32, Arc<CardDefinition>>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 18-card catalog the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (index, trees) in STANDARD_LAYOUTS.iter().enumerate() {
            catalog.register(CardDefinition::new(index as u32, *trees));
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a definition with the same index already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.index) {
            panic!("Card index {} already registered", card.index);
        }
        self.cards.insert(card.index, Arc::new(card));
    }

    /// Get a definition by catalog index.
    pub fn get(&self, index: u32) -> EngineResult<&Arc<CardDefinition>> {
        self.cards.get(&index).ok_or(EngineError::UnknownCardIndex(index))
    }

    /// Get the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All registered indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> Vec<u32> {
        let mut indices: Vec<_> = self.cards.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Iterate over all definitions in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> + '_ {
        self.indices().into_iter().filter_map(move |i| self.cards.get(&i))
    }
}
