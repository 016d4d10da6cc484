//! Card definitions - static card faces.
//!
//! A `CardDefinition` is one of the 18 printed card faces: six trees laid
//! out as a 2-column × 3-row grid, read row-major:
//!
//! ```text
//! [0 1]
//! [2 3]
//! [4 5]
//! ```
//!
//! Orientation and board position belong to the `Card` instance, not here.

use serde::{Deserialize, Serialize};

/// Number of trees on every card.
pub const TREES_PER_CARD: usize = 6;

/// Fruit tree species printed on a card cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeType {
    Apple,
    Pear,
    Plum,
}

impl TreeType {
    /// All species in catalog order.
    pub const ALL: [TreeType; 3] = [TreeType::Apple, TreeType::Pear, TreeType::Plum];
}

impl std::fmt::Display for TreeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TreeType::Apple => "apple",
            TreeType::Pear => "pear",
            TreeType::Plum => "plum",
        };
        f.write_str(name)
    }
}

/// Immutable card face.
///
/// ```
/// use orchard::cards::{CardDefinition, TreeType::*};
///
/// let def = CardDefinition::new(3, [Apple, Pear, Plum, Apple, Pear, Plum]);
/// assert_eq!(def.index, 3);
/// assert_eq!(def.count(Apple), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog index (0..=17 for the standard catalog).
    pub index: u32,

    /// Trees in row-major order for the unrotated card.
    pub trees: [TreeType; TREES_PER_CARD],
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub const fn new(index: u32, trees: [TreeType; TREES_PER_CARD]) -> Self {
        Self { index, trees }
    }

    /// Count the trees of one species on this face.
    #[must_use]
    pub fn count(&self, tree: TreeType) -> usize {
        self.trees.iter().filter(|&&t| t == tree).count()
    }
}

#[cfg(test)]
mod tests {
    use super::TreeType::*;
    use super::*;

    #[test]
    fn test_count() {
        let def = CardDefinition::new(0, [Apple, Apple, Pear, Pear, Plum, Apple]);

        assert_eq!(def.count(Apple), 3);
        assert_eq!(def.count(Pear), 2);
        assert_eq!(def.count(Plum), 1);
    }

    #[test]
    fn test_tree_display() {
        assert_eq!(Apple.to_string(), "apple");
        assert_eq!(Plum.to_string(), "plum");
    }

    #[test]
    fn test_serialization_uses_lowercase_names() {
        let def = CardDefinition::new(1, [Apple, Pear, Plum, Apple, Pear, Plum]);
        let json = serde_json::to_string(&def).unwrap();
        assert!(json.contains("\"apple\""));

        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, deserialized);
    }
}
