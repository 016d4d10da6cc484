//! Card instance identification.
//!
//! Every card dealt into a game (pile cards and the seed card) gets a unique
//! `CardId`. IDs are allocated monotonically by the owning session and are
//! never reused, even across `start_game` calls.
//!
//! ```
//! use orchard::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, CardId(0));
//! assert!(second > first);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a card instance.
///
/// Distinct from the definition index: two instances of the same
/// definition (in different games) have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic `CardId` source.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}
