//! Game configuration.
//!
//! `OrchardConfig` carries every tunable the rule engine reads. The defaults
//! are the standard game: a 100×100 board, a pile of 9 cards and at most two
//! rot-producing overlaps per game.
//!
//! ```
//! use orchard::core::OrchardConfig;
//!
//! let config = OrchardConfig::default().with_seed(7);
//! assert_eq!(config.center(), 5050);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CATALOG_SIZE;
use crate::error::{EngineError, EngineResult};

/// Default board width/height in cells.
pub const DEFAULT_DECK_SIZE: usize = 100;

/// Default number of cards dealt into the pile.
pub const DEFAULT_PILE_SIZE: usize = 9;

/// Default number of rot cells allowed per game.
pub const DEFAULT_ROT_CAP: u32 = 2;

/// Rule engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchardConfig {
    /// Board width (and height) in cells.
    pub deck_size: usize,

    /// Cards dealt into the pile at game start. The seed card is dealt
    /// separately, so this must leave at least one catalog entry unused.
    pub pile_size: usize,

    /// Maximum rot cells on the board per game.
    pub rot_cap: u32,

    /// How long rule-violation notices should stay visible.
    pub notice_duration: Duration,

    /// Seed for the default pile shuffler.
    pub seed: u64,
}

impl Default for OrchardConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            pile_size: DEFAULT_PILE_SIZE,
            rot_cap: DEFAULT_ROT_CAP,
            notice_duration: Duration::from_secs(3),
            seed: 0,
        }
    }
}

impl OrchardConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board width.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the pile size.
    #[must_use]
    pub fn with_pile_size(mut self, pile_size: usize) -> Self {
        self.pile_size = pile_size;
        self
    }

    /// Set the rot cap.
    #[must_use]
    pub fn with_rot_cap(mut self, rot_cap: u32) -> Self {
        self.rot_cap = rot_cap;
        self
    }

    /// Set the notice duration hint.
    #[must_use]
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn board_cells(&self) -> usize {
        self.deck_size * self.deck_size
    }

    /// Cell index of the board's exact center, where the seed card goes.
    #[must_use]
    pub fn center(&self) -> usize {
        (self.deck_size / 2) * self.deck_size + self.deck_size / 2
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        // a 3-wide footprint must fit on the board
        if self.deck_size < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "deck_size must be at least 3, got {}",
                self.deck_size
            )));
        }
        if self.pile_size == 0 || self.pile_size >= CATALOG_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "pile_size must be in 1..{}, got {}",
                CATALOG_SIZE, self.pile_size
            )));
        }
        Ok(())
    }
}
