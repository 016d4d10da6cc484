//! # orchard
//!
//! Rule engine for Orchard, a solitaire tile-placement game: draw six-tree
//! cards, rotate them, and overlay them on a shared board so matching trees
//! stack up points.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: A `GameSession` owns its board and cards.
//!    There is no global state; drivers construct a session and call it.
//!
//! 2. **Pure previews**: Placement projections never touch the board, and a
//!    refused placement changes nothing.
//!
//! 3. **Narrow collaborators**: Notices, draw animations, and shuffling go
//!    through the traits in `ports` and `core::rng`.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration
//! - `cards`: Card faces, orientation tables, card instances, catalog
//! - `orchard`: Board cells, overlay scoring, placement legality
//! - `session`: Phase machine, achievements, presentation snapshot
//! - `ports`: Notification and animation interfaces
//!
//! ## Open gap
//!
//! By the table rules a game also ends when no legal placement remains.
//! That condition is not detected; a game ends only once the pile and both
//! hands are empty.

pub mod cards;
pub mod core;
pub mod error;
pub mod orchard;
pub mod ports;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, GameRng, OrchardConfig, PileShuffler};

pub use crate::cards::{Card, CardCatalog, CardDefinition, Orientation, TreeType};

pub use crate::error::{EngineError, EngineResult};

pub use crate::orchard::{
    CellKind, Orchard, OrchardCell, Placement, PlacementDelta, Projection, Rejection,
};

pub use crate::ports::{
    AnimationSignal, NoAnimation, NotificationSink, RecordingSink, Severity, SilentSink,
    TransitionStatus, TransitionToken,
};

pub use crate::session::{Achievement, GameSession, HandSlot, Phase, SessionView};
