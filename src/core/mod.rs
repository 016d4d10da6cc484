//! Core engine types: card ids, RNG, configuration.

pub mod config;
pub mod entity;
pub mod rng;

pub use config::OrchardConfig;
pub use entity::{CardId, IdAllocator};
pub use rng::{GameRng, PileShuffler};
