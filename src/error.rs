//! Engine error type.
//!
//! Every variant is a protocol error: the caller asked for something the
//! current session state cannot do. Illegal placements are not errors; they
//! are reported through the notification sink and leave state untouched.

use thiserror::Error;

use crate::core::CardId;
use crate::session::{HandSlot, Phase};

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Protocol errors raised by the rule engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("`{action}` requires phase {expected}, but the session is {}", describe_phase(.actual))]
    PhaseMismatch {
        action: &'static str,
        expected: Phase,
        actual: Option<Phase>,
    },

    #[error("{0} hand slot is empty")]
    EmptyHand(HandSlot),

    #[error("no card is picked")]
    NoActiveCard,

    #[error("no card definition with index {0}")]
    UnknownCardIndex(u32),

    #[error("{0} is not tracked by this session")]
    UnknownCardId(CardId),

    #[error("position {position} is outside the {cells}-cell board")]
    PositionOutOfBounds { position: usize, cells: usize },

    #[error("no draw transition matches token {got:?} (pending: {expected:?})")]
    StaleTransition { expected: Option<u64>, got: u64 },

    #[error("a draw transition is still playing (token {0})")]
    TransitionInFlight(u64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn describe_phase(phase: &Option<Phase>) -> String {
    match phase {
        Some(phase) => format!("in {phase}"),
        None => "not started".to_string(),
    }
}
