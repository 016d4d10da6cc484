//! Game session: the draw / pick / play / end phase machine.
//!
//! ## Phases
//!
//! ```text
//! start_game ──► Draw ──draw──► Pick ──pick──► Play ──place_card──► Draw
//!                 │  ▲                ◄─unpick──  │
//!                 ▼  │ complete_transition        └──(pile and hands empty)──► End
//!              Transition
//! ```
//!
//! Every action checks its phase first and returns
//! `EngineError::PhaseMismatch` when called out of turn.

pub mod achievement;
pub mod game;
pub mod phase;
pub mod view;

pub use achievement::Achievement;
pub use game::{Drawn, DrawnCards, GameSession};
pub use phase::{HandSlot, Phase};
pub use view::SessionView;
