//! Narrow interfaces to the collaborators outside the rule engine.
//!
//! The engine never renders anything itself. It reports rule violations and
//! the end-of-game result through a [`NotificationSink`] and asks an
//! [`AnimationSignal`] to play each draw transition. Both are supplied by
//! whoever drives the session.
//!
//! ## Draw transitions
//!
//! Drawing is a two-phase exchange. For every card drawn the engine issues a
//! [`TransitionToken`] to the signal. If the signal reports
//! [`TransitionStatus::Complete`] the engine keeps drawing; if it reports
//! [`TransitionStatus::Pending`] the session parks in `Phase::Transition`
//! until the driver calls `GameSession::complete_transition` with the same
//! token.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::HandSlot;

/// How prominent a notice is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Fire-and-forget message channel to the player.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration);
}

/// Sink that drops every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn notify(&mut self, _message: &str, _severity: Severity, _duration: Duration) {}
}

/// A notice captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Sink that keeps every notice, for headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub notices: Vec<Notice>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent notice.
    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration) {
        self.notices.push(Notice {
            message: message.to_string(),
            severity,
            duration,
        });
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration) {
        (**self).notify(message, severity, duration);
    }
}

/// Identifies one in-flight draw transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionToken(pub u64);

/// Whether a requested transition has already finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStatus {
    /// Finished synchronously; the engine continues immediately.
    Complete,
    /// Still playing; the driver must call `complete_transition`.
    Pending,
}

/// Plays the pile-to-hand transition for a drawn card.
pub trait AnimationSignal {
    fn play_draw_transition(&mut self, slot: HandSlot, token: TransitionToken) -> TransitionStatus;
}

/// Signal with no animation: every transition completes at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnimation;

impl AnimationSignal for NoAnimation {
    fn play_draw_transition(&mut self, _slot: HandSlot, _token: TransitionToken) -> TransitionStatus {
        TransitionStatus::Complete
    }
}
