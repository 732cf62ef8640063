//! Session State Types
//!
//! Phases of the quiz state machine, the per-run session token, and the
//! transient result of one evaluated guess.

use serde::{Deserialize, Serialize};

/// Phase of the quiz session state machine.
///
/// Idle -> (`start`) -> AwaitingGuess -> (`submit_guess`) -> Evaluated ->
/// (`advance`) -> AwaitingGuess ... -> (timer expiry or `pause`) -> Ended ->
/// (`start`) -> AwaitingGuess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    /// No run has started yet.
    #[default]
    Idle,
    /// A question is presented and a guess is accepted.
    AwaitingGuess,
    /// A guess was just evaluated; further guesses are rejected until the
    /// scheduled advance fires.
    Evaluated,
    /// The run is over (countdown reached zero, or paused externally).
    Ended,
}

impl SessionPhase {
    /// Whether the countdown is live (a started, unfinished run).
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, SessionPhase::AwaitingGuess | SessionPhase::Evaluated)
    }
}

/// Identity of one started run.
///
/// Bumped on every `start`, so a scheduled advance that outlives its run is
/// detectably stale and ignored instead of mutating the next session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SessionToken(pub u64);

impl SessionToken {
    /// The next token in the monotonic sequence.
    pub(crate) fn bump(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Outcome of one evaluated guess.
///
/// Transient: superseded when the session advances to the next question and
/// never persisted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    /// Id of the question that was answered.
    pub question_id: u32,
    /// Great-circle distance from guess to target (km); the sentinel
    /// distance when no coordinate was supplied.
    pub distance_km: f64,
    /// Whether the guess fell within the configured pass distance.
    pub within_threshold: bool,
    /// Points awarded: 250 at distance zero, linearly down to 0 at 250 km.
    /// Decoupled from the pass threshold on purpose.
    pub points_awarded: u32,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_phases() {
        assert!(!SessionPhase::Idle.is_running());
        assert!(SessionPhase::AwaitingGuess.is_running());
        assert!(SessionPhase::Evaluated.is_running());
        assert!(!SessionPhase::Ended.is_running());
    }

    #[test]
    fn test_token_is_monotonic() {
        let t0 = SessionToken::default();
        let t1 = t0.bump();
        let t2 = t1.bump();
        assert!(t0 < t1 && t1 < t2);
        assert_ne!(t1, t2);
    }
}
