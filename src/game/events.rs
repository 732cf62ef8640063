//! Session Events
//!
//! Typed signals toward the excluded collaborators: the UI overlay, the
//! audio element, the globe camera, the advance timer, and score storage.
//! The session pushes events into a pending buffer; the caller drains them
//! with `take_events` and owns all playback, animation, and storage behavior.

use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

use super::state::SessionToken;

/// Audio cue requested after an evaluated guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// The guess passed the distance threshold.
    Correct,
    /// The guess missed the threshold.
    Incorrect,
}

/// An engine-to-collaborator signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new run began under this effective seed.
    Started {
        /// Seed the question order was shuffled with (supplied or derived).
        seed: String,
        /// Size of the shuffled bank.
        question_count: usize,
    },

    /// Play the correct/incorrect cue.
    Cue {
        /// Which cue to play.
        cue: AudioCue,
    },

    /// Start or stop background music.
    MusicToggled {
        /// `true` to play, `false` to pause.
        playing: bool,
    },

    /// Re-center the camera on the true location.
    ///
    /// Emitted only when the guess failed the threshold; a correct guess
    /// causes no camera movement.
    FocusCamera {
        /// Coordinate of the correct answer.
        target: GeoPoint,
    },

    /// Ask the timer collaborator to call `advance` with this token after
    /// the pause interval. A token from a superseded run is a no-op.
    AdvanceScheduled {
        /// Identity of the run that scheduled the advance.
        token: SessionToken,
        /// How long to wait before advancing, in milliseconds.
        delay_ms: u64,
    },

    /// The run ended; the final score feeds leaderboard consideration.
    Ended {
        /// Total score of the finished run.
        final_score: u32,
        /// Number of evaluated guesses.
        answered: u32,
        /// Number of guesses within the threshold.
        correct: u32,
    },
}
