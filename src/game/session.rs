//! Quiz Session State Machine
//!
//! One timed run: questions drawn from the shuffled bank, guesses scored by
//! great-circle distance, counters accumulated, countdown ticked once per
//! second. All mutators are synchronous and return immediately; the only
//! concurrency hazard (a second guess landing during the post-evaluation
//! pause) is resolved by the phase guard, and stale advance timers are
//! rejected by the session token.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::geo::{distance_km, GeoPoint};
use crate::core::shuffle::seeded_shuffle;
use crate::{ADVANCE_PAUSE_MS, MAX_POINTS_PER_GUESS, MISSED_GUESS_KM};

use super::catalog::{Mode, Question};
use super::config::SessionConfig;
use super::events::{AudioCue, SessionEvent};
use super::state::{GuessResult, SessionPhase, SessionToken};

/// Errors surfaced by session operations.
///
/// Deliberately small: range violations clamp, stray guesses are ignored,
/// and a missing guess coordinate becomes the sentinel distance. The empty
/// bank is the one condition that must fail loudly instead of producing an
/// undefined current question.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selected mode produced no questions, so a run cannot start.
    #[error("question bank for mode '{mode}' is empty")]
    EmptyBank {
        /// Mode whose bank was empty.
        mode: Mode,
    },
}

/// One timed quiz run, exclusively owned by the caller.
///
/// Created idle; `start` begins a run, `submit_guess`/`advance`/`tick` drive
/// it, `pause` or countdown expiry ends it, and the next `start` discards it.
/// Collaborator side effects (audio, camera, the advance timer, storage) are
/// emitted as [`SessionEvent`]s and drained with [`QuizSession::take_events`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuizSession {
    /// Active configuration (clamped at start).
    config: SessionConfig,

    /// Effective seed of the current run (supplied or time-derived).
    seed: Option<String>,

    /// Shuffled permutation of the active bank.
    order: Vec<Question>,

    /// Position in `order`; wraps modulo the bank size on read, so a long
    /// run repeats questions in the same shuffled order.
    current_index: usize,

    /// Accumulated score. Monotonically non-decreasing within a run.
    score: u32,

    /// Number of evaluated guesses.
    answered: u32,

    /// Number of guesses within the threshold.
    correct: u32,

    /// Remaining countdown in seconds.
    time_left: u32,

    /// Current phase of the state machine.
    phase: SessionPhase,

    /// Identity of the current run; bumped on every start.
    token: SessionToken,

    /// Result of the most recent guess, cleared on advance.
    last_result: Option<GuessResult>,

    /// Events generated since the last drain.
    #[serde(skip)]
    pending_events: Vec<SessionEvent>,
}

impl QuizSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, discarding any previous one.
    ///
    /// The bank must be non-empty; the config is clamped; the question order
    /// is freshly shuffled with the configured seed, or a time-derived seed
    /// when none is supplied (so independent unseeded runs differ while each
    /// stays internally reproducible). Bumping the session token makes any
    /// advance scheduled by the previous run inert.
    pub fn start(&mut self, config: SessionConfig, bank: &[Question]) -> Result<(), SessionError> {
        if bank.is_empty() {
            return Err(SessionError::EmptyBank { mode: config.mode });
        }

        let config = config.clamped();
        let seed = config.seed.clone().unwrap_or_else(fallback_seed);

        self.token = self.token.bump();
        self.order = seeded_shuffle(bank, &seed);
        self.current_index = 0;
        self.score = 0;
        self.answered = 0;
        self.correct = 0;
        self.time_left = config.duration_secs;
        self.phase = SessionPhase::AwaitingGuess;
        self.last_result = None;
        self.pending_events.clear();

        info!(
            seed = %seed,
            mode = %config.mode,
            duration_secs = config.duration_secs,
            pass_distance_km = config.pass_distance_km,
            questions = self.order.len(),
            "session started"
        );

        self.push_event(SessionEvent::Started {
            seed: seed.clone(),
            question_count: self.order.len(),
        });
        if config.music {
            self.push_event(SessionEvent::MusicToggled { playing: true });
        }

        self.seed = Some(seed);
        self.config = config;
        Ok(())
    }

    /// Evaluate a guessed coordinate against the current question.
    ///
    /// Accepted only while awaiting a guess; otherwise (before start, during
    /// the post-evaluation pause, after the run ended) the call is a silent
    /// no-op returning `None`. A missing coordinate (forced timeout) is
    /// scored with the sentinel distance, guaranteeing a failed evaluation
    /// rather than an error.
    pub fn submit_guess(&mut self, guess: Option<GeoPoint>) -> Option<GuessResult> {
        if self.phase != SessionPhase::AwaitingGuess {
            return None;
        }
        let question = self.current_question()?.clone();

        let dist = match guess {
            Some(point) => distance_km(point, question.coord),
            None => MISSED_GUESS_KM,
        };
        let within = dist <= self.config.pass_distance_km;
        let points = points_for_distance(dist);

        self.score += points;
        self.answered += 1;
        if within {
            self.correct += 1;
        }

        let result = GuessResult {
            question_id: question.id,
            distance_km: dist,
            within_threshold: within,
            points_awarded: points,
        };
        self.last_result = Some(result);
        self.phase = SessionPhase::Evaluated;

        debug!(
            question = %question.name,
            distance_km = dist,
            within_threshold = within,
            points,
            "guess evaluated"
        );

        self.push_event(SessionEvent::Cue {
            cue: if within { AudioCue::Correct } else { AudioCue::Incorrect },
        });
        // A correct guess causes no camera movement; only a miss re-centers
        // the view on the true location.
        if !within {
            self.push_event(SessionEvent::FocusCamera { target: question.coord });
        }
        self.push_event(SessionEvent::AdvanceScheduled {
            token: self.token,
            delay_ms: ADVANCE_PAUSE_MS,
        });

        Some(result)
    }

    /// Move on to the next question after the post-evaluation pause.
    ///
    /// No-op unless `token` identifies the live run and a guess was just
    /// evaluated; returns whether the session advanced. The index wraps over
    /// the bank, repeating the same shuffled order.
    pub fn advance(&mut self, token: SessionToken) -> bool {
        if token != self.token || self.phase != SessionPhase::Evaluated {
            return false;
        }
        self.last_result = None;
        self.current_index += 1;
        self.phase = SessionPhase::AwaitingGuess;
        true
    }

    /// Count down one second; call once per second while the run is live.
    ///
    /// At zero the run ends and the final score is emitted for leaderboard
    /// consideration.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.end_run();
        }
    }

    /// End the run externally without altering counters or the order.
    ///
    /// Resume is out of scope: the next `start` begins a fresh run.
    pub fn pause(&mut self) {
        if self.is_running() {
            self.end_run();
        }
    }

    fn end_run(&mut self) {
        self.phase = SessionPhase::Ended;
        if self.config.music {
            self.push_event(SessionEvent::MusicToggled { playing: false });
        }
        self.push_event(SessionEvent::Ended {
            final_score: self.score,
            answered: self.answered,
            correct: self.correct,
        });
        info!(
            final_score = self.score,
            answered = self.answered,
            correct = self.correct,
            "session ended"
        );
    }

    /// Drain pending collaborator events (consumes them).
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn push_event(&mut self, event: SessionEvent) {
        self.pending_events.push(event);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The question currently presented, if a run has started.
    pub fn current_question(&self) -> Option<&Question> {
        if self.order.is_empty() {
            return None;
        }
        Some(&self.order[self.current_index % self.order.len()])
    }

    /// Active configuration (clamped).
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seed the current run was shuffled with; `None` before the first start.
    pub fn effective_seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// The shuffled question order of the current run.
    pub fn question_order(&self) -> &[Question] {
        &self.order
    }

    /// Accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of evaluated guesses.
    pub fn answered_count(&self) -> u32 {
        self.answered
    }

    /// Number of guesses within the threshold.
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Remaining countdown in seconds.
    pub fn time_left_secs(&self) -> u32 {
        self.time_left
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the countdown is live.
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Identity of the current run.
    pub fn token(&self) -> SessionToken {
        self.token
    }

    /// Result of the most recent guess, until the session advances.
    pub fn last_result(&self) -> Option<GuessResult> {
        self.last_result
    }
}

/// Linear decay: 250 points at distance zero, 0 points at >= 250 km.
///
/// Independent of the pass threshold: a failed guess can still earn points
/// under a tight threshold, and a passing guess can earn none under a
/// lenient one.
fn points_for_distance(distance_km: f64) -> u32 {
    let decay = (f64::from(MAX_POINTS_PER_GUESS) - distance_km).round();
    if decay > 0.0 {
        decay as u32
    } else {
        0
    }
}

/// Time-derived seed for unseeded runs.
///
/// Nanosecond resolution keeps two independent starts from colliding while
/// each run stays reproducible from the seed it reports.
fn fallback_seed() -> String {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos.to_string())
        .unwrap_or_else(|| now.timestamp_millis().to_string())
}

// =============================================================================
// TESTS
// =============================================================================
