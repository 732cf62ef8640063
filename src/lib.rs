//! # Globe Quiz Engine
//!
//! Deterministic quiz-session core for a globe geography game: the player is
//! shown a place name (and hint), guesses its location on a globe, and scores
//! by great-circle distance to the true coordinate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GLOBE QUIZ ENGINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── geo.rs      - Haversine great-circle distance           │
//! │  ├── rng.rs      - Seeded Mulberry32 PRNG (string seeds)     │
//! │  └── shuffle.rs  - Fisher-Yates shuffles (copying)           │
//! │                                                              │
//! │  game/           - Session logic                             │
//! │  ├── catalog.rs  - Place catalog, modes, normalization       │
//! │  ├── config.rs   - Session configuration and clamping        │
//! │  ├── state.rs    - Phases, tokens, guess results             │
//! │  ├── session.rs  - The timed quiz-session state machine      │
//! │  └── events.rs   - Events toward UI/audio/camera/storage     │
//! │                                                              │
//! │  share.rs        - Session config <-> query-string codec     │
//! │  leaderboard.rs  - Top-score merge (persistence is external) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are deterministic for a given seed string:
//! all shuffle randomness flows from the in-crate Mulberry32 stream, which is
//! pure 32-bit integer arithmetic. Two sessions started with the same seed
//! and the same bank present the same questions in the same order on any
//! platform. The only ambient inputs are the time-derived fallback seed (used
//! when no seed is supplied) and the nondeterministic `shuffle` variant.
//!
//! Rendering, audio playback, timers, and storage stay outside the engine:
//! they consume [`game::events::SessionEvent`] values drained from the
//! session and feed guesses and ticks back in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod leaderboard;
pub mod share;

// Re-export commonly used types
pub use crate::core::geo::{distance_km, GeoPoint};
pub use crate::core::rng::SeededRng;
pub use crate::core::shuffle::{seeded_shuffle, shuffle};
pub use crate::game::catalog::{Mode, Question};
pub use crate::game::config::SessionConfig;
pub use crate::game::events::{AudioCue, SessionEvent};
pub use crate::game::session::{QuizSession, SessionError};
pub use crate::game::state::{GuessResult, SessionPhase, SessionToken};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Points awarded for a perfect guess; decays linearly to 0 at 250 km.
pub const MAX_POINTS_PER_GUESS: u32 = 250;

/// Pause between an evaluated guess and the next question (milliseconds).
pub const ADVANCE_PAUSE_MS: u64 = 1000;

/// Sentinel distance substituted for a missing guess (km).
///
/// Larger than any real great-circle distance on Earth, so a forced or
/// timed-out guess always fails the threshold and awards zero points.
pub const MISSED_GUESS_KM: f64 = 20_000.0;
