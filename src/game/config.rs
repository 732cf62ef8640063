//! Session Configuration
//!
//! The externally supplied shape of one run: seed, countdown duration, pass
//! threshold, mode, and the audio toggle. Out-of-range values are clamped to
//! the nearest bound, never rejected, so a tampered or stale share link still
//! produces a playable session.

use serde::{Deserialize, Serialize};

use super::catalog::Mode;

/// Default countdown duration (seconds).
pub const DEFAULT_DURATION_SECS: u32 = 60;
/// Minimum countdown duration (seconds).
pub const MIN_DURATION_SECS: u32 = 10;
/// Maximum countdown duration (seconds).
pub const MAX_DURATION_SECS: u32 = 600;

/// Default pass-distance threshold (km).
///
/// A named constant rather than a number wired into the session: callers
/// that want a different difficulty set it in their config.
pub const DEFAULT_PASS_DISTANCE_KM: f64 = 300.0;
/// Minimum pass-distance threshold (km).
pub const MIN_PASS_DISTANCE_KM: f64 = 10.0;
/// Maximum pass-distance threshold (km).
pub const MAX_PASS_DISTANCE_KM: f64 = 2000.0;

/// Configuration of one quiz session. Immutable for the session's duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the question order; `None` falls back to a time-derived seed.
    pub seed: Option<String>,
    /// Countdown duration in seconds, clamped to `[10, 600]`.
    pub duration_secs: u32,
    /// Maximum distance still counted as correct, clamped to `[10, 2000]` km.
    pub pass_distance_km: f64,
    /// Which part of the catalog to play.
    pub mode: Mode,
    /// Whether background music should play.
    pub music: bool,
    /// Optional music-track override for the audio collaborator.
    pub song: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            duration_secs: DEFAULT_DURATION_SECS,
            pass_distance_km: DEFAULT_PASS_DISTANCE_KM,
            mode: Mode::All,
            music: true,
            song: None,
        }
    }
}

impl SessionConfig {
    /// Clamp every range-limited field to its nearest bound.
    ///
    /// Non-finite pass distances fall back to the default, and an empty seed
    /// counts as no seed. Applied both at session start and by the share
    /// codec, so the two agree on what a link may produce.
    pub fn clamped(mut self) -> Self {
        self.duration_secs = self.duration_secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        if !self.pass_distance_km.is_finite() {
            self.pass_distance_km = DEFAULT_PASS_DISTANCE_KM;
        }
        self.pass_distance_km = self
            .pass_distance_km
            .clamp(MIN_PASS_DISTANCE_KM, MAX_PASS_DISTANCE_KM);
        if self.seed.as_deref() == Some("") {
            self.seed = None;
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.pass_distance_km, 300.0);
        assert_eq!(config.mode, Mode::All);
        assert!(config.music);
        assert!(config.seed.is_none());
        assert!(config.song.is_none());
    }

    #[test]
    fn test_clamping_to_bounds() {
        let config = SessionConfig {
            duration_secs: 5,
            pass_distance_km: 9000.0,
            ..SessionConfig::default()
        }
        .clamped();
        assert_eq!(config.duration_secs, MIN_DURATION_SECS);
        assert_eq!(config.pass_distance_km, MAX_PASS_DISTANCE_KM);

        let config = SessionConfig {
            duration_secs: 100_000,
            pass_distance_km: 0.5,
            ..SessionConfig::default()
        }
        .clamped();
        assert_eq!(config.duration_secs, MAX_DURATION_SECS);
        assert_eq!(config.pass_distance_km, MIN_PASS_DISTANCE_KM);
    }

    #[test]
    fn test_in_range_values_unchanged() {
        let config = SessionConfig {
            seed: Some("abc".into()),
            duration_secs: 120,
            pass_distance_km: 150.5,
            mode: Mode::Cities,
            music: false,
            song: None,
        };
        assert_eq!(config.clone().clamped(), config);
    }

    #[test]
    fn test_non_finite_distance_falls_back_to_default() {
        let config = SessionConfig {
            pass_distance_km: f64::NAN,
            ..SessionConfig::default()
        }
        .clamped();
        assert_eq!(config.pass_distance_km, DEFAULT_PASS_DISTANCE_KM);
    }

    #[test]
    fn test_empty_seed_counts_as_no_seed() {
        let config = SessionConfig {
            seed: Some(String::new()),
            ..SessionConfig::default()
        }
        .clamped();
        assert!(config.seed.is_none());
    }
}
