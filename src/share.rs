//! Share-Link Codec
//!
//! Session configuration <-> URL-safe query string. The query string is the
//! only durable external representation of a session: two players loading
//! the same link get the same seed, and therefore the same question order.
//!
//! Decoding is lenient by design. Absent keys fall back to the documented
//! defaults, malformed values are ignored, and out-of-range values are
//! clamped exactly as session start clamps them, so a tampered or stale
//! link still produces a playable session.

use url::form_urlencoded;

use crate::game::catalog::Mode;
use crate::game::config::SessionConfig;

const KEY_SEED: &str = "seed";
const KEY_DURATION: &str = "dur";
const KEY_DISTANCE: &str = "km";
const KEY_MODE: &str = "mode";
const KEY_MUSIC: &str = "music";
const KEY_SONG: &str = "song";

/// Encode a session configuration as a query string (no leading `?`).
///
/// Every field maps to exactly one key; `seed` and `song` are omitted when
/// absent.
pub fn encode(config: &SessionConfig) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(seed) = &config.seed {
        query.append_pair(KEY_SEED, seed);
    }
    query.append_pair(KEY_DURATION, &config.duration_secs.to_string());
    query.append_pair(KEY_DISTANCE, &config.pass_distance_km.to_string());
    query.append_pair(KEY_MODE, config.mode.as_str());
    query.append_pair(KEY_MUSIC, if config.music { "on" } else { "off" });
    if let Some(song) = &config.song {
        query.append_pair(KEY_SONG, song);
    }
    query.finish()
}

/// Decode a query string (or a full URL) into a clamped configuration.
///
/// Unknown keys are ignored. For any in-range config,
/// `decode(&encode(&config)) == config`.
pub fn decode(query: &str) -> SessionConfig {
    // Accept a full share URL as well as a bare query string.
    let query = match query.split_once('?') {
        Some((_, tail)) => tail,
        None => query,
    };

    let mut config = SessionConfig::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_SEED if !value.is_empty() => config.seed = Some(value.into_owned()),
            KEY_DURATION => {
                if let Ok(duration) = value.parse() {
                    config.duration_secs = duration;
                }
            }
            KEY_DISTANCE => {
                if let Ok(distance) = value.parse() {
                    config.pass_distance_km = distance;
                }
            }
            KEY_MODE => {
                if let Some(mode) = Mode::parse(&value) {
                    config.mode = mode;
                }
            }
            KEY_MUSIC => config.music = value != "off",
            KEY_SONG if !value.is_empty() => config.song = Some(value.into_owned()),
            _ => {}
        }
    }
    config.clamped()
}

// =============================================================================
// TESTS
// =============================================================================
