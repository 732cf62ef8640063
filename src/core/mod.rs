//! Core deterministic primitives.
//!
//! Pure, stateless building blocks with no dependency on session state:
//! geodesic math, the seeded random stream, and the shuffle permutations.

pub mod geo;
pub mod rng;
pub mod shuffle;

// Re-export core types
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use rng::SeededRng;
pub use shuffle::{seeded_shuffle, shuffle};
