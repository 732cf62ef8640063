//! Place Catalog
//!
//! The static catalog of quiz places, partitioned into named categories, and
//! the normalization into uniform question records.
//!
//! Coordinates are taken as published and pass through unvalidated. Country
//! entries locate a broad region by an approximate central point rather than
//! a precise spot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

// =============================================================================
// MODE
// =============================================================================

/// A named subset of the catalog selectable for a session.
///
/// A closed set: every mode maps to an explicit sub-catalog, and [`Mode::All`]
/// is the fixed-order union of all of them, so a mistyped mode can never
/// silently select an empty bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Union of every category, concatenated in a fixed order.
    #[default]
    All,
    /// Major cities.
    Cities,
    /// Landmarks, monuments, and heritage sites.
    Landmarks,
    /// Rivers, mountains, lakes, and other natural features.
    Nature,
    /// Countries, located by an approximate central point.
    Countries,
}

impl Mode {
    /// Every mode, in a stable order.
    pub const ALL_MODES: [Mode; 5] = [
        Mode::All,
        Mode::Cities,
        Mode::Landmarks,
        Mode::Nature,
        Mode::Countries,
    ];

    /// Stable lowercase name, used by the share codec.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Cities => "cities",
            Mode::Landmarks => "landmarks",
            Mode::Nature => "nature",
            Mode::Countries => "countries",
        }
    }

    /// Parse a mode name (ASCII case-insensitive). Unknown names are `None`.
    pub fn parse(s: &str) -> Option<Mode> {
        Mode::ALL_MODES
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// QUESTION
// =============================================================================

/// One normalized quiz question.
///
/// Immutable once constructed; lives for the lifetime of the loaded bank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the normalized bank. Unique and dense within a
    /// bank snapshot, stable across repeated normalization of the same input.
    pub id: u32,
    /// Display name of the place.
    pub name: String,
    /// Hint text; empty when the entry carries none.
    pub hint: String,
    /// True coordinate of the place.
    pub coord: GeoPoint,
}

/// A raw catalog entry before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPlace {
    /// Display name.
    pub name: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Hint text; empty means no hint.
    pub hint: &'static str,
}

impl RawPlace {
    /// Create a raw catalog entry.
    pub const fn new(name: &'static str, lat: f64, lon: f64, hint: &'static str) -> Self {
        Self { name, lat, lon, hint }
    }
}

/// Normalize raw entries into question records.
///
/// Ids are the 1-based input position: stable for the same input order, not
/// derived from content, so reordering the raw catalog changes ids.
/// Coordinates and hints pass through unchanged.
pub fn normalize(raw: &[RawPlace]) -> Vec<Question> {
    raw.iter()
        .enumerate()
        .map(|(idx, place)| Question {
            id: idx as u32 + 1,
            name: place.name.to_string(),
            hint: place.hint.to_string(),
            coord: GeoPoint::new(place.lat, place.lon),
        })
        .collect()
}

/// Build the question bank for a mode.
///
/// [`Mode::All`] concatenates every category in a fixed order (cities,
/// landmarks, nature, countries) before normalizing, so ids stay dense and
/// contiguous across the union instead of being reused from sub-catalogs.
pub fn bank(mode: Mode) -> Vec<Question> {
    match mode {
        Mode::All => {
            let mut combined: Vec<RawPlace> = Vec::new();
            for category in [CITIES, LANDMARKS, NATURE, COUNTRIES] {
                combined.extend_from_slice(category);
            }
            normalize(&combined)
        }
        Mode::Cities => normalize(CITIES),
        Mode::Landmarks => normalize(LANDMARKS),
        Mode::Nature => normalize(NATURE),
        Mode::Countries => normalize(COUNTRIES),
    }
}

// =============================================================================
// CATALOG DATA
// =============================================================================

const CITIES: &[RawPlace] = &[
    RawPlace::new("New York", 40.7128, -74.006, "City / USA"),
    RawPlace::new("Tokyo", 35.6762, 139.6503, "Capital of Japan"),
    RawPlace::new("London", 51.5074, -0.1278, "Capital of the United Kingdom"),
    RawPlace::new("San Francisco", 37.7749, -122.4194, "City / US west coast"),
    RawPlace::new("Singapore", 1.3521, 103.8198, "City-state / Southeast Asia"),
    RawPlace::new("Istanbul", 41.0082, 28.9784, "City / Turkey, spanning Europe and Asia"),
    RawPlace::new("Dubai", 25.276987, 55.296249, "City / UAE"),
];

const LANDMARKS: &[RawPlace] = &[
    RawPlace::new("Eiffel Tower", 48.8584, 2.2945, "Landmark / Paris"),
    RawPlace::new("Statue of Liberty", 40.6892, -74.0445, "Landmark / New York"),
    RawPlace::new("Great Pyramid of Giza", 29.9792, 31.1342, "Egypt / Giza"),
    RawPlace::new("Taj Mahal", 27.1751, 78.0421, "India / Agra"),
    RawPlace::new("Colosseum", 41.8902, 12.4922, "Italy / Rome"),
    RawPlace::new("Sagrada Familia", 41.4036, 2.1744, "Spain / Barcelona"),
    RawPlace::new("Stonehenge", 51.1789, -1.8262, "England / prehistoric monument"),
    RawPlace::new("Great Wall of China", 40.4319, 116.5704, "China"),
    RawPlace::new("The Kremlin", 55.752, 37.6173, "Russia / Moscow"),
    RawPlace::new("Mont-Saint-Michel", 48.636, -1.5116, "France / island abbey"),
    RawPlace::new("Sydney Opera House", -33.8568, 151.2153, "Australia / Sydney"),
    RawPlace::new("Angkor Wat", 13.4125, 103.867, "Cambodia / temple complex"),
    RawPlace::new("Parthenon", 37.9715, 23.7267, "Greece / Athens"),
    RawPlace::new("Burj Khalifa", 25.1972, 55.2744, "UAE / world's tallest tower"),
    RawPlace::new("Alhambra", 37.1761, -3.5881, "Spain / Granada"),
    RawPlace::new("Notre-Dame Cathedral", 48.853, 2.3499, "France / Paris"),
    RawPlace::new("Great Barrier Reef", -18.2871, 147.6992, "World's largest coral reef"),
    RawPlace::new("Roman Forum", 41.8902, 12.4922, "Ancient ruins / Rome"),
    RawPlace::new("Hagia Sophia", 41.0082, 28.9784, "Turkey / Istanbul"),
    RawPlace::new("Machu Picchu", -13.1631, -72.545, "Peru / mountain citadel"),
    RawPlace::new("Petra", 30.3285, 35.4444, "Jordan / rock-cut city"),
    RawPlace::new("Uffizi Gallery", 43.7695, 11.2558, "Italy / Florence"),
    RawPlace::new("Sigiriya", 7.9572, 80.7603, "Sri Lanka / Lion Rock"),
    RawPlace::new("Abu Simbel", 22.3372, 31.6209, "Egypt / great temples"),
    RawPlace::new("Hermitage Museum", 59.9343, 30.3351, "Russia / Saint Petersburg"),
    RawPlace::new("Nazca Lines", -14.739, -75.13, "Peru / desert geoglyphs"),
];

const NATURE: &[RawPlace] = &[
    RawPlace::new("Nile River", 30.0444, 31.2357, "River / Africa"),
    RawPlace::new("Sahara Desert", 23.4162, 25.6628, "Desert / northern Africa"),
    RawPlace::new("Grand Canyon", 36.1069, -112.1129, "Canyon / USA"),
    RawPlace::new("Yosemite National Park", 37.8651, -119.5383, "National park / USA"),
    RawPlace::new("Geiranger Fjord", 62.1015, 7.205, "Glacial fjord / Norway"),
    RawPlace::new("Galapagos Islands", -0.9538, -90.9656, "Archipelago / Ecuador"),
    RawPlace::new("Serengeti National Park", -2.3333, 34.8333, "Savanna / Tanzania"),
    RawPlace::new("Iguazu Falls", -25.6953, -54.4367, "Waterfalls / Argentina-Brazil border"),
    RawPlace::new("Ha Long Bay", 20.9101, 107.1839, "Bay / Vietnam"),
    RawPlace::new("Pantanal", -16.711, -56.162, "Wetland / Brazil"),
    RawPlace::new("Mount Everest", 27.9881, 86.925, "World's highest peak / Himalayas"),
    RawPlace::new("Mount Fuji", 35.3606, 138.7274, "Japan / Honshu"),
    RawPlace::new("Andes", -32.6532, -70.0114, "Mountain range / western South America"),
    RawPlace::new("Mount Kilimanjaro", -3.0674, 37.3556, "Africa's highest peak / Tanzania"),
    RawPlace::new("Mont Blanc", 45.8326, 6.8652, "Alps / French-Italian border"),
    RawPlace::new("Lake Baikal", 53.5587, 108.1652, "Lake / Russia"),
    RawPlace::new("Caspian Sea", 37.5, 50.0, "Inland sea / Eurasia"),
    RawPlace::new("Lake Titicaca", -15.7652, -69.5312, "Lake / Bolivia-Peru border"),
];

const COUNTRIES: &[RawPlace] = &[
    RawPlace::new("Nigeria", 9.082, 8.6753, "Country / Africa"),
    RawPlace::new("South Africa", -30.5595, 22.9375, "Country / southern Africa"),
    RawPlace::new("Kenya", -1.286389, 36.817223, "Country / East Africa"),
    RawPlace::new("Egypt", 26.820553, 30.802498, "Country / North Africa"),
    RawPlace::new("India", 20.593684, 78.96288, "Country / South Asia"),
    RawPlace::new("China", 35.86166, 104.195397, "Country / East Asia"),
    RawPlace::new("Japan", 36.204824, 138.252924, "Country / East Asia"),
    RawPlace::new("South Korea", 35.907757, 127.766922, "Country / East Asia"),
    RawPlace::new("Germany", 51.165691, 10.451526, "Country / Europe"),
    RawPlace::new("France", 46.603354, 1.888334, "Country / Europe"),
    RawPlace::new("Italy", 41.87194, 12.56738, "Country / Europe"),
    RawPlace::new("Spain", 40.463667, -3.74922, "Country / Europe"),
    RawPlace::new("United States", 37.09024, -95.712891, "Country / North America"),
    RawPlace::new("Canada", 56.130366, -106.346771, "Country / North America"),
    RawPlace::new("Mexico", 23.634501, -102.552784, "Country / North America"),
    RawPlace::new("Brazil", -14.235004, -51.92528, "Country / South America"),
    RawPlace::new("Argentina", -38.4161, -63.6167, "Country / South America"),
    RawPlace::new("Chile", -35.675147, -71.53751, "Country / South America"),
    RawPlace::new("Australia", -25.274398, 133.775136, "Country / Oceania"),
    RawPlace::new("New Zealand", -40.900557, 174.885971, "Country / Oceania"),
    RawPlace::new("Iceland", 64.963051, -19.020835, "Country / Nordic"),
    RawPlace::new("Cuba", 21.521757, -77.781167, "Country / Caribbean"),
    RawPlace::new("Vatican City", 41.902782, 12.453391, "Microstate / Europe"),
    RawPlace::new("Monaco", 43.738416, 7.424621, "Microstate / Europe"),
    RawPlace::new("Nauru", -0.522778, 166.931111, "Microstate / Oceania"),
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_one_based() {
        for mode in Mode::ALL_MODES {
            let questions = bank(mode);
            assert!(!questions.is_empty(), "mode {} has an empty bank", mode);
            for (idx, q) in questions.iter().enumerate() {
                assert_eq!(q.id, idx as u32 + 1);
            }
        }
    }

    #[test]
    fn test_all_mode_is_union_of_categories() {
        let all = bank(Mode::All);
        let parts: usize = [Mode::Cities, Mode::Landmarks, Mode::Nature, Mode::Countries]
            .into_iter()
            .map(|m| bank(m).len())
            .sum();
        assert_eq!(all.len(), parts);

        // Union keeps the fixed concatenation order.
        assert_eq!(all[0].name, bank(Mode::Cities)[0].name);
        let countries_start = all.len() - bank(Mode::Countries).len();
        assert_eq!(all[countries_start].name, bank(Mode::Countries)[0].name);
    }

    #[test]
    fn test_normalization_is_stable() {
        assert_eq!(bank(Mode::All), bank(Mode::All));
    }

    #[test]
    fn test_hint_may_be_empty() {
        let questions = normalize(&[RawPlace::new("X", 1.0, 2.0, "")]);
        assert_eq!(questions[0].hint, "");
        assert_eq!(questions[0].coord, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        // Catalog coordinates are not validated; they pass through unchanged.
        let questions = normalize(&[RawPlace::new("Bad", 123.0, -200.0, "")]);
        assert_eq!(questions[0].coord, GeoPoint::new(123.0, -200.0));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("cities"), Some(Mode::Cities));
        assert_eq!(Mode::parse("ALL"), Some(Mode::All));
        assert_eq!(Mode::parse("Nature"), Some(Mode::Nature));
        assert_eq!(Mode::parse("bogus"), None);
    }

    #[test]
    fn test_mode_round_trips_through_name() {
        for mode in Mode::ALL_MODES {
            assert_eq!(Mode::parse(mode.as_str()), Some(mode));
        }
    }
}
