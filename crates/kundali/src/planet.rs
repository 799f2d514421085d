//! Grahas that appear in chart payloads and their display tables.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

// (name, short, glyph)
const PLANET_TABLE: [(&str, &str, &str); 12] = [
    ("Sun", "Su", "☉"),
    ("Moon", "Mo", "☽"),
    ("Mars", "Ma", "♂"),
    ("Mercury", "Me", "☿"),
    ("Jupiter", "Ju", "♃"),
    ("Venus", "Ve", "♀"),
    ("Saturn", "Sa", "♄"),
    ("Rahu", "Ra", "☊"),
    ("Ketu", "Ke", "☋"),
    ("Uranus", "Ur", "♅"),
    ("Neptune", "Ne", "♆"),
    ("Pluto", "Pl", "♇"),
];

impl Planet {
    pub const ALL: [Planet; 12] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub const fn name(self) -> &'static str {
        PLANET_TABLE[self as usize].0
    }

    pub const fn short(self) -> &'static str {
        PLANET_TABLE[self as usize].1
    }

    pub const fn glyph(self) -> &'static str {
        PLANET_TABLE[self as usize].2
    }

    /// Case-insensitive lookup of an upstream planet name.
    pub fn from_name(name: &str) -> Option<Planet> {
        let name = name.trim();
        PLANET_TABLE
            .iter()
            .position(|(n, _, _)| n.eq_ignore_ascii_case(name))
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-letter chart abbreviation for a raw planet name. Names outside the
/// table fall back to their first two characters.
pub fn planet_abbreviation(name: &str) -> String {
    match Planet::from_name(name) {
        Some(planet) => planet.short().to_string(),
        None => name.trim().chars().take(2).collect(),
    }
}
