use crate::chart::PlanetPlacement;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The four house triads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Triad {
    /// 1, 5, 9
    Dharma,
    /// 2, 6, 10
    Artha,
    /// 3, 7, 11
    Kama,
    /// 4, 8, 12
    Moksha,
}

impl Triad {
    /// Display order of the directional chart: North, East, South, West.
    pub const ALL: [Triad; 4] = [Triad::Dharma, Triad::Moksha, Triad::Kama, Triad::Artha];

    pub const fn houses(self) -> [u8; 3] {
        match self {
            Triad::Dharma => [1, 5, 9],
            Triad::Artha => [2, 6, 10],
            Triad::Kama => [3, 7, 11],
            Triad::Moksha => [4, 8, 12],
        }
    }

    /// Group key used by the transit feed, e.g. "1/5/9".
    pub const fn label(self) -> &'static str {
        match self {
            Triad::Dharma => "1/5/9",
            Triad::Artha => "2/6/10",
            Triad::Kama => "3/7/11",
            Triad::Moksha => "4/8/12",
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Triad::Dharma => Direction::North,
            Triad::Moksha => Direction::East,
            Triad::Kama => Direction::South,
            Triad::Artha => Direction::West,
        }
    }

    pub const fn meaning(self) -> &'static str {
        match self {
            Triad::Dharma => "Dharma",
            Triad::Artha => "Artha",
            Triad::Kama => "Kama",
            Triad::Moksha => "Moksha",
        }
    }

    /// (column, row) in the 3x3 compass grid; the centre (2, 2) is the
    /// natal-chart badge.
    pub const fn grid_position(self) -> (u8, u8) {
        match self.direction() {
            Direction::North => (2, 1),
            Direction::East => (3, 2),
            Direction::South => (2, 3),
            Direction::West => (1, 2),
        }
    }

    pub fn for_house(house_no: u8) -> Option<Triad> {
        if !crate::resolver::is_valid_house(house_no) {
            return None;
        }
        Some(match (house_no - 1) % 4 {
            0 => Triad::Dharma,
            1 => Triad::Artha,
            2 => Triad::Kama,
            _ => Triad::Moksha,
        })
    }

    pub fn from_label(label: &str) -> Option<Triad> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }

    pub fn contains(self, house_no: u8) -> bool {
        self.houses().contains(&house_no)
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.direction(), self.label().replace('/', ","))
    }
}

pub fn planets_in_group<'a>(triad: Triad, planets: &'a [PlanetPlacement]) -> Vec<&'a PlanetPlacement> {
    planets
        .iter()
        .filter(|p| p.house().is_some_and(|h| triad.contains(h)))
        .collect()
}

/// One box of the directional chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionGroup {
    pub triad: Triad,
    pub planets: Vec<PlanetPlacement>,
}

impl DirectionGroup {
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

/// All four groups in display order. Planets with an out-of-range house
/// appear in none of them.
pub fn group_planets(planets: &[PlanetPlacement]) -> Vec<DirectionGroup> {
    Triad::ALL
        .into_iter()
        .map(|triad| DirectionGroup {
            triad,
            planets: planets_in_group(triad, planets).into_iter().cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_house_matches_houses_table() {
        for triad in Triad::ALL {
            for h in triad.houses() {
                assert_eq!(Triad::for_house(h), Some(triad));
            }
        }
        assert_eq!(Triad::for_house(0), None);
        assert_eq!(Triad::for_house(13), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for triad in Triad::ALL {
            assert_eq!(Triad::from_label(triad.label()), Some(triad));
        }
        assert_eq!(Triad::from_label("1/2/3"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Triad::Moksha.to_string(), "East (4,8,12)");
    }

    #[test]
    fn test_grid_positions_distinct() {
        let mut seen: Vec<(u8, u8)> = Triad::ALL.iter().map(|t| t.grid_position()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains(&(2, 2)));
    }
}
