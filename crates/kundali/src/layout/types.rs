use crate::chart::PlanetPlacement;
use crate::rendering::primitives::Point;
use crate::zodiac::ZodiacSign;
use kundali_config::{NorthSettings, SouthSettings};
use serde::{Deserialize, Serialize};

/// A planet as shown inside a chart cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellPlanet {
    pub planet: String,
    pub degree: f64,
}

impl From<&PlanetPlacement> for CellPlanet {
    fn from(p: &PlanetPlacement) -> Self {
        Self {
            planet: p.planet.clone(),
            degree: p.degree,
        }
    }
}

/// Render-ready contents of one house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCell {
    #[serde(rename = "houseNo")]
    pub house_no: u8,
    /// `None` when the ascendant could not be resolved.
    pub sign: Option<ZodiacSign>,
    pub planets: Vec<CellPlanet>,
}

/// Planets whose `house_no` equals `house_no`, in input order.
pub fn planets_in_house(planets: &[PlanetPlacement], house_no: u8) -> Vec<CellPlanet> {
    planets
        .iter()
        .filter(|p| p.house() == Some(house_no))
        .map(CellPlanet::from)
        .collect()
}

pub(crate) fn log_unplaced(planets: &[PlanetPlacement]) {
    for p in planets.iter().filter(|p| p.house().is_none()) {
        log::debug!("Dropping {} from chart: house_no {} out of range", p.planet, p.house_no);
    }
}

/// Row/column arrangement for several planets sharing one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetGrid {
    pub columns: usize,
    pub column_pitch: f32,
    pub row_pitch: f32,
}

impl PlanetGrid {
    /// Slots centred on `anchor`: rows of up to `columns` planets, each row
    /// centred horizontally and the block centred vertically.
    pub fn centered_slots(&self, anchor: Point, count: usize) -> Vec<Point> {
        let columns = self.columns.max(1);
        let rows = count.div_ceil(columns);
        let mut slots = Vec::with_capacity(count);
        for idx in 0..count {
            let row = idx / columns;
            let col = idx % columns;
            let in_row = if row + 1 == rows {
                count - row * columns
            } else {
                columns
            };
            let dx = (col as f32 - (in_row as f32 - 1.0) / 2.0) * self.column_pitch;
            let dy = (row as f32 - (rows as f32 - 1.0) / 2.0) * self.row_pitch;
            slots.push(Point {
                x: anchor.x + dx,
                y: anchor.y + dy,
            });
        }
        slots
    }

    /// Slots flowing left to right, top to bottom from `origin`.
    pub fn flow_slots(&self, origin: Point, count: usize) -> Vec<Point> {
        let columns = self.columns.max(1);
        (0..count)
            .map(|idx| Point {
                x: origin.x + (idx % columns) as f32 * self.column_pitch,
                y: origin.y + (idx / columns) as f32 * self.row_pitch,
            })
            .collect()
    }
}

impl From<&NorthSettings> for PlanetGrid {
    fn from(s: &NorthSettings) -> Self {
        Self {
            columns: s.planets_per_row,
            column_pitch: s.planet_column_pitch,
            row_pitch: s.planet_row_pitch,
        }
    }
}

impl From<&SouthSettings> for PlanetGrid {
    fn from(s: &SouthSettings) -> Self {
        Self {
            columns: s.planets_per_row,
            column_pitch: s.planet_column_pitch,
            row_pitch: s.planet_row_pitch,
        }
    }
}
