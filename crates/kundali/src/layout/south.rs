//! South Indian (grid) chart.
//!
//! A 4x4 grid whose 12 outer cells each belong permanently to one sign:
//! Pisces top-left, then clockwise (Aries, Taurus, Gemini along the top).
//! The centre 2x2 block carries no sign. What changes with the ascendant is
//! the house number printed in each cell and the planets it holds.

use crate::chart::PlanetPlacement;
use crate::layout::types::{log_unplaced, planets_in_house, CellPlanet, PlanetGrid};
use crate::rendering::primitives::Point;
use crate::resolver::house_for_sign;
use crate::zodiac::ZodiacSign;
use kundali_config::SouthSettings;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

const fn pos(row: u8, col: u8) -> GridPos {
    GridPos { row, col }
}

/// Clockwise position slot of each sign, indexed by canonical sign index
/// (Aries = 0). Pisces holds slot 0.
pub const SOUTH_INDIAN_SIGN_POSITIONS: [usize; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];

/// Grid cell of each clockwise slot, starting top-left.
pub const GRID_POSITIONS: [GridPos; 12] = [
    pos(0, 0),
    pos(0, 1),
    pos(0, 2),
    pos(0, 3),
    pos(1, 3),
    pos(2, 3),
    pos(3, 3),
    pos(3, 2),
    pos(3, 1),
    pos(3, 0),
    pos(2, 0),
    pos(1, 0),
];

pub fn grid_position(sign: ZodiacSign) -> GridPos {
    GRID_POSITIONS[SOUTH_INDIAN_SIGN_POSITIONS[sign.index()]]
}

/// Pixel geometry of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SouthGeometry {
    pub cell_size: f32,
    pub padding: f32,
    pub grid: PlanetGrid,
}

impl Default for SouthGeometry {
    fn default() -> Self {
        Self {
            cell_size: 90.0,
            padding: 10.0,
            grid: PlanetGrid {
                columns: 3,
                column_pitch: 28.0,
                row_pitch: 18.0,
            },
        }
    }
}

impl From<&SouthSettings> for SouthGeometry {
    fn from(s: &SouthSettings) -> Self {
        Self {
            cell_size: s.cell_size,
            padding: s.padding,
            grid: PlanetGrid::from(s),
        }
    }
}

impl SouthGeometry {
    pub fn total_size(&self) -> f32 {
        self.cell_size * 4.0 + self.padding * 2.0
    }

    /// Top-left corner of a grid cell.
    pub fn cell_origin(&self, pos: GridPos) -> Point {
        Point {
            x: self.padding + pos.col as f32 * self.cell_size,
            y: self.padding + pos.row as f32 * self.cell_size,
        }
    }

    /// First planet slot inside a cell, below the sign and house labels.
    pub fn planet_origin(&self, pos: GridPos) -> Point {
        let origin = self.cell_origin(pos);
        Point {
            x: origin.x + 10.0,
            y: origin.y + 38.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SouthCell {
    pub sign: ZodiacSign,
    pub grid: GridPos,
    /// `None` when the ascendant could not be resolved.
    #[serde(rename = "houseNo")]
    pub house_no: Option<u8>,
    #[serde(rename = "isAscendant")]
    pub is_ascendant: bool,
    pub planets: Vec<CellPlanet>,
    #[serde(skip)]
    pub planet_slots: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SouthIndianLayout {
    pub ascendant: Option<ZodiacSign>,
    #[serde(skip)]
    pub geometry: SouthGeometry,
    /// In canonical sign order (Aries first).
    pub cells: Vec<SouthCell>,
}

impl SouthIndianLayout {
    pub fn build(ascendant: Option<ZodiacSign>, planets: &[PlanetPlacement]) -> Self {
        Self::build_with_geometry(ascendant, planets, SouthGeometry::default())
    }

    /// Cell membership is derived from `house_no`: a planet sits in the cell
    /// whose sign resolves to the planet's house. The planet's own `sign`
    /// field is not consulted. Without an ascendant no house numbers exist,
    /// so every cell is left empty.
    pub fn build_with_geometry(
        ascendant: Option<ZodiacSign>,
        planets: &[PlanetPlacement],
        geometry: SouthGeometry,
    ) -> Self {
        log_unplaced(planets);
        if ascendant.is_none() && !planets.is_empty() {
            log::warn!(
                "South Indian chart without ascendant: {} planets not placed",
                planets.len()
            );
        }

        let cells = ZodiacSign::all()
            .map(|sign| {
                let grid = grid_position(sign);
                let house_no = ascendant.map(|asc| house_for_sign(asc, sign));
                let cell_planets = house_no
                    .map(|h| planets_in_house(planets, h))
                    .unwrap_or_default();
                let planet_slots = geometry
                    .grid
                    .flow_slots(geometry.planet_origin(grid), cell_planets.len());
                SouthCell {
                    sign,
                    grid,
                    house_no,
                    is_ascendant: ascendant == Some(sign),
                    planets: cell_planets,
                    planet_slots,
                }
            })
            .collect();

        Self {
            ascendant,
            geometry,
            cells,
        }
    }

    pub fn cell_for_sign(&self, sign: ZodiacSign) -> &SouthCell {
        &self.cells[sign.index()]
    }

    /// Cell at a grid position; `None` for the centre block or out of range.
    pub fn cell_at(&self, row: u8, col: u8) -> Option<&SouthCell> {
        self.cells.iter().find(|c| c.grid == GridPos { row, col })
    }

    /// Cell holding house `house_no`.
    pub fn cell_for_house(&self, house_no: u8) -> Option<&SouthCell> {
        self.cells.iter().find(|c| c.house_no == Some(house_no))
    }
}
