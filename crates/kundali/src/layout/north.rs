//! North Indian (diamond) chart.
//!
//! The frame is an outer square crossed by both corner diagonals plus a
//! diamond through the side midpoints, giving 12 fixed regions. House 1 is
//! always the top-centre diamond and house 7 the bottom-centre one; only the
//! sign printed in each region changes with the ascendant.
//!
//! Coordinates are in a 400-unit frame (square from 20 to 380).

use crate::chart::PlanetPlacement;
use crate::layout::types::{log_unplaced, planets_in_house, HouseCell, PlanetGrid};
use crate::rendering::primitives::Point;
use crate::resolver::sign_for_house;
use crate::zodiac::ZodiacSign;
use serde::Serialize;

pub const FRAME_MIN: f32 = 20.0;
pub const FRAME_MAX: f32 = 380.0;
pub const FRAME_MID: f32 = (FRAME_MIN + FRAME_MAX) / 2.0;
/// Width of the drawing; the frame keeps a margin of `FRAME_MIN` on each side.
pub const FRAME_SIZE: f32 = FRAME_MAX + FRAME_MIN;

/// Where a house's sign label and planet cluster are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseAnchor {
    pub label: Point,
    pub planets: Point,
}

const fn anchor(label_x: f32, label_y: f32, planet_x: f32, planet_y: f32) -> HouseAnchor {
    HouseAnchor {
        label: Point { x: label_x, y: label_y },
        planets: Point { x: planet_x, y: planet_y },
    }
}

/// Indexed by `house_no - 1`. Independent of the ascendant.
pub const NORTH_HOUSE_ANCHORS: [HouseAnchor; 12] = [
    anchor(200.0, 95.0, 200.0, 60.0),   // 1: top centre diamond
    anchor(340.0, 95.0, 345.0, 55.0),   // 2: top right corner
    anchor(340.0, 175.0, 345.0, 200.0), // 3: right, upper
    anchor(340.0, 260.0, 345.0, 230.0), // 4: right, lower
    anchor(265.0, 235.0, 280.0, 270.0), // 5: centre right
    anchor(340.0, 340.0, 345.0, 375.0), // 6: bottom right corner
    anchor(200.0, 340.0, 200.0, 375.0), // 7: bottom centre diamond
    anchor(60.0, 340.0, 55.0, 375.0),   // 8: bottom left corner
    anchor(135.0, 235.0, 120.0, 270.0), // 9: centre left
    anchor(60.0, 260.0, 55.0, 230.0),   // 10: left, lower
    anchor(60.0, 175.0, 55.0, 200.0),   // 11: left, upper
    anchor(60.0, 95.0, 55.0, 55.0),     // 12: top left corner
];

pub const DEFAULT_NORTH_GRID: PlanetGrid = PlanetGrid {
    columns: 3,
    column_pitch: 24.0,
    row_pitch: 20.0,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NorthHouse {
    #[serde(flatten)]
    pub cell: HouseCell,
    #[serde(skip)]
    pub label_at: Point,
    /// One position per entry of `cell.planets`.
    #[serde(skip)]
    pub planet_slots: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NorthIndianLayout {
    pub ascendant: Option<ZodiacSign>,
    pub houses: Vec<NorthHouse>,
}

impl NorthIndianLayout {
    pub fn build(ascendant: Option<ZodiacSign>, planets: &[PlanetPlacement]) -> Self {
        Self::build_with_grid(ascendant, planets, DEFAULT_NORTH_GRID)
    }

    /// Sign labels follow the ascendant; planets follow `house_no` alone, so
    /// an unresolved ascendant blanks the labels but still places planets.
    pub fn build_with_grid(
        ascendant: Option<ZodiacSign>,
        planets: &[PlanetPlacement],
        grid: PlanetGrid,
    ) -> Self {
        log_unplaced(planets);

        let houses = NORTH_HOUSE_ANCHORS
            .iter()
            .zip(1u8..)
            .map(|(anchor, house_no)| {
                let sign = ascendant.and_then(|asc| sign_for_house(asc, house_no));
                let house_planets = planets_in_house(planets, house_no);
                let planet_slots = grid.centered_slots(anchor.planets, house_planets.len());
                NorthHouse {
                    cell: HouseCell {
                        house_no,
                        sign,
                        planets: house_planets,
                    },
                    label_at: anchor.label,
                    planet_slots,
                }
            })
            .collect();

        Self { ascendant, houses }
    }

    /// House `house_no` (1..=12).
    pub fn house(&self, house_no: u8) -> Option<&NorthHouse> {
        self.houses.get(usize::from(house_no).checked_sub(1)?)
    }

    pub fn cells(&self) -> impl Iterator<Item = &HouseCell> {
        self.houses.iter().map(|h| &h.cell)
    }

    /// Corners of the outer square, clockwise from top-left.
    pub fn frame_square() -> [Point; 4] {
        [
            Point { x: FRAME_MIN, y: FRAME_MIN },
            Point { x: FRAME_MAX, y: FRAME_MIN },
            Point { x: FRAME_MAX, y: FRAME_MAX },
            Point { x: FRAME_MIN, y: FRAME_MAX },
        ]
    }

    /// The inner diamond joining the midpoints of the square's sides.
    pub fn frame_diamond() -> [Point; 4] {
        [
            Point { x: FRAME_MID, y: FRAME_MIN },
            Point { x: FRAME_MAX, y: FRAME_MID },
            Point { x: FRAME_MID, y: FRAME_MAX },
            Point { x: FRAME_MIN, y: FRAME_MID },
        ]
    }

    pub fn frame_diagonals() -> [(Point, Point); 2] {
        let [tl, tr, br, bl] = Self::frame_square();
        [(tl, br), (tr, bl)]
    }
}
