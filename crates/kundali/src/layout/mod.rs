pub mod north;
pub mod south;
pub mod types;

pub use north::{NorthHouse, NorthIndianLayout, HouseAnchor, NORTH_HOUSE_ANCHORS};
pub use south::{
    GridPos, SouthCell, SouthGeometry, SouthIndianLayout, GRID_POSITIONS,
    SOUTH_INDIAN_SIGN_POSITIONS,
};
pub use types::{planets_in_house, CellPlanet, HouseCell, PlanetGrid};
