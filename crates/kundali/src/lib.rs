//! Vedic birth-chart layout core.
//!
//! Takes the ascendant sign and planet placements returned by an upstream
//! chart service and lays them out as North Indian (fixed houses, rotating
//! signs) and South Indian (fixed signs, rotating houses) charts, plus the
//! Bhrigu Nandi Nadi directional grouping.

pub mod error;
pub mod zodiac;
pub mod planet;
pub mod resolver;
pub mod chart;
pub mod layout;
pub mod bnn;
pub mod rendering;

pub use error::ChartError;
pub use zodiac::ZodiacSign;
pub use planet::Planet;
pub use resolver::{house_for_sign, sign_for_house};
pub use chart::{Ascendant, KundaliResponse, PlanetPlacement};
pub use layout::{HouseCell, NorthIndianLayout, SouthIndianLayout};
pub use bnn::Triad;
