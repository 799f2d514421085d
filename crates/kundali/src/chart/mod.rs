pub mod dasha;
pub mod data;
pub mod request;
pub mod summary;

pub use dasha::{
    current_period, parse_dasha_periods, AntarDasha, AntarDashaRequest, DashaPeriod,
    DashaRequest, MahaDasha, PratyantarDasha, PratyantarDashaRequest,
};
pub use data::{Ascendant, HouseEntry, HousePlanet, KundaliResponse, PlanetPlacement};
pub use request::{Ayanamsa, KundaliRequest};
