//! Bhrigu Nandi Nadi directional view.
//!
//! Houses fall into four fixed triads (trikonas), each tied to a compass
//! direction and a purushartha. Natal planets are grouped by the triad of
//! their house; the upstream transit service reports Jupiter's passage over
//! those groups as dated events.

pub mod events;
pub mod groups;

pub use events::{
    format_event_date, group_by_year, parse_planet_entries, parse_planet_entry, target_planet,
    unique_planets, unique_triangles, BnnEvent, BnnRequest, BnnTriangle, EventFilter,
    ParsedEntries, ParsedPlanet,
};
pub use groups::{group_planets, planets_in_group, Direction, DirectionGroup, Triad};
