use crate::planet::Planet;
use crate::rendering::primitives::Color;
use kundali_config::{ChartColors, ChartSettings};
use std::collections::HashMap;

/// Resolved colours for the chart views
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub background_color: Color,
    pub frame_color: Color,
    pub frame_width: f32,
    pub cell_fill: Color,
    pub cell_stroke: Color,
    pub house_label_color: Color,
    pub sign_label_color: Color,
    pub ascendant_fill: Color,
    pub ascendant_marker: Color,
    pub default_planet_color: Color,
    pub planet_colors: HashMap<Planet, Color>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::from_settings(&ChartSettings::default())
    }
}

fn parse_color(field: &str, hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        log::warn!("Invalid colour {:?} for {}, using fallback", hex, field);
        fallback
    })
}

impl VisualConfig {
    pub fn from_settings(settings: &ChartSettings) -> Self {
        let ChartColors {
            background,
            frame,
            cell_fill,
            cell_stroke,
            house_label,
            sign_label,
            ascendant_fill,
            ascendant_marker,
            default_planet,
        } = &settings.colors;

        let mut planet_colors = HashMap::new();
        for (name, hex) in &settings.planet_colors {
            match Planet::from_name(name) {
                Some(planet) => {
                    if let Some(color) = Color::from_hex(hex) {
                        planet_colors.insert(planet, color);
                    } else {
                        log::warn!("Invalid colour {:?} for planet {}", hex, name);
                    }
                }
                None => log::warn!("Ignoring colour for unknown planet {:?}", name),
            }
        }

        Self {
            background_color: parse_color("background", background, Color::WHITE),
            frame_color: parse_color("frame", frame, Color::BLACK),
            frame_width: 2.0,
            cell_fill: parse_color("cell_fill", cell_fill, Color::WHITE),
            cell_stroke: parse_color("cell_stroke", cell_stroke, Color::BLACK),
            house_label_color: parse_color("house_label", house_label, Color::BLACK),
            sign_label_color: parse_color("sign_label", sign_label, Color::BLACK),
            ascendant_fill: parse_color("ascendant_fill", ascendant_fill, Color::WHITE),
            ascendant_marker: parse_color("ascendant_marker", ascendant_marker, Color::BLACK),
            default_planet_color: parse_color("default_planet", default_planet, Color::BLACK),
            planet_colors,
        }
    }

    /// Colour for a raw upstream planet name.
    pub fn planet_color(&self, name: &str) -> Color {
        Planet::from_name(name)
            .and_then(|p| self.planet_colors.get(&p).copied())
            .unwrap_or(self.default_planet_color)
    }
}
