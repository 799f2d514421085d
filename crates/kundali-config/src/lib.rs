use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const SETTINGS_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

/// Rendering settings for the chart views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub north: NorthSettings,
    pub south: SouthSettings,
    pub colors: ChartColors,
    /// Planet name (as sent upstream, e.g. "Sun") -> hex colour.
    pub planet_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NorthSettings {
    /// Canvas height. The diamond frame is a fixed 400-unit square; the
    /// extra height leaves room below it.
    pub height: f32,
    pub planets_per_row: usize,
    pub planet_column_pitch: f32,
    pub planet_row_pitch: f32,
    pub label_font_size: f32,
    pub planet_font_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SouthSettings {
    pub cell_size: f32,
    pub padding: f32,
    pub planets_per_row: usize,
    pub planet_column_pitch: f32,
    pub planet_row_pitch: f32,
    pub label_font_size: f32,
    pub planet_font_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartColors {
    pub background: String,
    pub frame: String,
    pub cell_fill: String,
    pub cell_stroke: String,
    pub house_label: String,
    pub sign_label: String,
    pub ascendant_fill: String,
    pub ascendant_marker: String,
    pub default_planet: String,
}

impl Default for NorthSettings {
    fn default() -> Self {
        Self {
            height: 430.0,
            planets_per_row: 3,
            planet_column_pitch: 24.0,
            planet_row_pitch: 20.0,
            label_font_size: 13.0,
            planet_font_size: 16.0,
        }
    }
}

impl Default for SouthSettings {
    fn default() -> Self {
        Self {
            cell_size: 90.0,
            padding: 10.0,
            planets_per_row: 3,
            planet_column_pitch: 28.0,
            planet_row_pitch: 18.0,
            label_font_size: 10.0,
            planet_font_size: 12.0,
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background: "#f9fafb".to_string(),
            frame: "#111827".to_string(),
            cell_fill: "#ffffff".to_string(),
            cell_stroke: "#e5e7eb".to_string(),
            house_label: "#7c3aed".to_string(),
            sign_label: "#4b5563".to_string(),
            ascendant_fill: "#f7e7b4".to_string(),
            ascendant_marker: "#d4af37".to_string(),
            default_planet: "#1f2937".to_string(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        let planet_colors = [
            ("Sun", "#d97706"),
            ("Moon", "#64748b"),
            ("Mars", "#dc2626"),
            ("Mercury", "#059669"),
            ("Jupiter", "#ca8a04"),
            ("Venus", "#db2777"),
            ("Saturn", "#2563eb"),
            ("Rahu", "#7c3aed"),
            ("Ketu", "#ea580c"),
            ("Uranus", "#0891b2"),
            ("Neptune", "#4f46e5"),
            ("Pluto", "#71717a"),
        ]
        .into_iter()
        .map(|(planet, hex)| (planet.to_string(), hex.to_string()))
        .collect();

        Self {
            north: NorthSettings::default(),
            south: SouthSettings::default(),
            colors: ChartColors::default(),
            planet_colors,
        }
    }
}

/// Try the common relative locations of `configs/kundali.toml`.
/// Returns `Ok(None)` when no file exists in any of them.
pub fn read_settings_toml_text() -> anyhow::Result<Option<String>> {
    for p in &SETTINGS_PATHS {
        let path = Path::new(p);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        return Ok(Some(text));
    }
    Ok(None)
}

pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let settings: ChartSettings =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart settings: {e}"))?;
    if settings.north.planets_per_row == 0 || settings.south.planets_per_row == 0 {
        anyhow::bail!("planets_per_row must be at least 1");
    }
    Ok(settings)
}

/// Load settings from the default locations, falling back to defaults when
/// no settings file is present. A malformed file is an error.
pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    match read_settings_toml_text()? {
        Some(text) => parse_chart_settings(&text),
        None => {
            log::info!("No kundali.toml found in {:?}; using default chart settings", SETTINGS_PATHS);
            Ok(ChartSettings::default())
        }
    }
}

pub fn load_chart_settings_from(path: &Path) -> anyhow::Result<ChartSettings> {
    if !path.exists() {
        anyhow::bail!("Chart settings file does not exist: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_chart_settings(&text).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}
