//! Transit event feed from the BNN prediction service.
//!
//! Events carry free text: the event itself reads like "Jupiter → Moon" and
//! each triangle lists natal planets as "Sun (29.58°)". Entries that do not
//! match that grammar are dropped.

use crate::chart::Ayanamsa;
use crate::error::ChartError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

lazy_static::lazy_static! {
    // planet names are ASCII word characters only
    static ref PLANET_ENTRY: regex::Regex =
        regex::Regex::new(r"^((?-u:\w)+)\s*\(([0-9.]+)°?\)$").expect("planet entry pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnnTriangle {
    /// Triad label, e.g. "1/5/9".
    pub group: String,
    #[serde(default)]
    pub planets: Vec<String>,
}

impl BnnTriangle {
    pub fn parsed_planets(&self) -> ParsedEntries {
        parse_planet_entries(&self.planets)
    }

    /// "1/5/9: Sun (29.58°), Mars (2.50°)", with a trailing skip count when
    /// some entries did not parse.
    pub fn summary(&self) -> String {
        let parsed = self.parsed_planets();
        let names: Vec<String> = parsed
            .planets
            .iter()
            .map(|p| format!("{} ({:.2}°)", p.planet, p.degree))
            .collect();
        let mut line = format!("{}: {}", self.group, names.join(", "));
        if names.is_empty() {
            line.push_str("no planets");
        }
        match parsed.dropped {
            0 => {}
            1 => line.push_str(" (1 entry skipped)"),
            n => line.push_str(&format!(" ({n} entries skipped)")),
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnnEvent {
    /// `YYYY-MM-DD`, possibly followed by a time part.
    pub date: String,
    pub event: String,
    #[serde(default)]
    pub triangles: Vec<BnnTriangle>,
}

impl BnnEvent {
    pub fn parsed_date(&self) -> Result<NaiveDate, ChartError> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|_| ChartError::InvalidEventDate(self.date.clone()))
    }

    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or(&self.date)
    }

    pub fn target_planet(&self) -> &str {
        target_planet(&self.event)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPlanet {
    pub planet: String,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParsedEntries {
    pub planets: Vec<ParsedPlanet>,
    pub dropped: usize,
}

/// Parse `"Sun (29.58°)"` into name and degree.
pub fn parse_planet_entry(entry: &str) -> Option<ParsedPlanet> {
    let caps = PLANET_ENTRY.captures(entry.trim())?;
    let degree = caps[2].parse::<f64>().ok()?;
    Some(ParsedPlanet {
        planet: caps[1].to_string(),
        degree,
    })
}

pub fn parse_planet_entries<S: AsRef<str>>(entries: &[S]) -> ParsedEntries {
    let mut out = ParsedEntries::default();
    for entry in entries {
        match parse_planet_entry(entry.as_ref()) {
            Some(p) => out.planets.push(p),
            None => {
                log::debug!("Skipping unparseable BNN planet entry {:?}", entry.as_ref());
                out.dropped += 1;
            }
        }
    }
    out
}

/// Planet being transited: text after the arrow in "Jupiter → Moon", or the
/// whole string when there is no arrow.
pub fn target_planet(event: &str) -> &str {
    match event.split_once('→') {
        Some((_, target)) => target.trim(),
        None => event,
    }
}

/// Planet and triangle filters; `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    pub planet: Option<String>,
    pub triangle: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &BnnEvent) -> bool {
        let planet_ok = self
            .planet
            .as_deref()
            .map_or(true, |p| event.target_planet() == p);
        let triangle_ok = self
            .triangle
            .as_deref()
            .map_or(true, |t| event.triangles.iter().any(|tri| tri.group == t));
        planet_ok && triangle_ok
    }

    pub fn apply<'a>(&self, events: &'a [BnnEvent]) -> Vec<&'a BnnEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

pub fn unique_planets(events: &[BnnEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.target_planet().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn unique_triangles(events: &[BnnEvent]) -> Vec<String> {
    events
        .iter()
        .flat_map(|e| e.triangles.iter().map(|t| t.group.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn group_by_year<'a, I>(events: I) -> BTreeMap<String, Vec<&'a BnnEvent>>
where
    I: IntoIterator<Item = &'a BnnEvent>,
{
    let mut grouped: BTreeMap<String, Vec<&'a BnnEvent>> = BTreeMap::new();
    for event in events {
        grouped.entry(event.year().to_string()).or_default().push(event);
    }
    grouped
}

/// "2026-02-02" -> "02 Feb 2026"; unparseable dates are returned unchanged.
pub fn format_event_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(d) => d.format("%d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Parameters for the transit prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnnRequest {
    pub dob: String,
    pub tob: String,
    pub lat: f64,
    pub lon: f64,
    pub tz: f64,
    #[serde(default)]
    pub ayanamsa: Ayanamsa,
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_years() -> u32 {
    60
}

impl BnnRequest {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("dob", self.dob.clone()),
            ("tob", self.tob.clone()),
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
            ("tz", self.tz.to_string()),
            ("ayanamsa", self.ayanamsa.as_str().to_string()),
            ("years", self.years.to_string()),
        ]
    }
}
