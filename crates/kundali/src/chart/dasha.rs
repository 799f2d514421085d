//! Vimshottari dasha service contract.
//!
//! Periods are computed upstream; this module only describes the requests
//! and the period lists that come back. Each maha dasha can be expanded into
//! antar dashas, and each antar dasha into pratyantar dashas, by sending the
//! period's `{lord, start, end}` back to the service.

use crate::chart::data::KundaliResponse;
use crate::error::ChartError;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Deserializer, Serialize};

/// Maha dasha request, keyed by the natal Moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaRequest {
    pub dob: String,
    pub tob: String,
    /// Sign number of the Moon, 1 (Aries) to 12 (Pisces).
    #[serde(rename = "sign")]
    pub moon_sign: u8,
    /// Moon's degree within its sign.
    #[serde(rename = "degree")]
    pub moon_degree: f64,
}

impl DashaRequest {
    /// Build from a computed chart, using its Moon placement. `None` when the
    /// chart has no Moon or the Moon's sign is not recognised.
    pub fn from_chart(dob: &str, tob: &str, chart: &KundaliResponse) -> Option<Self> {
        let moon = chart
            .planets
            .iter()
            .find(|p| p.planet.eq_ignore_ascii_case("Moon"))?;
        let sign = match moon.sign.parse::<ZodiacSign>() {
            Ok(sign) => sign,
            Err(e) => {
                log::warn!("Cannot build dasha request: {e}");
                return None;
            }
        };
        Some(Self {
            dob: dob.to_string(),
            tob: tob.to_string(),
            moon_sign: sign.number(),
            moon_degree: moon.degree,
        })
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("dob", self.dob.clone()),
            ("tob", self.tob.clone()),
            ("sign", self.moon_sign.to_string()),
            ("degree", self.moon_degree.to_string()),
        ]
    }
}

/// Sub-period request for one parent period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntarDashaRequest {
    pub lord: String,
    pub start: String,
    pub end: String,
}

pub type PratyantarDashaRequest = AntarDashaRequest;

impl AntarDashaRequest {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("lord", self.lord.clone()),
            ("start", self.start.clone()),
            ("end", self.end.clone()),
        ]
    }
}

/// One period at any level of the dasha tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: String,
    pub start: String,
    pub end: String,
    /// Display text such as "18 years"; numbers are accepted and stringified.
    #[serde(default, deserialize_with = "duration_text")]
    pub duration: Option<String>,
    /// Set by the service on the period containing today.
    #[serde(default)]
    pub current: bool,
}

pub type MahaDasha = DashaPeriod;
pub type AntarDasha = DashaPeriod;
pub type PratyantarDasha = DashaPeriod;

impl DashaPeriod {
    /// Request for this period's sub-periods.
    pub fn sub_period_request(&self) -> AntarDashaRequest {
        AntarDashaRequest {
            lord: self.lord.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

fn duration_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }
    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(n) => n.to_string(),
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PeriodList {
    Bare(Vec<DashaPeriod>),
    Wrapped { maha_dashas: Vec<DashaPeriod> },
}

/// Parse a period list as returned by any of the three dasha endpoints.
/// Both a bare array and `{"maha_dashas": [...]}` are accepted.
pub fn parse_dasha_periods(json: &str) -> Result<Vec<DashaPeriod>, ChartError> {
    let list: PeriodList =
        serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))?;
    Ok(match list {
        PeriodList::Bare(periods) => periods,
        PeriodList::Wrapped { maha_dashas } => maha_dashas,
    })
}

pub fn current_period(periods: &[DashaPeriod]) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.current)
}
