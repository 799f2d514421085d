//! Birth-chart payload as returned by the upstream lagna service.

use crate::error::ChartError;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub sign: String,
    pub degree: f64,
}

impl Ascendant {
    pub fn sign(&self) -> Result<ZodiacSign, ChartError> {
        self.sign.parse()
    }
}

/// One planet as placed by the upstream service. `house_no` is the field the
/// layouts trust; `sign` is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub planet: String,
    pub sign: String,
    pub degree: f64,
    pub house_no: i32,
}

impl PlanetPlacement {
    /// `house_no` as a chart house, or `None` when it is outside 1..=12.
    pub fn house(&self) -> Option<u8> {
        checked_house(self.house_no)
    }
}

pub(crate) fn checked_house(house_no: i32) -> Option<u8> {
    u8::try_from(house_no)
        .ok()
        .filter(|h| crate::resolver::is_valid_house(*h))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePlanet {
    pub planet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEntry {
    pub house_no: i32,
    pub sign: String,
    pub cusp_degree: f64,
    #[serde(default)]
    pub planets: Vec<HousePlanet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundaliResponse {
    pub ascendant: Ascendant,
    pub ayanamsa: String,
    #[serde(default)]
    pub houses: Vec<HouseEntry>,
    #[serde(default)]
    pub planets: Vec<PlanetPlacement>,
}

impl KundaliResponse {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))
    }

    /// Parsed ascendant, or `None` (logged) when the service sent an
    /// unrecognised sign name.
    pub fn ascendant_sign(&self) -> Option<ZodiacSign> {
        match self.ascendant.sign() {
            Ok(sign) => Some(sign),
            Err(e) => {
                log::warn!("Ascendant not usable for layout: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
      "ascendant": { "sign": "Leo", "degree": 12.5 },
      "ayanamsa": "lahiri",
      "houses": [
        { "house_no": 1, "sign": "Leo", "cusp_degree": 12.5, "planets": [{ "planet": "Sun" }] }
      ],
      "planets": [
        { "planet": "Sun", "sign": "Leo", "degree": 29.58, "house_no": 1 }
      ]
    }
    "#;

    #[test]
    fn test_parse_sample() {
        let chart = KundaliResponse::from_json(SAMPLE).unwrap();
        assert_eq!(chart.ascendant_sign(), Some(ZodiacSign::Leo));
        assert_eq!(chart.planets.len(), 1);
        assert_eq!(chart.houses[0].planets[0].planet, "Sun");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let chart = KundaliResponse::from_json(
            r#"{ "ascendant": { "sign": "Aries", "degree": 0.0 }, "ayanamsa": "kp" }"#,
        )
        .unwrap();
        assert!(chart.houses.is_empty());
        assert!(chart.planets.is_empty());
    }

    #[test]
    fn test_negative_house_does_not_reject_chart() {
        let chart = KundaliResponse::from_json(
            r#"{
              "ascendant": { "sign": "Leo", "degree": 1.0 },
              "ayanamsa": "lahiri",
              "planets": [
                { "planet": "Sun", "sign": "Leo", "degree": 20.0, "house_no": 1 },
                { "planet": "Gulika", "sign": "Leo", "degree": 2.0, "house_no": -1 },
                { "planet": "Mandi", "sign": "Leo", "degree": 2.0, "house_no": 300 }
              ]
            }"#,
        )
        .unwrap();
        assert_eq!(chart.planets.len(), 3);
        assert_eq!(chart.planets[0].house(), Some(1));
        assert_eq!(chart.planets[1].house(), None);
        assert_eq!(chart.planets[2].house(), None);
    }

    #[test]
    fn test_invalid_json() {
        let err = KundaliResponse::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ChartError::InvalidJson(_)));
    }

    #[test]
    fn test_unknown_ascendant() {
        let mut chart = KundaliResponse::from_json(SAMPLE).unwrap();
        chart.ascendant.sign = "Unknown".to_string();
        assert_eq!(chart.ascendant_sign(), None);
        assert!(chart.ascendant.sign().is_err());
    }
}
