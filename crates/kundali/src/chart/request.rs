use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sidereal offset systems accepted by the chart service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ayanamsa {
    #[default]
    Lahiri,
    Raman,
    Kp,
    Jnbhasin,
    Parashari,
    Faganbradley,
    Pushyapaksha,
    True,
    Suryasiddhanta,
}

// (wire value, display label)
const AYANAMSA_OPTIONS: [(Ayanamsa, &str, &str); 9] = [
    (Ayanamsa::Lahiri, "lahiri", "Lahiri (Chitrapaksha)"),
    (Ayanamsa::Raman, "raman", "Raman"),
    (Ayanamsa::Kp, "kp", "Krishnamurti (KP)"),
    (Ayanamsa::Jnbhasin, "jnbhasin", "KP (J.N. Bhasin)"),
    (Ayanamsa::Parashari, "parashari", "Parashari"),
    (Ayanamsa::Faganbradley, "faganbradley", "Fagan–Bradley"),
    (Ayanamsa::Pushyapaksha, "pushyapaksha", "Pushya Paksha"),
    (Ayanamsa::True, "true", "True (Observational)"),
    (Ayanamsa::Suryasiddhanta, "suryasiddhanta", "Surya Siddhanta"),
];

impl Ayanamsa {
    pub fn all() -> impl Iterator<Item = Ayanamsa> {
        AYANAMSA_OPTIONS.iter().map(|(a, _, _)| *a)
    }

    pub fn as_str(self) -> &'static str {
        AYANAMSA_OPTIONS[self as usize].1
    }

    pub fn label(self) -> &'static str {
        AYANAMSA_OPTIONS[self as usize].2
    }
}

impl FromStr for Ayanamsa {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AYANAMSA_OPTIONS
            .iter()
            .find(|(_, wire, _)| wire.eq_ignore_ascii_case(s.trim()))
            .map(|(a, _, _)| *a)
            .ok_or_else(|| ChartError::UnknownAyanamsa(s.to_string()))
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Birth details sent to the chart service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundaliRequest {
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Time of birth, `HH:MM`.
    pub tob: String,
    pub lat: f64,
    pub lon: f64,
    /// Offset from UTC in hours.
    pub tz: f64,
    #[serde(default)]
    pub ayanamsa: Ayanamsa,
}

impl KundaliRequest {
    /// Query parameters in the order the proxy route forwards them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("dob", self.dob.clone()),
            ("tob", self.tob.clone()),
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
            ("tz", self.tz.to_string()),
            ("ayanamsa", self.ayanamsa.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ayanamsa_table_order() {
        for a in Ayanamsa::all() {
            assert_eq!(a.as_str().parse::<Ayanamsa>(), Ok(a));
        }
        assert_eq!(Ayanamsa::Kp.label(), "Krishnamurti (KP)");
        assert!("tropical".parse::<Ayanamsa>().is_err());
    }

    #[test]
    fn test_query_pairs() {
        let req = KundaliRequest {
            dob: "1990-05-17".to_string(),
            tob: "06:45".to_string(),
            lat: 28.6139,
            lon: 77.209,
            tz: 5.5,
            ayanamsa: Ayanamsa::Raman,
        };
        let pairs = req.to_query_pairs();
        assert_eq!(pairs[0], ("dob", "1990-05-17".to_string()));
        assert_eq!(pairs[4], ("tz", "5.5".to_string()));
        assert_eq!(pairs[5], ("ayanamsa", "raman".to_string()));
    }

    #[test]
    fn test_request_serde_defaults_ayanamsa() {
        let req: KundaliRequest = serde_json::from_str(
            r#"{ "dob": "2000-01-01", "tob": "12:00", "lat": 0.0, "lon": 0.0, "tz": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(req.ayanamsa, Ayanamsa::Lahiri);
    }
}
