//! Plain-text listings of a chart and its dasha periods.

use crate::bnn::format_event_date;
use crate::chart::dasha::DashaPeriod;
use crate::chart::data::{HouseEntry, KundaliResponse, PlanetPlacement};
use crate::planet::Planet;
use crate::zodiac::ZodiacSign;

fn sign_label(name: &str) -> String {
    match name.parse::<ZodiacSign>() {
        Ok(sign) => format!("{} {}", sign.glyph(), sign.name()),
        Err(_) => format!("? {name}"),
    }
}

fn planet_label(name: &str) -> String {
    match Planet::from_name(name) {
        Some(planet) => format!("{} {}", planet.glyph(), planet.name()),
        None => format!("? {name}"),
    }
}

/// "Ascendant: ♌ Leo 12.50°  (lahiri)"
pub fn ascendant_line(chart: &KundaliResponse) -> String {
    format!(
        "Ascendant: {} {:.2}°  ({})",
        sign_label(&chart.ascendant.sign),
        chart.ascendant.degree,
        chart.ayanamsa
    )
}

pub fn planet_rows(planets: &[PlanetPlacement]) -> Vec<String> {
    planets
        .iter()
        .map(|p| {
            format!(
                "{:<12} {:<16} {:>6.2}°  House {}",
                planet_label(&p.planet),
                sign_label(&p.sign),
                p.degree,
                p.house_no
            )
        })
        .collect()
}

pub fn house_rows(houses: &[HouseEntry]) -> Vec<String> {
    houses
        .iter()
        .map(|h| {
            let planets: Vec<&str> = h.planets.iter().map(|p| p.planet.as_str()).collect();
            format!(
                "House {:>2}  {:<16} {:>6.2}°  {}",
                h.house_no,
                sign_label(&h.sign),
                h.cusp_degree,
                if planets.is_empty() {
                    "-".to_string()
                } else {
                    planets.join(", ")
                }
            )
        })
        .collect()
}

/// "Venus  04 Aug 2019 - 04 Aug 2039  20 years  (current)"
pub fn dasha_line(period: &DashaPeriod) -> String {
    let mut line = format!(
        "{:<8} {} - {}",
        period.lord,
        format_event_date(&period.start),
        format_event_date(&period.end)
    );
    if let Some(duration) = &period.duration {
        line.push_str("  ");
        line.push_str(duration);
    }
    if period.current {
        line.push_str("  (current)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse_dasha_periods;

    fn chart() -> KundaliResponse {
        KundaliResponse::from_json(
            r#"{
              "ascendant": { "sign": "Leo", "degree": 12.5 },
              "ayanamsa": "lahiri",
              "houses": [
                { "house_no": 1, "sign": "Leo", "cusp_degree": 12.3, "planets": [{ "planet": "Sun" }] },
                { "house_no": 2, "sign": "Virgo", "cusp_degree": 12.3 }
              ],
              "planets": [
                { "planet": "Sun", "sign": "Leo", "degree": 2.0, "house_no": 1 },
                { "planet": "Gulika", "sign": "Zed", "degree": 3.5, "house_no": -1 }
              ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ascendant_line() {
        assert_eq!(ascendant_line(&chart()), "Ascendant: ♌ Leo 12.50°  (lahiri)");
    }

    #[test]
    fn test_planet_rows_keep_unknown_names() {
        let rows = planet_rows(&chart().planets);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("☉ Sun"));
        assert!(rows[0].ends_with("House 1"));
        assert!(rows[1].starts_with("? Gulika"));
        assert!(rows[1].contains("? Zed"));
        assert!(rows[1].ends_with("House -1"));
    }

    #[test]
    fn test_house_rows() {
        let rows = house_rows(&chart().houses);
        assert!(rows[0].contains("♌ Leo"));
        assert!(rows[0].ends_with("Sun"));
        assert!(rows[1].ends_with("-"));
    }

    #[test]
    fn test_dasha_line_marks_current() {
        let periods = parse_dasha_periods(
            r#"[
              { "lord": "Venus", "start": "2019-08-04", "end": "2039-08-04", "duration": "20 years", "current": true },
              { "lord": "Sun", "start": "2039-08-04", "end": "2045-08-04" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            dasha_line(&periods[0]),
            "Venus    04 Aug 2019 - 04 Aug 2039  20 years  (current)"
        );
        assert_eq!(dasha_line(&periods[1]), "Sun      04 Aug 2039 - 04 Aug 2045");
    }
}
