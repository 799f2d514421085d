use kundali::bnn::{
    format_event_date, group_by_year, group_planets, unique_planets, unique_triangles, BnnEvent,
    Direction, EventFilter, Triad,
};
use kundali::PlanetPlacement;
use std::collections::BTreeSet;

const EVENTS: &str = r#"[
  { "date": "2025-03-14", "event": "Jupiter → Moon",
    "triangles": [{ "group": "1/5/9", "planets": ["Moon (12.40°)", "Sun (3.1°)"] }] },
  { "date": "2025-11-02", "event": "Jupiter → Saturn",
    "triangles": [{ "group": "2/6/10", "planets": ["Saturn (20°)"] }] },
  { "date": "2026-02-02", "event": "Jupiter → Moon",
    "triangles": [{ "group": "4/8/12", "planets": ["Moon (12.40°)", "garbage"] }] },
  { "date": "2027-07-19", "event": "Jupiter → Ketu", "triangles": [] }
]"#;

fn events() -> Vec<BnnEvent> {
    serde_json::from_str(EVENTS).unwrap()
}

#[test]
fn test_triads_partition_houses() {
    let mut seen = BTreeSet::new();
    for triad in Triad::ALL {
        for h in triad.houses() {
            assert!(seen.insert(h), "house {h} in two triads");
        }
    }
    assert_eq!(seen, (1..=12).collect::<BTreeSet<u8>>());
}

#[test]
fn test_directions() {
    assert_eq!(Triad::Dharma.direction(), Direction::North);
    assert_eq!(Triad::Artha.direction(), Direction::West);
    assert_eq!(Triad::Kama.direction(), Direction::South);
    assert_eq!(Triad::Moksha.direction(), Direction::East);
}

#[test]
fn test_group_planets_counts() {
    let planets: Vec<PlanetPlacement> = [("Sun", 1), ("Moon", 9), ("Mars", 6), ("Rahu", 13)]
        .into_iter()
        .map(|(planet, house_no)| PlanetPlacement {
            planet: planet.to_string(),
            sign: String::new(),
            degree: 0.5,
            house_no,
        })
        .collect();
    let groups = group_planets(&planets);
    assert_eq!(groups.len(), 4);
    let counts: Vec<(Triad, usize)> = groups.iter().map(|g| (g.triad, g.planets.len())).collect();
    assert_eq!(
        counts,
        vec![
            (Triad::Dharma, 2),
            (Triad::Moksha, 0),
            (Triad::Kama, 0),
            (Triad::Artha, 1)
        ]
    );
    assert!(groups[1].is_empty());
}

#[test]
fn test_triangle_entries_parse_and_drop() {
    let events = events();
    let first = events[0].triangles[0].parsed_planets();
    assert_eq!(first.planets.len(), 2);
    assert_eq!(first.planets[0].planet, "Moon");
    assert_eq!(first.planets[0].degree, 12.4);

    let third = events[2].triangles[0].parsed_planets();
    assert_eq!(third.planets.len(), 1);
    assert_eq!(third.dropped, 1);
}

#[test]
fn test_unique_lists_sorted() {
    let events = events();
    assert_eq!(unique_planets(&events), vec!["Ketu", "Moon", "Saturn"]);
    assert_eq!(unique_triangles(&events), vec!["1/5/9", "2/6/10", "4/8/12"]);
}

#[test]
fn test_filters() {
    let events = events();
    let moon = EventFilter {
        planet: Some("Moon".to_string()),
        triangle: None,
    };
    assert_eq!(moon.apply(&events).len(), 2);

    let moon_moksha = EventFilter {
        planet: Some("Moon".to_string()),
        triangle: Some("4/8/12".to_string()),
    };
    let hits = moon_moksha.apply(&events);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, "2026-02-02");

    assert_eq!(EventFilter::default().apply(&events).len(), events.len());
}

#[test]
fn test_group_by_year() {
    let events = events();
    let grouped = group_by_year(&events);
    let years: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(years, vec!["2025", "2026", "2027"]);
    assert_eq!(grouped["2025"].len(), 2);
}

#[test]
fn test_event_dates() {
    let events = events();
    assert_eq!(format_event_date(&events[2].date), "02 Feb 2026");
    assert!(events[0].parsed_date().is_ok());
    let bad = BnnEvent {
        date: "someday".to_string(),
        event: "Jupiter → Sun".to_string(),
        triangles: vec![],
    };
    assert!(bad.parsed_date().is_err());
    assert_eq!(format_event_date(&bad.date), "someday");
}
