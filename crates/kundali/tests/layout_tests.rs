use kundali::layout::{planets_in_house, GridPos, NORTH_HOUSE_ANCHORS};
use kundali::resolver::sign_for_house;
use kundali::{NorthIndianLayout, PlanetPlacement, SouthIndianLayout, ZodiacSign};

fn placement(planet: &str, house_no: i32) -> PlanetPlacement {
    PlanetPlacement {
        planet: planet.to_string(),
        sign: String::new(),
        degree: 12.34,
        house_no,
    }
}

fn sample_planets() -> Vec<PlanetPlacement> {
    vec![
        placement("Sun", 1),
        placement("Moon", 5),
        placement("Mars", 5),
        placement("Mercury", 12),
        placement("Jupiter", 9),
        placement("Venus", 2),
        placement("Saturn", 10),
        placement("Rahu", 4),
        placement("Ketu", 10),
    ]
}

#[test]
fn test_every_planet_lands_in_one_house() {
    let planets = sample_planets();
    let total: usize = (1..=12).map(|h| planets_in_house(&planets, h).len()).sum();
    assert_eq!(total, planets.len());
}

#[test]
fn test_out_of_range_house_is_dropped() {
    let mut planets = sample_planets();
    planets.push(placement("Uranus", 0));
    planets.push(placement("Neptune", 13));

    let north = NorthIndianLayout::build(Some(ZodiacSign::Aries), &planets);
    let placed: usize = north.cells().map(|c| c.planets.len()).sum();
    assert_eq!(placed, planets.len() - 2);

    let south = SouthIndianLayout::build(Some(ZodiacSign::Aries), &planets);
    let placed: usize = south.cells.iter().map(|c| c.planets.len()).sum();
    assert_eq!(placed, planets.len() - 2);
}

#[test]
fn test_negative_house_in_payload_is_dropped() {
    let chart = kundali::KundaliResponse::from_json(
        r#"{
          "ascendant": { "sign": "Aries", "degree": 5.0 },
          "ayanamsa": "lahiri",
          "planets": [
            { "planet": "Sun", "sign": "Aries", "degree": 10.0, "house_no": 1 },
            { "planet": "Gulika", "sign": "Aries", "degree": 3.0, "house_no": -1 }
          ]
        }"#,
    )
    .unwrap();
    let asc = chart.ascendant_sign();

    let north = NorthIndianLayout::build(asc, &chart.planets);
    assert_eq!(north.house(1).unwrap().cell.planets.len(), 1);
    assert_eq!(north.cells().map(|c| c.planets.len()).sum::<usize>(), 1);

    let south = SouthIndianLayout::build(asc, &chart.planets);
    assert_eq!(south.cells.iter().map(|c| c.planets.len()).sum::<usize>(), 1);

    let grouped: usize = kundali::bnn::group_planets(&chart.planets)
        .iter()
        .map(|g| g.planets.len())
        .sum();
    assert_eq!(grouped, 1);
}

#[test]
fn test_north_sign_labels_rotate() {
    for asc in ZodiacSign::all() {
        let layout = NorthIndianLayout::build(Some(asc), &[]);
        for house in &layout.houses {
            assert_eq!(house.cell.sign, sign_for_house(asc, house.cell.house_no));
        }
        assert_eq!(layout.houses[0].cell.sign, Some(asc));
    }
}

#[test]
fn test_north_unknown_ascendant_keeps_planets() {
    let planets = sample_planets();
    let layout = NorthIndianLayout::build(None, &planets);
    assert!(layout.cells().all(|c| c.sign.is_none()));
    let placed: usize = layout.cells().map(|c| c.planets.len()).sum();
    assert_eq!(placed, planets.len());
}

#[test]
fn test_pisces_always_top_left() {
    for asc in ZodiacSign::all() {
        let layout = SouthIndianLayout::build(Some(asc), &[]);
        let cell = layout.cell_at(0, 0).unwrap();
        assert_eq!(cell.sign, ZodiacSign::Pisces);
        assert_eq!(cell.grid, GridPos { row: 0, col: 0 });
    }
    let aries = SouthIndianLayout::build(Some(ZodiacSign::Aries), &[]);
    let leo = SouthIndianLayout::build(Some(ZodiacSign::Leo), &[]);
    assert_eq!(aries.cell_at(0, 0).unwrap().house_no, Some(12));
    assert_eq!(leo.cell_at(0, 0).unwrap().house_no, Some(8));
}

#[test]
fn test_south_single_ascendant_cell() {
    let layout = SouthIndianLayout::build(Some(ZodiacSign::Scorpio), &[]);
    let asc: Vec<_> = layout.cells.iter().filter(|c| c.is_ascendant).collect();
    assert_eq!(asc.len(), 1);
    assert_eq!(asc[0].sign, ZodiacSign::Scorpio);
    assert_eq!(asc[0].house_no, Some(1));
}

#[test]
fn test_house_five_planet_everywhere_consistent() {
    let planets = vec![placement("Moon", 5)];
    let asc = ZodiacSign::Leo;

    let north = NorthIndianLayout::build(Some(asc), &planets);
    let house = north.house(5).unwrap();
    assert_eq!(house.cell.planets[0].planet, "Moon");
    assert_eq!(house.planet_slots[0], NORTH_HOUSE_ANCHORS[4].planets);

    let south = SouthIndianLayout::build(Some(asc), &planets);
    let cell = south.cell_for_house(5).unwrap();
    assert_eq!(Some(cell.sign), sign_for_house(asc, 5));
    assert_eq!(cell.sign, ZodiacSign::Sagittarius);
    assert_eq!(cell.planets.len(), 1);

    let groups = kundali::bnn::group_planets(&planets);
    let holding: Vec<_> = groups.iter().filter(|g| !g.is_empty()).collect();
    assert_eq!(holding.len(), 1);
    assert_eq!(holding[0].triad.label(), "1/5/9");
}

#[test]
fn test_layout_serializes_for_frontend() {
    let layout = NorthIndianLayout::build(Some(ZodiacSign::Aries), &[placement("Sun", 1)]);
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["houses"][0]["houseNo"], 1);
    assert_eq!(json["houses"][0]["sign"], "Aries");
    assert_eq!(json["houses"][0]["planets"][0]["planet"], "Sun");
}
