//! House <-> sign resolution for whole-sign houses.
//!
//! House 1 is the ascendant's sign and each following house takes the next
//! sign in canonical order:
//!
//! `sign(house) = SIGNS[(index(asc) + house - 1) mod 12]`
//!
//! Both chart layouts go through these functions instead of repeating the
//! index arithmetic.

use crate::chart::data::checked_house;
use crate::chart::{HouseEntry, PlanetPlacement};
use crate::zodiac::ZodiacSign;
use serde::Serialize;

pub const HOUSE_COUNT: u8 = 12;

/// True for house numbers 1..=12.
pub fn is_valid_house(house_no: u8) -> bool {
    (1..=HOUSE_COUNT).contains(&house_no)
}

/// Sign occupying `house_no` for the given ascendant. `None` when the house
/// number is outside 1..=12.
pub fn sign_for_house(ascendant: ZodiacSign, house_no: u8) -> Option<ZodiacSign> {
    if !is_valid_house(house_no) {
        return None;
    }
    Some(ZodiacSign::from_index(ascendant.index() + house_no as usize - 1))
}

/// House number (1..=12) that `sign` occupies for the given ascendant.
pub fn house_for_sign(ascendant: ZodiacSign, sign: ZodiacSign) -> u8 {
    ((sign.index() + 12 - ascendant.index()) % 12) as u8 + 1
}

/// Signs of houses 1..=12 in house order.
pub fn house_signs(ascendant: ZodiacSign) -> [ZodiacSign; 12] {
    let mut signs = [ascendant; 12];
    for (offset, slot) in signs.iter_mut().enumerate() {
        *slot = ZodiacSign::from_index(ascendant.index() + offset);
    }
    signs
}

/// Name-based variant for data arriving as strings. An unrecognised
/// ascendant yields `None` and is logged.
pub fn sign_for_house_named(ascendant: &str, house_no: u8) -> Option<ZodiacSign> {
    let asc = parse_logged(ascendant, "ascendant")?;
    sign_for_house(asc, house_no)
}

pub fn house_for_sign_named(ascendant: &str, sign: &str) -> Option<u8> {
    let asc = parse_logged(ascendant, "ascendant")?;
    let sign = parse_logged(sign, "sign")?;
    Some(house_for_sign(asc, sign))
}

fn parse_logged(name: &str, what: &str) -> Option<ZodiacSign> {
    match name.parse::<ZodiacSign>() {
        Ok(sign) => Some(sign),
        Err(e) => {
            log::warn!("Cannot resolve {what}: {e}");
            None
        }
    }
}

/// Why a record's `sign` and `house_no` fields disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// `house_no` outside 1..=12; the record lands in no chart cell.
    HouseOutOfRange { house_no: i32 },
    /// The `sign` field is not one of the twelve canonical names.
    UnknownSign { sign: String },
    /// Both fields are valid but `sign` is not the sign of `house_no`.
    SignDisagrees { reported: ZodiacSign, expected: ZodiacSign },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementMismatch {
    pub planet: String,
    pub house_no: i32,
    pub kind: MismatchKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseMismatch {
    pub house_no: i32,
    pub kind: MismatchKind,
}

fn check(ascendant: ZodiacSign, house_no: i32, sign: &str) -> Option<MismatchKind> {
    let expected = checked_house(house_no).and_then(|h| sign_for_house(ascendant, h));
    let Some(expected) = expected else {
        return Some(MismatchKind::HouseOutOfRange { house_no });
    };
    match sign.parse::<ZodiacSign>() {
        Err(_) => Some(MismatchKind::UnknownSign {
            sign: sign.to_string(),
        }),
        Ok(reported) if reported != expected => {
            Some(MismatchKind::SignDisagrees { reported, expected })
        }
        Ok(_) => None,
    }
}

/// Compare each planet's `sign` against the sign implied by its `house_no`.
///
/// `house_no` is the authoritative field for chart placement; this only
/// reports disagreements so callers can decide whether to surface them.
pub fn reconcile_placements(
    ascendant: ZodiacSign,
    planets: &[PlanetPlacement],
) -> Vec<PlacementMismatch> {
    let mismatches: Vec<PlacementMismatch> = planets
        .iter()
        .filter_map(|p| {
            check(ascendant, p.house_no, &p.sign).map(|kind| PlacementMismatch {
                planet: p.planet.clone(),
                house_no: p.house_no,
                kind,
            })
        })
        .collect();

    for m in &mismatches {
        log::warn!("Planet {} in house {}: {:?}", m.planet, m.house_no, m.kind);
    }
    mismatches
}

/// Same check for the upstream house table.
pub fn verify_house_table(ascendant: ZodiacSign, houses: &[HouseEntry]) -> Vec<HouseMismatch> {
    houses
        .iter()
        .filter_map(|h| {
            check(ascendant, h.house_no, &h.sign).map(|kind| HouseMismatch {
                house_no: h.house_no,
                kind,
            })
        })
        .collect()
}
