//! The twelve sidereal signs.
//!
//! Canonical order (Aries first) defines the cyclic distance used for every
//! house computation, so `index()` is the only ordering the rest of the crate
//! relies on.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

// (name, short, glyph)
const SIGN_TABLE: [(&str, &str, &str); 12] = [
    ("Aries", "Ar", "♈"),
    ("Taurus", "Ta", "♉"),
    ("Gemini", "Ge", "♊"),
    ("Cancer", "Ca", "♋"),
    ("Leo", "Le", "♌"),
    ("Virgo", "Vi", "♍"),
    ("Libra", "Li", "♎"),
    ("Scorpio", "Sc", "♏"),
    ("Sagittarius", "Sg", "♐"),
    ("Capricorn", "Cp", "♑"),
    ("Aquarius", "Aq", "♒"),
    ("Pisces", "Pi", "♓"),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// 0-based canonical index (Aries = 0, Pisces = 11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    pub const fn name(self) -> &'static str {
        SIGN_TABLE[self.index()].0
    }

    pub const fn short(self) -> &'static str {
        SIGN_TABLE[self.index()].1
    }

    pub const fn glyph(self) -> &'static str {
        SIGN_TABLE[self.index()].2
    }

    /// 1-based sign number, the label North Indian charts print in each house.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        Self::ALL.iter().copied()
    }
}

impl FromStr for ZodiacSign {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SIGN_TABLE
            .iter()
            .position(|(name, _, _)| name.eq_ignore_ascii_case(trimmed))
            .map(ZodiacSign::from_index)
            .ok_or_else(|| ChartError::UnknownSign(s.to_string()))
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, sign) in ZodiacSign::all().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(ZodiacSign::from_index(i), sign);
            assert_eq!(ZodiacSign::from_index(i + 12), sign);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Aries".parse::<ZodiacSign>(), Ok(ZodiacSign::Aries));
        assert_eq!("sagittarius".parse::<ZodiacSign>(), Ok(ZodiacSign::Sagittarius));
        assert_eq!(" Pisces ".parse::<ZodiacSign>(), Ok(ZodiacSign::Pisces));
        assert_eq!(
            "Ophiuchus".parse::<ZodiacSign>(),
            Err(ChartError::UnknownSign("Ophiuchus".to_string()))
        );
        assert!("".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ZodiacSign::Capricorn.short(), "Cp");
        assert_eq!(ZodiacSign::Leo.glyph(), "♌");
        assert_eq!(ZodiacSign::Pisces.number(), 12);
        assert_eq!(ZodiacSign::Libra.to_string(), "Libra");
    }

    #[test]
    fn test_serde_uses_english_name() {
        let json = serde_json::to_string(&ZodiacSign::Virgo).unwrap();
        assert_eq!(json, "\"Virgo\"");
        let back: ZodiacSign = serde_json::from_str("\"Scorpio\"").unwrap();
        assert_eq!(back, ZodiacSign::Scorpio);
    }
}
