use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Holland's six personality categories, in canonical R-I-A-S-E-C order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Riasec {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Riasec {
    pub const ALL: [Riasec; 6] = [
        Riasec::R,
        Riasec::I,
        Riasec::A,
        Riasec::S,
        Riasec::E,
        Riasec::C,
    ];

    /// Parses a single profile character. Anything outside RIASEC yields `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Riasec::R),
            'I' => Some(Riasec::I),
            'A' => Some(Riasec::A),
            'S' => Some(Riasec::S),
            'E' => Some(Riasec::E),
            'C' => Some(Riasec::C),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Riasec::R => "Realistic",
            Riasec::I => "Investigative",
            Riasec::A => "Artistic",
            Riasec::S => "Social",
            Riasec::E => "Enterprising",
            Riasec::C => "Conventional",
        }
    }

    /// Short phrase used in match explanations.
    pub fn description(self) -> &'static str {
        match self {
            Riasec::R => "hands-on, practical",
            Riasec::I => "analytical, research-oriented",
            Riasec::A => "creative, expressive",
            Riasec::S => "helping, people-focused",
            Riasec::E => "leadership, business-minded",
            Riasec::C => "organized, detail-oriented",
        }
    }
}

impl fmt::Display for Riasec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Parses a profile string such as `"IA"` into ordered letters.
/// Unrecognised characters (spaces, commas, brackets) are dropped.
pub fn parse_riasec_profile(raw: &str) -> Vec<Riasec> {
    raw.chars().filter_map(Riasec::from_char).collect()
}

/// Integer percentage per RIASEC letter. Every letter is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityVector(BTreeMap<Riasec, u32>);

impl PersonalityVector {
    pub fn zero() -> Self {
        Self(Riasec::ALL.iter().map(|&l| (l, 0)).collect())
    }

    pub fn from_pairs(pairs: &[(Riasec, u32)]) -> Self {
        let mut vector = Self::zero();
        for &(letter, pct) in pairs {
            vector.0.insert(letter, pct);
        }
        vector
    }

    pub fn get(&self, letter: Riasec) -> u32 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Riasec, u32)> + '_ {
        self.0.iter().map(|(&l, &v)| (l, v))
    }

    /// Letter with the highest percentage; ties resolve to canonical order.
    pub fn dominant(&self) -> Option<Riasec> {
        let mut best: Option<(Riasec, u32)> = None;
        for (letter, pct) in self.iter() {
            if pct > 0 && best.map_or(true, |(_, b)| pct > b) {
                best = Some((letter, pct));
            }
        }
        best.map(|(l, _)| l)
    }
}

impl Default for PersonalityVector {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_skips_unknown_characters() {
        assert_eq!(parse_riasec_profile("I, a?x"), vec![Riasec::I, Riasec::A]);
        assert!(parse_riasec_profile("[]").is_empty());
    }

    #[test]
    fn test_zero_vector_has_all_letters() {
        let v = PersonalityVector::zero();
        assert_eq!(v.iter().count(), 6);
        assert_eq!(v.total(), 0);
        assert_eq!(v.dominant(), None);
    }

    #[test]
    fn test_serializes_as_letter_map() {
        let v = PersonalityVector::from_pairs(&[(Riasec::I, 50)]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["I"], 50);
        assert_eq!(json["C"], 0);
    }

    #[test]
    fn test_dominant_letter() {
        let v = PersonalityVector::from_pairs(&[(Riasec::A, 30), (Riasec::S, 40)]);
        assert_eq!(v.dominant(), Some(Riasec::S));
    }
}
