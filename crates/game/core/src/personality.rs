//! Personality traits: a named pairing that amplifies one stat and reduces another.

use std::fmt;

use crate::env::{RngOracle, compute_seed, draw};
use crate::record::RecordId;
use crate::stats::StatKind;

use StatKind::{Attack as Atk, Defense as Def, SpecialAttack as SpAtk, SpecialDefense as SpDef, Speed as Spd};

/// Personality assigned to a roster entry at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub amplified: Option<StatKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reduced: Option<StatKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

struct CatalogEntry {
    name: &'static str,
    amplified: Option<StatKind>,
    reduced: Option<StatKind>,
    description: &'static str,
}

const fn neutral(name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        amplified: None,
        reduced: None,
        description,
    }
}

const fn paired(
    name: &'static str,
    amplified: StatKind,
    reduced: StatKind,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        name,
        amplified: Some(amplified),
        reduced: Some(reduced),
        description,
    }
}

const CATALOG: [CatalogEntry; 25] = [
    neutral("Hardy", "Neutral nature"),
    paired("Lonely", Atk, Def, "Loves to eat"),
    paired("Brave", Atk, Spd, "Often dozes off"),
    paired("Adamant", Atk, SpAtk, "Sturdy body"),
    paired("Naughty", Atk, SpDef, "Likes to fight"),
    paired("Bold", Def, Atk, "Proud of its power"),
    neutral("Docile", "Sturdy body"),
    paired("Relaxed", Def, Spd, "Likes to relax"),
    paired("Impish", Def, SpAtk, "Proud of its power"),
    paired("Lax", Def, SpDef, "Loves to eat"),
    paired("Timid", Spd, Atk, "Likes to run"),
    paired("Hasty", Spd, Def, "Somewhat of a clown"),
    neutral("Serious", "Strong willed"),
    paired("Jolly", Spd, SpAtk, "Good perseverance"),
    paired("Naive", Spd, SpDef, "Likes to thrash about"),
    paired("Modest", SpAtk, Atk, "Loves to eat"),
    paired("Mild", SpAtk, Def, "Proud of its power"),
    paired("Quiet", SpAtk, Spd, "Sturdy body"),
    neutral("Bashful", "Somewhat stubborn"),
    paired("Rash", SpAtk, SpDef, "Likes to run"),
    paired("Calm", SpDef, Atk, "Strong willed"),
    paired("Gentle", SpDef, Def, "Loves to eat"),
    paired("Careful", SpDef, SpAtk, "Often lost in thought"),
    neutral("Quirky", "Mischievous"),
    paired("Sassy", SpDef, Spd, "Somewhat vain"),
];

impl Personality {
    pub const CATALOG_SIZE: usize = CATALOG.len();

    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.to_owned(),
            amplified: entry.amplified,
            reduced: entry.reduced,
            description: entry.description.to_owned(),
        }
    }

    /// The default personality: no amplified or reduced stat.
    pub fn neutral() -> Self {
        Self::from_entry(&CATALOG[0])
    }

    /// All catalog personalities in catalog order.
    pub fn catalog() -> impl Iterator<Item = Personality> {
        CATALOG.iter().map(Self::from_entry)
    }

    /// Case-insensitive catalog lookup.
    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim();
        CATALOG
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(Self::from_entry)
    }

    /// Uniform draw from the catalog.
    pub fn random(rng: &dyn RngOracle, roster_seed: u64, nonce: u64, record: RecordId) -> Self {
        let seed = compute_seed(roster_seed, nonce, record.0, draw::PERSONALITY);
        let index = rng.pick(seed, CATALOG.len()).unwrap_or(0);
        Self::from_entry(&CATALOG[index])
    }

    pub fn is_neutral(&self) -> bool {
        self.amplified.is_none() && self.reduced.is_none()
    }

    pub fn amplifies(&self, stat: StatKind) -> bool {
        self.amplified == Some(stat)
    }

    pub fn reduces(&self, stat: StatKind) -> bool {
        self.reduced == Some(stat)
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amplified, self.reduced) {
            (Some(up), Some(down)) => write!(f, "{} (+{up} / -{down})", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, PcgRng};

    #[test]
    fn catalog_has_five_neutral_entries() {
        let neutral: Vec<String> = Personality::catalog()
            .filter(Personality::is_neutral)
            .map(|p| p.name)
            .collect();
        assert_eq!(neutral, vec!["Hardy", "Docile", "Serious", "Bashful", "Quirky"]);
        assert_eq!(Personality::catalog().count(), 25);
    }

    #[test]
    fn paired_entries_never_touch_hp_or_self_cancel() {
        for p in Personality::catalog().filter(|p| !p.is_neutral()) {
            assert_ne!(p.amplified, p.reduced, "{}", p.name);
            assert!(!p.amplifies(StatKind::Hp) && !p.reduces(StatKind::Hp));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let modest = Personality::by_name("modest").unwrap();
        assert!(modest.amplifies(StatKind::SpecialAttack));
        assert!(modest.reduces(StatKind::Attack));
        assert!(Personality::by_name("grumpy").is_none());
    }

    #[test]
    fn random_draw_is_reproducible() {
        let a = Personality::random(&PcgRng, 7, 3, RecordId(25));
        let b = Personality::random(&PcgRng, 7, 3, RecordId(25));
        assert_eq!(a, b);
        assert_eq!(Personality::random(&FixedRng(24), 0, 0, RecordId(1)).name, "Sassy");
    }

    #[test]
    fn display_shows_the_pairing() {
        assert_eq!(
            Personality::by_name("Jolly").unwrap().to_string(),
            "Jolly (+Speed / -Sp.Atk)"
        );
        assert_eq!(Personality::neutral().to_string(), "Hardy");
    }
}
