//! Immutable creature records as supplied by a record source.
//!
//! A record is never mutated after it is fetched. Roster entries hold it behind an
//! [`Arc`] so many entries (and evolutions) can share one copy.

use std::fmt;
use std::sync::Arc;

use crate::stats::StatKind;
use crate::tables::{Category, effective_tier};

/// Unique creature identifier (positive integer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named base attribute with its raw magnitude (0..=255).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttribute {
    /// Raw source name (`"hp"`, `"special-attack"`, ...).
    pub name: String,
    pub base: i32,
    /// Effort weight. Carried through but unused by conversion.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effort: i32,
}

impl BaseAttribute {
    pub fn new(name: impl Into<String>, base: i32) -> Self {
        Self {
            name: name.into(),
            base,
            effort: 0,
        }
    }
}

/// An ability that becomes available at a given level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGatedAbility {
    pub name: String,
    pub unlock_level: u32,
    /// Source tag (game version group the level was taken from).
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: String,
}

impl LevelGatedAbility {
    pub fn new(name: impl Into<String>, unlock_level: u32) -> Self {
        Self {
            name: name.into(),
            unlock_level,
            source: String::new(),
        }
    }

    /// Tier at which this ability unlocks (`ceil(unlock_level / 5)`).
    pub const fn tier(&self) -> u32 {
        effective_tier(self.unlock_level)
    }
}

/// Evolution link: the creature evolves into `target` once its source level is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionLink {
    /// Level in the source game's scale (converted with `ceil(level / 5)`).
    pub level: u32,
    pub target: RecordId,
}

impl EvolutionLink {
    /// Roster level at which the evolution becomes available.
    pub const fn roster_level(&self) -> u32 {
        effective_tier(self.level)
    }
}

/// Immutable source-of-truth data for one creature species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeRecord {
    pub id: RecordId,
    pub name: String,
    /// Height in tenths of a unit.
    pub height: u32,
    /// Weight in tenths of a unit.
    pub weight: u32,
    pub attributes: Vec<BaseAttribute>,
    /// One or two category tags, primary first.
    pub categories: Vec<String>,
    pub base_experience: u32,
    pub abilities: Vec<LevelGatedAbility>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolution: Option<EvolutionLink>,
}

impl AttributeRecord {
    /// Creates a record with no attributes, categories or abilities.
    pub fn new(id: u32, name: impl Into<String>, height: u32, weight: u32) -> Self {
        Self {
            id: RecordId(id),
            name: name.into(),
            height,
            weight,
            attributes: Vec::new(),
            categories: Vec::new(),
            base_experience: 0,
            abilities: Vec::new(),
            sprite: None,
            evolution: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, base: i32) -> Self {
        self.attributes.push(BaseAttribute::new(name, base));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_ability(mut self, name: impl Into<String>, unlock_level: u32) -> Self {
        self.abilities.push(LevelGatedAbility::new(name, unlock_level));
        self
    }

    pub fn with_evolution(mut self, level: u32, target: u32) -> Self {
        self.evolution = Some(EvolutionLink {
            level,
            target: RecordId(target),
        });
        self
    }

    /// Raw base value for a canonical stat; missing attributes read as 0.
    pub fn base(&self, kind: StatKind) -> i32 {
        self.attributes
            .iter()
            .find(|attr| StatKind::from_raw_name(&attr.name) == Some(kind))
            .map(|attr| attr.base)
            .unwrap_or(0)
    }

    /// Parsed category tags in record order; unknown tags are skipped.
    pub fn parsed_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|tag| tag.parse().ok())
            .collect()
    }

    /// Primary (first) category tag, if present and recognised.
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.first().and_then(|tag| tag.parse().ok())
    }

    /// Case-insensitive name comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_stats_default_to_zero() {
        let record = AttributeRecord::new(1, "Sproutling", 7, 69).with_attribute("hp", 45);
        assert_eq!(record.base(StatKind::Hp), 45);
        assert_eq!(record.base(StatKind::Speed), 0);
    }

    #[test]
    fn names_match_case_insensitively() {
        let record = AttributeRecord::new(4, "Charmander", 6, 85);
        assert!(record.matches_name("CHARMANDER"));
        assert!(record.matches_name(" charmander "));
        assert!(!record.matches_name("charmeleon"));
    }

    #[test]
    fn unknown_primary_category_is_none() {
        let record = AttributeRecord::new(1, "x", 1, 1)
            .with_category("shadow")
            .with_category("fire");
        assert_eq!(record.primary_category(), None);
        assert_eq!(record.parsed_categories(), vec![Category::Fire]);
    }

    #[test]
    fn evolution_level_converts_to_roster_level() {
        let record = AttributeRecord::new(4, "Charmander", 6, 85).with_evolution(16, 5);
        let link = record.evolution.unwrap();
        assert_eq!(link.roster_level(), 4);
        assert_eq!(link.target, RecordId(5));
    }
}
