//! Record → tabletop stat conversion.
//!
//! Pure functions of an [`AttributeRecord`]. Nothing here is stored; callers
//! recompute a [`DerivedStats`] whenever they need to display one.
//!
//! Formulas:
//! - Stat: `floor(base / 10) + 5` (HP included, no special case)
//! - Modifier: `floor((stat - 10) / 2)`
//! - Hit die: by raw HP base, ≤50 d6, ≤100 d8, ≤150 d10, else d12
//! - Armor class: `10 + min(speed modifier, 5)`
//! - Initiative: speed modifier (uncapped)
//! - Movement: see [`movement_feet`]

use std::collections::BTreeMap;

use crate::config::PocketConfig;
use crate::record::AttributeRecord;

use super::kind::{StatBlock, StatKind};
use super::movement::{MovementWeightRule, movement_feet};

/// Largest speed modifier that counts toward the converter's armor class.
pub const AC_SPEED_MODIFIER_CAP: i32 = 5;

/// Converted stat for a raw base attribute.
#[inline]
pub const fn convert_stat(base: i32) -> i32 {
    base.div_euclid(10) + 5
}

/// Ability modifier for a converted stat (floors toward negative infinity).
#[inline]
pub const fn modifier(stat: i32) -> i32 {
    (stat - 10).div_euclid(2)
}

/// Hit die size, banded by the raw HP base attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HitDie {
    D6,
    D8,
    D10,
    D12,
}

impl HitDie {
    pub const fn from_hp_base(hp_base: i32) -> Self {
        if hp_base <= 50 {
            Self::D6
        } else if hp_base <= 100 {
            Self::D8
        } else if hp_base <= 150 {
            Self::D10
        } else {
            Self::D12
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
        }
    }

    pub const fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }
}

/// Read-only tabletop projection of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub stats: StatBlock,
    pub modifiers: StatBlock,
    pub hit_die: HitDie,
    pub movement_feet: i32,
    pub armor_class: i32,
    pub initiative: i32,
    /// Ability names grouped by unlock tier, in record order.
    pub moves_by_tier: BTreeMap<u32, Vec<String>>,
}

impl DerivedStats {
    pub fn stat(&self, kind: StatKind) -> i32 {
        self.stats.get(kind)
    }

    pub fn modifier(&self, kind: StatKind) -> i32 {
        self.modifiers.get(kind)
    }
}

/// Stateless converter parameterised by the movement weight rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatConverter {
    weight_rule: MovementWeightRule,
}

impl StatConverter {
    pub const fn new(weight_rule: MovementWeightRule) -> Self {
        Self { weight_rule }
    }

    pub const fn from_config(config: &PocketConfig) -> Self {
        Self::new(config.movement_weight_rule)
    }

    /// Converted stats for all six canonical stats of `record`.
    pub fn convert_stats(record: &AttributeRecord) -> StatBlock {
        StatBlock::default().map(|kind, _| convert_stat(record.base(kind)))
    }

    pub fn modifiers(stats: &StatBlock) -> StatBlock {
        stats.map(|_, value| modifier(value))
    }

    pub fn convert(&self, record: &AttributeRecord) -> DerivedStats {
        let stats = Self::convert_stats(record);
        let modifiers = Self::modifiers(&stats);
        let speed_modifier = modifiers.speed;

        let mut moves_by_tier: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for ability in &record.abilities {
            moves_by_tier
                .entry(ability.tier())
                .or_default()
                .push(ability.name.clone());
        }

        DerivedStats {
            stats,
            modifiers,
            hit_die: HitDie::from_hp_base(record.base(StatKind::Hp)),
            movement_feet: movement_feet(stats.speed, record.weight, self.weight_rule),
            armor_class: 10 + speed_modifier.min(AC_SPEED_MODIFIER_CAP),
            initiative: speed_modifier,
            moves_by_tier,
        }
    }
}

/// Converts `record` with the default rules.
pub fn convert(record: &AttributeRecord) -> DerivedStats {
    StatConverter::default().convert(record)
}
