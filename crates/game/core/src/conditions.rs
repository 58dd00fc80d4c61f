//! Status conditions carried by roster entries.

use arrayvec::ArrayVec;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A status condition tag.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Condition {
    Poisoned,
    Paralyzed,
    Burned,
    Frozen,
    Asleep,
    Confused,
    Bound,
    Blinded,
    Deafened,
    Exhausted,
    Frightened,
    Incapacitated,
    Invisible,
    Petrified,
    Prone,
    Restrained,
    Stunned,
    Unconscious,
}

impl Condition {
    pub const COUNT: usize = 18;

    /// Capitalised name for display (`"Poisoned"`).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Poisoned => "Poisoned",
            Self::Paralyzed => "Paralyzed",
            Self::Burned => "Burned",
            Self::Frozen => "Frozen",
            Self::Asleep => "Asleep",
            Self::Confused => "Confused",
            Self::Bound => "Bound",
            Self::Blinded => "Blinded",
            Self::Deafened => "Deafened",
            Self::Exhausted => "Exhausted",
            Self::Frightened => "Frightened",
            Self::Incapacitated => "Incapacitated",
            Self::Invisible => "Invisible",
            Self::Petrified => "Petrified",
            Self::Prone => "Prone",
            Self::Restrained => "Restrained",
            Self::Stunned => "Stunned",
            Self::Unconscious => "Unconscious",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Poisoned => "Takes damage over time",
            Self::Paralyzed => "May not act, reduced speed",
            Self::Burned => "Takes damage over time, reduced attack",
            Self::Frozen => "Cannot act until thawed",
            Self::Asleep => "Cannot act until awakened",
            Self::Confused => "May attack self or miss",
            Self::Bound => "Cannot move, takes damage",
            Self::Blinded => "Disadvantage on attacks",
            Self::Deafened => "Cannot hear, may miss verbal cues",
            Self::Exhausted => "Disadvantage on ability checks",
            Self::Frightened => "Disadvantage on attacks and ability checks",
            Self::Incapacitated => "Cannot take actions or reactions",
            Self::Invisible => "Advantage on attacks, others have disadvantage",
            Self::Petrified => "Turned to stone, cannot act",
            Self::Prone => "Disadvantage on attacks, others have advantage",
            Self::Restrained => "Speed 0, disadvantage on attacks",
            Self::Stunned => "Cannot act, others have advantage",
            Self::Unconscious => "Cannot act, others have advantage",
        }
    }
}

/// Active conditions with set semantics, in the order they were applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConditionSet {
    active: ArrayVec<Condition, { Condition::COUNT }>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the condition was already active.
    pub fn insert(&mut self, condition: Condition) -> bool {
        if self.contains(condition) {
            return false;
        }
        // Capacity equals the number of distinct conditions, so this cannot overflow.
        self.active.push(condition);
        true
    }

    /// Returns `false` if the condition was not active.
    pub fn remove(&mut self, condition: Condition) -> bool {
        match self.active.iter().position(|&c| c == condition) {
            Some(idx) => {
                self.active.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.active.contains(&condition)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        self.active.iter().copied()
    }

    /// Conditions that are not currently applied, in catalog order.
    pub fn available(&self) -> Vec<Condition> {
        Condition::iter().filter(|c| !self.contains(*c)).collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
