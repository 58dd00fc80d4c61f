//! Tabletop dice and a short history of results.

use std::collections::VecDeque;

use strum::{Display, EnumIter, EnumString};

use crate::env::RngOracle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Die {
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub die: Die,
    pub value: u32,
}

pub fn roll(die: Die, rng: &dyn RngOracle, seed: u64) -> Roll {
    Roll {
        die,
        value: rng.roll_die(seed, die.sides()),
    }
}

/// Most recent rolls, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RollHistory {
    rolls: VecDeque<Roll>,
}

impl RollHistory {
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, roll: Roll) {
        self.rolls.push_front(roll);
        self.rolls.truncate(Self::CAPACITY);
    }

    pub fn latest(&self) -> Option<Roll> {
        self.rolls.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Roll> {
        self.rolls.iter()
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, PcgRng};

    #[test]
    fn rolls_land_on_a_face() {
        for seed in 0..200 {
            let r = roll(Die::D6, &PcgRng, seed);
            assert!((1..=6).contains(&r.value));
        }
        assert_eq!(roll(Die::D20, &FixedRng(19), 0).value, 20);
    }

    #[test]
    fn history_keeps_the_last_ten_newest_first() {
        let mut history = RollHistory::new();
        for value in 1..=12 {
            history.record(Roll { die: Die::D20, value });
        }
        assert_eq!(history.len(), RollHistory::CAPACITY);
        assert_eq!(history.latest().map(|r| r.value), Some(12));
        assert_eq!(history.iter().last().map(|r| r.value), Some(3));
    }

    #[test]
    fn dice_parse_from_labels() {
        assert_eq!("d20".parse::<Die>().unwrap(), Die::D20);
        assert_eq!("D8".parse::<Die>().unwrap(), Die::D8);
        assert_eq!(Die::D12.to_string(), "d12");
    }
}
