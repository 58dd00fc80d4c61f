//! Active move selection: at most four names, each unlocked, no duplicates.

use arrayvec::ArrayVec;

use crate::config::PocketConfig;
use crate::record::LevelGatedAbility;
use crate::tables::effective_tier;

use super::error::MoveSetError;

/// Whether `ability` is usable by an entry at `level`.
///
/// Both sides are compared on the tier scale: `ceil(unlock / 5) <= ceil(level / 5)`.
pub fn is_unlocked(ability: &LevelGatedAbility, level: u8) -> bool {
    ability.tier() <= effective_tier(level as u32)
}

/// Abilities from `all` unlocked at `level`, in record order.
pub fn unlocked_at(all: &[LevelGatedAbility], level: u8) -> Vec<LevelGatedAbility> {
    all.iter()
        .filter(|ability| is_unlocked(ability, level))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveSet {
    moves: ArrayVec<String, { PocketConfig::MAX_MOVES }>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// First (up to) four unlocked abilities.
    pub fn initial(unlocked: &[LevelGatedAbility]) -> Self {
        let mut set = Self::new();
        for ability in unlocked {
            if set.is_full() {
                break;
            }
            if !set.contains(&ability.name) {
                set.moves.push(ability.name.clone());
            }
        }
        set
    }

    pub fn add(&mut self, name: &str, unlocked: &[LevelGatedAbility]) -> Result<(), MoveSetError> {
        if !unlocked.iter().any(|ability| ability.name == name) {
            return Err(MoveSetError::NotUnlocked(name.to_owned()));
        }
        if self.contains(name) {
            return Err(MoveSetError::AlreadySelected(name.to_owned()));
        }
        self.moves
            .try_push(name.to_owned())
            .map_err(|_| MoveSetError::Full {
                max: PocketConfig::MAX_MOVES,
            })
    }

    /// Returns `false` if the move was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.moves.iter().position(|m| m == name) {
            Some(idx) => {
                self.moves.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replaces the whole selection. Validated as a unit: on error nothing changes.
    pub fn replace(
        &mut self,
        names: &[String],
        unlocked: &[LevelGatedAbility],
    ) -> Result<(), MoveSetError> {
        let mut next = Self::new();
        for name in names {
            next.add(name, unlocked)?;
        }
        *self = next;
        Ok(())
    }

    /// Drops selected moves that are no longer unlocked; never adds.
    pub fn retain_unlocked(&mut self, unlocked: &[LevelGatedAbility]) {
        self.moves
            .retain(|name| unlocked.iter().any(|ability| &ability.name == name));
    }

    /// The selected moves present in `unlocked`, in order, without duplicates.
    pub fn restricted_to(&self, unlocked: &[LevelGatedAbility]) -> Self {
        let mut set = Self::new();
        for name in self.iter() {
            let usable = unlocked.iter().any(|ability| ability.name == name);
            if usable && !set.contains(name) {
                set.moves.push(name.to_owned());
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.moves.iter().any(|m| m == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.moves.is_full()
    }
}
