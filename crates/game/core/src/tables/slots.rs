//! Energy slot progression (full-caster spell slot table) by roster level.
//!
//! Row = level 1..=20, column = slot tier 1..=9.

use crate::config::PocketConfig;

use super::experience::clamp_level;

pub const SLOT_TIERS: usize = 9;

const ENERGY_SLOTS: [[u8; SLOT_TIERS]; PocketConfig::MAX_LEVEL as usize] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
];

/// Energy slots per tier at `level` (clamped into 1..=20).
pub const fn energy_slots(level: u8) -> [u8; SLOT_TIERS] {
    ENERGY_SLOTS[(clamp_level(level) - 1) as usize]
}

/// Highest slot tier with at least one slot at `level`.
pub fn highest_slot_tier(level: u8) -> usize {
    energy_slots(level)
        .iter()
        .rposition(|&slots| slots > 0)
        .map_or(0, |idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_progression() {
        assert_eq!(energy_slots(1), [2, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(highest_slot_tier(1), 1);
        assert_eq!(highest_slot_tier(5), 3);
        assert_eq!(highest_slot_tier(17), 9);
        assert_eq!(energy_slots(0), energy_slots(1));
    }
}
