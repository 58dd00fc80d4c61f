//! Level progression tables: cumulative experience thresholds, proficiency bonus,
//! and the level → tier mapping that gates abilities.

use crate::config::PocketConfig;

/// Cumulative experience required to reach each level, index 0 = level 1.
pub const EXPERIENCE_THRESHOLDS: [u32; PocketConfig::MAX_LEVEL as usize] = [
    0, 300, 900, 2_700, 6_500, 14_000, 23_000, 34_000, 48_000, 64_000, 85_000, 100_000, 120_000,
    140_000, 165_000, 195_000, 225_000, 265_000, 305_000, 355_000,
];

/// Cumulative experience needed to reach `level` (clamped into 1..=20).
pub const fn threshold(level: u8) -> u32 {
    let level = clamp_level(level);
    EXPERIENCE_THRESHOLDS[(level - 1) as usize]
}

/// Highest level whose threshold is at or below `experience`.
pub fn level_for_experience(experience: u32) -> u8 {
    EXPERIENCE_THRESHOLDS
        .iter()
        .rposition(|&needed| experience >= needed)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(PocketConfig::MIN_LEVEL)
}

/// Experience still missing to reach the level after `level`; 0 at the cap.
pub const fn experience_to_next(level: u8, experience: u32) -> u32 {
    let level = clamp_level(level);
    if level >= PocketConfig::MAX_LEVEL {
        return 0;
    }
    threshold(level + 1).saturating_sub(experience)
}

/// Proficiency bonus: +2 (1–4), +3 (5–8), +4 (9–12), +5 (13–16), +6 (17 and up).
pub const fn proficiency_bonus(level: u8) -> i32 {
    match level {
        0..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// Tier for a level on either scale: `ceil(level / 5)`.
pub const fn effective_tier(level: u32) -> u32 {
    level.div_ceil(5)
}

pub const fn clamp_level(level: u8) -> u8 {
    if level < PocketConfig::MIN_LEVEL {
        PocketConfig::MIN_LEVEL
    } else if level > PocketConfig::MAX_LEVEL {
        PocketConfig::MAX_LEVEL
    } else {
        level
    }
}
