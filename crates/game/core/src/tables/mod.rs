//! Static lookup tables: categories and their effectiveness, level progression,
//! and energy slots.

pub mod category;
pub mod effectiveness;
pub mod experience;
pub mod slots;

pub use category::Category;
pub use effectiveness::{
    EffectivenessPolicy, EffectivenessProfile, immune_to, matchup, multiplier, resistant_to,
    vulnerable_to,
};
pub use experience::{
    EXPERIENCE_THRESHOLDS, clamp_level, effective_tier, experience_to_next, level_for_experience,
    proficiency_bonus, threshold,
};
pub use slots::{SLOT_TIERS, energy_slots, highest_slot_tier};
