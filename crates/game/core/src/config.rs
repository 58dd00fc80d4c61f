use crate::stats::MovementWeightRule;
use crate::tables::EffectivenessPolicy;

/// Roster rules: hard limits plus the tunable conversion policies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PocketConfig {
    /// Weight banding used by movement on both the converter and roster-entry paths.
    pub movement_weight_rule: MovementWeightRule,
    /// How dual-category records resolve vulnerable/resistant lists.
    pub effectiveness_policy: EffectivenessPolicy,
    /// Lower bound of the size/weight jitter, in basis points (inclusive).
    pub jitter_min_bp: i32,
    /// Upper bound of the size/weight jitter, in basis points (exclusive).
    pub jitter_max_bp: i32,
}

impl PocketConfig {
    // ===== hard limits =====
    pub const MAX_ROSTER_SIZE: usize = 6;
    pub const MAX_MOVES: usize = 4;
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 20;

    // ===== runtime-tunable defaults =====
    /// −5%
    pub const DEFAULT_JITTER_MIN_BP: i32 = -500;
    /// +6% (exclusive)
    pub const DEFAULT_JITTER_MAX_BP: i32 = 600;

    pub fn new() -> Self {
        Self {
            movement_weight_rule: MovementWeightRule::default(),
            effectiveness_policy: EffectivenessPolicy::default(),
            jitter_min_bp: Self::DEFAULT_JITTER_MIN_BP,
            jitter_max_bp: Self::DEFAULT_JITTER_MAX_BP,
        }
    }

    pub fn with_movement_weight_rule(mut self, rule: MovementWeightRule) -> Self {
        self.movement_weight_rule = rule;
        self
    }

    pub fn with_effectiveness_policy(mut self, policy: EffectivenessPolicy) -> Self {
        self.effectiveness_policy = policy;
        self
    }

    /// Jitter bounds with `min < max` guaranteed.
    pub fn jitter_bounds(&self) -> (i32, i32) {
        if self.jitter_min_bp < self.jitter_max_bp {
            (self.jitter_min_bp, self.jitter_max_bp)
        } else {
            (Self::DEFAULT_JITTER_MIN_BP, Self::DEFAULT_JITTER_MAX_BP)
        }
    }
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self::new()
    }
}
