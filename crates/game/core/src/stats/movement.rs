//! Movement speed in feet from a speed score and body weight.
//!
//! 1. Base score (already a converted stat, `floor(speed/10) + 5`)
//! 2. Weight band modifier (+1 .. -3)
//! 3. Adjusted score = max(1, base + band)
//! 4. Feet = adjusted × 2.5, rounded half-up to the nearest multiple of 5

/// How a record's raw weight (tenths of a unit) is compared against the weight bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovementWeightRule {
    /// Divide by 10 (integer division) before banding, i.e. band on whole units.
    #[default]
    WholeUnits,
    /// Band the raw tenth-unit value directly.
    RawTenths,
}

impl MovementWeightRule {
    /// Weight value that the band thresholds are compared against.
    pub const fn banded_weight(self, raw_weight: u32) -> u32 {
        match self {
            Self::WholeUnits => raw_weight / 10,
            Self::RawTenths => raw_weight,
        }
    }
}

/// Weight band modifier: <10 → +1, <50 → 0, <150 → −1, <300 → −2, else −3.
pub const fn weight_band_modifier(weight: u32) -> i32 {
    match weight {
        0..10 => 1,
        10..50 => 0,
        50..150 => -1,
        150..300 => -2,
        _ => -3,
    }
}

/// Movement in feet for a converted speed score and raw weight.
pub fn movement_feet(speed_score: i32, raw_weight: u32, rule: MovementWeightRule) -> i32 {
    let band = weight_band_modifier(rule.banded_weight(raw_weight));
    let adjusted = (speed_score + band).max(1);
    // adjusted × 2.5 / 5 = adjusted / 2, rounded half-up
    ((adjusted + 1) / 2) * 5
}
