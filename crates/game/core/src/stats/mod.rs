//! Stat System
//!
//! ```text
//! [ Raw base attributes (record) ]
//!      ↓  convert_stat
//! [ Converted stats (StatBlock) ]
//!      ↓  modifier
//! [ Modifiers (StatBlock) ]
//!      ↓
//! [ Hit die / AC / initiative / movement ]
//! ```
//!
//! All layers are pure functions; nothing here reads state beyond its arguments.

pub mod converter;
pub mod kind;
pub mod movement;

pub use converter::{
    AC_SPEED_MODIFIER_CAP, DerivedStats, HitDie, StatConverter, convert, convert_stat, modifier,
};
pub use kind::{StatBlock, StatKind};
pub use movement::{MovementWeightRule, movement_feet, weight_band_modifier};
