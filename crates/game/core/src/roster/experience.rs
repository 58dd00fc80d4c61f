//! Result of an experience change on a roster entry.

/// Message shown to the player after an experience change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelMessage {
    LevelUp,
    /// Level-up that reached the evolution level.
    EvolutionReached,
    LevelDown,
    ExperienceUpdated,
}

impl LevelMessage {
    pub const fn text(self) -> &'static str {
        match self {
            Self::LevelUp => "Level Up!",
            Self::EvolutionReached => "Reached evolution!",
            Self::LevelDown => "Level Down!",
            Self::ExperienceUpdated => "Experience updated",
        }
    }
}

/// What changed after [`RosterEntry::apply_experience`](super::RosterEntry::apply_experience).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceOutcome {
    pub previous_level: u8,
    pub level: u8,
    pub leveled_up: bool,
    pub leveled_down: bool,
    pub proficiency_changed: bool,
    /// Set only on a level-up that reached the record's evolution level.
    pub evolution_ready: bool,
    pub message: LevelMessage,
}

impl ExperienceOutcome {
    pub const fn level_changed(&self) -> bool {
        self.leveled_up || self.leveled_down
    }
}
