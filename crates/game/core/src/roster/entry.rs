//! A leveled, mutable instance of a creature in the party.

use std::sync::Arc;

use crate::conditions::{Condition, ConditionSet};
use crate::config::PocketConfig;
use crate::env::{RngOracle, compute_seed, draw};
use crate::personality::Personality;
use crate::record::{AttributeRecord, LevelGatedAbility, RecordId};
use crate::stats::{MovementWeightRule, StatBlock, StatConverter, StatKind, modifier, movement_feet};
use crate::tables::{
    Category, EffectivenessProfile, effective_tier, experience_to_next, level_for_experience,
    proficiency_bonus,
};

use super::error::{EntryError, MoveSetError};
use super::experience::{ExperienceOutcome, LevelMessage};
use super::moves::{MoveSet, unlocked_at};

/// Penalty applied to a stat the personality reduces.
pub const REDUCED_STAT_PENALTY: i32 = -2;

/// Scales `value` by `(10000 + bp) / 10000`, flooring, never below 1.
pub fn apply_jitter(value: u32, bp: i32) -> u32 {
    let scaled = value as i64 * (10_000 + bp as i64) / 10_000;
    u32::try_from(scaled.max(1)).unwrap_or(u32::MAX)
}

/// Roster member. Fields are private so the level/HP/move invariants hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    id: RecordId,
    name: String,
    record: Arc<AttributeRecord>,
    level: u8,
    current_hp: i32,
    max_hp: i32,
    actual_size: u32,
    actual_weight: u32,
    unlocked: Vec<LevelGatedAbility>,
    moves: MoveSet,
    base_stats: StatBlock,
    current_stats: StatBlock,
    effectiveness: EffectivenessProfile,
    #[cfg_attr(feature = "serde", serde(default))]
    conditions: ConditionSet,
    #[cfg_attr(feature = "serde", serde(default))]
    personality: Personality,
    #[cfg_attr(feature = "serde", serde(default))]
    experience: u32,
    created_at_ms: i64,
}

impl RosterEntry {
    // ===== identity =====

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&self) -> &Arc<AttributeRecord> {
        &self.record
    }

    pub fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Re-establishes the entry invariants on a value that did not come from
    /// [`EntryFactory`], such as one read back from storage.
    ///
    /// Level is re-derived from experience, unlocks from the record, selected
    /// moves are cut down to what is unlocked, and HP is clamped into
    /// `[0, max_hp]`.
    pub fn validated(mut self) -> Result<Self, EntryError> {
        if self.id != self.record.id {
            return Err(EntryError::RecordMismatch {
                entry: self.id,
                record: self.record.id,
            });
        }
        if self.max_hp < 0 {
            return Err(EntryError::NegativeMaxHp {
                id: self.id,
                max_hp: self.max_hp,
            });
        }

        self.level = level_for_experience(self.experience);
        self.unlocked = unlocked_at(&self.record.abilities, self.level);
        self.moves = self.moves.restricted_to(&self.unlocked);
        self.current_hp = self.current_hp.clamp(0, self.max_hp);
        Ok(self)
    }

    // ===== progression =====

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Gap to the next level's threshold; 0 at the level cap.
    pub fn experience_to_next(&self) -> u32 {
        experience_to_next(self.level, self.experience)
    }

    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    /// Tier that gates ability unlocks: `ceil(level / 5)`.
    pub fn effective_tier(&self) -> u32 {
        effective_tier(self.level as u32)
    }

    /// Adds `delta` (possibly negative) to accumulated experience and re-derives
    /// the level. Experience floors at 0; level stays within 1..=20.
    pub fn apply_experience(&mut self, delta: i64) -> ExperienceOutcome {
        let previous_level = self.level;
        let previous_bonus = self.proficiency_bonus();

        let total = (self.experience as i64).saturating_add(delta);
        self.experience = total.clamp(0, u32::MAX as i64) as u32;
        self.level = level_for_experience(self.experience);

        if self.level != previous_level {
            self.refresh_unlocked();
        }

        let leveled_up = self.level > previous_level;
        let leveled_down = self.level < previous_level;
        let evolution_ready = leveled_up && self.evolution_level_reached();
        let message = match (leveled_up, leveled_down) {
            (true, _) if evolution_ready => LevelMessage::EvolutionReached,
            (true, _) => LevelMessage::LevelUp,
            (_, true) => LevelMessage::LevelDown,
            _ => LevelMessage::ExperienceUpdated,
        };

        ExperienceOutcome {
            previous_level,
            level: self.level,
            leveled_up,
            leveled_down,
            proficiency_changed: self.proficiency_bonus() != previous_bonus,
            evolution_ready,
            message,
        }
    }

    /// Whether the record has an evolution and this entry's level has reached it.
    pub fn evolution_level_reached(&self) -> bool {
        self.record
            .evolution
            .is_some_and(|link| self.level as u32 >= link.roster_level())
    }

    fn refresh_unlocked(&mut self) {
        self.unlocked = unlocked_at(&self.record.abilities, self.level);
        self.moves.retain_unlocked(&self.unlocked);
    }

    // ===== hit points =====

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Sets HP, clamped into `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: i32) {
        self.current_hp = hp.clamp(0, self.max_hp);
    }

    pub fn damage(&mut self, amount: i32) {
        self.set_hp(self.current_hp.saturating_sub(amount.max(0)));
    }

    pub fn heal(&mut self, amount: i32) {
        self.set_hp(self.current_hp.saturating_add(amount.max(0)));
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    // ===== moves =====

    pub fn unlocked_abilities(&self) -> &[LevelGatedAbility] {
        &self.unlocked
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn add_move(&mut self, name: &str) -> Result<(), MoveSetError> {
        self.moves.add(name, &self.unlocked)
    }

    pub fn remove_move(&mut self, name: &str) -> bool {
        self.moves.remove(name)
    }

    pub fn set_moves(&mut self, names: &[String]) -> Result<(), MoveSetError> {
        self.moves.replace(names, &self.unlocked)
    }

    // ===== conditions =====

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    pub fn add_condition(&mut self, condition: Condition) -> bool {
        self.conditions.insert(condition)
    }

    pub fn remove_condition(&mut self, condition: Condition) -> bool {
        self.conditions.remove(condition)
    }

    // ===== physical traits and stats =====

    pub fn actual_size(&self) -> u32 {
        self.actual_size
    }

    pub fn actual_weight(&self) -> u32 {
        self.actual_weight
    }

    pub fn base_stats(&self) -> &StatBlock {
        &self.base_stats
    }

    pub fn current_stats(&self) -> &StatBlock {
        &self.current_stats
    }

    pub fn set_current_stat(&mut self, kind: StatKind, value: i32) {
        self.current_stats.set(kind, value);
    }

    pub fn vulnerable_to(&self) -> &[Category] {
        &self.effectiveness.vulnerable_to
    }

    pub fn resistant_to(&self) -> &[Category] {
        &self.effectiveness.resistant_to
    }

    /// Modifier of the current value of `kind`.
    pub fn stat_modifier(&self, kind: StatKind) -> i32 {
        modifier(self.current_stats.get(kind))
    }

    /// +proficiency if the personality amplifies `kind`, −2 if it reduces it, else 0.
    pub fn stat_proficiency_bonus(&self, kind: StatKind) -> i32 {
        if self.personality.amplifies(kind) {
            self.proficiency_bonus()
        } else if self.personality.reduces(kind) {
            REDUCED_STAT_PENALTY
        } else {
            0
        }
    }

    /// Uncapped: `10 + speed modifier + speed proficiency adjustment`.
    pub fn armor_class(&self) -> i32 {
        10 + self.stat_modifier(StatKind::Speed) + self.stat_proficiency_bonus(StatKind::Speed)
    }

    pub fn initiative(&self) -> i32 {
        self.stat_modifier(StatKind::Speed) + self.stat_proficiency_bonus(StatKind::Speed)
    }

    /// Movement from the current Speed stat and the jittered weight.
    pub fn movement_feet(&self, rule: MovementWeightRule) -> i32 {
        movement_feet(self.current_stats.speed, self.actual_weight, rule)
    }
}

/// Builds roster entries from records with injected randomness.
///
/// Every draw is keyed by `(roster_seed, nonce, record id, draw context)`, so the
/// same inputs always produce the same entry.
pub struct EntryFactory<'a> {
    config: &'a PocketConfig,
    rng: &'a dyn RngOracle,
    roster_seed: u64,
}

impl<'a> EntryFactory<'a> {
    pub fn new(config: &'a PocketConfig, rng: &'a dyn RngOracle, roster_seed: u64) -> Self {
        Self {
            config,
            rng,
            roster_seed,
        }
    }

    fn jitter_bp(&self, nonce: u64, record: RecordId, context: u32) -> i32 {
        let (min, max) = self.config.jitter_bounds();
        let seed = compute_seed(self.roster_seed, nonce, record.0, context);
        self.rng.range_i32(seed, min, max)
    }

    /// A fresh level-1 entry. `personality: None` draws one from the catalog.
    pub fn create(
        &self,
        record: Arc<AttributeRecord>,
        personality: Option<Personality>,
        nonce: u64,
        created_at_ms: i64,
    ) -> RosterEntry {
        let id = record.id;
        let personality = personality
            .unwrap_or_else(|| Personality::random(self.rng, self.roster_seed, nonce, id));
        let actual_size = apply_jitter(record.height, self.jitter_bp(nonce, id, draw::SIZE_JITTER));
        let actual_weight =
            apply_jitter(record.weight, self.jitter_bp(nonce, id, draw::WEIGHT_JITTER));

        let max_hp = record.base(StatKind::Hp).max(0) / 3;
        let level = PocketConfig::MIN_LEVEL;
        let unlocked = unlocked_at(&record.abilities, level);
        let moves = MoveSet::initial(&unlocked);
        let base_stats = StatConverter::convert_stats(&record);
        let effectiveness =
            EffectivenessProfile::resolve(&record.categories, self.config.effectiveness_policy);

        RosterEntry {
            id,
            name: record.name.clone(),
            level,
            current_hp: max_hp,
            max_hp,
            actual_size,
            actual_weight,
            unlocked,
            moves,
            base_stats,
            current_stats: base_stats,
            effectiveness,
            conditions: ConditionSet::new(),
            personality,
            experience: 0,
            created_at_ms,
            record,
        }
    }

    /// Entry for the evolved form. Keeps personality, level, experience, creation
    /// time, conditions, and any selected moves the new form still has unlocked.
    /// HP is restored to the new maximum.
    pub fn evolve(&self, from: &RosterEntry, target: Arc<AttributeRecord>, nonce: u64) -> RosterEntry {
        let mut evolved = self.create(
            target,
            Some(from.personality.clone()),
            nonce,
            from.created_at_ms,
        );
        evolved.level = from.level;
        evolved.experience = from.experience;
        evolved.conditions = from.conditions.clone();
        evolved.unlocked = unlocked_at(&evolved.record.abilities, evolved.level);
        evolved.moves = from.moves.restricted_to(&evolved.unlocked);
        evolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, PcgRng};

    fn charmander() -> Arc<AttributeRecord> {
        AttributeRecord::new(4, "charmander", 6, 85)
            .with_attribute("hp", 39)
            .with_attribute("attack", 52)
            .with_attribute("defense", 43)
            .with_attribute("special-attack", 60)
            .with_attribute("special-defense", 50)
            .with_attribute("speed", 65)
            .with_category("fire")
            .with_ability("scratch", 1)
            .with_ability("growl", 1)
            .with_ability("ember", 4)
            .with_ability("smokescreen", 8)
            .with_ability("dragon-breath", 12)
            .with_ability("fire-fang", 17)
            .with_evolution(16, 5)
            .into_shared()
    }

    fn charmeleon() -> Arc<AttributeRecord> {
        AttributeRecord::new(5, "charmeleon", 11, 190)
            .with_attribute("hp", 58)
            .with_attribute("speed", 80)
            .with_category("fire")
            .with_ability("scratch", 1)
            .with_ability("ember", 1)
            .with_ability("smokescreen", 12)
            .with_evolution(36, 6)
            .into_shared()
    }

    fn entry(personality: Personality) -> RosterEntry {
        let config = PocketConfig::default();
        EntryFactory::new(&config, &PcgRng, 99).create(charmander(), Some(personality), 0, 1_000)
    }

    #[test]
    fn creation_sets_level_one_defaults() {
        let e = entry(Personality::neutral());
        assert_eq!(e.level(), 1);
        assert_eq!(e.max_hp(), 13);
        assert_eq!(e.current_hp(), 13);
        assert_eq!(e.experience(), 0);
        assert_eq!(e.experience_to_next(), 300);
        assert_eq!(e.proficiency_bonus(), 2);
        assert_eq!(e.unlocked_abilities().len(), 3);
        assert_eq!(e.moves().iter().collect::<Vec<_>>(), ["scratch", "growl", "ember"]);
        assert_eq!(e.base_stats(), e.current_stats());
        assert_eq!(e.current_stats().speed, 11);
        assert_eq!(e.vulnerable_to(), &[Category::Water, Category::Ground, Category::Rock]);
        assert!(e.conditions().is_empty());
        assert_eq!(e.created_at_ms(), 1_000);
    }

    #[test]
    fn jitter_stays_in_range_and_never_below_one() {
        let config = PocketConfig::default();
        let tiny = AttributeRecord::new(1, "tiny", 1, 1).into_shared();
        for seed in 0..200 {
            let e = EntryFactory::new(&config, &PcgRng, seed).create(tiny.clone(), None, seed, 0);
            assert!(e.actual_size() >= 1);
            assert!(e.actual_weight() >= 1);
        }
        for seed in 0..200 {
            let e = EntryFactory::new(&config, &PcgRng, seed).create(charmander(), None, 0, 0);
            assert!((5..=6).contains(&e.actual_size()));
            assert!((80..=90).contains(&e.actual_weight()));
        }
        assert_eq!(apply_jitter(1000, -500), 950);
        assert_eq!(apply_jitter(1000, 599), 1059);
        assert_eq!(apply_jitter(u32::MAX, 10_000), u32::MAX);
        assert_eq!(apply_jitter(50, -20_000), 1);
    }

    #[test]
    fn creation_is_deterministic_for_a_seed() {
        let config = PocketConfig::default();
        let factory = EntryFactory::new(&config, &PcgRng, 1234);
        assert_eq!(
            factory.create(charmander(), None, 3, 0),
            factory.create(charmander(), None, 3, 0)
        );
        let fixed = PocketConfig::default();
        let e = EntryFactory::new(&fixed, &FixedRng(0), 0).create(charmander(), None, 0, 0);
        assert_eq!(e.personality().name, "Hardy");
    }

    #[test]
    fn experience_walks_levels_both_ways() {
        let mut e = entry(Personality::neutral());

        let up = e.apply_experience(300);
        assert_eq!((up.level, up.leveled_up, up.proficiency_changed), (2, true, false));
        assert_eq!(up.message, LevelMessage::LevelUp);

        let up = e.apply_experience(13_700);
        assert_eq!(up.level, 6);
        assert!(up.proficiency_changed);
        assert_eq!(e.unlocked_abilities().len(), 4);
        // New unlocks are never auto-selected.
        assert_eq!(e.moves().len(), 3);

        let down = e.apply_experience(-14_000);
        assert_eq!((down.level, down.leveled_down), (1, true));
        assert_eq!(down.message, LevelMessage::LevelDown);

        let floor = e.apply_experience(-50);
        assert_eq!(e.experience(), 0);
        assert_eq!(floor.message, LevelMessage::ExperienceUpdated);
        assert!(!floor.level_changed());

        e.apply_experience(1_000_000);
        assert_eq!(e.level(), 20);
        assert_eq!(e.experience_to_next(), 0);
    }

    #[test]
    fn level_down_drops_locked_moves() {
        let mut e = entry(Personality::neutral());
        e.apply_experience(14_000);
        e.remove_move("growl");
        e.add_move("smokescreen").unwrap();
        e.apply_experience(-14_000);
        assert!(!e.moves().contains("smokescreen"));
        assert_eq!(e.moves().len(), 2);
    }

    #[test]
    fn evolution_message_on_reaching_level() {
        let mut e = entry(Personality::neutral());
        // Source level 16 is roster level 4.
        let outcome = e.apply_experience(2_700);
        assert_eq!(outcome.level, 4);
        assert!(outcome.evolution_ready);
        assert_eq!(outcome.message, LevelMessage::EvolutionReached);
        assert_eq!(outcome.message.text(), "Reached evolution!");
    }

    #[test]
    fn hp_is_clamped() {
        let mut e = entry(Personality::neutral());
        e.set_hp(100);
        assert_eq!(e.current_hp(), e.max_hp());
        e.damage(50);
        assert_eq!(e.current_hp(), 0);
        assert!(e.is_fainted());
        e.heal(5);
        assert_eq!(e.current_hp(), 5);
        e.set_hp(-3);
        assert_eq!(e.current_hp(), 0);
    }

    #[test]
    fn speed_personality_shifts_ac_and_initiative() {
        let neutral = entry(Personality::neutral());
        // Speed 11 → modifier 0.
        assert_eq!(neutral.armor_class(), 10);
        assert_eq!(neutral.initiative(), 0);

        let timid = entry(Personality::by_name("Timid").unwrap());
        assert_eq!(timid.armor_class(), 12);
        assert_eq!(timid.initiative(), 2);
        assert_eq!(timid.stat_proficiency_bonus(StatKind::Attack), -2);

        let brave = entry(Personality::by_name("Brave").unwrap());
        assert_eq!(brave.armor_class(), 8);
        assert_eq!(brave.initiative(), -2);
    }

    #[test]
    fn movement_uses_current_speed() {
        let mut e = entry(Personality::neutral());
        let before = e.movement_feet(MovementWeightRule::WholeUnits);
        // Speed 11, weight ~8 units → +1 band, adjusted 12 → 30 ft.
        assert_eq!(before, 30);
        e.set_current_stat(StatKind::Speed, 3);
        assert_eq!(e.movement_feet(MovementWeightRule::WholeUnits), 10);
    }

    #[test]
    fn conditions_have_set_semantics() {
        let mut e = entry(Personality::neutral());
        assert!(e.add_condition(Condition::Burned));
        assert!(!e.add_condition(Condition::Burned));
        assert!(e.remove_condition(Condition::Burned));
        assert!(!e.remove_condition(Condition::Burned));
    }

    #[test]
    fn evolve_keeps_progress_and_compatible_moves() {
        let config = PocketConfig::default();
        let factory = EntryFactory::new(&config, &PcgRng, 5);
        let mut e = factory.create(charmander(), Some(Personality::by_name("Jolly").unwrap()), 0, 77);
        e.apply_experience(2_700);
        e.add_condition(Condition::Asleep);
        e.set_hp(1);

        let evolved = factory.evolve(&e, charmeleon(), 1);
        assert_eq!(evolved.id(), RecordId(5));
        assert_eq!(evolved.level(), 4);
        assert_eq!(evolved.experience(), 2_700);
        assert_eq!(evolved.personality().name, "Jolly");
        assert_eq!(evolved.created_at_ms(), 77);
        assert_eq!(evolved.current_hp(), evolved.max_hp());
        assert_eq!(evolved.max_hp(), 19);
        assert!(evolved.conditions().contains(Condition::Asleep));
        // growl does not exist on the evolved form.
        assert_eq!(evolved.moves().iter().collect::<Vec<_>>(), ["scratch", "ember"]);
    }

    #[test]
    fn validation_repairs_out_of_range_state() {
        let mut e = entry(Personality::neutral());
        e.apply_experience(300);
        e.level = 99;
        e.current_hp = 999;
        e.unlocked = charmander().abilities.clone();
        e.moves = MoveSet::new();
        e.add_move("fire-fang").unwrap();
        e.add_move("scratch").unwrap();

        let e = e.validated().unwrap();
        assert_eq!(e.level(), 2);
        assert_eq!(e.current_hp(), e.max_hp());
        assert_eq!(e.unlocked_abilities().len(), 3);
        assert_eq!(e.moves().iter().collect::<Vec<_>>(), ["scratch"]);

        let mut low = entry(Personality::neutral());
        low.current_hp = -4;
        assert_eq!(low.validated().unwrap().current_hp(), 0);
    }

    #[test]
    fn validation_rejects_unrepairable_entries() {
        let mut e = entry(Personality::neutral());
        e.id = RecordId(5);
        assert_eq!(
            e.validated(),
            Err(EntryError::RecordMismatch {
                entry: RecordId(5),
                record: RecordId(4),
            })
        );

        let mut e = entry(Personality::neutral());
        e.max_hp = -1;
        assert!(matches!(e.validated(), Err(EntryError::NegativeMaxHp { .. })));

        let fresh = entry(Personality::neutral());
        assert_eq!(fresh.clone().validated().unwrap(), fresh);
    }
}
