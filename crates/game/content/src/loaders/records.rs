//! Creature records in the upstream JSON shape.
//!
//! ```json
//! {
//!   "id": 4, "name": "charmander", "height": 6, "weight": 85,
//!   "stats": [{ "base_stat": 39, "effort": 0, "stat": { "name": "hp" } }],
//!   "types": [{ "slot": 1, "type": { "name": "fire" } }],
//!   "base_experience": 62,
//!   "level_up_moves": [{ "name": "ember", "level_learned_at": 4, "version_group": "red-blue" }],
//!   "sprite_path": "4.png",
//!   "evolution": { "level": 16, "evolutionId": 5 }
//! }
//! ```

use std::path::Path;

use pocket_core::{
    AttributeRecord, BaseAttribute, EvolutionLink, LevelGatedAbility, RecordId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNamed {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStat {
    pub base_stat: i32,
    #[serde(default)]
    pub effort: i32,
    pub stat: RawNamed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: RawNamed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMove {
    pub name: String,
    pub level_learned_at: u32,
    #[serde(default)]
    pub version_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvolution {
    pub level: u32,
    #[serde(rename = "evolutionId")]
    pub evolution_id: u32,
}

/// One creature as stored in the bundled dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCreature {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub level_up_moves: Vec<RawMove>,
    #[serde(default)]
    pub sprite_path: Option<String>,
    #[serde(default)]
    pub evolution: Option<RawEvolution>,
}

impl From<RawCreature> for AttributeRecord {
    fn from(raw: RawCreature) -> Self {
        let mut types = raw.types;
        types.sort_by_key(|slot| slot.slot);

        AttributeRecord {
            id: RecordId(raw.id),
            name: raw.name,
            height: raw.height,
            weight: raw.weight,
            attributes: raw
                .stats
                .into_iter()
                .map(|stat| BaseAttribute {
                    name: stat.stat.name,
                    base: stat.base_stat,
                    effort: stat.effort,
                })
                .collect(),
            categories: types.into_iter().map(|slot| slot.kind.name).collect(),
            base_experience: raw.base_experience.unwrap_or(0),
            abilities: raw
                .level_up_moves
                .into_iter()
                .map(|mv| LevelGatedAbility {
                    name: mv.name,
                    unlock_level: mv.level_learned_at,
                    source: mv.version_group,
                })
                .collect(),
            sprite: raw.sprite_path.filter(|path| !path.is_empty()),
            evolution: raw.evolution.map(|evo| EvolutionLink {
                level: evo.level,
                target: RecordId(evo.evolution_id),
            }),
        }
    }
}

/// Loader for creature records from JSON.
pub struct RecordLoader;

impl RecordLoader {
    /// Load a JSON array of creatures.
    pub fn load(path: &Path) -> LoadResult<Vec<AttributeRecord>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dataset {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AttributeRecord>> {
        let raw: Vec<RawCreature> = serde_json::from_str(content)?;
        Ok(raw.into_iter().map(AttributeRecord::from).collect())
    }

    /// Parse a single creature object (the shape a remote lookup returns).
    pub fn parse_one(content: &str) -> LoadResult<AttributeRecord> {
        let raw: RawCreature = serde_json::from_str(content)?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use pocket_core::{Category, StatKind};

    use super::*;

    const CHARMANDER: &str = r#"{
        "id": 4, "name": "charmander", "height": 6, "weight": 85,
        "stats": [
            { "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "speed" } }
        ],
        "types": [{ "slot": 1, "type": { "name": "fire" } }],
        "base_experience": 62,
        "abilities": [],
        "level_up_moves": [
            { "name": "scratch", "level_learned_at": 1, "version_group": "red-blue" },
            { "name": "ember", "level_learned_at": 4, "version_group": "red-blue" }
        ],
        "sprite_path": "4.png",
        "evolution": { "level": 16, "evolutionId": 5 }
    }"#;

    #[test]
    fn converts_upstream_shape() {
        let record = RecordLoader::parse_one(CHARMANDER).unwrap();
        assert_eq!(record.id, RecordId(4));
        assert_eq!(record.base(StatKind::Hp), 39);
        assert_eq!(record.base(StatKind::Speed), 65);
        assert_eq!(record.base(StatKind::Attack), 0);
        assert_eq!(record.primary_category(), Some(Category::Fire));
        assert_eq!(record.abilities[1].unlock_level, 4);
        assert_eq!(record.abilities[1].source, "red-blue");
        assert_eq!(record.sprite.as_deref(), Some("4.png"));
        assert_eq!(record.evolution.map(|e| e.target), Some(RecordId(5)));
    }

    #[test]
    fn type_slots_are_ordered() {
        let record = RecordLoader::parse_one(
            r#"{ "id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
                 "types": [
                    { "slot": 2, "type": { "name": "poison" } },
                    { "slot": 1, "type": { "name": "grass" } }
                 ] }"#,
        )
        .unwrap();
        assert_eq!(record.categories, vec!["grass", "poison"]);
        assert!(record.evolution.is_none());
        assert!(record.sprite.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RecordLoader::parse(r#"[{ "id": "four" }]"#).is_err());
    }
}
