//! Category effectiveness tables.
//!
//! Two views of the same domain:
//! - Per-category vulnerable/resistant/immune lists, used to annotate roster entries.
//! - The full attacking × defending multiplier chart, in percent (0, 50, 100, 200).
//!
//! The lists and the chart are independent tables and are not cross-derived.

use super::category::Category;
use Category::*;

/// How a dual-category record resolves its vulnerable/resistant lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectivenessPolicy {
    /// Only the first category's lists are consulted.
    #[default]
    FirstCategory,
    /// Multiply chart entries for every category; >100% is a vulnerability,
    /// strictly between 0% and 100% is a resistance.
    Combined,
}

/// Categories that deal amplified damage to `category`.
pub const fn vulnerable_to(category: Category) -> &'static [Category] {
    match category {
        Normal => &[Fighting],
        Fire => &[Water, Ground, Rock],
        Water => &[Electric, Grass],
        Electric => &[Ground],
        Grass => &[Fire, Ice, Poison, Flying, Bug],
        Ice => &[Fire, Fighting, Rock, Steel],
        Fighting => &[Flying, Psychic, Fairy],
        Poison => &[Ground, Psychic],
        Ground => &[Water, Grass, Ice],
        Flying => &[Electric, Ice, Rock],
        Psychic => &[Bug, Ghost, Dark],
        Bug => &[Fire, Flying, Rock],
        Rock => &[Water, Grass, Fighting, Ground, Steel],
        Ghost => &[Ghost, Dark],
        Dragon => &[Ice, Dragon, Fairy],
        Dark => &[Fighting, Bug, Fairy],
        Steel => &[Fire, Fighting, Ground],
        Fairy => &[Poison, Steel],
    }
}

/// Categories that deal reduced damage to `category`.
pub const fn resistant_to(category: Category) -> &'static [Category] {
    match category {
        Normal => &[],
        Fire => &[Fire, Grass, Ice, Bug, Steel],
        Water => &[Fire, Water, Ice, Steel],
        Electric => &[Electric, Flying, Steel],
        Grass => &[Water, Electric, Grass, Ground],
        Ice => &[Ice],
        Fighting => &[Bug, Rock, Dark],
        Poison => &[Grass, Fighting, Poison, Bug, Fairy],
        Ground => &[Poison, Rock],
        Flying => &[Grass, Fighting, Bug],
        Psychic => &[Fighting, Psychic],
        Bug => &[Grass, Fighting, Ground],
        Rock => &[Normal, Fire, Poison, Flying],
        Ghost => &[Poison, Bug],
        Dragon => &[Fire, Water, Electric, Grass],
        Dark => &[Ghost, Dark],
        Steel => &[
            Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
        ],
        Fairy => &[Fighting, Bug, Dark],
    }
}

/// Categories that deal no damage to `category`.
pub const fn immune_to(category: Category) -> &'static [Category] {
    match category {
        Normal => &[Ghost],
        Electric => &[Ground],
        Fighting => &[Ghost],
        Poison => &[Steel],
        Ground => &[Flying],
        Psychic => &[Dark],
        Ghost => &[Normal],
        Dragon => &[Fairy],
        _ => &[],
    }
}

/// Multiplier (percent) for an `attacking` category hitting a single `defending` category.
pub const fn multiplier(attacking: Category, defending: Category) -> u32 {
    const HALF: u32 = 50;
    const DOUBLE: u32 = 200;
    const NONE: u32 = 0;
    const NEUTRAL: u32 = 100;

    match attacking {
        Normal => match defending {
            Rock | Steel => HALF,
            Ghost => NONE,
            _ => NEUTRAL,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => HALF,
            Grass | Ice | Bug | Steel => DOUBLE,
            _ => NEUTRAL,
        },
        Water => match defending {
            Water | Grass | Dragon => HALF,
            Fire | Ground | Rock => DOUBLE,
            _ => NEUTRAL,
        },
        Electric => match defending {
            Electric | Grass | Dragon => HALF,
            Water | Flying => DOUBLE,
            Ground => NONE,
            _ => NEUTRAL,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => HALF,
            Water | Ground | Rock => DOUBLE,
            _ => NEUTRAL,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => HALF,
            Grass | Ground | Flying | Dragon => DOUBLE,
            _ => NEUTRAL,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => DOUBLE,
            Poison | Flying | Psychic | Bug | Fairy => HALF,
            Ghost => NONE,
            _ => NEUTRAL,
        },
        Poison => match defending {
            Grass | Fairy => DOUBLE,
            Poison | Ground | Rock | Ghost => HALF,
            Steel => NONE,
            _ => NEUTRAL,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => DOUBLE,
            Grass | Bug => HALF,
            Flying => NONE,
            _ => NEUTRAL,
        },
        Flying => match defending {
            Grass | Fighting | Bug => DOUBLE,
            Electric | Rock | Steel => HALF,
            _ => NEUTRAL,
        },
        Psychic => match defending {
            Fighting | Poison => DOUBLE,
            Psychic | Steel => HALF,
            Dark => NONE,
            _ => NEUTRAL,
        },
        Bug => match defending {
            Grass | Psychic | Dark => DOUBLE,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => HALF,
            _ => NEUTRAL,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => DOUBLE,
            Fighting | Ground | Steel => HALF,
            _ => NEUTRAL,
        },
        Ghost => match defending {
            Psychic | Ghost => DOUBLE,
            Dark => HALF,
            Normal => NONE,
            _ => NEUTRAL,
        },
        Dragon => match defending {
            Dragon => DOUBLE,
            Steel => HALF,
            Fairy => NONE,
            _ => NEUTRAL,
        },
        Dark => match defending {
            Psychic | Ghost => DOUBLE,
            Fighting | Dark | Fairy => HALF,
            _ => NEUTRAL,
        },
        Steel => match defending {
            Ice | Rock | Fairy => DOUBLE,
            Fire | Water | Electric | Steel => HALF,
            _ => NEUTRAL,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => DOUBLE,
            Fire | Poison | Steel => HALF,
            _ => NEUTRAL,
        },
    }
}

/// Combined multiplier (percent) of `attacking` against every defending category.
///
/// An empty defender list is neutral (100).
pub fn matchup(attacking: Category, defending: &[Category]) -> u32 {
    defending
        .iter()
        .fold(100, |acc, &def| acc * multiplier(attacking, def) / 100)
}

/// Vulnerable/resistant annotation for a roster entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessProfile {
    pub vulnerable_to: Vec<Category>,
    pub resistant_to: Vec<Category>,
}

impl EffectivenessProfile {
    /// Resolves the profile for a record's category tags (primary first).
    ///
    /// Under [`EffectivenessPolicy::FirstCategory`] an unrecognised first tag
    /// yields empty lists, even if a second tag is recognised.
    pub fn resolve(tags: &[String], policy: EffectivenessPolicy) -> Self {
        match policy {
            EffectivenessPolicy::FirstCategory => {
                match tags.first().and_then(|tag| tag.parse::<Category>().ok()) {
                    Some(primary) => Self {
                        vulnerable_to: vulnerable_to(primary).to_vec(),
                        resistant_to: resistant_to(primary).to_vec(),
                    },
                    None => Self::default(),
                }
            }
            EffectivenessPolicy::Combined => {
                let defending: Vec<Category> =
                    tags.iter().filter_map(|tag| tag.parse().ok()).collect();
                if defending.is_empty() {
                    return Self::default();
                }
                let mut profile = Self::default();
                for attacking in Category::ALL {
                    let total = matchup(attacking, &defending);
                    if total > 100 {
                        profile.vulnerable_to.push(attacking);
                    } else if total > 0 && total < 100 {
                        profile.resistant_to.push(attacking);
                    }
                }
                profile
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_category_wins_on_dual_records() {
        let profile =
            EffectivenessProfile::resolve(&tags(&["grass", "poison"]), EffectivenessPolicy::FirstCategory);
        assert_eq!(profile.vulnerable_to, vulnerable_to(Grass).to_vec());
        assert_eq!(profile.resistant_to, resistant_to(Grass).to_vec());
        // poison's own weakness to psychic is not merged in
        assert!(!profile.vulnerable_to.contains(&Psychic));
    }

    #[test]
    fn unknown_or_missing_tags_resolve_to_empty() {
        assert_eq!(
            EffectivenessProfile::resolve(&[], EffectivenessPolicy::FirstCategory),
            EffectivenessProfile::default()
        );
        assert_eq!(
            EffectivenessProfile::resolve(&tags(&["shadow", "fire"]), EffectivenessPolicy::FirstCategory),
            EffectivenessProfile::default()
        );
    }

    #[test]
    fn combined_policy_multiplies_both_categories() {
        let profile =
            EffectivenessProfile::resolve(&tags(&["grass", "poison"]), EffectivenessPolicy::Combined);
        // psychic: 100% vs grass × 200% vs poison
        assert!(profile.vulnerable_to.contains(&Psychic));
        assert!(profile.vulnerable_to.contains(&Fire));
        // grass attacking grass/poison: 50% × 50% = 25%
        assert!(profile.resistant_to.contains(&Grass));
        // ground: 200% vs poison × 50% vs grass = neutral
        assert!(!profile.vulnerable_to.contains(&Ground));
        assert!(!profile.resistant_to.contains(&Ground));
    }

    #[test]
    fn immunities_are_neither_vulnerable_nor_resistant() {
        let profile = EffectivenessProfile::resolve(&tags(&["normal"]), EffectivenessPolicy::Combined);
        assert!(!profile.resistant_to.contains(&Ghost));
        assert!(!profile.vulnerable_to.contains(&Ghost));
        assert_eq!(immune_to(Normal), &[Ghost]);
    }

    #[test]
    fn matchup_products() {
        assert_eq!(matchup(Ice, &[Dragon, Flying]), 400);
        assert_eq!(matchup(Electric, &[Water, Ground]), 0);
        assert_eq!(matchup(Fire, &[]), 100);
    }
}
