//! The six canonical stats and the fixed-shape block that holds one value per stat.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the six canonical tabletop stats.
///
/// Display names match the labels used throughout the roster (`"Sp.Atk"` etc.).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    #[strum(serialize = "HP")]
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    Hp,
    #[strum(serialize = "Attack")]
    Attack,
    #[strum(serialize = "Defense")]
    Defense,
    #[strum(serialize = "Sp.Atk")]
    #[cfg_attr(feature = "serde", serde(rename = "Sp.Atk"))]
    SpecialAttack,
    #[strum(serialize = "Sp.Def")]
    #[cfg_attr(feature = "serde", serde(rename = "Sp.Def"))]
    SpecialDefense,
    #[strum(serialize = "Speed")]
    Speed,
}

impl StatKind {
    pub const COUNT: usize = 6;

    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Maps a raw attribute name from the creature data source (`"special-attack"`)
    /// to its canonical stat.
    pub fn from_raw_name(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "special-attack" => Some(Self::SpecialAttack),
            "special-defense" => Some(Self::SpecialDefense),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        self.into()
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Exactly one integer per canonical stat.
///
/// The fixed shape makes "every modifier key has a stat key" true by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Attack"))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Defense"))]
    pub defense: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Sp.Atk"))]
    pub special_attack: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Sp.Def"))]
    pub special_defense: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Speed"))]
    pub speed: i32,
}

impl StatBlock {
    pub const fn uniform(value: i32) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    pub const fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: i32) {
        *self.get_mut(kind) = value;
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
        }
    }

    /// Applies `f` to every stat, producing a new block.
    pub fn map(&self, mut f: impl FnMut(StatKind, i32) -> i32) -> Self {
        let mut out = Self::default();
        for kind in StatKind::ALL {
            out.set(kind, f(kind, self.get(kind)));
        }
        out
    }

    /// Iterates `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
