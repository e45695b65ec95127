//! Armor pieces, charms and the set-bonus metadata carried by armor.

use std::ops::AddAssign;

use super::common::{Rank, SkillRef};

/// Body slot of an armor piece.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ArmorSlot {
    Head,
    Chest,
    Arms,
    Waist,
    Legs,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 5] = [
        ArmorSlot::Head,
        ArmorSlot::Chest,
        ArmorSlot::Arms,
        ArmorSlot::Waist,
        ArmorSlot::Legs,
    ];
}

/// Base and fully-upgraded defense. Calculations only use `base`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defense {
    pub base: u32,
    pub max: u32,
}

impl Defense {
    pub fn flat(value: u32) -> Self {
        Self {
            base: value,
            max: value,
        }
    }
}

/// Signed elemental resistances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Resistances {
    pub fire: i32,
    pub water: i32,
    pub thunder: i32,
    pub ice: i32,
    pub dragon: i32,
}

impl AddAssign for Resistances {
    fn add_assign(&mut self, rhs: Self) {
        self.fire += rhs.fire;
        self.water += rhs.water;
        self.thunder += rhs.thunder;
        self.ice += rhs.ice;
        self.dragon += rhs.dragon;
    }
}

/// One threshold of a set bonus: `required` pieces unlock `effect`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBonusTier {
    pub required: u8,
    pub effect: String,
}

/// Set-bonus identity of an armor piece, distinct from its cosmetic set name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBonusRef {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiers: Vec<SetBonusTier>,
}

impl SetBonusRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tiers: Vec::new(),
        }
    }

    pub fn with_tier(mut self, required: u8, effect: impl Into<String>) -> Self {
        self.tiers.push(SetBonusTier {
            required,
            effect: effect.into(),
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorPiece {
    pub id: u32,
    pub name: String,
    pub slot: ArmorSlot,
    pub rarity: u8,
    pub rank: Option<Rank>,
    /// Cosmetic armor set name.
    pub set_name: Option<String>,
    pub defense: Defense,
    pub resistances: Resistances,
    pub slots: Vec<u8>,
    pub skills: Vec<SkillRef>,
    pub set_bonus: Option<SetBonusRef>,
}

impl ArmorPiece {
    pub fn new(id: u32, name: impl Into<String>, slot: ArmorSlot) -> Self {
        Self {
            id,
            name: name.into(),
            slot,
            rarity: 1,
            rank: None,
            set_name: None,
            defense: Defense::default(),
            resistances: Resistances::default(),
            slots: Vec::new(),
            skills: Vec::new(),
            set_bonus: None,
        }
    }

    pub fn with_defense(mut self, base: u32) -> Self {
        self.defense = Defense::flat(base);
        self
    }

    pub fn with_slots(mut self, slots: impl Into<Vec<u8>>) -> Self {
        self.slots = slots.into();
        self
    }

    pub fn with_skill(mut self, skill: SkillRef) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_set_bonus(mut self, set_bonus: SetBonusRef) -> Self {
        self.set_bonus = Some(set_bonus);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charm {
    pub id: u32,
    pub name: String,
    pub rarity: u8,
    pub skills: Vec<SkillRef>,
}

impl Charm {
    pub fn new(id: u32, name: impl Into<String>, skills: Vec<SkillRef>) -> Self {
        Self {
            id,
            name: name.into(),
            rarity: 1,
            skills,
        }
    }
}
