//! Weapon-scoped customization: augments, awakening slots and incremental upgrades.
//!
//! All three are reset together whenever the weapon changes.

use super::common::SkillRef;
use crate::config::BuildConfig;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AugmentEffect {
    Attack,
    Affinity,
    Defense,
    Element,
    HealthRegen,
    SlotUpgrade,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Augment {
    pub id: String,
    pub name: String,
    pub effect: AugmentEffect,
    pub value: i32,
    /// Augment slots consumed (1-3).
    pub slot_cost: u32,
}

impl Augment {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        effect: AugmentEffect,
        value: i32,
        slot_cost: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
            value,
            slot_cost,
        }
    }
}

/// What a single awakening contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AwakeningEffect {
    Attack(i32),
    Affinity(i32),
    Sharpness(i32),
    /// Upgrades the weapon's decoration slot to the given tier.
    Slot(u8),
    Element(i32),
    Status(i32),
    Skill(SkillRef),
    /// Counts as one extra piece toward the named set bonus.
    SetBonusEssence(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Awakening {
    pub id: String,
    pub name: String,
    pub tier: u8,
    pub effect: AwakeningEffect,
}

impl Awakening {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: u8,
        effect: AwakeningEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            effect,
        }
    }

    pub fn set_bonus_essence(&self) -> Option<&str> {
        match &self.effect {
            AwakeningEffect::SetBonusEssence(set_bonus) => Some(set_bonus),
            _ => None,
        }
    }

    pub fn skill(&self) -> Option<&SkillRef> {
        match &self.effect {
            AwakeningEffect::Skill(skill) => Some(skill),
            _ => None,
        }
    }
}

/// Fixed-size awakening slot array.
pub type AwakeningSlots = [Option<Awakening>; BuildConfig::AWAKENING_SLOTS];

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
pub enum UpgradeStat {
    Attack,
    Affinity,
    Element,
    Defense,
}

/// One level of an incremental upgrade track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomUpgrade {
    /// Position within the stat's track, starting at 1.
    pub level: u8,
    pub stat: UpgradeStat,
    pub value: i32,
}

impl CustomUpgrade {
    pub fn new(level: u8, stat: UpgradeStat, value: i32) -> Self {
        Self { level, stat, value }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponCustomization {
    pub augments: Vec<Augment>,
    pub awakenings: AwakeningSlots,
    pub upgrades: Vec<CustomUpgrade>,
}

impl WeaponCustomization {
    pub fn is_empty(&self) -> bool {
        self.augments.is_empty()
            && self.awakenings.iter().all(Option::is_none)
            && self.upgrades.is_empty()
    }

    pub fn equipped_awakenings(&self) -> impl Iterator<Item = &Awakening> {
        self.awakenings.iter().flatten()
    }

    pub fn augment_total(&self, effect: AugmentEffect) -> i32 {
        self.augments
            .iter()
            .filter(|augment| augment.effect == effect)
            .map(|augment| augment.value)
            .sum()
    }

    pub fn upgrade_total(&self, stat: UpgradeStat) -> i32 {
        self.upgrades
            .iter()
            .filter(|upgrade| upgrade.stat == stat)
            .map(|upgrade| upgrade.value)
            .sum()
    }

    pub fn attack_awakening_total(&self) -> i32 {
        self.equipped_awakenings()
            .filter_map(|awakening| match awakening.effect {
                AwakeningEffect::Attack(value) => Some(value),
                _ => None,
            })
            .sum()
    }

    pub fn affinity_awakening_total(&self) -> i32 {
        self.equipped_awakenings()
            .filter_map(|awakening| match awakening.effect {
                AwakeningEffect::Affinity(value) => Some(value),
                _ => None,
            })
            .sum()
    }
}
