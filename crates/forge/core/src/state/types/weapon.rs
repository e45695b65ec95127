//! Weapon records and the closed enums that classify them.

use super::common::{Rank, SkillRef};

/// The fourteen weapon categories, plus a catch-all for unrecognised classes.
///
/// Every category carries a fixed display-to-true-raw bloat factor in the
/// rule tables; `Unknown` has none and therefore falls back to 1.0.
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum WeaponClass {
    GreatSword,
    LongSword,
    SwordAndShield,
    DualBlades,
    Hammer,
    HuntingHorn,
    Lance,
    Gunlance,
    SwitchAxe,
    ChargeBlade,
    InsectGlaive,
    LightBowgun,
    HeavyBowgun,
    Bow,
    Unknown,
}

impl WeaponClass {
    /// Parses a class label, mapping anything unrecognised to [`WeaponClass::Unknown`].
    pub fn parse_lenient(label: &str) -> Self {
        label.trim().parse().unwrap_or(Self::Unknown)
    }
}

/// Elemental and status damage types a weapon can carry.
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
pub enum Element {
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
    Poison,
    Paralysis,
    Sleep,
    Blast,
    Unknown,
}

impl Element {
    pub fn parse_lenient(label: &str) -> Self {
        label.trim().parse().unwrap_or(Self::Unknown)
    }
}

/// Sharpness colours from worst to best.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum SharpnessTier {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    #[default]
    White,
    Purple,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDamage {
    pub element: Element,
    pub damage: f64,
    /// Hidden element is not shown in game menus but still deals damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    pub class: WeaponClass,
    pub rarity: u8,
    /// Display ("bloated") attack as shown in game.
    pub attack: u32,
    /// Precomputed true raw; takes precedence over `attack / bloat` when positive.
    pub attack_true: Option<f64>,
    pub affinity: i32,
    pub defense: u32,
    pub element: Option<ElementDamage>,
    /// Decoration slot tiers, 0 meaning no slot.
    pub slots: Vec<u8>,
    /// Raw sharpness bar identity as stored by the data source.
    pub sharpness_bar: Option<String>,
    /// Highest reachable sharpness colour; white is assumed when absent.
    pub sharpness: Option<SharpnessTier>,
    pub innate_skills: Vec<SkillRef>,
    /// Weapon exposes the five awakening slots.
    pub awakening_capable: bool,
    /// Weapon accepts incremental upgrades.
    pub customizable: bool,
    /// Lineage tag of special subclasses that grant an implicit skill.
    pub lineage: Option<String>,
    pub rank: Option<Rank>,
}

impl Weapon {
    pub fn new(id: u32, name: impl Into<String>, class: WeaponClass, attack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            rarity: 1,
            attack,
            attack_true: None,
            affinity: 0,
            defense: 0,
            element: None,
            slots: Vec::new(),
            sharpness_bar: None,
            sharpness: None,
            innate_skills: Vec::new(),
            awakening_capable: false,
            customizable: false,
            lineage: None,
            rank: None,
        }
    }

    pub fn with_rarity(mut self, rarity: u8) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_affinity(mut self, affinity: i32) -> Self {
        self.affinity = affinity;
        self
    }

    pub fn with_slots(mut self, slots: impl Into<Vec<u8>>) -> Self {
        self.slots = slots.into();
        self
    }

    pub fn with_element(mut self, element: Element, damage: f64) -> Self {
        self.element = Some(ElementDamage {
            element,
            damage,
            hidden: false,
        });
        self
    }

    pub fn with_sharpness(mut self, sharpness: SharpnessTier) -> Self {
        self.sharpness = Some(sharpness);
        self
    }

    pub fn with_innate_skill(mut self, skill: SkillRef) -> Self {
        self.innate_skills.push(skill);
        self
    }

    pub fn with_lineage(mut self, lineage: impl Into<String>) -> Self {
        self.lineage = Some(lineage.into());
        self
    }

    /// Precomputed true raw, ignoring zero or negative placeholders.
    pub fn true_raw_override(&self) -> Option<f64> {
        self.attack_true.filter(|value| *value > 0.0)
    }

    /// Sharpness colour used by damage formulas.
    pub fn sharpness_tier(&self) -> SharpnessTier {
        self.sharpness.unwrap_or_default()
    }

    /// Element with a positive magnitude, if any.
    pub fn active_element(&self) -> Option<&ElementDamage> {
        self.element.as_ref().filter(|element| element.damage > 0.0)
    }
}
