//! The build aggregate: one optional item per equipment category plus
//! decoration assignments and weapon customization.

use super::armor::{ArmorPiece, ArmorSlot, Charm};
use super::customization::WeaponCustomization;
use super::decoration::Decoration;
use super::weapon::Weapon;

/// Owner of a group of decoration slots.
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
pub enum DecorationHolder {
    Weapon,
    Head,
    Chest,
    Arms,
    Waist,
    Legs,
}

impl DecorationHolder {
    /// Holders in aggregation order.
    pub const ALL: [DecorationHolder; 6] = [
        DecorationHolder::Weapon,
        DecorationHolder::Head,
        DecorationHolder::Chest,
        DecorationHolder::Arms,
        DecorationHolder::Waist,
        DecorationHolder::Legs,
    ];

    /// Armor slot owning this holder, `None` for the weapon.
    pub fn armor_slot(self) -> Option<ArmorSlot> {
        match self {
            DecorationHolder::Weapon => None,
            DecorationHolder::Head => Some(ArmorSlot::Head),
            DecorationHolder::Chest => Some(ArmorSlot::Chest),
            DecorationHolder::Arms => Some(ArmorSlot::Arms),
            DecorationHolder::Waist => Some(ArmorSlot::Waist),
            DecorationHolder::Legs => Some(ArmorSlot::Legs),
        }
    }
}

impl From<ArmorSlot> for DecorationHolder {
    fn from(slot: ArmorSlot) -> Self {
        match slot {
            ArmorSlot::Head => DecorationHolder::Head,
            ArmorSlot::Chest => DecorationHolder::Chest,
            ArmorSlot::Arms => DecorationHolder::Arms,
            ArmorSlot::Waist => DecorationHolder::Waist,
            ArmorSlot::Legs => DecorationHolder::Legs,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorSet {
    pub head: Option<ArmorPiece>,
    pub chest: Option<ArmorPiece>,
    pub arms: Option<ArmorPiece>,
    pub waist: Option<ArmorPiece>,
    pub legs: Option<ArmorPiece>,
}

impl ArmorSet {
    pub fn get(&self, slot: ArmorSlot) -> Option<&ArmorPiece> {
        match slot {
            ArmorSlot::Head => self.head.as_ref(),
            ArmorSlot::Chest => self.chest.as_ref(),
            ArmorSlot::Arms => self.arms.as_ref(),
            ArmorSlot::Waist => self.waist.as_ref(),
            ArmorSlot::Legs => self.legs.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: ArmorSlot) -> &mut Option<ArmorPiece> {
        match slot {
            ArmorSlot::Head => &mut self.head,
            ArmorSlot::Chest => &mut self.chest,
            ArmorSlot::Arms => &mut self.arms,
            ArmorSlot::Waist => &mut self.waist,
            ArmorSlot::Legs => &mut self.legs,
        }
    }

    /// Equipped pieces in head → legs order.
    pub fn iter(&self) -> impl Iterator<Item = (ArmorSlot, &ArmorPiece)> {
        ArmorSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|piece| (slot, piece)))
    }

    pub fn equipped_count(&self) -> usize {
        self.iter().count()
    }
}

/// Decoration assignments, one list per holder sized to the holder's slot list.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecorationSlots {
    pub weapon: Vec<Option<Decoration>>,
    pub head: Vec<Option<Decoration>>,
    pub chest: Vec<Option<Decoration>>,
    pub arms: Vec<Option<Decoration>>,
    pub waist: Vec<Option<Decoration>>,
    pub legs: Vec<Option<Decoration>>,
}

impl DecorationSlots {
    pub fn holder(&self, holder: DecorationHolder) -> &[Option<Decoration>] {
        match holder {
            DecorationHolder::Weapon => &self.weapon,
            DecorationHolder::Head => &self.head,
            DecorationHolder::Chest => &self.chest,
            DecorationHolder::Arms => &self.arms,
            DecorationHolder::Waist => &self.waist,
            DecorationHolder::Legs => &self.legs,
        }
    }

    pub fn holder_mut(&mut self, holder: DecorationHolder) -> &mut Vec<Option<Decoration>> {
        match holder {
            DecorationHolder::Weapon => &mut self.weapon,
            DecorationHolder::Head => &mut self.head,
            DecorationHolder::Chest => &mut self.chest,
            DecorationHolder::Arms => &mut self.arms,
            DecorationHolder::Waist => &mut self.waist,
            DecorationHolder::Legs => &mut self.legs,
        }
    }

    /// Replaces a holder's assignments with one empty entry per slot.
    pub fn reset(&mut self, holder: DecorationHolder, slots: &[u8]) {
        *self.holder_mut(holder) = vec![None; slots.len()];
    }

    /// Socketed decorations in holder order, with their slot index.
    pub fn iter(&self) -> impl Iterator<Item = (DecorationHolder, usize, &Decoration)> {
        DecorationHolder::ALL.into_iter().flat_map(move |holder| {
            self.holder(holder)
                .iter()
                .enumerate()
                .filter_map(move |(index, slot)| slot.as_ref().map(|deco| (holder, index, deco)))
        })
    }
}

/// Complete description of a build.
///
/// Every equipment category holds at most one item. The value is treated as
/// immutable by the engine: transitions produce a fresh state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildState {
    pub weapon: Option<Weapon>,
    pub armor: ArmorSet,
    pub charm: Option<Charm>,
    pub decorations: DecorationSlots,
    pub customization: WeaponCustomization,
}

impl BuildState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Slot tiers of a decoration holder's current owner (empty when nothing is equipped).
    pub fn holder_slots(&self, holder: DecorationHolder) -> &[u8] {
        let slots = match holder.armor_slot() {
            None => self.weapon.as_ref().map(|weapon| weapon.slots.as_slice()),
            Some(slot) => self.armor.get(slot).map(|piece| piece.slots.as_slice()),
        };
        slots.unwrap_or_default()
    }
}
