pub mod armor;
pub mod build;
pub mod common;
pub mod customization;
pub mod decoration;
pub mod equipment;
pub mod weapon;

// Re-export equipment records
pub use armor::{ArmorPiece, ArmorSlot, Charm, Defense, Resistances, SetBonusRef, SetBonusTier};
pub use decoration::Decoration;
pub use equipment::{Equipment, EquipmentKind};
pub use weapon::{Element, ElementDamage, SharpnessTier, Weapon, WeaponClass};

// Re-export customization types
pub use customization::{
    Augment, AugmentEffect, Awakening, AwakeningEffect, AwakeningSlots, CustomUpgrade,
    UpgradeStat, WeaponCustomization,
};

// Re-export the aggregate
pub use build::{ArmorSet, BuildState, DecorationHolder, DecorationSlots};

// Re-export common types
pub use common::{Locale, Rank, SkillId, SkillRef};
