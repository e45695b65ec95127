use super::armor::{ArmorPiece, Charm};
use super::decoration::Decoration;
use super::weapon::Weapon;

/// Kind tag of an [`Equipment`] record.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EquipmentKind {
    Weapon,
    Armor,
    Charm,
    Decoration,
}

/// Normalised catalog record, keyed by kind.
///
/// Catalog data enters the build only through this union, so nothing past the
/// boundary ever inspects untyped record shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Equipment {
    Weapon(Weapon),
    Armor(ArmorPiece),
    Charm(Charm),
    Decoration(Decoration),
}

impl Equipment {
    pub fn kind(&self) -> EquipmentKind {
        match self {
            Equipment::Weapon(_) => EquipmentKind::Weapon,
            Equipment::Armor(_) => EquipmentKind::Armor,
            Equipment::Charm(_) => EquipmentKind::Charm,
            Equipment::Decoration(_) => EquipmentKind::Decoration,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Equipment::Weapon(weapon) => weapon.id,
            Equipment::Armor(piece) => piece.id,
            Equipment::Charm(charm) => charm.id,
            Equipment::Decoration(decoration) => decoration.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Equipment::Weapon(weapon) => &weapon.name,
            Equipment::Armor(piece) => &piece.name,
            Equipment::Charm(charm) => &charm.name,
            Equipment::Decoration(decoration) => &decoration.name,
        }
    }
}
