//! Loose catalog records and their normalisation into core equipment.
//!
//! Catalog sources describe equipment with plain strings (weapon class, body
//! slot, element, localised skill names). Records are checked once here and
//! turned into [`Equipment`]; everything past this point uses typed values.

use serde::{Deserialize, Serialize};

use forge_core::{
    ArmorPiece, ArmorSlot, Charm, Decoration, Defense, Element, ElementDamage, Equipment,
    EquipmentKind, NameOracle, Rank, Resistances, SetBonusRef, SetBonusTier, SharpnessTier,
    SkillId, SkillRef, Weapon, WeaponClass,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{kind} record {id} has no name")]
    MissingName { kind: EquipmentKind, id: u32 },

    #[error("armor '{name}' has unknown slot '{slot}'")]
    UnknownArmorSlot { name: String, slot: String },

    #[error("decoration '{name}' has tier {tier}, expected 1-4")]
    InvalidDecorationTier { name: String, tier: u8 },

    #[error("decoration '{name}' grants no skill")]
    DecorationWithoutSkills { name: String },

    #[error("'{name}' has slot tier {tier}, expected 0-4")]
    InvalidSlotTier { name: String, tier: u8 },
}

/// Skill reference by display name (any locale) or id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(alias = "type")]
    pub element: String,
    pub damage: f64,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub class: String,
    #[serde(default)]
    pub rarity: u8,
    pub attack: u32,
    #[serde(default)]
    pub attack_true: Option<f64>,
    #[serde(default)]
    pub affinity: i32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub element: Option<ElementRecord>,
    #[serde(default)]
    pub slots: Vec<u8>,
    #[serde(default)]
    pub sharpness: Option<String>,
    #[serde(default)]
    pub sharpness_bar: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub lineage: Option<String>,
    #[serde(default)]
    pub awakening: bool,
    #[serde(default)]
    pub customizable: bool,
    #[serde(default)]
    pub rank: Option<String>,
}

/// Flat defense or a base/max pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefenseRecord {
    Flat(u32),
    Range {
        base: u32,
        #[serde(default)]
        max: u32,
    },
}

impl Default for DefenseRecord {
    fn default() -> Self {
        Self::Flat(0)
    }
}

impl From<DefenseRecord> for Defense {
    fn from(record: DefenseRecord) -> Self {
        match record {
            DefenseRecord::Flat(value) => Defense::flat(value),
            DefenseRecord::Range { base, max } => Defense {
                base,
                max: max.max(base),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBonusRecord {
    #[serde(alias = "id")]
    pub name: String,
    #[serde(default)]
    pub tiers: Vec<SetBonusTier>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmorRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub slot: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub defense: DefenseRecord,
    #[serde(default)]
    pub resistances: Resistances,
    #[serde(default)]
    pub slots: Vec<u8>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub set_bonus: Option<SetBonusRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharmRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

/// Single-skill jewels may use `skill`; combo jewels list `skills`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub tier: u8,
    #[serde(default)]
    pub skill: Option<SkillRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

/// Any catalog record, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogRecord {
    Weapon(WeaponRecord),
    Armor(ArmorRecord),
    Charm(CharmRecord),
    Decoration(DecorationRecord),
}

impl CatalogRecord {
    pub fn kind(&self) -> EquipmentKind {
        match self {
            CatalogRecord::Weapon(_) => EquipmentKind::Weapon,
            CatalogRecord::Armor(_) => EquipmentKind::Armor,
            CatalogRecord::Charm(_) => EquipmentKind::Charm,
            CatalogRecord::Decoration(_) => EquipmentKind::Decoration,
        }
    }
}

/// Catalog file grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub weapons: Vec<WeaponRecord>,
    pub armor: Vec<ArmorRecord>,
    pub charms: Vec<CharmRecord>,
    pub decorations: Vec<DecorationRecord>,
}

impl CatalogFile {
    pub fn into_records(self) -> impl Iterator<Item = CatalogRecord> {
        self.weapons
            .into_iter()
            .map(CatalogRecord::Weapon)
            .chain(self.armor.into_iter().map(CatalogRecord::Armor))
            .chain(self.charms.into_iter().map(CatalogRecord::Charm))
            .chain(self.decorations.into_iter().map(CatalogRecord::Decoration))
    }
}

const KJARR_LINEAGE: &str = "kjarr";

/// Turns records into core equipment, resolving skill names on the way.
pub struct RecordNormalizer<'a> {
    names: Option<&'a dyn NameOracle>,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(names: &'a dyn NameOracle) -> Self {
        Self { names: Some(names) }
    }

    /// Normaliser that slugifies every skill name.
    pub fn without_names() -> Self {
        Self { names: None }
    }

    /// Known display names map to their id; anything else is slugified.
    pub fn resolve_skill(&self, name: &str) -> SkillId {
        self.names
            .and_then(|names| names.resolve(name))
            .unwrap_or_else(|| SkillId::slugify(name))
    }

    fn skills(&self, records: &[SkillRecord]) -> Vec<SkillRef> {
        records
            .iter()
            .filter(|record| record.level > 0)
            .map(|record| SkillRef::new(self.resolve_skill(&record.name), record.level))
            .collect()
    }

    pub fn normalize(&self, record: CatalogRecord) -> Result<Equipment, RecordError> {
        Ok(match record {
            CatalogRecord::Weapon(record) => Equipment::Weapon(self.weapon(record)?),
            CatalogRecord::Armor(record) => Equipment::Armor(self.armor(record)?),
            CatalogRecord::Charm(record) => Equipment::Charm(self.charm(record)?),
            CatalogRecord::Decoration(record) => Equipment::Decoration(self.decoration(record)?),
        })
    }

    pub fn weapon(&self, record: WeaponRecord) -> Result<Weapon, RecordError> {
        let name = required_name(&record.name, EquipmentKind::Weapon, record.id)?;
        check_slots(&name, &record.slots)?;

        let lineage = record.lineage.map(|tag| tag.trim().to_lowercase()).or_else(|| {
            is_kjarr(&name).then(|| KJARR_LINEAGE.to_string())
        });

        Ok(Weapon {
            id: record.id,
            class: WeaponClass::parse_lenient(&record.class),
            rarity: record.rarity,
            attack: record.attack,
            attack_true: record.attack_true,
            affinity: record.affinity,
            defense: record.defense,
            element: record.element.map(|element| ElementDamage {
                element: Element::parse_lenient(&element.element),
                damage: element.damage,
                hidden: element.hidden,
            }),
            slots: record.slots,
            sharpness_bar: record.sharpness_bar,
            sharpness: record
                .sharpness
                .and_then(|tier| tier.trim().parse::<SharpnessTier>().ok()),
            innate_skills: self.skills(&record.skills),
            awakening_capable: record.awakening,
            customizable: record.customizable,
            lineage,
            rank: parse_rank(record.rank.as_deref()),
            name,
        })
    }

    pub fn armor(&self, record: ArmorRecord) -> Result<ArmorPiece, RecordError> {
        let name = required_name(&record.name, EquipmentKind::Armor, record.id)?;
        check_slots(&name, &record.slots)?;
        let slot = record
            .slot
            .trim()
            .parse::<ArmorSlot>()
            .map_err(|_| RecordError::UnknownArmorSlot {
                name: name.clone(),
                slot: record.slot.clone(),
            })?;

        let set_bonus = record
            .set_bonus
            .filter(|set_bonus| !set_bonus.name.trim().is_empty())
            .map(|set_bonus| SetBonusRef {
                id: set_bonus.name.trim().to_string(),
                tiers: set_bonus.tiers,
            });

        Ok(ArmorPiece {
            id: record.id,
            slot,
            rarity: record.rarity,
            rank: parse_rank(record.rank.as_deref()),
            set_name: record.set_name,
            defense: record.defense.into(),
            resistances: record.resistances,
            slots: record.slots,
            skills: self.skills(&record.skills),
            set_bonus,
            name,
        })
    }

    pub fn charm(&self, record: CharmRecord) -> Result<Charm, RecordError> {
        let name = required_name(&record.name, EquipmentKind::Charm, record.id)?;
        Ok(Charm {
            id: record.id,
            rarity: record.rarity,
            skills: self.skills(&record.skills),
            name,
        })
    }

    pub fn decoration(&self, record: DecorationRecord) -> Result<Decoration, RecordError> {
        let name = required_name(&record.name, EquipmentKind::Decoration, record.id)?;
        if !(1..=forge_core::BuildConfig::MAX_DECORATION_TIER).contains(&record.tier) {
            return Err(RecordError::InvalidDecorationTier {
                name,
                tier: record.tier,
            });
        }

        let mut records = record.skills;
        if let Some(skill) = record.skill {
            records.insert(0, skill);
        }
        let skills = self.skills(&records);
        if skills.is_empty() {
            return Err(RecordError::DecorationWithoutSkills { name });
        }

        Ok(Decoration {
            id: record.id,
            tier: record.tier,
            skills,
            name,
        })
    }
}

fn required_name(name: &str, kind: EquipmentKind, id: u32) -> Result<String, RecordError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RecordError::MissingName { kind, id });
    }
    Ok(name.to_string())
}

fn check_slots(name: &str, slots: &[u8]) -> Result<(), RecordError> {
    match slots
        .iter()
        .find(|tier| **tier > forge_core::BuildConfig::MAX_DECORATION_TIER)
    {
        Some(tier) => Err(RecordError::InvalidSlotTier {
            name: name.to_string(),
            tier: *tier,
        }),
        None => Ok(()),
    }
}

fn parse_rank(rank: Option<&str>) -> Option<Rank> {
    rank.and_then(|rank| rank.trim().parse().ok())
}

fn is_kjarr(name: &str) -> bool {
    let folded: String = name
        .to_lowercase()
        .chars()
        .map(|ch| if ch == 'á' { 'a' } else { ch })
        .collect();
    folded.contains(KJARR_LINEAGE)
}
