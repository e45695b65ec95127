//! Data-driven rule tables, skill names and the equipment catalog.
//!
//! This crate houses the static content of the build calculator and the
//! loaders that read it from RON/TOML files:
//! - Rule tables (bloat, sharpness, augment limits, lineages) via TOML
//! - Skill rules and localised display names via RON
//! - Set-bonus secret unlocks via RON
//! - Customization catalog (augments, awakenings, upgrade tracks) via RON
//! - Equipment catalog records via RON, normalised into core equipment
//!
//! Content is consumed by runtime oracles and never appears in build state.

#[cfg(feature = "serde")]
pub mod records;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use records::{
    ArmorRecord, CatalogFile, CatalogRecord, CharmRecord, DecorationRecord, DefenseRecord,
    ElementRecord, RecordError, RecordNormalizer, SetBonusRecord, SkillRecord, WeaponRecord,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ContentFactory, CustomizationCatalog, CustomizationLoader, LoadResult,
    SecretLoader, SkillCatalog, SkillLoader, TablesLoader, UpgradeTemplate,
};
