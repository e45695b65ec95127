//! Deterministic build calculator for Monster Hunter World: Iceborne.
//!
//! `forge-core` owns the data model of a build, the closed set of state
//! transitions and the stat pipeline (skill aggregation, set bonuses, secret
//! caps and damage). Rule tables are injected through [`env::Env`]; nothing in
//! this crate performs I/O or touches global state, so the same code serves the
//! runtime, the CLI and tests with substituted rule sets.
pub mod config;
pub mod engine;
pub mod env;
pub mod report;
pub mod state;
pub mod stats;
pub mod validation;

pub use config::BuildConfig;
pub use engine::{BuildAction, BuildEngine, transition};
pub use env::{
    BuildEnv, Env, NameOracle, RulesOracle, RulesSnapshot, SecretRule, SecretTier, SecretUnlock,
    SkillBonus, SkillName, SkillNames, SkillRule,
};
pub use report::render_report;
pub use state::{
    ArmorPiece, ArmorSet, ArmorSlot, Augment, AugmentEffect, Awakening, AwakeningEffect,
    AwakeningSlots, BuildState, Charm, CustomUpgrade, Decoration, DecorationHolder,
    DecorationSlots, Defense, Element, ElementDamage, Equipment, EquipmentKind, Locale, Rank,
    Resistances, SetBonusRef, SetBonusTier, SharpnessTier, SkillId, SkillRef, UpgradeStat, Weapon,
    WeaponClass, WeaponCustomization,
};
pub use stats::{
    ActiveSetBonus, AffinityBreakdown, AttackBreakdown, BuildStats, SkillLevel, compute_stats,
};
pub use validation::{CustomizationError, CustomizationKind};
