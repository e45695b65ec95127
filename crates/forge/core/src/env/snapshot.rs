//! In-memory oracle implementations backed by plain collections.
//!
//! Content loaders fill these snapshots once at startup; tests build them by
//! hand to substitute rule sets.

use std::collections::BTreeMap;

use super::{NameOracle, RulesOracle, SecretRule, SkillRule};
use crate::state::{Element, Locale, SharpnessTier, SkillId, WeaponClass};

/// Complete set of rule tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesSnapshot {
    pub bloat: BTreeMap<WeaponClass, f64>,
    pub sharpness_raw: BTreeMap<SharpnessTier, f64>,
    pub sharpness_element: BTreeMap<SharpnessTier, f64>,
    pub skills: BTreeMap<SkillId, SkillRule>,
    pub secrets: Vec<SecretRule>,
    pub lineage: BTreeMap<String, SkillId>,
    pub augment_limits: BTreeMap<u8, u32>,
    pub default_augment_limit: u32,
}

impl RulesSnapshot {
    pub const DEFAULT_AUGMENT_LIMIT: u32 = 3;

    pub fn new() -> Self {
        Self {
            default_augment_limit: Self::DEFAULT_AUGMENT_LIMIT,
            ..Self::default()
        }
    }

    pub fn with_bloat(mut self, class: WeaponClass, factor: f64) -> Self {
        self.bloat.insert(class, factor);
        self
    }

    pub fn with_sharpness(mut self, tier: SharpnessTier, raw: f64, element: f64) -> Self {
        self.sharpness_raw.insert(tier, raw);
        self.sharpness_element.insert(tier, element);
        self
    }

    pub fn with_skill(mut self, skill: impl Into<SkillId>, rule: SkillRule) -> Self {
        self.skills.insert(skill.into(), rule);
        self
    }

    pub fn with_secret(mut self, rule: SecretRule) -> Self {
        self.secrets.push(rule);
        self
    }

    pub fn with_lineage(mut self, lineage: impl Into<String>, skill: impl Into<SkillId>) -> Self {
        self.lineage
            .insert(lineage.into().to_lowercase(), skill.into());
        self
    }

    pub fn with_augment_limit(mut self, rarity: u8, slots: u32) -> Self {
        self.augment_limits.insert(rarity, slots);
        self
    }
}

impl RulesOracle for RulesSnapshot {
    fn bloat_factor(&self, class: WeaponClass) -> f64 {
        self.bloat.get(&class).copied().unwrap_or(1.0)
    }

    fn sharpness_raw(&self, tier: SharpnessTier) -> f64 {
        self.sharpness_raw.get(&tier).copied().unwrap_or(1.0)
    }

    fn sharpness_element(&self, tier: SharpnessTier) -> f64 {
        self.sharpness_element.get(&tier).copied().unwrap_or(1.0)
    }

    fn skill_rule(&self, skill: &SkillId) -> Option<&SkillRule> {
        self.skills.get(skill)
    }

    fn secret_rule(&self, set_bonus: &str) -> Option<&SecretRule> {
        self.secrets.iter().find(|rule| rule.matches(set_bonus))
    }

    fn lineage_skill(&self, lineage: &str) -> Option<&SkillId> {
        self.lineage.get(&lineage.to_lowercase())
    }

    fn augment_slot_limit(&self, rarity: u8) -> u32 {
        self.augment_limits
            .get(&rarity)
            .copied()
            .unwrap_or(self.default_augment_limit)
    }

    fn element_skill(&self, element: Element) -> Option<&SkillId> {
        self.skills
            .iter()
            .find(|(_, rule)| rule.element == Some(element))
            .map(|(skill, _)| skill)
    }
}

/// One localised display name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillName {
    pub skill: SkillId,
    pub locale: Locale,
    pub name: String,
}

/// Translation table for skill display names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillNames {
    names: BTreeMap<(SkillId, Locale), String>,
}

impl SkillNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: impl Into<SkillId>, locale: Locale, name: impl Into<String>) {
        self.names.insert((skill.into(), locale), name.into());
    }

    pub fn with(mut self, skill: impl Into<SkillId>, locale: Locale, name: impl Into<String>) -> Self {
        self.insert(skill, locale, name);
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = SkillName> + '_ {
        self.names.iter().map(|((skill, locale), name)| SkillName {
            skill: skill.clone(),
            locale: *locale,
            name: name.clone(),
        })
    }
}

impl FromIterator<SkillName> for SkillNames {
    fn from_iter<T: IntoIterator<Item = SkillName>>(iter: T) -> Self {
        let mut names = Self::new();
        for entry in iter {
            names.insert(entry.skill, entry.locale, entry.name);
        }
        names
    }
}

impl NameOracle for SkillNames {
    fn display_name(&self, skill: &SkillId, locale: Locale) -> Option<&str> {
        self.names
            .get(&(skill.clone(), locale))
            .map(String::as_str)
    }

    fn resolve(&self, name: &str) -> Option<SkillId> {
        let needle = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|(_, display)| display.to_lowercase() == needle)
            .map(|((skill, _), _)| skill.clone())
    }
}
