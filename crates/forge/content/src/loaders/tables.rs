//! Rule tables loader (bloat, sharpness, augment limits, lineage skills).

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use forge_core::{RulesSnapshot, SharpnessTier, SkillId, WeaponClass};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// `tables.toml` layout. Map keys are enum labels, parsed after deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesFile {
    pub default_augment_limit: Option<u32>,
    pub bloat: BTreeMap<String, f64>,
    pub sharpness: SharpnessTables,
    pub augment_limits: Vec<AugmentLimit>,
    pub lineage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SharpnessTables {
    pub raw: BTreeMap<String, f64>,
    pub element: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AugmentLimit {
    pub rarity: u8,
    pub slots: u32,
}

/// Loader for the static rule tables from TOML files.
///
/// Produces a [`RulesSnapshot`] without skills or secrets; those come from
/// their own loaders and are merged by [`crate::ContentFactory`].
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<RulesSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesSnapshot> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut rules = RulesSnapshot::new();
        if let Some(limit) = file.default_augment_limit {
            rules.default_augment_limit = limit;
        }

        rules.bloat = parse_keys(file.bloat, "weapon class")?;
        rules.sharpness_raw = parse_keys(file.sharpness.raw, "sharpness tier")?;
        rules.sharpness_element = parse_keys(file.sharpness.element, "sharpness tier")?;

        for limit in file.augment_limits {
            rules.augment_limits.insert(limit.rarity, limit.slots);
        }
        for (lineage, skill) in file.lineage {
            rules = rules.with_lineage(lineage, SkillId::new(skill));
        }

        Ok(rules)
    }
}

fn parse_keys<K>(table: BTreeMap<String, f64>, what: &str) -> LoadResult<BTreeMap<K, f64>>
where
    K: FromStr + Ord,
{
    table
        .into_iter()
        .map(|(key, value)| {
            K::from_str(key.trim())
                .map(|key| (key, value))
                .map_err(|_| anyhow::anyhow!("Unknown {} '{}' in tables", what, key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::RulesOracle;

    #[test]
    fn parses_string_keyed_tables() {
        let rules = TablesLoader::parse(
            r#"
            default_augment_limit = 2

            [bloat]
            great-sword = 4.8

            [sharpness.raw]
            white = 1.32

            [sharpness.element]
            white = 1.15

            [[augment_limits]]
            rarity = 10
            slots = 5

            [lineage]
            Kjarr = "critical_element"
            "#,
        )
        .unwrap();

        assert_eq!(rules.bloat_factor(WeaponClass::GreatSword), 4.8);
        assert_eq!(rules.bloat_factor(WeaponClass::Bow), 1.0);
        assert_eq!(rules.sharpness_raw(SharpnessTier::White), 1.32);
        assert_eq!(rules.sharpness_element(SharpnessTier::White), 1.15);
        assert_eq!(rules.augment_slot_limit(10), 5);
        assert_eq!(rules.augment_slot_limit(8), 2);
        assert_eq!(
            rules.lineage_skill("kjarr"),
            Some(&SkillId::new("critical_element"))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let error = TablesLoader::parse("[bloat]\ntonfa = 2.0\n").unwrap_err();
        assert!(error.to_string().contains("tonfa"));
    }
}
