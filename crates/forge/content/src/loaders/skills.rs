//! Skill rules and display-name loader.

use std::collections::BTreeMap;
use std::path::Path;

use forge_core::{Element, Locale, SkillBonus, SkillId, SkillNames, SkillRule};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, ron_options};

/// Localised display names of one skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalisedNames {
    pub en: Option<String>,
    pub pt: Option<String>,
}

impl LocalisedNames {
    fn entries(&self) -> impl Iterator<Item = (Locale, &str)> {
        [(Locale::En, &self.en), (Locale::Pt, &self.pt)]
            .into_iter()
            .filter_map(|(locale, name)| name.as_deref().map(|name| (locale, name)))
    }
}

/// One entry of `skills.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: SkillId,
    #[serde(default)]
    pub names: LocalisedNames,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub secret_max_level: u32,
    #[serde(default)]
    pub conditional: bool,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub levels: Vec<SkillBonus>,
}

/// Skill rule table plus the display names it was declared with.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    pub rules: BTreeMap<SkillId, SkillRule>,
    pub names: SkillNames,
}

/// Loader for skill rules from RON files.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let entries: Vec<SkillEntry> = ron_options()
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills RON: {}", e))?;

        let mut catalog = SkillCatalog::default();
        for entry in entries {
            if entry.secret_max_level > 0 && entry.secret_max_level < entry.max_level {
                anyhow::bail!(
                    "Skill '{}' has secret max {} below its max {}",
                    entry.id,
                    entry.secret_max_level,
                    entry.max_level
                );
            }

            for (locale, name) in entry.names.entries() {
                catalog.names.insert(entry.id.clone(), locale, name);
            }

            let rule = SkillRule {
                max_level: entry.max_level,
                secret_max_level: entry.secret_max_level,
                conditional: entry.conditional,
                element: entry.element,
                levels: entry.levels,
            };
            if catalog.rules.insert(entry.id.clone(), rule).is_some() {
                anyhow::bail!("Duplicate skill '{}'", entry.id);
            }
        }

        tracing::debug!(skills = catalog.rules.len(), "loaded skill rules");
        Ok(catalog)
    }
}
