//! Weapon customization catalog loader.

use std::path::Path;

use forge_core::{Augment, Awakening, CustomUpgrade, UpgradeStat};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Value added by each level of an incremental upgrade track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeTemplate {
    pub stat: UpgradeStat,
    pub label: String,
    pub value: i32,
}

impl UpgradeTemplate {
    /// Upgrade entry for the given track level.
    pub fn at_level(&self, level: u8) -> CustomUpgrade {
        CustomUpgrade::new(level, self.stat, self.value)
    }
}

/// Augment templates, awakening catalog and upgrade tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationCatalog {
    pub augments: Vec<Augment>,
    pub awakenings: Vec<Awakening>,
    pub upgrades: Vec<UpgradeTemplate>,
}

impl CustomizationCatalog {
    pub fn augment(&self, id: &str) -> Option<&Augment> {
        self.augments.iter().find(|augment| augment.id == id)
    }

    pub fn awakening(&self, id: &str) -> Option<&Awakening> {
        self.awakenings.iter().find(|awakening| awakening.id == id)
    }

    pub fn upgrade(&self, stat: UpgradeStat) -> Option<&UpgradeTemplate> {
        self.upgrades.iter().find(|template| template.stat == stat)
    }
}

/// Loader for the customization catalog from RON files.
pub struct CustomizationLoader;

impl CustomizationLoader {
    pub fn load(path: &Path) -> LoadResult<CustomizationCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CustomizationCatalog> {
        let catalog: CustomizationCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse customizations RON: {}", e))?;

        if let Some(augment) = catalog
            .augments
            .iter()
            .find(|augment| !(1..=3).contains(&augment.slot_cost))
        {
            anyhow::bail!(
                "Augment '{}' costs {} slots, expected 1-3",
                augment.id,
                augment.slot_cost
            );
        }

        Ok(catalog)
    }
}
