//! Build description files.
//!
//! A build file is JSON that names catalog and customization ids:
//!
//! ```json
//! {
//!   "weapon": 3,
//!   "armor": { "head": 101, "legs": 105 },
//!   "charm": 3,
//!   "decorations": [{ "holder": "weapon", "index": 0, "id": 7 }],
//!   "augments": ["aug-atk-1"],
//!   "awakenings": ["atk-6", null, "brach-ess"],
//!   "upgrades": { "attack": 2 }
//! }
//! ```
//!
//! Every field is optional.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use forge_core::validation::{self, CustomizationKind};
use forge_core::{
    ArmorSlot, AwakeningSlots, BuildAction, BuildConfig, BuildState, DecorationHolder, RulesOracle,
    UpgradeStat,
};
use forge_runtime::{InMemoryCatalog, OracleManager};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildFile {
    #[serde(default)]
    pub weapon: Option<u32>,
    #[serde(default)]
    pub armor: BTreeMap<ArmorSlot, u32>,
    #[serde(default)]
    pub charm: Option<u32>,
    #[serde(default)]
    pub decorations: Vec<DecorationEntry>,
    #[serde(default)]
    pub augments: Vec<String>,
    #[serde(default)]
    pub awakenings: Vec<Option<String>>,
    /// Highest level per upgrade track.
    #[serde(default)]
    pub upgrades: BTreeMap<UpgradeStat, u8>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecorationEntry {
    pub holder: DecorationHolder,
    pub index: usize,
    pub id: u32,
}

impl BuildFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read build file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse build file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolves ids into the actions that assemble this build.
    ///
    /// Unknown ids are errors. Decorations are assigned after the equipment
    /// that carries them, since equipping resets a holder's slots.
    pub fn actions(
        &self,
        catalog: &InMemoryCatalog,
        oracles: &OracleManager,
    ) -> Result<Vec<BuildAction>> {
        let mut actions = Vec::new();

        if let Some(id) = self.weapon {
            let weapon = catalog
                .weapon(id)
                .cloned()
                .with_context(|| format!("Unknown weapon id {id}"))?;
            actions.push(BuildAction::SetWeapon {
                weapon: Some(weapon),
            });
        }

        for (&slot, &id) in &self.armor {
            let piece = catalog
                .armor_piece(id)
                .cloned()
                .with_context(|| format!("Unknown armor id {id}"))?;
            if piece.slot != slot {
                bail!("{} is {} armor, not {}", piece.name, piece.slot, slot);
            }
            actions.push(BuildAction::SetArmor {
                slot,
                piece: Some(piece),
            });
        }

        if let Some(id) = self.charm {
            let charm = catalog
                .charm(id)
                .cloned()
                .with_context(|| format!("Unknown charm id {id}"))?;
            actions.push(BuildAction::SetCharm { charm: Some(charm) });
        }

        for entry in &self.decorations {
            let decoration = catalog
                .decoration(entry.id)
                .cloned()
                .with_context(|| format!("Unknown decoration id {}", entry.id))?;
            actions.push(BuildAction::AssignDecoration {
                holder: entry.holder,
                index: entry.index,
                decoration,
            });
        }

        actions.extend(self.customization_actions(oracles)?);
        Ok(actions)
    }

    fn customization_actions(&self, oracles: &OracleManager) -> Result<Vec<BuildAction>> {
        let customizations = oracles.customizations();
        let mut actions = Vec::new();

        if !self.augments.is_empty() {
            let augments = self
                .augments
                .iter()
                .map(|id| {
                    customizations
                        .augment(id)
                        .cloned()
                        .with_context(|| format!("Unknown augment '{id}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            actions.push(BuildAction::SetAugments { augments });
        }

        if !self.awakenings.is_empty() {
            if self.awakenings.len() > BuildConfig::AWAKENING_SLOTS {
                bail!(
                    "{} awakenings listed, weapons have {} slots",
                    self.awakenings.len(),
                    BuildConfig::AWAKENING_SLOTS
                );
            }

            let mut awakenings = AwakeningSlots::default();
            for (slot, id) in awakenings.iter_mut().zip(&self.awakenings) {
                if let Some(id) = id {
                    let awakening = customizations
                        .awakening(id)
                        .with_context(|| format!("Unknown awakening '{id}'"))?;
                    *slot = Some(awakening.clone());
                }
            }
            actions.push(BuildAction::SetAwakenings { awakenings });
        }

        if !self.upgrades.is_empty() {
            let mut upgrades = Vec::new();
            for (&stat, &level) in &self.upgrades {
                let template = customizations
                    .upgrade(stat)
                    .with_context(|| format!("No upgrade track for {stat}"))?;
                upgrades.extend((1..=level).map(|level| template.at_level(level)));
            }
            validation::validate_custom_upgrades(&upgrades)?;
            actions.push(BuildAction::SetCustomUpgrades { upgrades });
        }

        Ok(actions)
    }
}

/// Selection-time problems the store accepts but a picker would refuse.
pub fn selection_warnings(state: &BuildState, rules: &dyn RulesOracle) -> Vec<String> {
    let mut warnings: Vec<String> = state
        .decorations
        .iter()
        .filter_map(|(holder, index, decoration)| {
            validation::validate_decoration(state, holder, index, decoration)
                .err()
                .map(|error| format!("{}: {}", decoration.name, error))
        })
        .collect();

    let Some(weapon) = &state.weapon else {
        return warnings;
    };
    let customization = &state.customization;
    let kind = CustomizationKind::for_weapon(weapon);

    if !customization.augments.is_empty() {
        if kind != CustomizationKind::Augments {
            warnings.push(format!("{} uses {}, not augments", weapon.name, kind));
        } else if let Err(error) =
            validation::validate_augments(weapon.rarity, &customization.augments, rules)
        {
            warnings.push(format!("{}: {}", weapon.name, error));
        }
    }
    if customization.equipped_awakenings().next().is_some()
        && kind != CustomizationKind::Awakenings
    {
        warnings.push(format!("{} uses {}, not awakenings", weapon.name, kind));
    }
    if !customization.upgrades.is_empty() && kind != CustomizationKind::Upgrades {
        warnings.push(format!("{} uses {}, not upgrades", weapon.name, kind));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::transition;
    use forge_runtime::{RuntimeConfig, load_catalog};

    fn content() -> (InMemoryCatalog, OracleManager) {
        let oracles = OracleManager::bundled().unwrap();
        let catalog = load_catalog(&RuntimeConfig::default(), &oracles).unwrap();
        (catalog, oracles)
    }

    fn build(file: &BuildFile) -> BuildState {
        let (catalog, oracles) = content();
        file.actions(&catalog, &oracles)
            .unwrap()
            .iter()
            .fold(BuildState::new(), |state, action| transition(&state, action))
    }

    #[test]
    fn parses_a_full_build_file() {
        let file = BuildFile::parse(
            r#"{
                "weapon": 1,
                "armor": { "head": 101, "legs": 105 },
                "charm": 3,
                "decorations": [{ "holder": "head", "index": 0, "id": 3 }],
                "awakenings": ["atk-6", null, "brach-ess"]
            }"#,
        )
        .unwrap();

        let state = build(&file);
        assert_eq!(state.weapon.as_ref().map(|w| w.id), Some(1));
        assert_eq!(state.armor.equipped_count(), 2);
        assert_eq!(state.charm.as_ref().map(|c| c.id), Some(3));
        assert_eq!(state.decorations.iter().count(), 1);
        assert_eq!(state.customization.equipped_awakenings().count(), 2);
    }

    #[test]
    fn rejects_unknown_ids_and_fields() {
        let (catalog, oracles) = content();

        let file = BuildFile::parse(r#"{ "weapon": 999 }"#).unwrap();
        let error = file.actions(&catalog, &oracles).unwrap_err();
        assert!(error.to_string().contains("Unknown weapon id 999"));

        let file = BuildFile::parse(r#"{ "armor": { "chest": 101 } }"#).unwrap();
        assert!(file.actions(&catalog, &oracles).is_err());

        assert!(BuildFile::parse(r#"{ "weapons": 1 }"#).is_err());
    }

    #[test]
    fn upgrade_levels_expand_into_tracks() {
        let file = BuildFile::parse(r#"{ "weapon": 3, "upgrades": { "attack": 2 } }"#).unwrap();
        let state = build(&file);

        let levels: Vec<u8> = state
            .customization
            .upgrades
            .iter()
            .map(|upgrade| upgrade.level)
            .collect();
        assert_eq!(levels, vec![1, 2]);

        let file = BuildFile::parse(r#"{ "upgrades": { "attack": 8 } }"#).unwrap();
        let (catalog, oracles) = content();
        assert!(file.actions(&catalog, &oracles).is_err());
    }

    #[test]
    fn warns_about_picker_violations() {
        let (catalog, oracles) = content();
        let file = BuildFile::parse(
            r#"{
                "weapon": 3,
                "decorations": [{ "holder": "weapon", "index": 0, "id": 7 }],
                "augments": ["aug-atk-1"]
            }"#,
        )
        .unwrap();
        let state = file
            .actions(&catalog, &oracles)
            .unwrap()
            .iter()
            .fold(BuildState::new(), |state, action| transition(&state, action));

        let warnings = selection_warnings(&state, oracles.rules());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Attack Jewel+ 4"));
        assert!(warnings[1].contains("not augments"));
    }
}
