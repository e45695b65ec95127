//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use forge_core::{Equipment, NameOracle, RulesSnapshot, SkillNames};

use crate::loaders::{
    CatalogLoader, CustomizationCatalog, CustomizationLoader, LoadResult, SecretLoader,
    SkillCatalog, SkillLoader, TablesLoader, read_file,
};

const TABLES: &str = "tables.toml";
const SKILLS: &str = "skills.ron";
const SET_BONUSES: &str = "set_bonuses.ron";
const CUSTOMIZATIONS: &str = "customizations.ron";
const CATALOG: &str = "catalog.ron";

const BUNDLED: [(&str, &str); 5] = [
    (TABLES, include_str!("../../data/tables.toml")),
    (SKILLS, include_str!("../../data/skills.ron")),
    (SET_BONUSES, include_str!("../../data/set_bonuses.ron")),
    (CUSTOMIZATIONS, include_str!("../../data/customizations.ron")),
    (CATALOG, include_str!("../../data/catalog.ron")),
];

/// Content factory that loads all build content from a data directory, or
/// from the defaults compiled into this crate.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml
/// ├── skills.ron
/// ├── set_bonuses.ron
/// ├── customizations.ron
/// └── catalog.ron
/// ```
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Factory serving the bundled default content.
    pub fn bundled() -> Self {
        Self { data_dir: None }
    }

    fn read(&self, file: &str) -> LoadResult<String> {
        match &self.data_dir {
            Some(dir) => read_file(&dir.join(file)),
            None => BUNDLED
                .iter()
                .find(|(name, _)| *name == file)
                .map(|(_, content)| content.to_string())
                .ok_or_else(|| anyhow::anyhow!("No bundled content named {}", file)),
        }
    }

    /// Load skill rules and display names from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::parse(&self.read(SKILLS)?)
    }

    /// Load the complete rule snapshot: `tables.toml` merged with the skill
    /// rules of `skills.ron` and the secret rules of `set_bonuses.ron`.
    pub fn load_rules(&self) -> LoadResult<RulesSnapshot> {
        let mut rules = TablesLoader::parse(&self.read(TABLES)?)?;
        rules.skills = self.load_skills()?.rules;
        rules.secrets = SecretLoader::parse(&self.read(SET_BONUSES)?)?;
        Ok(rules)
    }

    /// Load skill display names from `skills.ron`.
    pub fn load_names(&self) -> LoadResult<SkillNames> {
        Ok(self.load_skills()?.names)
    }

    /// Load the customization catalog from `customizations.ron`.
    pub fn load_customizations(&self) -> LoadResult<CustomizationCatalog> {
        CustomizationLoader::parse(&self.read(CUSTOMIZATIONS)?)
    }

    /// Load and normalise the equipment catalog from `catalog.ron`.
    pub fn load_catalog(&self, names: &dyn NameOracle) -> LoadResult<Vec<Equipment>> {
        CatalogLoader::parse(&self.read(CATALOG)?, names)
    }

    /// Returns the data directory path, `None` for bundled content.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{
        Equipment, EquipmentKind, Locale, RulesOracle, SecretUnlock, SharpnessTier, SkillId,
        WeaponClass,
    };

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::bundled().data_dir(), None);
    }

    #[test]
    fn bundled_rules_load() {
        let rules = ContentFactory::bundled().load_rules().unwrap();

        assert_eq!(rules.bloat_factor(WeaponClass::GreatSword), 4.8);
        assert_eq!(rules.bloat_factor(WeaponClass::Bow), 1.2);
        assert_eq!(rules.sharpness_raw(SharpnessTier::White), 1.32);
        assert_eq!(rules.sharpness_element(SharpnessTier::Purple), 1.25);
        assert_eq!(rules.augment_slot_limit(10), 5);
        assert_eq!(rules.augment_slot_limit(12), 3);
        assert_eq!(rules.augment_slot_limit(8), 3);
        assert_eq!(
            rules.lineage_skill("kjarr"),
            Some(&SkillId::new("critical_element"))
        );

        let agitator = SkillId::new("agitator");
        assert_eq!(rules.max_level(&agitator), 5);
        assert_eq!(rules.secret_max_level(&agitator), 7);
        assert_eq!(rules.skill_bonus(&agitator, 7).raw, 28.0);

        let heroics = SkillId::new("heroics");
        assert_eq!(rules.skill_bonus(&heroics, 5).raw_mult, Some(1.25));
        assert_eq!(rules.skill_bonus(&heroics, 6).raw_mult, None);

        let brachy = rules.secret_rule("Vontade de Brachydios").unwrap();
        assert_eq!(brachy.id, "Raging Brachydios Will");
        assert_eq!(
            brachy.tiers[0].unlocks,
            vec![SecretUnlock::Skill(agitator)]
        );
        assert_eq!(
            rules.secret_rule("Fatalis Mastery").unwrap().tiers[0].unlocks,
            vec![SecretUnlock::All]
        );
        assert_eq!(
            rules.element_skill(forge_core::Element::Dragon),
            Some(&SkillId::new("dragon_attack"))
        );
    }

    #[test]
    fn bundled_names_cover_both_locales() {
        let names = ContentFactory::bundled().load_names().unwrap();
        let critical_eye = SkillId::new("critical_eye");
        assert_eq!(names.display_name(&critical_eye, Locale::Pt), Some("Olho Crítico"));
        assert_eq!(names.resolve("Critical Eye"), Some(critical_eye));
        assert_eq!(
            names.resolve("Reforço de Ataque"),
            Some(SkillId::new("attack_boost"))
        );
    }

    #[test]
    fn bundled_customizations_load() {
        let catalog = ContentFactory::bundled().load_customizations().unwrap();
        assert_eq!(catalog.augments.len(), 16);
        assert_eq!(catalog.upgrades.len(), 4);
        assert_eq!(
            catalog
                .awakening("brach-ess")
                .and_then(|awakening| awakening.set_bonus_essence()),
            Some("Raging Brachydios Will")
        );
    }

    #[test]
    fn bundled_catalog_resolves_localised_skills() {
        let factory = ContentFactory::bundled();
        let names = factory.load_names().unwrap();
        let catalog = factory.load_catalog(&names).unwrap();

        let count = |kind| catalog.iter().filter(|item| item.kind() == kind).count();
        assert_eq!(count(EquipmentKind::Weapon), 6);
        assert_eq!(count(EquipmentKind::Armor), 10);
        assert_eq!(count(EquipmentKind::Charm), 4);
        assert_eq!(count(EquipmentKind::Decoration), 10);

        let mail = catalog
            .iter()
            .find_map(|item| match item {
                Equipment::Armor(piece) if piece.name == "Brachydium Mail β+" => Some(piece),
                _ => None,
            })
            .unwrap();
        assert_eq!(mail.skills[0].skill, SkillId::new("agitator"));

        let kjarr = catalog
            .iter()
            .find_map(|item| match item {
                Equipment::Weapon(weapon) if weapon.id == 2 => Some(weapon),
                _ => None,
            })
            .unwrap();
        assert_eq!(kjarr.lineage.as_deref(), Some("kjarr"));
    }

    #[test]
    fn directory_factory_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TABLES), "[bloat]\nbow = 1.2\n").unwrap();
        std::fs::write(dir.path().join(SKILLS), "[]").unwrap();
        std::fs::write(dir.path().join(SET_BONUSES), "[]").unwrap();

        let rules = ContentFactory::new(dir.path()).load_rules().unwrap();
        assert_eq!(rules.bloat_factor(WeaponClass::Bow), 1.2);
        assert!(rules.skills.is_empty());

        let missing = ContentFactory::new(dir.path()).load_customizations();
        assert!(missing.unwrap_err().to_string().contains("Failed to read file"));
    }
}
