//! Runtime wrapper around the loaded rule tables.
//!
//! [`OracleManager`] owns the immutable content (rules, skill names and the
//! customization catalog) and builds [`forge_core::BuildEnv`] values on demand.
//! Nothing here changes after load; build state lives in the store.

use std::sync::Arc;

use forge_content::{ContentFactory, CustomizationCatalog, LoadResult};
use forge_core::{BuildEnv, Env, Locale, RulesSnapshot, SkillNames};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) rules: Arc<RulesSnapshot>,
    pub(crate) names: Arc<SkillNames>,
    pub(crate) customizations: Arc<CustomizationCatalog>,
    pub(crate) locale: Locale,
}

impl OracleManager {
    pub fn new(
        rules: Arc<RulesSnapshot>,
        names: Arc<SkillNames>,
        customizations: Arc<CustomizationCatalog>,
    ) -> Self {
        Self {
            rules,
            names,
            customizations,
            locale: Locale::default(),
        }
    }

    /// Loads every table through a content factory.
    pub fn from_factory(factory: &ContentFactory) -> LoadResult<Self> {
        let rules = factory.load_rules()?;
        tracing::debug!(
            skills = rules.skills.len(),
            secrets = rules.secrets.len(),
            "loaded rule tables"
        );

        Ok(Self::new(
            Arc::new(rules),
            Arc::new(factory.load_names()?),
            Arc::new(factory.load_customizations()?),
        ))
    }

    /// Oracles over the bundled default content.
    pub fn bundled() -> LoadResult<Self> {
        Self::from_factory(&ContentFactory::bundled())
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Converts oracle manager into BuildEnv for forge-core
    pub fn as_build_env(&self) -> BuildEnv<'_> {
        Env::with_all(self.rules.as_ref(), self.names.as_ref())
            .with_locale(self.locale)
            .into_build_env()
    }

    pub fn rules(&self) -> &RulesSnapshot {
        &self.rules
    }

    pub fn names(&self) -> &SkillNames {
        &self.names
    }

    pub fn customizations(&self) -> &CustomizationCatalog {
        &self.customizations
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
