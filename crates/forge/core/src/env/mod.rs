//! Traits describing read-only rule data.
//!
//! Oracles expose the static rule tables and skill display names. The [`Env`]
//! aggregate bundles them so the stat pipeline can reach everything it needs
//! without hard coupling to concrete implementations or global state.
mod names;
mod rules;
mod snapshot;

pub use names::NameOracle;
pub use rules::{RulesOracle, SecretRule, SecretTier, SecretUnlock, SkillBonus, SkillRule};
pub use snapshot::{RulesSnapshot, SkillName, SkillNames};

use crate::state::{Locale, SkillId};

/// Aggregates the oracles required by the stat pipeline and report.
pub struct Env<'a, R, N>
where
    R: RulesOracle + ?Sized,
    N: NameOracle + ?Sized,
{
    rules: &'a R,
    names: Option<&'a N>,
    locale: Locale,
}

impl<R, N> Clone for Env<'_, R, N>
where
    R: RulesOracle + ?Sized,
    N: NameOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, N> Copy for Env<'_, R, N>
where
    R: RulesOracle + ?Sized,
    N: NameOracle + ?Sized,
{
}

pub type BuildEnv<'a> = Env<'a, dyn RulesOracle + 'a, dyn NameOracle + 'a>;

impl<'a, R, N> Env<'a, R, N>
where
    R: RulesOracle + ?Sized,
    N: NameOracle + ?Sized,
{
    pub fn new(rules: &'a R, names: Option<&'a N>) -> Self {
        Self {
            rules,
            names,
            locale: Locale::default(),
        }
    }

    pub fn with_all(rules: &'a R, names: &'a N) -> Self {
        Self::new(rules, Some(names))
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn rules(&self) -> &'a R {
        self.rules
    }

    pub fn names(&self) -> Option<&'a N> {
        self.names
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Display name of a skill in the environment's locale.
    ///
    /// Falls back to the skill id when no name table is attached.
    pub fn skill_label(&self, skill: &SkillId) -> String {
        match self.names {
            Some(names) => names.label(skill, self.locale),
            None => skill.to_string(),
        }
    }
}

impl<'a, R> Env<'a, R, SkillNames>
where
    R: RulesOracle + ?Sized,
{
    /// Environment without display names; labels fall back to skill ids.
    pub fn rules_only(rules: &'a R) -> Self {
        Self::new(rules, None)
    }
}

impl<'a, R, N> Env<'a, R, N>
where
    R: RulesOracle + 'a,
    N: NameOracle + 'a,
{
    /// Converts this environment into a trait-object based `BuildEnv` (consumes self).
    pub fn into_build_env(self) -> BuildEnv<'a> {
        self.as_build_env()
    }

    /// Converts this environment into a trait-object based `BuildEnv` (borrows self).
    pub fn as_build_env(&self) -> BuildEnv<'a> {
        let rules: &'a dyn RulesOracle = self.rules;
        let names: Option<&'a dyn NameOracle> = self.names.map(|names| names as _);
        Env::new(rules, names).with_locale(self.locale)
    }
}
