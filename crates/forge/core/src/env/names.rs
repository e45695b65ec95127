//! Display-name translation for skills.

use crate::state::{Locale, SkillId};

/// Maps language-independent skill ids to localised display names and back.
pub trait NameOracle: Send + Sync {
    fn display_name(&self, skill: &SkillId, locale: Locale) -> Option<&str>;

    /// Resolves a display name in any locale, ignoring case.
    fn resolve(&self, name: &str) -> Option<SkillId>;

    /// Display name, falling back to the raw id when no translation exists.
    fn label(&self, skill: &SkillId, locale: Locale) -> String {
        self.display_name(skill, locale)
            .map_or_else(|| skill.to_string(), str::to_string)
    }
}
