//! Set-bonus secret unlock loader.

use std::collections::BTreeSet;
use std::path::Path;

use forge_core::SecretRule;

use crate::loaders::{LoadResult, read_file};

/// Loader for secret unlock rules from RON files.
pub struct SecretLoader;

impl SecretLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SecretRule>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses the rule list, refusing names claimed by two rules.
    pub fn parse(content: &str) -> LoadResult<Vec<SecretRule>> {
        let rules: Vec<SecretRule> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse set bonus RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for rule in &rules {
            for name in std::iter::once(&rule.id).chain(&rule.aliases) {
                if !seen.insert(name.as_str()) {
                    anyhow::bail!("Set bonus name '{}' is declared twice", name);
                }
            }
        }

        tracing::debug!(set_bonuses = rules.len(), "loaded secret rules");
        Ok(rules)
    }
}
