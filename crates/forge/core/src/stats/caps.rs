//! Skill caps, secret unlocks and wasted points.

use std::collections::BTreeSet;

use super::set_bonus::ActiveSetBonus;
use super::skills::SkillTotals;
use crate::env::{BuildEnv, RulesOracle, SecretUnlock};
use crate::state::SkillId;

/// Secret caps unlocked by the build's set bonuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecretUnlocks {
    all: bool,
    skills: BTreeSet<SkillId>,
    /// Set bonuses with at least one met tier that unlocks something.
    set_bonuses: Vec<String>,
}

impl SecretUnlocks {
    pub fn is_unlocked(&self, skill: &SkillId) -> bool {
        self.all || self.skills.contains(skill)
    }

    pub fn unlocks_all(&self) -> bool {
        self.all
    }

    pub fn set_bonuses(&self) -> &[String] {
        &self.set_bonuses
    }
}

/// Walks every met tier of every set bonus with a secret rule.
pub fn unlocked_secrets(bonuses: &[ActiveSetBonus], rules: &dyn RulesOracle) -> SecretUnlocks {
    let mut unlocks = SecretUnlocks::default();

    for bonus in bonuses {
        let Some(rule) = rules.secret_rule(&bonus.id) else {
            continue;
        };

        let mut contributes = false;
        for tier in rule.tiers.iter().filter(|tier| bonus.is_tier_met(tier.required)) {
            for unlock in &tier.unlocks {
                contributes = true;
                match unlock {
                    SecretUnlock::All => unlocks.all = true,
                    SecretUnlock::Skill(skill) => {
                        unlocks.skills.insert(skill.clone());
                    }
                }
            }
        }

        if contributes {
            unlocks.set_bonuses.push(bonus.id.clone());
        }
    }

    unlocks
}

/// Aggregated skill annotated with its caps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevel {
    pub skill: SkillId,
    /// Display name in the environment's locale.
    pub name: String,
    /// Uncapped sum over all sources.
    pub level: u32,
    /// Normal cap, 0 meaning uncapped.
    pub max_level: u32,
    /// Extended cap, 0 when the skill has no secret.
    pub secret_max_level: u32,
    pub secret_active: bool,
    pub sources: Vec<String>,
}

impl SkillLevel {
    /// Cap in force for this build, 0 meaning uncapped.
    pub fn effective_cap(&self) -> u32 {
        if self.secret_active && self.secret_max_level > 0 {
            self.secret_max_level
        } else {
            self.max_level
        }
    }

    pub fn is_uncapped(&self) -> bool {
        self.effective_cap() == 0
    }

    /// Points above the effective cap. Informational; bonuses still use `level`.
    pub fn wasted(&self) -> u32 {
        match self.effective_cap() {
            0 => 0,
            cap => self.level.saturating_sub(cap),
        }
    }

    /// `level/cap`, or just `level` when uncapped.
    pub fn level_label(&self) -> String {
        match self.effective_cap() {
            0 => self.level.to_string(),
            cap => format!("{}/{}", self.level, cap),
        }
    }
}

/// Annotates aggregated skills with caps, ordered by level (highest first).
///
/// Ties keep aggregation order.
pub fn resolve_skill_caps(
    totals: &SkillTotals,
    unlocks: &SecretUnlocks,
    env: &BuildEnv<'_>,
) -> Vec<SkillLevel> {
    let rules = env.rules();
    let mut skills: Vec<SkillLevel> = totals
        .iter()
        .map(|entry| SkillLevel {
            skill: entry.skill.clone(),
            name: env.skill_label(&entry.skill),
            level: entry.level,
            max_level: rules.max_level(&entry.skill),
            secret_max_level: rules.secret_max_level(&entry.skill),
            secret_active: unlocks.is_unlocked(&entry.skill),
            sources: entry.sources.clone(),
        })
        .collect();

    skills.sort_by(|a, b| b.level.cmp(&a.level));
    skills
}
