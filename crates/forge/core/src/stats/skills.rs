//! Skill aggregation across every equipped source.
//!
//! Sources are visited in a fixed order (armor, charm, decorations, weapon
//! innate skills, lineage skill, awakening skills). Totals are plain sums, so
//! the order only shows up in provenance lists.

use crate::env::RulesOracle;
use crate::state::{BuildState, SkillId, SkillRef};

/// Summed level of one skill and where the points came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregatedSkill {
    pub skill: SkillId,
    pub level: u32,
    pub sources: Vec<String>,
}

/// Skill id → summed level, in first-contribution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillTotals {
    entries: Vec<AggregatedSkill>,
}

impl SkillTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, skill: &SkillRef, source: impl Into<String>) {
        let source = source.into();
        match self.entries.iter_mut().find(|entry| entry.skill == skill.skill) {
            Some(entry) => {
                entry.level += skill.level;
                entry.sources.push(source);
            }
            None => self.entries.push(AggregatedSkill {
                skill: skill.skill.clone(),
                level: skill.level,
                sources: vec![source],
            }),
        }
    }

    pub fn contains(&self, skill: &SkillId) -> bool {
        self.get(skill).is_some()
    }

    pub fn get(&self, skill: &SkillId) -> Option<&AggregatedSkill> {
        self.entries.iter().find(|entry| &entry.skill == skill)
    }

    /// Summed level, 0 when the skill is absent.
    pub fn level(&self, skill: &SkillId) -> u32 {
        self.get(skill).map_or(0, |entry| entry.level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregatedSkill> {
        self.entries.iter()
    }

    /// `(skill, level)` pairs as consumed by the damage pipeline.
    pub fn levels(&self) -> Vec<SkillRef> {
        self.entries
            .iter()
            .map(|entry| SkillRef::new(entry.skill.clone(), entry.level))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for SkillTotals {
    type Item = AggregatedSkill;
    type IntoIter = std::vec::IntoIter<AggregatedSkill>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Collects every skill contribution of a build.
pub fn aggregate_skills(state: &BuildState, rules: &dyn RulesOracle) -> SkillTotals {
    let mut totals = SkillTotals::new();

    for (_, piece) in state.armor.iter() {
        for skill in &piece.skills {
            totals.add(skill, piece.name.as_str());
        }
    }

    if let Some(charm) = &state.charm {
        for skill in &charm.skills {
            totals.add(skill, charm.name.as_str());
        }
    }

    for (holder, _, decoration) in state.decorations.iter() {
        for skill in &decoration.skills {
            totals.add(skill, format!("{} ({})", decoration.name, holder));
        }
    }

    if let Some(weapon) = &state.weapon {
        for skill in &weapon.innate_skills {
            totals.add(skill, weapon.name.as_str());
        }

        if let Some(lineage) = &weapon.lineage
            && let Some(skill) = rules.lineage_skill(lineage)
            && !totals.contains(skill)
        {
            totals.add(
                &SkillRef::new(skill.clone(), 1),
                format!("{} ({})", weapon.name, lineage),
            );
        }
    }

    for awakening in state.customization.equipped_awakenings() {
        if let Some(skill) = awakening.skill() {
            totals.add(skill, format!("Awakening: {}", awakening.name));
        }
    }

    totals
}
