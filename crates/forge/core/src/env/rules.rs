//! Rule-table oracle: bloat factors, sharpness multipliers, per-level skill
//! bonuses and set-bonus secret unlocks.

use crate::state::{Element, SharpnessTier, SkillId, WeaponClass};

/// Modifiers granted by one level of a skill.
///
/// Absent fields contribute nothing: zero for flat values, 1.0 for multipliers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SkillBonus {
    /// Flat true-raw bonus.
    pub raw: f64,
    /// Multiplicative raw bonus, compounded across skills.
    pub raw_mult: Option<f64>,
    /// Flat affinity in percentage points.
    pub affinity: i32,
    /// Flat element bonus.
    pub element: f64,
    /// Multiplicative element bonus, only honoured for the weapon's own element skill.
    pub element_mult: Option<f64>,
    /// Critical damage multiplier replacing the 1.25 default.
    pub crit_damage: Option<f64>,
}

impl SkillBonus {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Static rule for one skill.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SkillRule {
    /// Normal level cap, 0 when unknown.
    pub max_level: u32,
    /// Extended cap reachable once a set bonus unlocks the secret, 0 when none.
    pub secret_max_level: u32,
    /// Bonus only applies under a gameplay condition; affects breakdown display only.
    pub conditional: bool,
    /// Element whose damage this skill boosts.
    pub element: Option<Element>,
    /// Bonuses for levels 1..=N.
    pub levels: Vec<SkillBonus>,
}

impl SkillRule {
    /// Bonus for a summed level.
    ///
    /// Levels past the table reuse the last entry; level 0 yields no bonus.
    pub fn bonus_at(&self, level: u32) -> Option<&SkillBonus> {
        if level == 0 || self.levels.is_empty() {
            return None;
        }
        let index = (level as usize).min(self.levels.len()) - 1;
        self.levels.get(index)
    }
}

/// Skill unlocked by a secret tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SecretUnlock {
    /// Every skill in the build.
    All,
    Skill(SkillId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecretTier {
    pub required: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocks: Vec<SecretUnlock>,
}

/// Secret unlocks of one set bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecretRule {
    /// Canonical set-bonus identity.
    pub id: String,
    /// Localised names the same set bonus is known by.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
    pub tiers: Vec<SecretTier>,
}

impl SecretRule {
    pub fn matches(&self, set_bonus: &str) -> bool {
        self.id == set_bonus || self.aliases.iter().any(|alias| alias == set_bonus)
    }
}

/// Read-only access to the static rule tables.
///
/// Every lookup is permissive: unknown keys fall back to neutral values so
/// malformed or future equipment degrades to "no bonus".
pub trait RulesOracle: Send + Sync {
    /// Display-to-true-raw divisor for a weapon class.
    fn bloat_factor(&self, class: WeaponClass) -> f64;

    fn sharpness_raw(&self, tier: SharpnessTier) -> f64;

    fn sharpness_element(&self, tier: SharpnessTier) -> f64;

    fn skill_rule(&self, skill: &SkillId) -> Option<&SkillRule>;

    /// Secret rule for a set-bonus identity or any of its aliases.
    fn secret_rule(&self, set_bonus: &str) -> Option<&SecretRule>;

    /// Implicit skill granted by a weapon lineage tag.
    fn lineage_skill(&self, lineage: &str) -> Option<&SkillId>;

    /// Augment slot budget for a weapon rarity.
    fn augment_slot_limit(&self, rarity: u8) -> u32;

    /// Skill that boosts the given element.
    fn element_skill(&self, element: Element) -> Option<&SkillId>;

    fn skill_bonus(&self, skill: &SkillId, level: u32) -> SkillBonus {
        self.skill_rule(skill)
            .and_then(|rule| rule.bonus_at(level))
            .cloned()
            .unwrap_or_default()
    }

    fn max_level(&self, skill: &SkillId) -> u32 {
        self.skill_rule(skill).map_or(0, |rule| rule.max_level)
    }

    fn secret_max_level(&self, skill: &SkillId) -> u32 {
        self.skill_rule(skill).map_or(0, |rule| rule.secret_max_level)
    }

    fn is_conditional(&self, skill: &SkillId) -> bool {
        self.skill_rule(skill).is_some_and(|rule| rule.conditional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(values: &[f64]) -> SkillRule {
        SkillRule {
            max_level: values.len() as u32,
            levels: values
                .iter()
                .map(|raw| SkillBonus {
                    raw: *raw,
                    ..SkillBonus::default()
                })
                .collect(),
            ..SkillRule::default()
        }
    }

    #[test]
    fn bonus_lookup_saturates_at_last_level() {
        let rule = ladder(&[3.0, 6.0, 9.0]);
        assert_eq!(rule.bonus_at(0), None);
        assert_eq!(rule.bonus_at(1).map(|b| b.raw), Some(3.0));
        assert_eq!(rule.bonus_at(3).map(|b| b.raw), Some(9.0));
        assert_eq!(rule.bonus_at(10).map(|b| b.raw), Some(9.0));
    }

    #[test]
    fn empty_rule_yields_nothing() {
        assert_eq!(SkillRule::default().bonus_at(4), None);
    }

    #[test]
    fn secret_rule_matches_aliases() {
        let rule = SecretRule {
            id: "Raging Brachydios Will".into(),
            aliases: vec!["Vontade de Brachydios".into()],
            tiers: Vec::new(),
        };
        assert!(rule.matches("Vontade de Brachydios"));
        assert!(rule.matches("Raging Brachydios Will"));
        assert!(!rule.matches("Alma de Rath"));
    }
}
