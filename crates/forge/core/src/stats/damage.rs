//! Damage pipeline: true raw, affinity, effective raw and elemental damage.
//!
//! Every function is pure and returns unrounded values. Skill levels are the
//! uncapped sums from aggregation; bonus lookups saturate at the last table
//! entry.

use super::bonus::{BonusSource, BonusStack};
use crate::config::BuildConfig;
use crate::env::RulesOracle;
use crate::state::{AugmentEffect, SkillRef, UpgradeStat, Weapon, WeaponCustomization};

/// True-raw contributions split for display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBreakdown {
    pub base: f64,
    /// Flat raw from always-on skills.
    pub skills: f64,
    /// Flat raw from conditional skills.
    pub conditional: f64,
    /// Augments, awakenings and upgrades.
    pub customization: f64,
    /// Product of every multiplicative raw bonus.
    pub multiplier: f64,
    pub total: f64,
}

/// Affinity contributions split for display; `total` is clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityBreakdown {
    pub base: f64,
    pub skills: f64,
    pub conditional: f64,
    pub customization: f64,
    pub total: f64,
}

fn skill_source(skill: &SkillRef, rules: &dyn RulesOracle) -> BonusSource {
    if rules.is_conditional(&skill.skill) {
        BonusSource::Conditional
    } else {
        BonusSource::Skill
    }
}

/// Base true raw before any bonus.
///
/// A positive precomputed true raw wins over `attack / bloat`.
pub fn base_true_raw(weapon: &Weapon, rules: &dyn RulesOracle) -> f64 {
    match weapon.true_raw_override() {
        Some(value) => value,
        None => {
            let bloat = rules.bloat_factor(weapon.class);
            if bloat > 0.0 {
                f64::from(weapon.attack) / bloat
            } else {
                f64::from(weapon.attack)
            }
        }
    }
}

pub fn attack_breakdown(
    weapon: &Weapon,
    skills: &[SkillRef],
    customization: &WeaponCustomization,
    rules: &dyn RulesOracle,
) -> AttackBreakdown {
    let base = base_true_raw(weapon, rules);
    let mut stack = BonusStack::new();

    for skill in skills {
        let bonus = rules.skill_bonus(&skill.skill, skill.level);
        let source = skill_source(skill, rules);
        stack.flat(source, bonus.raw);
        if let Some(factor) = bonus.raw_mult {
            stack.more(source, factor);
        }
    }

    let customization_raw = customization.augment_total(AugmentEffect::Attack)
        + customization.attack_awakening_total()
        + customization.upgrade_total(UpgradeStat::Attack);
    stack.flat(BonusSource::Customization, f64::from(customization_raw));

    AttackBreakdown {
        base,
        skills: stack.flat_from(BonusSource::Skill),
        conditional: stack.flat_from(BonusSource::Conditional),
        customization: stack.flat_from(BonusSource::Customization),
        multiplier: stack.multiplier(),
        total: stack.apply(base),
    }
}

/// `(base + flat skills + customization) × Π raw multipliers`.
pub fn true_raw(
    weapon: &Weapon,
    skills: &[SkillRef],
    customization: &WeaponCustomization,
    rules: &dyn RulesOracle,
) -> f64 {
    attack_breakdown(weapon, skills, customization, rules).total
}

pub fn affinity_breakdown(
    weapon: &Weapon,
    skills: &[SkillRef],
    customization: &WeaponCustomization,
    rules: &dyn RulesOracle,
) -> AffinityBreakdown {
    let base = f64::from(weapon.affinity);
    let mut stack = BonusStack::new();

    for skill in skills {
        let bonus = rules.skill_bonus(&skill.skill, skill.level);
        stack.flat(skill_source(skill, rules), f64::from(bonus.affinity));
    }

    let customization_affinity = customization.augment_total(AugmentEffect::Affinity)
        + customization.affinity_awakening_total()
        + customization.upgrade_total(UpgradeStat::Affinity);
    stack.flat(
        BonusSource::Customization,
        f64::from(customization_affinity),
    );

    AffinityBreakdown {
        base,
        skills: stack.flat_from(BonusSource::Skill),
        conditional: stack.flat_from(BonusSource::Conditional),
        customization: stack.flat_from(BonusSource::Customization),
        total: stack.apply_clamped(base, BuildConfig::AFFINITY_MIN, BuildConfig::AFFINITY_MAX),
    }
}

/// Summed affinity clamped to [-100, 100].
pub fn affinity(
    weapon: &Weapon,
    skills: &[SkillRef],
    customization: &WeaponCustomization,
    rules: &dyn RulesOracle,
) -> f64 {
    affinity_breakdown(weapon, skills, customization, rules).total
}

/// Damage multiplier of a critical hit.
///
/// Defaults to 1.25. Any skill whose level defines `crit_damage` replaces it,
/// not only Critical Boost; the highest value wins if several do.
pub fn critical_multiplier(skills: &[SkillRef], rules: &dyn RulesOracle) -> f64 {
    skills
        .iter()
        .filter_map(|skill| rules.skill_bonus(&skill.skill, skill.level).crit_damage)
        .fold(None, |best: Option<f64>, value| {
            Some(best.map_or(value, |best| best.max(value)))
        })
        .unwrap_or(BuildConfig::DEFAULT_CRIT_MULTIPLIER)
}

/// Expected damage factor from affinity.
///
/// Negative affinity rolls feeble hits (75% damage) instead of crits.
pub fn critical_factor(affinity: f64, critical_multiplier: f64) -> f64 {
    let chance = affinity / 100.0;
    if affinity >= 0.0 {
        1.0 + chance * (critical_multiplier - 1.0)
    } else {
        1.0 + chance * (1.0 - BuildConfig::FEEBLE_MULTIPLIER)
    }
}

/// `true_raw × sharpness × critical factor`.
pub fn effective_raw(
    true_raw: f64,
    sharpness_multiplier: f64,
    affinity: f64,
    critical_multiplier: f64,
) -> f64 {
    true_raw * sharpness_multiplier * critical_factor(affinity, critical_multiplier)
}

/// Elemental damage after skills and sharpness, 0 without an element.
///
/// The skill tied to the weapon's element contributes its flat bonus and its
/// multiplier. Every other skill contributes only its flat element bonus.
pub fn elemental_damage(weapon: &Weapon, skills: &[SkillRef], rules: &dyn RulesOracle) -> f64 {
    let Some(element) = weapon.active_element() else {
        return 0.0;
    };

    let matching = rules.element_skill(element.element);
    let mut flat = element.damage;
    let mut multiplier = 1.0;

    for skill in skills {
        let bonus = rules.skill_bonus(&skill.skill, skill.level);
        flat += bonus.element;
        if matching == Some(&skill.skill)
            && let Some(factor) = bonus.element_mult
        {
            multiplier *= factor;
        }
    }

    flat * multiplier * rules.sharpness_element(weapon.sharpness_tier())
}
