//! Full stat snapshot of a build.

use super::caps::{SkillLevel, resolve_skill_caps, unlocked_secrets};
use super::damage::{
    AffinityBreakdown, AttackBreakdown, affinity_breakdown, attack_breakdown, critical_multiplier,
    effective_raw, elemental_damage,
};
use super::set_bonus::{ActiveSetBonus, resolve_set_bonuses};
use super::skills::aggregate_skills;
use crate::config::BuildConfig;
use crate::env::BuildEnv;
use crate::state::{AugmentEffect, BuildState, Element, Resistances, SharpnessTier, UpgradeStat};

/// Everything derived from a build state.
///
/// `true_raw`, `efr` and `element` are rounded to one decimal; breakdowns
/// keep full precision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    pub true_raw: f64,
    /// In-game attack number, `round(true_raw × bloat)`.
    pub display_attack: u32,
    pub efr: f64,
    pub affinity: f64,
    pub element: f64,
    pub element_type: Option<Element>,
    pub critical_multiplier: f64,
    pub sharpness: SharpnessTier,
    pub attack_breakdown: AttackBreakdown,
    pub affinity_breakdown: AffinityBreakdown,
    pub defense: u32,
    pub resistances: Resistances,
    /// Ordered by level, highest first.
    pub skills: Vec<SkillLevel>,
    pub set_bonuses: Vec<ActiveSetBonus>,
    /// Set bonuses currently unlocking a secret cap.
    pub secret_set_bonuses: Vec<String>,
}

impl Default for BuildStats {
    fn default() -> Self {
        Self {
            true_raw: 0.0,
            display_attack: 0,
            efr: 0.0,
            affinity: 0.0,
            element: 0.0,
            element_type: None,
            critical_multiplier: BuildConfig::DEFAULT_CRIT_MULTIPLIER,
            sharpness: SharpnessTier::default(),
            attack_breakdown: AttackBreakdown::default(),
            affinity_breakdown: AffinityBreakdown::default(),
            defense: 0,
            resistances: Resistances::default(),
            skills: Vec::new(),
            set_bonuses: Vec::new(),
            secret_set_bonuses: Vec::new(),
        }
    }
}

impl BuildStats {
    pub fn skill(&self, skill: &str) -> Option<&SkillLevel> {
        self.skills.iter().find(|entry| entry.skill.as_str() == skill)
    }

    /// Skills with a positive level.
    pub fn active_skills(&self) -> impl Iterator<Item = &SkillLevel> {
        self.skills.iter().filter(|entry| entry.level > 0)
    }

    pub fn wasted_points(&self) -> u32 {
        self.skills.iter().map(SkillLevel::wasted).sum()
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Runs the whole pipeline: aggregation, set bonuses, caps and damage.
pub fn compute_stats(state: &BuildState, env: &BuildEnv<'_>) -> BuildStats {
    let rules = env.rules();
    let totals = aggregate_skills(state, rules);
    let set_bonuses = resolve_set_bonuses(&state.armor, &state.customization.awakenings);
    let unlocks = unlocked_secrets(&set_bonuses, rules);
    let levels = totals.levels();

    let mut stats = BuildStats {
        skills: resolve_skill_caps(&totals, &unlocks, env),
        secret_set_bonuses: unlocks.set_bonuses().to_vec(),
        set_bonuses,
        ..BuildStats::default()
    };

    let mut defense: i64 = 0;
    for (_, piece) in state.armor.iter() {
        defense += i64::from(piece.defense.base);
        stats.resistances += piece.resistances;
    }

    if let Some(weapon) = &state.weapon {
        let customization = &state.customization;
        let attack = attack_breakdown(weapon, &levels, customization, rules);
        let affinity = affinity_breakdown(weapon, &levels, customization, rules);
        let crit = critical_multiplier(&levels, rules);
        let sharpness = weapon.sharpness_tier();
        let efr = effective_raw(
            attack.total,
            rules.sharpness_raw(sharpness),
            affinity.total,
            crit,
        );
        let bloat = rules.bloat_factor(weapon.class);

        stats.true_raw = round1(attack.total);
        stats.display_attack = (attack.total * bloat).round().max(0.0) as u32;
        stats.efr = round1(efr);
        stats.affinity = affinity.total;
        stats.element = round1(elemental_damage(weapon, &levels, rules));
        stats.element_type = weapon.active_element().map(|element| element.element);
        stats.critical_multiplier = crit;
        stats.sharpness = sharpness;
        stats.attack_breakdown = attack;
        stats.affinity_breakdown = affinity;

        defense += i64::from(weapon.defense)
            + i64::from(customization.augment_total(AugmentEffect::Defense))
            + i64::from(customization.upgrade_total(UpgradeStat::Defense));
    }

    stats.defense = u32::try_from(defense.max(0)).unwrap_or(u32::MAX);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        Env, RulesSnapshot, SecretRule, SecretTier, SecretUnlock, SkillBonus, SkillNames,
        SkillRule,
    };
    use crate::state::{
        ArmorPiece, ArmorSlot, Augment, CustomUpgrade, Locale, SetBonusRef, SkillId, SkillRef,
        Weapon, WeaponClass,
    };

    fn rules() -> RulesSnapshot {
        RulesSnapshot::new()
            .with_bloat(WeaponClass::LongSword, 3.3)
            .with_sharpness(SharpnessTier::White, 1.32, 1.15)
            .with_sharpness(SharpnessTier::Blue, 1.2, 1.0625)
            .with_skill(
                "attack_boost",
                SkillRule {
                    max_level: 7,
                    levels: vec![SkillBonus {
                        raw: 3.0,
                        ..SkillBonus::default()
                    }],
                    ..SkillRule::default()
                },
            )
            .with_skill(
                "agitator",
                SkillRule {
                    max_level: 5,
                    secret_max_level: 7,
                    conditional: true,
                    ..SkillRule::default()
                },
            )
            .with_secret(SecretRule {
                id: "Raging Brachydios Will".into(),
                aliases: Vec::new(),
                tiers: vec![SecretTier {
                    required: 2,
                    unlocks: vec![SecretUnlock::Skill(SkillId::new("agitator"))],
                }],
            })
    }

    fn brachy(id: u32, slot: ArmorSlot, agitator: u32) -> ArmorPiece {
        ArmorPiece::new(id, format!("Brachy {id}"), slot)
            .with_defense(100)
            .with_skill(SkillRef::new("agitator", agitator))
            .with_set_bonus(SetBonusRef::new("Raging Brachydios Will").with_tier(2, "Agitator Secret"))
    }

    #[test]
    fn empty_build_has_zero_offense() {
        let rules = rules();
        let env = Env::rules_only(&rules).into_build_env();
        let stats = compute_stats(&BuildState::new(), &env);
        assert_eq!(stats, BuildStats::default());
        assert_eq!(stats.sharpness, SharpnessTier::White);
    }

    #[test]
    fn armor_only_build_reports_defense_and_skills() {
        let rules = rules();
        let env = Env::rules_only(&rules).into_build_env();
        let mut state = BuildState::new();
        state.armor.head = Some(brachy(1, ArmorSlot::Head, 2));
        state.armor.chest = Some(brachy(2, ArmorSlot::Chest, 3));

        let stats = compute_stats(&state, &env);
        assert_eq!(stats.true_raw, 0.0);
        assert_eq!(stats.defense, 200);
        assert_eq!(stats.secret_set_bonuses, vec!["Raging Brachydios Will".to_string()]);
        let agitator = stats.skill("agitator").unwrap();
        assert_eq!(agitator.level, 5);
        assert_eq!(agitator.effective_cap(), 7);
        assert!(stats.set_bonuses[0].tiers[0].active);
    }

    #[test]
    fn weapon_values_are_rounded_for_display() {
        let rules = rules();
        let env = Env::rules_only(&rules).into_build_env();
        let mut state = BuildState::new();
        state.weapon = Some(
            Weapon::new(1, "Test Katana", WeaponClass::LongSword, 990)
                .with_affinity(10)
                .with_sharpness(SharpnessTier::Blue),
        );
        state.armor.head = Some(
            ArmorPiece::new(1, "Helm", ArmorSlot::Head)
                .with_skill(SkillRef::new("attack_boost", 1)),
        );

        let stats = compute_stats(&state, &env);
        assert_eq!(stats.true_raw, 303.0);
        assert_eq!(stats.display_attack, 1000);
        assert_eq!(stats.affinity, 10.0);
        assert_eq!(stats.critical_multiplier, 1.25);
        // 303 × 1.2 × 1.025
        assert_eq!(stats.efr, 372.7);
        assert_eq!(stats.element, 0.0);
        assert_eq!(stats.element_type, None);
        assert_eq!(stats.sharpness, SharpnessTier::Blue);
    }

    #[test]
    fn defense_includes_customization() {
        let rules = rules();
        let env = Env::rules_only(&rules).into_build_env();
        let mut state = BuildState::new();
        let mut weapon = Weapon::new(1, "Shield Blade", WeaponClass::LongSword, 660);
        weapon.defense = 20;
        state.weapon = Some(weapon);
        state.armor.legs = Some(ArmorPiece::new(5, "Greaves", ArmorSlot::Legs).with_defense(90));
        state.customization.augments.push(Augment::new(
            "defense",
            "Defense Increase",
            AugmentEffect::Defense,
            10,
            1,
        ));
        state
            .customization
            .upgrades
            .push(CustomUpgrade::new(1, UpgradeStat::Defense, 5));

        assert_eq!(compute_stats(&state, &env).defense, 125);
    }

    #[test]
    fn skills_are_sorted_by_level_with_stable_ties() {
        let rules = rules();
        let names = SkillNames::new().with("agitator", Locale::Pt, "Agitador");
        let env = Env::with_all(&rules, &names)
            .with_locale(Locale::Pt)
            .into_build_env();

        let mut state = BuildState::new();
        state.armor.head = Some(
            ArmorPiece::new(1, "Helm", ArmorSlot::Head)
                .with_skill(SkillRef::new("weakness_exploit", 1))
                .with_skill(SkillRef::new("handicraft", 1)),
        );
        state.armor.chest = Some(brachy(2, ArmorSlot::Chest, 3));

        let stats = compute_stats(&state, &env);
        let order: Vec<&str> = stats.skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(order, ["agitator", "weakness_exploit", "handicraft"]);
        assert_eq!(stats.skills[0].name, "Agitador");
        assert_eq!(stats.skills[1].name, "weakness_exploit");
    }
}
