//! Human-readable build summary for chat messages.

use std::fmt::{self, Write};

use crate::env::BuildEnv;
use crate::state::{BuildState, SkillRef};
use crate::stats::BuildStats;

fn skill_list(skills: &[SkillRef], env: &BuildEnv<'_>) -> String {
    skills
        .iter()
        .map(|skill| format!("{} Lv{}", env.skill_label(&skill.skill), skill.level))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a build and its stats as Markdown text.
///
/// Sections for missing equipment are skipped; the stats block is always
/// present.
pub fn render_report(state: &BuildState, stats: &BuildStats, env: &BuildEnv<'_>) -> String {
    let mut out = String::from("**Build**\n");
    // `fmt::Write` for `String` never fails.
    write_report(&mut out, state, stats, env).ok();
    out.truncate(out.trim_end().len());
    out
}

fn write_report(
    out: &mut String,
    state: &BuildState,
    stats: &BuildStats,
    env: &BuildEnv<'_>,
) -> fmt::Result {
    if let Some(weapon) = &state.weapon {
        writeln!(out, "\n**Weapon:** {} ({})", weapon.name, weapon.class)?;
        writeln!(
            out,
            "   Attack: {} (True Raw: {})",
            stats.display_attack, stats.true_raw
        )?;
        writeln!(out, "   Affinity: {}%", stats.affinity)?;
        if let Some(element) = stats.element_type {
            writeln!(out, "   Element: {} {}", element, stats.element)?;
        }
        writeln!(out, "   Sharpness: {}", stats.sharpness)?;
    }

    for (slot, piece) in state.armor.iter() {
        writeln!(
            out,
            "{}: {} [{}]",
            slot,
            piece.name,
            skill_list(&piece.skills, env)
        )?;
    }

    if let Some(charm) = &state.charm {
        writeln!(
            out,
            "**Charm:** {} [{}]",
            charm.name,
            skill_list(&charm.skills, env)
        )?;
    }

    let decorations: Vec<&str> = state
        .decorations
        .iter()
        .map(|(_, _, decoration)| decoration.name.as_str())
        .collect();
    if !decorations.is_empty() {
        writeln!(out, "\n**Decorations:** {}", decorations.join(", "))?;
    }

    writeln!(out, "\n**Stats**")?;
    writeln!(out, "   EFR: **{}**", stats.efr)?;
    writeln!(
        out,
        "   True Raw: {} | Display: {}",
        stats.true_raw, stats.display_attack
    )?;
    writeln!(out, "   Affinity: {}%", stats.affinity)?;
    writeln!(out, "   Defense: {}", stats.defense)?;

    let mut active = stats.active_skills().peekable();
    if active.peek().is_some() {
        writeln!(out, "\n**Active Skills:**")?;
        for skill in active {
            write!(out, "   {}: Lv{}", skill.name, skill.level)?;
            match skill.wasted() {
                0 => writeln!(out)?,
                wasted => writeln!(out, " ({wasted} over cap)")?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Env, RulesSnapshot, SkillNames, SkillRule};
    use crate::state::{
        ArmorPiece, ArmorSlot, Charm, Decoration, Element, Locale, SharpnessTier, Weapon,
        WeaponClass,
    };
    use crate::stats::compute_stats;

    fn sample() -> BuildState {
        let mut state = BuildState::new();
        state.weapon = Some(
            Weapon::new(1, "Flame Blade", WeaponClass::GreatSword, 960)
                .with_element(Element::Fire, 300.0)
                .with_sharpness(SharpnessTier::White)
                .with_slots([1]),
        );
        state.armor.head = Some(
            ArmorPiece::new(1, "Helm", ArmorSlot::Head)
                .with_defense(80)
                .with_skill(SkillRef::new("critical_eye", 2)),
        );
        state.charm = Some(Charm::new(
            1,
            "Power Charm",
            vec![SkillRef::new("attack_boost", 1)],
        ));
        state.decorations.weapon = vec![Some(Decoration::new(
            1,
            "Expert Jewel",
            1,
            SkillRef::new("critical_eye", 1),
        ))];
        state
    }

    #[test]
    fn report_lists_equipment_stats_and_skills() {
        let rules = RulesSnapshot::new()
            .with_bloat(WeaponClass::GreatSword, 4.8)
            .with_skill(
                "critical_eye",
                SkillRule {
                    max_level: 2,
                    ..SkillRule::default()
                },
            );
        let names = SkillNames::new()
            .with("critical_eye", Locale::En, "Critical Eye")
            .with("attack_boost", Locale::En, "Attack Boost");
        let env = Env::with_all(&rules, &names).into_build_env();
        let state = sample();
        let stats = compute_stats(&state, &env);

        let report = render_report(&state, &stats, &env);
        assert!(report.starts_with("**Build**"));
        assert!(report.contains("**Weapon:** Flame Blade (great-sword)"));
        assert!(report.contains("   Attack: 960 (True Raw: 200)"));
        assert!(report.contains("   Element: fire 300"));
        assert!(report.contains("   Sharpness: white"));
        assert!(report.contains("head: Helm [Critical Eye Lv2]"));
        assert!(report.contains("**Charm:** Power Charm [Attack Boost Lv1]"));
        assert!(report.contains("**Decorations:** Expert Jewel"));
        assert!(report.contains("   Defense: 80"));
        assert!(report.contains("   Critical Eye: Lv3 (1 over cap)"));
        assert!(report.ends_with("   Attack Boost: Lv1"));
    }

    #[test]
    fn empty_build_still_has_a_stats_block() {
        let rules = RulesSnapshot::new();
        let env = Env::rules_only(&rules).into_build_env();
        let state = BuildState::new();
        let report = render_report(&state, &compute_stats(&state, &env), &env);
        assert!(report.contains("**Stats**"));
        assert!(report.contains("   EFR: **0**"));
        assert!(!report.contains("Weapon"));
        assert!(!report.contains("Active Skills"));
    }

    #[test]
    fn active_skills_are_written_one_per_line() {
        let rules = RulesSnapshot::new().with_skill(
            "critical_eye",
            SkillRule {
                max_level: 2,
                ..SkillRule::default()
            },
        );
        let names = SkillNames::new()
            .with("critical_eye", Locale::En, "Critical Eye")
            .with("attack_boost", Locale::En, "Attack Boost");
        let env = Env::with_all(&rules, &names).into_build_env();
        let state = sample();
        let stats = compute_stats(&state, &env);

        let mut out = String::new();
        assert!(write_report(&mut out, &state, &stats, &env).is_ok());
        assert!(out.ends_with('\n'));

        let lines: Vec<&str> = out.lines().collect();
        let header = lines
            .iter()
            .position(|line| *line == "**Active Skills:**")
            .expect("active skills header");
        assert_eq!(
            &lines[header + 1..],
            ["   Critical Eye: Lv3 (1 over cap)", "   Attack Boost: Lv1"]
        );
    }
}
