//! Terminal rendering of builds and stats.

use console::style;

use forge_core::{BuildState, BuildStats, SkillLevel};

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored summary of stats and skills
    #[default]
    Summary,
    /// Markdown report
    Report,
    /// Structured JSON export
    Json,
}

pub fn print_summary(state: &BuildState, stats: &BuildStats) {
    println!("{}", style("=== Build Summary ===").bold().green());
    println!();

    match &state.weapon {
        Some(weapon) => {
            println!(
                "{} {} ({})",
                style("Weapon:").bold().cyan(),
                weapon.name,
                weapon.class
            );
            println!("  Attack: {} (true raw {})", stats.display_attack, stats.true_raw);
            println!("  Affinity: {}%", stats.affinity);
            println!("  EFR: {}", stats.efr);
            println!("  Sharpness: {}", stats.sharpness);
            if let Some(element) = stats.element_type {
                println!("  Element: {} {}", element, stats.element);
            }
            println!("  Critical multiplier: x{:.2}", stats.critical_multiplier);
        }
        None => println!("{}", style("No weapon equipped").dim()),
    }
    println!("  Defense: {}", stats.defense);
    println!();

    for (slot, piece) in state.armor.iter() {
        println!("{} {}", style(format!("{slot}:")).bold().cyan(), piece.name);
    }
    if let Some(charm) = &state.charm {
        println!("{} {}", style("charm:").bold().cyan(), charm.name);
    }
    for (holder, index, decoration) in state.decorations.iter() {
        println!(
            "  {} {}",
            style(format!("[{holder} {}]", index + 1)).dim(),
            decoration.name
        );
    }
    println!();

    println!("{}", style("Skills:").bold().yellow());
    let skills: Vec<_> = stats.active_skills().collect();
    if skills.is_empty() {
        println!("  {}", style("none").dim());
    }
    for skill in skills {
        print_skill(skill);
    }

    if !stats.set_bonuses.is_empty() {
        println!();
        println!("{}", style("Set bonuses:").bold().yellow());
        for bonus in &stats.set_bonuses {
            println!("  {} ({} pieces)", bonus.id, bonus.pieces);
            for tier in &bonus.tiers {
                let line = format!("{}: {}", tier.required, tier.effect);
                if tier.active {
                    println!("    {}", style(line).green());
                } else {
                    println!("    {}", style(line).dim());
                }
            }
        }
    }

    if stats.wasted_points() > 0 {
        println!();
        println!(
            "{} {} skill points above their caps",
            style("!").yellow().bold(),
            stats.wasted_points()
        );
    }
}

fn print_skill(skill: &SkillLevel) {
    let label = skill.level_label();
    let label = if skill.wasted() > 0 {
        style(label).red()
    } else if skill.secret_active {
        style(label).magenta()
    } else {
        style(label).green()
    };
    println!("  {:<24} {}", skill.name, label);
}

pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", style("!").yellow().bold(), warning);
    }
}
