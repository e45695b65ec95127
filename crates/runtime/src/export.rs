//! Structured JSON export of a build and its stats.

use serde::Serialize;

use forge_core::{
    ActiveSetBonus, BuildEnv, BuildState, BuildStats, DecorationHolder, Resistances, SkillRef,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeaponExport {
    pub name: String,
    pub class: String,
    pub attack: u32,
    pub affinity: f64,
    pub element: Option<String>,
    pub sharpness: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EquipmentExport {
    /// Body slot for armor, `charm` for the charm.
    pub slot: String,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecorationExport {
    pub holder: DecorationHolder,
    pub index: usize,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsExport {
    pub true_raw: f64,
    pub display_attack: u32,
    pub efr: f64,
    pub affinity: f64,
    pub element: f64,
    pub critical_multiplier: f64,
    pub defense: u32,
    pub resistances: Resistances,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillExport {
    pub id: String,
    pub name: String,
    /// `level/cap`, or just the level when uncapped.
    pub level: String,
    pub wasted: u32,
    pub secret_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetBonusExport {
    pub id: String,
    pub pieces: u32,
    pub active_tiers: Vec<String>,
}

/// Everything a consumer needs to display or share a build.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildExport {
    pub weapon: Option<WeaponExport>,
    pub armor: Vec<EquipmentExport>,
    pub charm: Option<EquipmentExport>,
    pub decorations: Vec<DecorationExport>,
    pub stats: StatsExport,
    pub skills: Vec<SkillExport>,
    pub set_bonuses: Vec<SetBonusExport>,
}

fn skill_labels(skills: &[SkillRef], env: &BuildEnv<'_>) -> Vec<String> {
    skills
        .iter()
        .map(|skill| format!("{} Lv{}", env.skill_label(&skill.skill), skill.level))
        .collect()
}

fn set_bonus_export(bonus: &ActiveSetBonus) -> SetBonusExport {
    SetBonusExport {
        id: bonus.id.clone(),
        pieces: bonus.pieces,
        active_tiers: bonus
            .active_tiers()
            .map(|tier| format!("{}: {}", tier.required, tier.effect))
            .collect(),
    }
}

impl BuildExport {
    pub fn new(state: &BuildState, stats: &BuildStats, env: &BuildEnv<'_>) -> Self {
        let weapon = state.weapon.as_ref().map(|weapon| WeaponExport {
            name: weapon.name.clone(),
            class: weapon.class.to_string(),
            attack: stats.display_attack,
            affinity: stats.affinity,
            element: stats
                .element_type
                .map(|element| format!("{} {}", element, stats.element)),
            sharpness: stats.sharpness.to_string(),
        });

        let armor = state
            .armor
            .iter()
            .map(|(slot, piece)| EquipmentExport {
                slot: slot.to_string(),
                name: piece.name.clone(),
                skills: skill_labels(&piece.skills, env),
            })
            .collect();

        let charm = state.charm.as_ref().map(|charm| EquipmentExport {
            slot: "charm".to_string(),
            name: charm.name.clone(),
            skills: skill_labels(&charm.skills, env),
        });

        let decorations = state
            .decorations
            .iter()
            .map(|(holder, index, decoration)| DecorationExport {
                holder,
                index,
                name: decoration.name.clone(),
            })
            .collect();

        let skills = stats
            .active_skills()
            .map(|skill| SkillExport {
                id: skill.skill.to_string(),
                name: skill.name.clone(),
                level: skill.level_label(),
                wasted: skill.wasted(),
                secret_active: skill.secret_active,
            })
            .collect();

        Self {
            weapon,
            armor,
            charm,
            decorations,
            stats: StatsExport {
                true_raw: stats.true_raw,
                display_attack: stats.display_attack,
                efr: stats.efr,
                affinity: stats.affinity,
                element: stats.element,
                critical_multiplier: stats.critical_multiplier,
                defense: stats.defense,
                resistances: stats.resistances,
            },
            skills,
            set_bonuses: stats.set_bonuses.iter().map(set_bonus_export).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
