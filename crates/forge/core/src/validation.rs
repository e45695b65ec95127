//! Selection-time checks for decorations and weapon customization.
//!
//! Store transitions accept whatever they are given; these helpers are what a
//! picker calls before dispatching.

use crate::config::BuildConfig;
use crate::env::RulesOracle;
use crate::state::{
    Augment, BuildState, CustomUpgrade, Decoration, DecorationHolder, UpgradeStat, Weapon,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CustomizationError {
    #[error("{holder} has no slot {index}")]
    SlotOutOfRange {
        holder: DecorationHolder,
        index: usize,
    },

    #[error("tier {decoration} decoration does not fit a tier {slot} slot")]
    TierTooHigh { decoration: u8, slot: u8 },

    #[error("augments use {used} slots but the weapon allows {limit}")]
    AugmentSlotsExceeded { used: u32, limit: u32 },

    #[error("{stat} upgrades are already at level {max}", max = BuildConfig::MAX_UPGRADE_LEVEL)]
    UpgradeTrackFull { stat: UpgradeStat },

    #[error("{stat} upgrade level {level} is outside 1..={max}", max = BuildConfig::MAX_UPGRADE_LEVEL)]
    UpgradeLevelOutOfRange { stat: UpgradeStat, level: u8 },

    #[error("{stat} upgrades skip level {expected}")]
    UpgradeGap { stat: UpgradeStat, expected: u8 },
}

/// Which customization mechanism a weapon uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CustomizationKind {
    Augments,
    Awakenings,
    Upgrades,
}

impl CustomizationKind {
    pub fn for_weapon(weapon: &Weapon) -> Self {
        if weapon.awakening_capable {
            Self::Awakenings
        } else if weapon.customizable {
            Self::Upgrades
        } else {
            Self::Augments
        }
    }
}

pub fn decoration_fits(decoration: &Decoration, slot_tier: u8) -> bool {
    decoration.fits(slot_tier)
}

/// Decorations that fit a slot of the given tier, in input order.
pub fn compatible_decorations(decorations: &[Decoration], slot_tier: u8) -> Vec<&Decoration> {
    decorations
        .iter()
        .filter(|decoration| decoration_fits(decoration, slot_tier))
        .collect()
}

/// Checks a decoration against the slot it would be assigned to.
pub fn validate_decoration(
    state: &BuildState,
    holder: DecorationHolder,
    index: usize,
    decoration: &Decoration,
) -> Result<(), CustomizationError> {
    let slot = state
        .holder_slots(holder)
        .get(index)
        .copied()
        .ok_or(CustomizationError::SlotOutOfRange { holder, index })?;

    if decoration_fits(decoration, slot) {
        Ok(())
    } else {
        Err(CustomizationError::TierTooHigh {
            decoration: decoration.tier,
            slot,
        })
    }
}

pub fn augment_slots_used(augments: &[Augment]) -> u32 {
    augments.iter().map(|augment| augment.slot_cost).sum()
}

pub fn remaining_augment_slots(rarity: u8, augments: &[Augment], rules: &dyn RulesOracle) -> u32 {
    rules
        .augment_slot_limit(rarity)
        .saturating_sub(augment_slots_used(augments))
}

pub fn validate_augments(
    rarity: u8,
    augments: &[Augment],
    rules: &dyn RulesOracle,
) -> Result<(), CustomizationError> {
    let used = augment_slots_used(augments);
    let limit = rules.augment_slot_limit(rarity);
    if used > limit {
        return Err(CustomizationError::AugmentSlotsExceeded { used, limit });
    }
    Ok(())
}

/// Highest upgrade level reached for a stat.
pub fn upgrade_level(upgrades: &[CustomUpgrade], stat: UpgradeStat) -> u8 {
    upgrades
        .iter()
        .filter(|upgrade| upgrade.stat == stat)
        .map(|upgrade| upgrade.level)
        .max()
        .unwrap_or(0)
}

/// Each stat's levels must form 1..=N without gaps, N ≤ 7.
pub fn validate_custom_upgrades(upgrades: &[CustomUpgrade]) -> Result<(), CustomizationError> {
    let mut stats: Vec<UpgradeStat> = upgrades.iter().map(|upgrade| upgrade.stat).collect();
    stats.sort();
    stats.dedup();

    for stat in stats {
        let mut levels: Vec<u8> = upgrades
            .iter()
            .filter(|upgrade| upgrade.stat == stat)
            .map(|upgrade| upgrade.level)
            .collect();
        levels.sort_unstable();

        for (position, level) in levels.into_iter().enumerate() {
            if level == 0 || level > BuildConfig::MAX_UPGRADE_LEVEL {
                return Err(CustomizationError::UpgradeLevelOutOfRange { stat, level });
            }
            let expected = position as u8 + 1;
            if level != expected {
                return Err(CustomizationError::UpgradeGap { stat, expected });
            }
        }
    }

    Ok(())
}

/// Appends the next level of a stat's track.
pub fn push_upgrade(
    upgrades: &[CustomUpgrade],
    stat: UpgradeStat,
    value: i32,
) -> Result<Vec<CustomUpgrade>, CustomizationError> {
    let level = upgrade_level(upgrades, stat);
    if level >= BuildConfig::MAX_UPGRADE_LEVEL {
        return Err(CustomizationError::UpgradeTrackFull { stat });
    }

    let mut next = upgrades.to_vec();
    next.push(CustomUpgrade::new(level + 1, stat, value));
    Ok(next)
}

/// Removes the highest level of a stat; unchanged when the stat has none.
pub fn pop_upgrade(upgrades: &[CustomUpgrade], stat: UpgradeStat) -> Vec<CustomUpgrade> {
    let level = upgrade_level(upgrades, stat);
    upgrades
        .iter()
        .filter(|upgrade| !(upgrade.stat == stat && upgrade.level == level))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BuildAction, transition};
    use crate::env::RulesSnapshot;
    use crate::state::{AugmentEffect, SkillRef, WeaponClass};

    fn jewel(tier: u8) -> Decoration {
        Decoration::new(u32::from(tier), format!("Jewel {tier}"), tier, SkillRef::new("attack_boost", 1))
    }

    fn augment(cost: u32) -> Augment {
        Augment::new("attack", "Attack Increase", AugmentEffect::Attack, 5, cost)
    }

    #[test]
    fn decoration_tiers_filter_picker_choices() {
        let jewels = [jewel(1), jewel(2), jewel(3), jewel(4)];
        let fitting: Vec<u8> = compatible_decorations(&jewels, 2)
            .into_iter()
            .map(|jewel| jewel.tier)
            .collect();
        assert_eq!(fitting, [1, 2]);
        assert!(compatible_decorations(&jewels, 0).is_empty());
    }

    #[test]
    fn mismatched_tier_is_rejected_here_but_not_by_the_store() {
        let weapon = crate::state::Weapon::new(1, "Blade", WeaponClass::GreatSword, 960).with_slots([1]);
        let state = transition(&BuildState::new(), &BuildAction::SetWeapon { weapon: Some(weapon) });

        assert_eq!(
            validate_decoration(&state, DecorationHolder::Weapon, 0, &jewel(3)),
            Err(CustomizationError::TierTooHigh {
                decoration: 3,
                slot: 1
            })
        );
        assert_eq!(
            validate_decoration(&state, DecorationHolder::Weapon, 1, &jewel(1)),
            Err(CustomizationError::SlotOutOfRange {
                holder: DecorationHolder::Weapon,
                index: 1
            })
        );

        let state = transition(
            &state,
            &BuildAction::AssignDecoration {
                holder: DecorationHolder::Weapon,
                index: 0,
                decoration: jewel(3),
            },
        );
        assert_eq!(state.decorations.weapon, vec![Some(jewel(3))]);
    }

    #[test]
    fn augment_budget_depends_on_rarity() {
        let rules = RulesSnapshot::new()
            .with_augment_limit(10, 5)
            .with_augment_limit(12, 3);
        let augments = [augment(2), augment(2)];

        assert_eq!(remaining_augment_slots(10, &augments, &rules), 1);
        assert_eq!(remaining_augment_slots(12, &augments, &rules), 0);
        assert!(validate_augments(10, &augments, &rules).is_ok());
        assert_eq!(
            validate_augments(12, &augments, &rules),
            Err(CustomizationError::AugmentSlotsExceeded { used: 4, limit: 3 })
        );
        assert_eq!(remaining_augment_slots(8, &[], &rules), 3);
    }

    #[test]
    fn upgrades_stop_at_level_seven() {
        let mut upgrades = Vec::new();
        for _ in 0..7 {
            upgrades = push_upgrade(&upgrades, UpgradeStat::Attack, 5).unwrap();
        }
        assert_eq!(upgrade_level(&upgrades, UpgradeStat::Attack), 7);
        assert_eq!(
            push_upgrade(&upgrades, UpgradeStat::Attack, 5),
            Err(CustomizationError::UpgradeTrackFull {
                stat: UpgradeStat::Attack
            })
        );
        assert!(validate_custom_upgrades(&upgrades).is_ok());
    }

    #[test]
    fn pop_removes_the_highest_level_only() {
        let upgrades = push_upgrade(&[], UpgradeStat::Affinity, 2).unwrap();
        let upgrades = push_upgrade(&upgrades, UpgradeStat::Affinity, 2).unwrap();
        let upgrades = push_upgrade(&upgrades, UpgradeStat::Defense, 5).unwrap();

        let popped = pop_upgrade(&upgrades, UpgradeStat::Affinity);
        assert_eq!(upgrade_level(&popped, UpgradeStat::Affinity), 1);
        assert_eq!(upgrade_level(&popped, UpgradeStat::Defense), 1);
        assert_eq!(pop_upgrade(&popped, UpgradeStat::Element), popped);
    }

    #[test]
    fn gaps_and_out_of_range_levels_are_reported() {
        let gap = [
            CustomUpgrade::new(1, UpgradeStat::Element, 10),
            CustomUpgrade::new(3, UpgradeStat::Element, 10),
        ];
        assert_eq!(
            validate_custom_upgrades(&gap),
            Err(CustomizationError::UpgradeGap {
                stat: UpgradeStat::Element,
                expected: 2
            })
        );

        let eighth = [CustomUpgrade::new(8, UpgradeStat::Attack, 5)];
        assert_eq!(
            validate_custom_upgrades(&eighth),
            Err(CustomizationError::UpgradeLevelOutOfRange {
                stat: UpgradeStat::Attack,
                level: 8
            })
        );
    }

    #[test]
    fn weapon_flags_pick_the_customization_kind() {
        let mut weapon = crate::state::Weapon::new(1, "Blade", WeaponClass::GreatSword, 960);
        assert_eq!(CustomizationKind::for_weapon(&weapon), CustomizationKind::Augments);
        weapon.customizable = true;
        assert_eq!(CustomizationKind::for_weapon(&weapon), CustomizationKind::Upgrades);
        weapon.awakening_capable = true;
        assert_eq!(CustomizationKind::for_weapon(&weapon), CustomizationKind::Awakenings);
    }
}
