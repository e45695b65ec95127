//! Build state transitions.
//!
//! [`BuildAction`] is the closed set of operations a build supports. The
//! [`BuildEngine`] applies them to a state through [`StateReducer`]; the free
//! function [`transition`] is the copy-on-write form used by state owners.
//! Transitions never fail.
mod reducer;
mod transition;

pub use reducer::{
    ArmorReducer, CustomizationReducer, DecorationReducer, StateReducer, WeaponReducer,
};

use crate::state::{
    ArmorPiece, ArmorSlot, Augment, Awakening, AwakeningSlots, BuildState, Charm, CustomUpgrade,
    Decoration, DecorationHolder, Weapon,
};

/// Every operation the build state supports.
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum BuildAction {
    /// Set or clear the weapon; resets weapon decorations and all customization.
    SetWeapon { weapon: Option<Weapon> },
    /// Set or clear an armor piece; resets that slot's decorations.
    SetArmor {
        slot: ArmorSlot,
        piece: Option<ArmorPiece>,
    },
    SetCharm { charm: Option<Charm> },
    AssignDecoration {
        holder: DecorationHolder,
        index: usize,
        decoration: Decoration,
    },
    ClearDecoration {
        holder: DecorationHolder,
        index: usize,
    },
    SetAugments { augments: Vec<Augment> },
    SetAwakenings { awakenings: AwakeningSlots },
    SetAwakening {
        index: usize,
        awakening: Option<Awakening>,
    },
    SetCustomUpgrades { upgrades: Vec<CustomUpgrade> },
    Reset,
    /// Replace everything with a previously saved state.
    Load { state: Box<BuildState> },
}

impl BuildAction {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Applies actions to a borrowed build state.
pub struct BuildEngine<'a> {
    state: &'a mut BuildState,
}

impl<'a> BuildEngine<'a> {
    pub fn new(state: &'a mut BuildState) -> Self {
        Self { state }
    }

    pub fn execute(&mut self, action: &BuildAction) {
        let mut reducer = StateReducer::new(self.state);
        transition::apply_action(action, &mut reducer);
    }

    pub fn state(&self) -> &BuildState {
        self.state
    }
}

/// Produces the state that results from applying `action` to `state`.
pub fn transition(state: &BuildState, action: &BuildAction) -> BuildState {
    let mut next = state.clone();
    BuildEngine::new(&mut next).execute(action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        AugmentEffect, AwakeningEffect, SkillRef, UpgradeStat, WeaponClass,
    };

    fn jewel(tier: u8) -> Decoration {
        Decoration::new(tier as u32, format!("Jewel {tier}"), tier, SkillRef::new("attack_boost", 1))
    }

    fn armed(slots: &[u8]) -> BuildState {
        let weapon = Weapon::new(1, "Blade", WeaponClass::LongSword, 660).with_slots(slots.to_vec());
        transition(&BuildState::new(), &BuildAction::SetWeapon { weapon: Some(weapon) })
    }

    #[test]
    fn weapon_swap_resets_weapon_scoped_state() {
        let mut state = armed(&[3, 2, 0]);
        for index in 0..3 {
            state = transition(
                &state,
                &BuildAction::AssignDecoration {
                    holder: DecorationHolder::Weapon,
                    index,
                    decoration: jewel(1),
                },
            );
        }
        state = transition(
            &state,
            &BuildAction::SetAugments {
                augments: vec![Augment::new("atk", "Attack", AugmentEffect::Attack, 5, 1)],
            },
        );
        state = transition(
            &state,
            &BuildAction::SetAwakening {
                index: 0,
                awakening: Some(Awakening::new("atk_vi", "Attack VI", 6, AwakeningEffect::Attack(20))),
            },
        );
        state = transition(
            &state,
            &BuildAction::SetCustomUpgrades {
                upgrades: vec![CustomUpgrade::new(1, UpgradeStat::Attack, 5)],
            },
        );
        assert_eq!(state.decorations.weapon.iter().flatten().count(), 3);

        let replacement = Weapon::new(2, "Other", WeaponClass::Bow, 300).with_slots(vec![1, 0]);
        let swapped = transition(
            &state,
            &BuildAction::SetWeapon {
                weapon: Some(replacement),
            },
        );

        assert_eq!(swapped.decorations.weapon, vec![None, None]);
        assert!(swapped.customization.is_empty());
        assert_eq!(swapped.weapon.as_ref().map(|w| w.id), Some(2));
    }

    #[test]
    fn tier_mismatch_is_accepted_by_the_transition() {
        let state = armed(&[1]);
        let next = transition(
            &state,
            &BuildAction::AssignDecoration {
                holder: DecorationHolder::Weapon,
                index: 0,
                decoration: jewel(3),
            },
        );
        assert_eq!(next.decorations.weapon[0].as_ref().map(|d| d.tier), Some(3));
    }

    #[test]
    fn out_of_range_decoration_index_is_ignored() {
        let state = armed(&[2]);
        let next = transition(
            &state,
            &BuildAction::AssignDecoration {
                holder: DecorationHolder::Weapon,
                index: 4,
                decoration: jewel(1),
            },
        );
        assert_eq!(next, state);

        let cleared = transition(
            &state,
            &BuildAction::ClearDecoration {
                holder: DecorationHolder::Head,
                index: 0,
            },
        );
        assert_eq!(cleared, state);
    }

    #[test]
    fn armor_swap_resets_only_its_own_decorations() {
        let helm = ArmorPiece::new(10, "Helm", ArmorSlot::Head).with_slots(vec![2, 1]);
        let mut state = armed(&[1]);
        state = transition(
            &state,
            &BuildAction::SetArmor {
                slot: ArmorSlot::Head,
                piece: Some(helm.clone()),
            },
        );
        state = transition(
            &state,
            &BuildAction::AssignDecoration {
                holder: DecorationHolder::Head,
                index: 1,
                decoration: jewel(1),
            },
        );
        state = transition(
            &state,
            &BuildAction::AssignDecoration {
                holder: DecorationHolder::Weapon,
                index: 0,
                decoration: jewel(1),
            },
        );

        let next = transition(
            &state,
            &BuildAction::SetArmor {
                slot: ArmorSlot::Head,
                piece: Some(helm.with_slots(vec![3])),
            },
        );
        assert_eq!(next.decorations.head, vec![None]);
        assert!(next.decorations.weapon[0].is_some());

        let removed = transition(
            &next,
            &BuildAction::SetArmor {
                slot: ArmorSlot::Head,
                piece: None,
            },
        );
        assert!(removed.armor.head.is_none());
        assert!(removed.decorations.head.is_empty());
    }

    #[test]
    fn awakening_index_outside_fixed_slots_is_ignored() {
        let state = armed(&[]);
        let next = transition(
            &state,
            &BuildAction::SetAwakening {
                index: 5,
                awakening: Some(Awakening::new("x", "X", 1, AwakeningEffect::Affinity(5))),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn reset_and_load_replace_everything() {
        let state = armed(&[3]);
        let reset = transition(&state, &BuildAction::Reset);
        assert!(reset.is_empty());

        let loaded = transition(
            &reset,
            &BuildAction::Load {
                state: Box::new(state.clone()),
            },
        );
        assert_eq!(loaded, state);
    }

    #[test]
    fn transition_leaves_the_input_untouched() {
        let state = armed(&[3]);
        let before = state.clone();
        let _ = transition(&state, &BuildAction::Reset);
        assert_eq!(state, before);
    }

    #[test]
    fn action_names_are_snake_case() {
        assert_eq!(BuildAction::Reset.name(), "reset");
        assert_eq!(
            BuildAction::SetCharm { charm: None }.name(),
            "set_charm"
        );
    }
}
