//! Action dispatch onto the state reducer.

use super::BuildAction;
use super::reducer::StateReducer;
use crate::state::BuildState;

/// Routes an action to the sub-reducer that owns the affected fields.
///
/// Every branch is total: out-of-range indices leave the state untouched.
pub(super) fn apply_action(action: &BuildAction, reducer: &mut StateReducer<'_>) {
    match action {
        BuildAction::SetWeapon { weapon } => {
            reducer.weapon().equip(weapon.clone());
        }
        BuildAction::SetArmor { slot, piece } => {
            reducer.armor().equip(*slot, piece.clone());
        }
        BuildAction::SetCharm { charm } => {
            reducer.set_charm(charm.clone());
        }
        BuildAction::AssignDecoration {
            holder,
            index,
            decoration,
        } => {
            reducer
                .decorations()
                .assign(*holder, *index, decoration.clone());
        }
        BuildAction::ClearDecoration { holder, index } => {
            reducer.decorations().clear(*holder, *index);
        }
        BuildAction::SetAugments { augments } => {
            reducer.customization().set_augments(augments.clone());
        }
        BuildAction::SetAwakenings { awakenings } => {
            reducer.customization().set_awakenings(awakenings.clone());
        }
        BuildAction::SetAwakening { index, awakening } => {
            reducer
                .customization()
                .set_awakening(*index, awakening.clone());
        }
        BuildAction::SetCustomUpgrades { upgrades } => {
            reducer.customization().set_upgrades(upgrades.clone());
        }
        BuildAction::Reset => {
            reducer.replace(BuildState::default());
        }
        BuildAction::Load { state } => {
            reducer.replace(state.as_ref().clone());
        }
    }
}
