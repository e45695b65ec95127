use crate::config::BuildConfig;
use crate::state::{
    ArmorPiece, ArmorSet, ArmorSlot, Augment, Awakening, AwakeningSlots, BuildState, Charm,
    CustomUpgrade, Decoration, DecorationHolder, DecorationSlots, Weapon, WeaponCustomization,
};

/// Wraps mutable access to [`BuildState`] with structured sub-reducers.
pub struct StateReducer<'a> {
    state: &'a mut BuildState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut BuildState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BuildState {
        self.state
    }

    pub fn weapon(&mut self) -> WeaponReducer<'_> {
        WeaponReducer {
            weapon: &mut self.state.weapon,
            decorations: &mut self.state.decorations,
            customization: &mut self.state.customization,
        }
    }

    pub fn armor(&mut self) -> ArmorReducer<'_> {
        ArmorReducer {
            armor: &mut self.state.armor,
            decorations: &mut self.state.decorations,
        }
    }

    pub fn decorations(&mut self) -> DecorationReducer<'_> {
        DecorationReducer {
            decorations: &mut self.state.decorations,
        }
    }

    pub fn customization(&mut self) -> CustomizationReducer<'_> {
        CustomizationReducer {
            customization: &mut self.state.customization,
        }
    }

    pub fn set_charm(&mut self, charm: Option<Charm>) -> Option<Charm> {
        std::mem::replace(&mut self.state.charm, charm)
    }

    pub fn replace(&mut self, next: BuildState) -> BuildState {
        std::mem::replace(self.state, next)
    }
}

/// Weapon swaps also reset every weapon-scoped field in one step.
pub struct WeaponReducer<'a> {
    weapon: &'a mut Option<Weapon>,
    decorations: &'a mut DecorationSlots,
    customization: &'a mut WeaponCustomization,
}

impl<'a> WeaponReducer<'a> {
    pub fn equip(&mut self, weapon: Option<Weapon>) -> Option<Weapon> {
        let slots = weapon.as_ref().map_or(&[][..], |weapon| weapon.slots.as_slice());
        self.decorations.reset(DecorationHolder::Weapon, slots);
        *self.customization = WeaponCustomization::default();
        std::mem::replace(self.weapon, weapon)
    }
}

pub struct ArmorReducer<'a> {
    armor: &'a mut ArmorSet,
    decorations: &'a mut DecorationSlots,
}

impl<'a> ArmorReducer<'a> {
    /// Places `piece` in `slot` and resizes that slot's decoration list to the new piece.
    ///
    /// The piece is stored under `slot` regardless of its own `slot` field.
    pub fn equip(&mut self, slot: ArmorSlot, piece: Option<ArmorPiece>) -> Option<ArmorPiece> {
        let slots = piece.as_ref().map_or(&[][..], |piece| piece.slots.as_slice());
        self.decorations.reset(slot.into(), slots);
        std::mem::replace(self.armor.slot_mut(slot), piece)
    }
}

pub struct DecorationReducer<'a> {
    decorations: &'a mut DecorationSlots,
}

impl<'a> DecorationReducer<'a> {
    /// Socket a decoration. Returns `false` when `index` is outside the holder's slot list.
    ///
    /// Tier compatibility is not checked here.
    pub fn assign(
        &mut self,
        holder: DecorationHolder,
        index: usize,
        decoration: Decoration,
    ) -> bool {
        match self.decorations.holder_mut(holder).get_mut(index) {
            Some(slot) => {
                *slot = Some(decoration);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self, holder: DecorationHolder, index: usize) -> Option<Decoration> {
        self.decorations
            .holder_mut(holder)
            .get_mut(index)
            .and_then(Option::take)
    }
}

pub struct CustomizationReducer<'a> {
    customization: &'a mut WeaponCustomization,
}

impl<'a> CustomizationReducer<'a> {
    pub fn set_augments(&mut self, augments: Vec<Augment>) {
        self.customization.augments = augments;
    }

    pub fn set_awakenings(&mut self, awakenings: AwakeningSlots) {
        self.customization.awakenings = awakenings;
    }

    /// Returns `false` when `index` is not one of the fixed awakening slots.
    pub fn set_awakening(&mut self, index: usize, awakening: Option<Awakening>) -> bool {
        if index >= BuildConfig::AWAKENING_SLOTS {
            return false;
        }
        self.customization.awakenings[index] = awakening;
        true
    }

    pub fn set_upgrades(&mut self, upgrades: Vec<CustomUpgrade>) {
        self.customization.upgrades = upgrades;
    }
}
