//! Set-bonus piece counting.

use crate::state::{ArmorSet, AwakeningSlots};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBonusTierState {
    pub required: u8,
    pub effect: String,
    pub active: bool,
}

/// A set bonus referenced by at least one equipped source.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSetBonus {
    pub id: String,
    /// Matching armor pieces plus matching awakening essences.
    pub pieces: u32,
    pub tiers: Vec<SetBonusTierState>,
}

impl ActiveSetBonus {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            pieces: 0,
            tiers: Vec::new(),
        }
    }

    pub fn is_tier_met(&self, required: u8) -> bool {
        self.pieces >= u32::from(required)
    }

    pub fn active_tiers(&self) -> impl Iterator<Item = &SetBonusTierState> {
        self.tiers.iter().filter(|tier| tier.active)
    }
}

/// Counts pieces per set-bonus identity, in first-encounter order.
///
/// Tier tables come from the first armor piece that defines any for the
/// identity; an identity only reached through awakening essences has none.
pub fn resolve_set_bonuses(armor: &ArmorSet, awakenings: &AwakeningSlots) -> Vec<ActiveSetBonus> {
    let mut bonuses: Vec<ActiveSetBonus> = Vec::new();

    for (_, piece) in armor.iter() {
        let Some(set_bonus) = &piece.set_bonus else {
            continue;
        };
        let entry = entry_for(&mut bonuses, &set_bonus.id);
        entry.pieces += 1;
        if entry.tiers.is_empty() {
            entry.tiers = set_bonus
                .tiers
                .iter()
                .map(|tier| SetBonusTierState {
                    required: tier.required,
                    effect: tier.effect.clone(),
                    active: false,
                })
                .collect();
        }
    }

    for essence in awakenings
        .iter()
        .flatten()
        .filter_map(|awakening| awakening.set_bonus_essence())
    {
        entry_for(&mut bonuses, essence).pieces += 1;
    }

    for bonus in &mut bonuses {
        let pieces = bonus.pieces;
        for tier in &mut bonus.tiers {
            tier.active = pieces >= u32::from(tier.required);
        }
    }

    bonuses
}

fn entry_for<'a>(bonuses: &'a mut Vec<ActiveSetBonus>, id: &str) -> &'a mut ActiveSetBonus {
    let index = match bonuses.iter().position(|bonus| bonus.id == id) {
        Some(index) => index,
        None => {
            bonuses.push(ActiveSetBonus::new(id));
            bonuses.len() - 1
        }
    };
    &mut bonuses[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArmorPiece, ArmorSlot, Awakening, AwakeningEffect, SetBonusRef};

    fn brachy(id: u32, slot: ArmorSlot, with_tiers: bool) -> ArmorPiece {
        let mut set_bonus = SetBonusRef::new("Raging Brachydios Will");
        if with_tiers {
            set_bonus = set_bonus
                .with_tier(2, "Agitator Secret")
                .with_tier(4, "Blast Bonus");
        }
        ArmorPiece::new(id, format!("Brachy {id}"), slot).with_set_bonus(set_bonus)
    }

    #[test]
    fn counts_pieces_and_flags_tiers() {
        let armor = ArmorSet {
            head: Some(brachy(1, ArmorSlot::Head, false)),
            chest: Some(brachy(2, ArmorSlot::Chest, true)),
            arms: Some(ArmorPiece::new(3, "Plain", ArmorSlot::Arms)),
            ..ArmorSet::default()
        };

        let bonuses = resolve_set_bonuses(&armor, &Default::default());
        assert_eq!(bonuses.len(), 1);
        let bonus = &bonuses[0];
        assert_eq!(bonus.pieces, 2);
        assert_eq!(bonus.tiers.len(), 2);
        assert!(bonus.tiers[0].active);
        assert!(!bonus.tiers[1].active);
    }

    #[test]
    fn essences_add_a_piece() {
        let armor = ArmorSet {
            head: Some(brachy(1, ArmorSlot::Head, true)),
            ..ArmorSet::default()
        };
        let mut awakenings: AwakeningSlots = Default::default();
        awakenings[4] = Some(Awakening::new(
            "brachy_essence",
            "Raging Brachydios Essence",
            5,
            AwakeningEffect::SetBonusEssence("Raging Brachydios Will".into()),
        ));
        awakenings[0] = Some(Awakening::new(
            "teo_essence",
            "Teostra Essence",
            5,
            AwakeningEffect::SetBonusEssence("Teostra Technique".into()),
        ));

        let bonuses = resolve_set_bonuses(&armor, &awakenings);
        assert_eq!(bonuses.len(), 2);
        assert_eq!(bonuses[0].id, "Raging Brachydios Will");
        assert_eq!(bonuses[0].pieces, 2);
        assert!(bonuses[0].tiers[0].active);
        assert_eq!(bonuses[1].id, "Teostra Technique");
        assert_eq!(bonuses[1].pieces, 1);
        assert!(bonuses[1].tiers.is_empty());
    }

    #[test]
    fn no_set_bonus_sources_yield_nothing() {
        let armor = ArmorSet {
            legs: Some(ArmorPiece::new(5, "Plain", ArmorSlot::Legs)),
            ..ArmorSet::default()
        };
        assert!(resolve_set_bonuses(&armor, &Default::default()).is_empty());
    }
}
