//! Bonus accumulation for the damage pipeline.
//!
//! Stat values follow a two-step stack: `(base + Σ flat) × Π more`, optionally
//! clamped. Each entry remembers where it came from so breakdowns can be
//! reported without a second pass over the equipment.

/// Origin of a bonus, used to split totals for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BonusSource {
    /// Skills that are always on.
    Skill,
    /// Skills that only apply under a gameplay condition.
    Conditional,
    /// Augments, awakenings and incremental upgrades.
    Customization,
}

/// A single bonus applied to a stat value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    /// Additive, summed before any multiplier.
    Flat(f64),
    /// Multiplicative factor, compounded with every other factor (1.1 = +10%).
    More(f64),
}

/// Bonuses collected for one stat.
///
/// ```
/// # use forge_core::stats::bonus::{Bonus, BonusSource, BonusStack};
/// let mut stack = BonusStack::new();
/// stack.add(BonusSource::Skill, Bonus::Flat(9.0));
/// stack.add(BonusSource::Customization, Bonus::Flat(5.0));
/// stack.add(BonusSource::Conditional, Bonus::More(1.1));
///
/// assert_eq!(stack.flat_from(BonusSource::Skill), 9.0);
/// assert!((stack.apply(186.0) - 220.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BonusStack {
    entries: Vec<(BonusSource, Bonus)>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, source: BonusSource, bonus: Bonus) {
        self.entries.push((source, bonus));
    }

    pub fn flat(&mut self, source: BonusSource, value: f64) {
        if value != 0.0 {
            self.add(source, Bonus::Flat(value));
        }
    }

    pub fn more(&mut self, source: BonusSource, factor: f64) {
        self.add(source, Bonus::More(factor));
    }

    /// Sum of every flat bonus.
    pub fn flat_total(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|(_, bonus)| match bonus {
                Bonus::Flat(value) => Some(*value),
                Bonus::More(_) => None,
            })
            .sum()
    }

    /// Sum of the flat bonuses from one source.
    pub fn flat_from(&self, source: BonusSource) -> f64 {
        self.entries
            .iter()
            .filter(|(origin, _)| *origin == source)
            .filter_map(|(_, bonus)| match bonus {
                Bonus::Flat(value) => Some(*value),
                Bonus::More(_) => None,
            })
            .sum()
    }

    /// Product of every multiplicative bonus (1.0 when there are none).
    pub fn multiplier(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|(_, bonus)| match bonus {
                Bonus::More(factor) => Some(*factor),
                Bonus::Flat(_) => None,
            })
            .product()
    }

    /// `(base + flat) × multiplier`.
    pub fn apply(&self, base: f64) -> f64 {
        (base + self.flat_total()) * self.multiplier()
    }

    pub fn apply_clamped(&self, base: f64, min: f64, max: f64) -> f64 {
        self.apply(base).clamp(min, max)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
