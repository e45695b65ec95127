//! Derived build numbers.
//!
//! The pipeline runs in four stages, each usable on its own:
//! 1. [`aggregate_skills`] sums skill levels over every equipped source.
//! 2. [`resolve_set_bonuses`] counts pieces per set-bonus identity.
//! 3. [`resolve_skill_caps`] applies normal and secret caps.
//! 4. The damage functions turn the uncapped levels into numbers.
//!
//! [`compute_stats`] composes all of them into a [`BuildStats`].
pub mod bonus;
pub mod caps;
pub mod damage;
pub mod set_bonus;
pub mod skills;
pub mod snapshot;

pub use bonus::{Bonus, BonusSource, BonusStack};
pub use caps::{SecretUnlocks, SkillLevel, resolve_skill_caps, unlocked_secrets};
pub use damage::{
    AffinityBreakdown, AttackBreakdown, affinity, affinity_breakdown, attack_breakdown,
    base_true_raw, critical_factor, critical_multiplier, effective_raw, elemental_damage,
    true_raw,
};
pub use set_bonus::{ActiveSetBonus, SetBonusTierState, resolve_set_bonuses};
pub use skills::{AggregatedSkill, SkillTotals, aggregate_skills};
pub use snapshot::{BuildStats, compute_stats};
