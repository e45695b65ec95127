/// Build calculator constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    /// Number of saved builds a persistence backend accepts before refusing new saves.
    pub max_saved_builds: usize,
}

impl BuildConfig {
    // ===== compile-time constants used as type parameters =====
    /// Fixed number of awakening slots on an awakening-capable weapon.
    pub const AWAKENING_SLOTS: usize = 5;
    /// Highest level an incremental upgrade track can reach for a single stat.
    pub const MAX_UPGRADE_LEVEL: u8 = 7;
    /// Highest decoration tier (tier 4 covers combo jewels).
    pub const MAX_DECORATION_TIER: u8 = 4;

    // ===== damage formula constants =====
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.25;
    /// Damage multiplier of a feeble hit (negative affinity).
    pub const FEEBLE_MULTIPLIER: f64 = 0.75;
    pub const AFFINITY_MIN: f64 = -100.0;
    pub const AFFINITY_MAX: f64 = 100.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_SAVED_BUILDS: usize = 50;

    pub fn new() -> Self {
        Self {
            max_saved_builds: Self::DEFAULT_MAX_SAVED_BUILDS,
        }
    }

    pub fn with_max_saved_builds(max_saved_builds: usize) -> Self {
        Self { max_saved_builds }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
