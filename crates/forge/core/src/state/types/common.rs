use std::fmt;

/// Language-independent skill identifier (snake_case slug such as `attack_boost`).
///
/// Display names are a separate concern handled by [`crate::env::NameOracle`];
/// rule tables and aggregated skill maps are always keyed by this id.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SkillId(String);

impl SkillId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Derives an identifier from an arbitrary display name.
    ///
    /// Alphanumeric runs are lowercased and joined with `_`; everything else is
    /// treated as a separator. `"Critical Eye"` becomes `critical_eye`.
    pub fn slugify(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut separator = false;

        for ch in name.chars() {
            if ch.is_alphanumeric() {
                if separator && !slug.is_empty() {
                    slug.push('_');
                }
                separator = false;
                slug.extend(ch.to_lowercase());
            } else {
                separator = true;
            }
        }

        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SkillId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A skill granted at some level by a single source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRef {
    pub skill: SkillId,
    pub level: u32,
}

impl SkillRef {
    pub fn new(skill: impl Into<SkillId>, level: u32) -> Self {
        Self {
            skill: skill.into(),
            level,
        }
    }
}

/// Languages with display-name tables.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

/// Progression rank an equipment record belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Rank {
    Low,
    High,
    Master,
}
