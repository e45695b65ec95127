use super::common::SkillRef;

/// A jewel socketed into a decoration slot.
///
/// Regular jewels carry one skill; tier-4 combo jewels carry several. All of
/// them contribute additively.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoration {
    pub id: u32,
    pub name: String,
    pub tier: u8,
    pub skills: Vec<SkillRef>,
}

impl Decoration {
    pub fn new(id: u32, name: impl Into<String>, tier: u8, skill: SkillRef) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
            skills: vec![skill],
        }
    }

    pub fn combo(id: u32, name: impl Into<String>, tier: u8, skills: Vec<SkillRef>) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
            skills,
        }
    }

    /// Whether the jewel can be socketed into a slot of `slot_tier`.
    pub fn fits(&self, slot_tier: u8) -> bool {
        slot_tier > 0 && self.tier <= slot_tier
    }
}
