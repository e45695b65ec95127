//! Saved-build records and the bounded collection both backends share.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forge_core::BuildState;

/// Name given to builds saved with a blank name.
pub const DEFAULT_BUILD_NAME: &str = "Untitled build";

/// A named snapshot of a build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedBuild {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: BuildState,
}

/// Random 128-bit identifier, hex encoded.
pub fn generate_build_id() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Saved builds, newest first, bounded by `limit`.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedBuilds {
    limit: usize,
    builds: Vec<SavedBuild>,
}

impl SavedBuilds {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            builds: Vec::new(),
        }
    }

    /// Wraps builds read from storage, kept in their stored order.
    pub fn from_builds(limit: usize, builds: Vec<SavedBuild>) -> Self {
        Self { limit, builds }
    }

    pub fn into_builds(self) -> Vec<SavedBuild> {
        self.builds
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    pub fn is_at_limit(&self) -> bool {
        self.builds.len() >= self.limit
    }

    pub fn builds(&self) -> &[SavedBuild] {
        &self.builds
    }

    pub fn get(&self, id: &str) -> Option<&SavedBuild> {
        self.builds.iter().find(|build| build.id == id)
    }

    /// Stores a copy of `state` under a fresh id; `None` once the limit is reached.
    pub fn save(&mut self, name: &str, state: &BuildState) -> Option<SavedBuild> {
        if self.is_at_limit() {
            return None;
        }

        let now = Utc::now();
        let name = name.trim();
        let build = SavedBuild {
            id: generate_build_id(),
            name: if name.is_empty() {
                DEFAULT_BUILD_NAME.to_string()
            } else {
                name.to_string()
            },
            created_at: now,
            updated_at: now,
            state: state.clone(),
        };
        self.builds.insert(0, build.clone());
        Some(build)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.builds.len();
        self.builds.retain(|build| build.id != id);
        self.builds.len() != before
    }

    /// Renames a build. A blank name keeps the old one; `updated_at` is refreshed either way.
    pub fn rename(&mut self, id: &str, name: &str) -> Option<SavedBuild> {
        let build = self.builds.iter_mut().find(|build| build.id == id)?;
        let name = name.trim();
        if !name.is_empty() {
            build.name = name.to_string();
        }
        build.updated_at = Utc::now();
        Some(build.clone())
    }
}

impl Default for SavedBuilds {
    fn default() -> Self {
        Self::new(forge_core::BuildConfig::DEFAULT_MAX_SAVED_BUILDS)
    }
}
