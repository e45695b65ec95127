//! Repository contract for named, saved builds.

use forge_core::BuildState;

use super::error::Result;
use super::types::SavedBuild;

/// Persistence of named builds.
///
/// Saves are bounded: once the repository holds its maximum number of
/// builds, `save` returns `Ok(None)` and stores nothing.
pub trait SavedBuildRepository: Send + Sync {
    /// Store a copy of `state` under a new id.
    fn save(&self, name: &str, state: &BuildState) -> Result<Option<SavedBuild>>;

    /// Deep copy of a saved build's state.
    fn load(&self, id: &str) -> Result<Option<BuildState>>;

    /// Returns whether a build was removed.
    fn delete(&self, id: &str) -> Result<bool>;

    fn rename(&self, id: &str, name: &str) -> Result<Option<SavedBuild>>;

    /// Saved builds, newest first.
    fn list(&self) -> Result<Vec<SavedBuild>>;

    fn is_at_limit(&self) -> Result<bool>;

    fn get(&self, id: &str) -> Result<Option<SavedBuild>> {
        Ok(self.list()?.into_iter().find(|build| build.id == id))
    }
}
