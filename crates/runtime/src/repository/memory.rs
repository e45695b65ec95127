//! In-memory SavedBuildRepository implementation for tests and local runs.

use std::sync::RwLock;

use forge_core::BuildState;

use super::error::{RepositoryError, Result};
use super::traits::SavedBuildRepository;
use super::types::{SavedBuild, SavedBuilds};

/// In-memory implementation of SavedBuildRepository.
pub struct InMemoryBuildRepository {
    builds: RwLock<SavedBuilds>,
}

impl InMemoryBuildRepository {
    /// Create a new empty repository holding at most `limit` builds.
    pub fn new(limit: usize) -> Self {
        Self {
            builds: RwLock::new(SavedBuilds::new(limit)),
        }
    }
}

impl Default for InMemoryBuildRepository {
    fn default() -> Self {
        Self {
            builds: RwLock::new(SavedBuilds::default()),
        }
    }
}

impl SavedBuildRepository for InMemoryBuildRepository {
    fn save(&self, name: &str, state: &BuildState) -> Result<Option<SavedBuild>> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.save(name, state))
    }

    fn load(&self, id: &str) -> Result<Option<BuildState>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.get(id).map(|build| build.state.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.delete(id))
    }

    fn rename(&self, id: &str, name: &str) -> Result<Option<SavedBuild>> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.rename(id, name))
    }

    fn list(&self) -> Result<Vec<SavedBuild>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.builds().to_vec())
    }

    fn is_at_limit(&self) -> Result<bool> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.is_at_limit())
    }

    fn get(&self, id: &str) -> Result<Option<SavedBuild>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.get(id).cloned())
    }
}
