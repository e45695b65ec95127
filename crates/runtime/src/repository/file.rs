//! File-based SavedBuildRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use forge_core::BuildState;

use super::error::{RepositoryError, Result};
use super::traits::SavedBuildRepository;
use super::types::{SavedBuild, SavedBuilds};

/// File name of the saved-build document inside the base directory.
pub const SAVED_BUILDS_FILE: &str = "saved_builds.json";

/// On-disk layout of the saved-build document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedBuildsDocument {
    builds: Vec<SavedBuild>,
}

/// File-based implementation of SavedBuildRepository.
///
/// All builds live in a single JSON document (`saved_builds.json`). Every
/// mutation rewrites the document through a temp file and an atomic rename.
pub struct FileBuildRepository {
    path: PathBuf,
    limit: usize,
    // Serialises read-modify-write cycles.
    lock: Mutex<()>,
}

impl FileBuildRepository {
    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>, limit: usize) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(SAVED_BUILDS_FILE),
            limit,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SavedBuilds> {
        if !self.path.exists() {
            return Ok(SavedBuilds::new(self.limit));
        }

        let bytes = fs::read(&self.path)?;
        let document: SavedBuildsDocument = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::CorruptedData(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(SavedBuilds::from_builds(self.limit, document.builds))
    }

    fn write(&self, builds: SavedBuilds) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let document = SavedBuildsDocument {
            builds: builds.into_builds(),
        };

        let bytes = serde_json::to_vec_pretty(&document)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            builds = document.builds.len(),
            "wrote saved builds to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Applies `f` to the stored builds and writes the result back.
    fn update<T>(&self, f: impl FnOnce(&mut SavedBuilds) -> T) -> Result<T> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut builds = self.read()?;
        let result = f(&mut builds);
        self.write(builds)?;
        Ok(result)
    }

    fn snapshot(&self) -> Result<SavedBuilds> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        self.read()
    }
}

impl SavedBuildRepository for FileBuildRepository {
    fn save(&self, name: &str, state: &BuildState) -> Result<Option<SavedBuild>> {
        self.update(|builds| builds.save(name, state))
    }

    fn load(&self, id: &str) -> Result<Option<BuildState>> {
        Ok(self.snapshot()?.get(id).map(|build| build.state.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool> {
        self.update(|builds| builds.delete(id))
    }

    fn rename(&self, id: &str, name: &str) -> Result<Option<SavedBuild>> {
        self.update(|builds| builds.rename(id, name))
    }

    fn list(&self) -> Result<Vec<SavedBuild>> {
        Ok(self.snapshot()?.into_builds())
    }

    fn is_at_limit(&self) -> Result<bool> {
        Ok(self.snapshot()?.is_at_limit())
    }
}
