//! Repository layer for saved builds.
//!
//! Repositories hold data the user creates at runtime. Static content (rule
//! tables, equipment) is served by oracles and the catalog, not repositories.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileBuildRepository, SAVED_BUILDS_FILE};
pub use memory::InMemoryBuildRepository;
pub use traits::SavedBuildRepository;
pub use types::{DEFAULT_BUILD_NAME, SavedBuild, SavedBuilds, generate_build_id};
