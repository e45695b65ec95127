//! Content loaders for reading rule and catalog data from files.
//!
//! Every loader reads one file (or an in-memory string for bundled data) and
//! converts it into core types or oracle snapshots.

pub mod catalog;
pub mod customizations;
pub mod factory;
pub mod secrets;
pub mod skills;
pub mod tables;

pub use catalog::CatalogLoader;
pub use customizations::{CustomizationCatalog, CustomizationLoader, UpgradeTemplate};
pub use factory::ContentFactory;
pub use secrets::SecretLoader;
pub use skills::{SkillCatalog, SkillLoader};
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// RON parser that accepts bare values for `Option` fields.
pub(crate) fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
