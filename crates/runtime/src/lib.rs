//! Runtime orchestration for the build calculator.
//!
//! This crate wires the loaded content, the build state owner and the external
//! collaborators together:
//! - [`oracle`] bundles rule tables into [`forge_core::BuildEnv`] values
//! - [`store`] owns the build state and its memoised stats
//! - [`catalog`] serves equipment queries
//! - [`repository`] persists named builds
//! - [`export`] renders builds as structured JSON
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod oracle;
pub mod repository;
pub mod store;

use forge_content::ContentFactory;

pub use catalog::{
    ArmorQuery, CatalogError, EquipmentCatalog, InMemoryCatalog, Page, TextQuery, WeaponQuery,
    fetch_or_empty,
};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use export::BuildExport;
pub use oracle::OracleManager;
pub use repository::{
    FileBuildRepository, InMemoryBuildRepository, RepositoryError, SavedBuild,
    SavedBuildRepository,
};
pub use store::BuildStore;

fn content_factory(config: &RuntimeConfig) -> ContentFactory {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}

/// Oracles for the configured content directory, or the bundled defaults.
pub fn load_oracles(config: &RuntimeConfig) -> Result<OracleManager> {
    let factory = content_factory(config);
    Ok(OracleManager::from_factory(&factory)?.with_locale(config.locale))
}

/// Equipment catalog from the same content source as [`load_oracles`].
pub fn load_catalog(config: &RuntimeConfig, oracles: &OracleManager) -> Result<InMemoryCatalog> {
    let equipment = content_factory(config).load_catalog(oracles.names())?;
    tracing::info!(items = equipment.len(), "loaded equipment catalog");
    Ok(InMemoryCatalog::new(equipment))
}

/// File-backed repository in the configured save directory.
pub fn open_repository(config: &RuntimeConfig) -> Result<FileBuildRepository> {
    Ok(FileBuildRepository::new(
        &config.save_dir,
        config.max_saved_builds(),
    )?)
}
