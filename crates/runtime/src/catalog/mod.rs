//! Equipment catalog collaborator.
//!
//! The catalog answers filtered, paginated queries for each equipment kind.
//! Records enter through [`forge_content::RecordNormalizer`], so everything
//! served here is already typed.

mod memory;
mod query;

pub use memory::InMemoryCatalog;
pub use query::{ArmorQuery, Page, TextQuery, WeaponQuery};

use forge_core::{ArmorPiece, Charm, Decoration, Weapon};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A backend could not reach its source. [`InMemoryCatalog`] never
    /// fails; remote catalogs report connection and fetch errors here.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only equipment source.
pub trait EquipmentCatalog: Send + Sync {
    fn weapons(&self, query: &WeaponQuery) -> Result<Page<Weapon>>;

    fn armor(&self, query: &ArmorQuery) -> Result<Page<ArmorPiece>>;

    fn decorations(&self, query: &TextQuery) -> Result<Page<Decoration>>;

    fn charms(&self, query: &TextQuery) -> Result<Page<Charm>>;
}

/// Items of a query, or an empty list when the catalog failed.
pub fn fetch_or_empty<T>(what: &str, result: Result<Page<T>>) -> Vec<T> {
    match result {
        Ok(page) => page.items,
        Err(error) => {
            tracing::warn!(%error, "failed to fetch {}", what);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_become_empty_lists() {
        let failed: Result<Page<Charm>> = Err(CatalogError::Unavailable("offline".into()));
        assert!(fetch_or_empty("charms", failed).is_empty());

        let page = Page {
            items: vec![Charm::new(1, "Power Charm V", Vec::new())],
            total: 1,
            offset: 0,
        };
        assert_eq!(fetch_or_empty("charms", Ok(page)).len(), 1);
    }

    struct Offline;

    impl EquipmentCatalog for Offline {
        fn weapons(&self, _: &WeaponQuery) -> Result<Page<Weapon>> {
            Err(CatalogError::Unavailable("weapons endpoint down".into()))
        }

        fn armor(&self, _: &ArmorQuery) -> Result<Page<ArmorPiece>> {
            Err(CatalogError::Unavailable("armor endpoint down".into()))
        }

        fn decorations(&self, _: &TextQuery) -> Result<Page<Decoration>> {
            Err(CatalogError::Unavailable("decorations endpoint down".into()))
        }

        fn charms(&self, _: &TextQuery) -> Result<Page<Charm>> {
            Err(CatalogError::Unavailable("charms endpoint down".into()))
        }
    }

    #[test]
    fn unreachable_backend_degrades_to_empty_lists() {
        let catalog: &dyn EquipmentCatalog = &Offline;

        let error = catalog.charms(&TextQuery::default()).unwrap_err();
        assert_eq!(error.to_string(), "catalog unavailable: charms endpoint down");

        assert!(fetch_or_empty("weapons", catalog.weapons(&WeaponQuery::default())).is_empty());
        assert!(fetch_or_empty("armor", catalog.armor(&ArmorQuery::default())).is_empty());
        assert!(
            fetch_or_empty("decorations", catalog.decorations(&TextQuery::default())).is_empty()
        );
    }
}
