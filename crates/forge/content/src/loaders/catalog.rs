//! Equipment catalog loader.

use std::path::Path;

use forge_core::{Equipment, NameOracle};

use crate::loaders::{LoadResult, read_file};
use crate::records::{CatalogFile, CatalogRecord, RecordNormalizer};

/// Loader for equipment catalogs from RON files.
///
/// Records that fail normalisation are skipped with a warning; only a file
/// that cannot be parsed at all is an error.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path, names: &dyn NameOracle) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        Self::parse(&content, names)
    }

    pub fn parse(content: &str, names: &dyn NameOracle) -> LoadResult<Vec<Equipment>> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Ok(Self::normalize_all(
            file.into_records(),
            &RecordNormalizer::new(names),
        ))
    }

    pub fn normalize_all(
        records: impl IntoIterator<Item = CatalogRecord>,
        normalizer: &RecordNormalizer<'_>,
    ) -> Vec<Equipment> {
        let mut equipment = Vec::new();
        let mut skipped = 0usize;

        for record in records {
            let kind = record.kind();
            match normalizer.normalize(record) {
                Ok(item) => equipment.push(item),
                Err(error) => {
                    skipped += 1;
                    tracing::warn!(%kind, %error, "skipping malformed catalog record");
                }
            }
        }

        tracing::debug!(loaded = equipment.len(), skipped, "normalized catalog records");
        equipment
    }
}
