mod catalog;
mod saved;
mod stats;

pub use catalog::CatalogCommand;
pub use saved::SavedCommand;
pub use stats::Stats;

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use forge_runtime::{InMemoryCatalog, OracleManager, RuntimeConfig, load_catalog, load_oracles};

/// Oracles and catalog from the configured content source.
pub(crate) fn load_content(config: &RuntimeConfig) -> Result<(OracleManager, InMemoryCatalog)> {
    let oracles = load_oracles(config)?;
    let catalog = load_catalog(config, &oracles)?;
    Ok((oracles, catalog))
}

/// Clap value parser for label enums parsed through `FromStr`.
pub(crate) fn parse_label<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|error| format!("unknown value `{value}`: {error}"))
}
