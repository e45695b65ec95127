//! Compute stats for a build file or a saved build.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use forge_runtime::{BuildStore, RuntimeConfig, SavedBuildRepository, open_repository};

use super::load_content;
use crate::build_file::{BuildFile, selection_warnings};
use crate::output::{OutputFormat, print_summary, print_warnings};

#[derive(Parser, Debug)]
pub struct Stats {
    /// Build file (JSON of catalog ids)
    #[arg(value_name = "FILE", conflicts_with = "saved")]
    file: Option<PathBuf>,

    /// Id of a saved build to load instead of a file
    #[arg(long, value_name = "ID")]
    saved: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Save the computed build under this name
    #[arg(long, value_name = "NAME")]
    save: Option<String>,
}

impl Stats {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let (oracles, catalog) = load_content(config)?;
        let mut store = BuildStore::new(oracles);

        match (&self.file, &self.saved) {
            (Some(path), _) => {
                let actions = BuildFile::load(path)?.actions(&catalog, store.oracles())?;
                store.dispatch_all(actions);
            }
            (None, Some(id)) => {
                let repository = open_repository(config)?;
                if !store.load_from(&repository, id) {
                    bail!("Saved build not found: {id}");
                }
            }
            (None, None) => bail!("Provide a build file or --saved <ID>"),
        }

        print_warnings(&selection_warnings(&store.state(), store.oracles().rules()));

        match self.format {
            OutputFormat::Summary => print_summary(&store.state(), &store.stats()),
            OutputFormat::Report => println!("{}", store.report()),
            OutputFormat::Json => println!("{}", store.export().to_json()?),
        }

        if let Some(name) = &self.save {
            let repository = open_repository(config)?;
            save(&store, &repository, name)?;
        }

        Ok(())
    }
}

fn save(store: &BuildStore, repository: &dyn SavedBuildRepository, name: &str) -> Result<()> {
    let Some(saved) = store.save_to(repository, name) else {
        bail!("Build not saved; delete a saved build first");
    };
    eprintln!(
        "{} Saved {} as {}",
        style("✓").green().bold(),
        style(&saved.name).cyan(),
        style(&saved.id).dim()
    );
    Ok(())
}
