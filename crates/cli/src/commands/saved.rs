//! Saved-build management.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;

use forge_runtime::{BuildStore, RuntimeConfig, SavedBuild, SavedBuildRepository, open_repository};

use super::load_content;
use crate::build_file::BuildFile;
use crate::output::{OutputFormat, print_summary};

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved builds, newest first
    List,

    /// Save a build file under a name
    Save {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Display name (blank falls back to a default)
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Show a saved build with its stats
    Show {
        id: String,

        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },

    /// Rename a saved build
    Rename { id: String, name: String },

    /// Delete a saved build
    Delete { id: String },
}

impl SavedCommand {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let repository = open_repository(config)?;
        tracing::debug!(path = %repository.path().display(), "opened saved builds");

        match self {
            SavedCommand::List => list(&repository, config.max_saved_builds()),
            SavedCommand::Save { file, name } => {
                let (oracles, catalog) = load_content(config)?;
                let mut store = BuildStore::new(oracles);
                let actions = BuildFile::load(&file)?.actions(&catalog, store.oracles())?;
                store.dispatch_all(actions);

                let Some(saved) = store.save_to(&repository, &name) else {
                    bail!(
                        "Build not saved; the limit of {} saved builds is reached or the save failed",
                        config.max_saved_builds()
                    );
                };
                print_saved("Saved", &saved);
                Ok(())
            }
            SavedCommand::Show { id, format } => {
                let (oracles, _) = load_content(config)?;
                let mut store = BuildStore::new(oracles);
                if !store.load_from(&repository, &id) {
                    bail!("Saved build not found: {id}");
                }

                match format {
                    OutputFormat::Summary => print_summary(&store.state(), &store.stats()),
                    OutputFormat::Report => println!("{}", store.report()),
                    OutputFormat::Json => println!("{}", store.export().to_json()?),
                }
                Ok(())
            }
            SavedCommand::Rename { id, name } => match repository.rename(&id, &name)? {
                Some(saved) => {
                    print_saved("Renamed", &saved);
                    Ok(())
                }
                None => bail!("Saved build not found: {id}"),
            },
            SavedCommand::Delete { id } => {
                if !repository.delete(&id)? {
                    bail!("Saved build not found: {id}");
                }
                println!("{} Deleted {}", style("✓").green().bold(), style(&id).dim());
                Ok(())
            }
        }
    }
}

fn list(repository: &dyn SavedBuildRepository, limit: usize) -> Result<()> {
    let builds = repository.list()?;
    println!(
        "{} ({}/{})",
        style("Saved builds").bold().green(),
        builds.len(),
        limit
    );

    if builds.is_empty() {
        println!("  {}", style("none").dim());
    }
    for build in &builds {
        println!(
            "  {}  {:<32} {}",
            style(&build.id).dim(),
            build.name,
            style(build.updated_at.format("%Y-%m-%d %H:%M")).dim()
        );
    }
    Ok(())
}

fn print_saved(verb: &str, saved: &SavedBuild) {
    println!(
        "{} {} {} as {}",
        style("✓").green().bold(),
        verb,
        style(&saved.name).cyan(),
        style(&saved.id).dim()
    );
}
