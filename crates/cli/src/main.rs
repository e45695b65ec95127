//! Command-line front end for the build calculator.
//!
//! Run with: `cargo run -p forge-cli -- <command>`
//!
//! Configuration comes from the environment (see
//! [`forge_runtime::RuntimeConfig::from_env`]); a `.env` file is honoured and
//! the global flags below override it.

mod build_file;
mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use forge_core::Locale;
use forge_runtime::RuntimeConfig;

use commands::{CatalogCommand, SavedCommand, Stats};

/// Build calculator for Monster Hunter World: Iceborne
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Build calculator for Monster Hunter World: Iceborne", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (defaults to the bundled data)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Saved-build directory (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Skill name locale (en, pt)
    #[arg(long, global = true, value_parser = commands::parse_label::<Locale>)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compute the stats of a build file or a saved build
    Stats(Stats),

    /// Manage saved builds
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Browse the equipment catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

impl Cli {
    fn config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.save_dir {
            config.save_dir = dir.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        config
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    setup_logging();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&config),
        Command::Saved(cmd) => cmd.execute(&config),
        Command::Catalog(cmd) => cmd.execute(&config),
    }
}

/// Logs go to stderr so stdout stays clean for reports and JSON.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ArmorSlot, Rank, WeaponClass};

    #[test]
    fn locale_and_catalog_filters_parse() {
        let cli = Cli::try_parse_from([
            "forge",
            "--locale",
            "pt",
            "catalog",
            "weapons",
            "--class",
            "long-sword",
            "--rank",
            "master",
        ])
        .expect("valid arguments");

        assert_eq!(cli.locale, Some(Locale::Pt));
        let Command::Catalog(CatalogCommand::Weapons { class, rank, .. }) = cli.command else {
            panic!("expected the weapons catalog command");
        };
        assert_eq!(class, Some(WeaponClass::LongSword));
        assert_eq!(rank, Some(Rank::Master));
    }

    #[test]
    fn global_locale_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "forge", "catalog", "armor", "--slot", "HEAD", "--locale", "EN",
        ])
        .expect("valid arguments");

        assert_eq!(cli.locale, Some(Locale::En));
        let Command::Catalog(CatalogCommand::Armor { slot, rank, .. }) = cli.command else {
            panic!("expected the armor catalog command");
        };
        assert_eq!(slot, Some(ArmorSlot::Head));
        assert_eq!(rank, None);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(Cli::try_parse_from(["forge", "--locale", "fr", "saved", "list"]).is_err());
        assert!(
            Cli::try_parse_from(["forge", "catalog", "weapons", "--rank", "ultra"]).is_err()
        );
    }
}
