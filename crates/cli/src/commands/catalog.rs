//! Equipment catalog browsing.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use forge_core::{ArmorSlot, Element, Rank, SkillRef, WeaponClass};
use forge_runtime::{
    ArmorQuery, EquipmentCatalog, OracleManager, Page, RuntimeConfig, TextQuery, WeaponQuery,
};

use super::{load_content, parse_label};

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Maximum number of results
    #[arg(long)]
    limit: Option<usize>,

    /// Results to skip
    #[arg(long, default_value_t = 0)]
    offset: usize,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List weapons
    Weapons {
        /// Weapon class, e.g. long-sword
        #[arg(long, value_parser = parse_label::<WeaponClass>)]
        class: Option<WeaponClass>,

        #[arg(long, value_parser = parse_label::<Element>)]
        element: Option<Element>,

        #[arg(long, value_parser = parse_label::<Rank>)]
        rank: Option<Rank>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List armor pieces
    Armor {
        #[arg(long, value_parser = parse_label::<ArmorSlot>)]
        slot: Option<ArmorSlot>,

        #[arg(long, value_parser = parse_label::<Rank>)]
        rank: Option<Rank>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List decorations
    Decorations {
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List charms
    Charms {
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl CatalogCommand {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let (oracles, catalog) = load_content(config)?;

        match self {
            CatalogCommand::Weapons {
                class,
                element,
                rank,
                page,
            } => {
                let query = WeaponQuery {
                    class,
                    element,
                    rank,
                    limit: page.limit,
                    offset: page.offset,
                };
                print_page("Weapons", &catalog.weapons(&query)?, |weapon| {
                    let element = weapon
                        .element
                        .as_ref()
                        .map(|element| format!(" {} {}", element.element, element.damage))
                        .unwrap_or_default();
                    format!(
                        "{:>4}  {:<28} {:<16} {}{}",
                        weapon.id, weapon.name, weapon.class, weapon.attack, element
                    )
                });
            }
            CatalogCommand::Armor {
                slot,
                rank,
                search,
                page,
            } => {
                let query = ArmorQuery {
                    slot,
                    rank,
                    search,
                    limit: page.limit,
                    offset: page.offset,
                };
                print_page("Armor", &catalog.armor(&query)?, |piece| {
                    format!(
                        "{:>4}  {:<28} {:<6} {}",
                        piece.id,
                        piece.name,
                        piece.slot,
                        skills(&oracles, &piece.skills)
                    )
                });
            }
            CatalogCommand::Decorations { search, page } => {
                let query = text_query(search, page);
                print_page("Decorations", &catalog.decorations(&query)?, |decoration| {
                    format!(
                        "{:>4}  {:<32} T{} {}",
                        decoration.id,
                        decoration.name,
                        decoration.tier,
                        skills(&oracles, &decoration.skills)
                    )
                });
            }
            CatalogCommand::Charms { search, page } => {
                let query = text_query(search, page);
                print_page("Charms", &catalog.charms(&query)?, |charm| {
                    format!(
                        "{:>4}  {:<28} {}",
                        charm.id,
                        charm.name,
                        skills(&oracles, &charm.skills)
                    )
                });
            }
        }

        Ok(())
    }
}

fn text_query(search: Option<String>, page: PageArgs) -> TextQuery {
    TextQuery {
        search,
        limit: page.limit,
        offset: page.offset,
    }
}

fn skills(oracles: &OracleManager, skills: &[SkillRef]) -> String {
    let env = oracles.as_build_env();
    skills
        .iter()
        .map(|skill| format!("{} {}", env.skill_label(&skill.skill), skill.level))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_page<T>(title: &str, page: &Page<T>, line: impl Fn(&T) -> String) {
    println!(
        "{} ({} of {})",
        style(title).bold().green(),
        page.items.len(),
        page.total
    );
    for item in &page.items {
        println!("  {}", line(item));
    }
    if page.has_more() {
        println!(
            "  {}",
            style(format!(
                "… more results, use --offset {}",
                page.offset + page.items.len()
            ))
            .dim()
        );
    }
}
