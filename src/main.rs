//! TTK Calculator - Entry Point
//!
//! Prints the weapon comparison table or a shot-by-shot breakdown for one
//! weapon against one shield.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ttk_calculator::catalog::Catalog;
use ttk_calculator::combat::{loadout_summary, shot_breakdown, LoadoutSummary, ShotBreakdown};
use ttk_calculator::comparison::{build_comparison, display};
use ttk_calculator::core::error::{Result, TtkError};

/// Shots and magazines to eliminate a target, per weapon and shield
#[derive(Parser, Debug)]
#[command(name = "ttk-calculator")]
#[command(about = "Shots-to-kill and magazines-to-kill for every weapon and shield")]
struct Args {
    /// TOML catalog of weapons and shields (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Comparison table across all shields, body shots and headshots
    Table {
        /// Only weapons whose name contains this text
        #[arg(long, short = 'f', default_value = "")]
        filter: String,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Shot-by-shot shield and health breakdown
    Breakdown {
        /// Weapon name
        weapon: String,

        /// Upgrade level (defaults to the weapon's lowest)
        #[arg(long, short = 'l')]
        level: Option<u32>,

        /// Shield name (omit for an unshielded target)
        #[arg(long, short = 's')]
        shield: Option<String>,

        /// Every shot is a headshot
        #[arg(long)]
        headshot: bool,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct BreakdownOutput<'a> {
    weapon: &'a str,
    level: u32,
    shield: Option<&'a str>,
    headshot: bool,
    summary: LoadoutSummary,
    breakdown: &'a ShotBreakdown,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ttk_calculator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::with_defaults(),
    };
    tracing::info!(
        "Catalog ready: {} weapons, {} shields",
        catalog.weapons().len(),
        catalog.shields().len()
    );

    match args.command {
        Command::Table { filter, json } => {
            let rows = build_comparison(&catalog, &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", display::render_table(&rows));
            }
        }
        Command::Breakdown {
            weapon,
            level,
            shield,
            headshot,
            json,
        } => {
            let found = catalog.weapon(&weapon)?;
            let level = match level.or_else(|| found.base_level()) {
                Some(level) => level,
                None => {
                    return Err(TtkError::InvalidWeapon {
                        name: found.name.clone(),
                        reason: "no upgrade levels".into(),
                    })
                }
            };
            let profile = catalog.upgrade(&found.name, level)?;
            let shield = shield.as_deref().map(|name| catalog.shield(name)).transpose()?;
            let armor = shield.map(|s| &s.profile);

            let breakdown = shot_breakdown(profile, armor, headshot);
            let summary = loadout_summary(profile, armor, headshot);
            if summary.shots != breakdown.outcome {
                // Kill lies beyond the breakdown's shot cap
                tracing::info!(
                    "Breakdown truncated: full run needs {} shots",
                    summary.shots
                );
            }

            if json {
                let output = BreakdownOutput {
                    weapon: &found.name,
                    level,
                    shield: shield.map(|s| s.name.as_str()),
                    headshot,
                    summary,
                    breakdown: &breakdown,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let title = format!(
                    "{} Level {} - {} ({})",
                    found.name,
                    level,
                    if headshot { "HS" } else { "BS" },
                    shield.map_or("No Shield", |s| s.name.as_str())
                );
                print!("{}", display::render_breakdown(&title, &breakdown));
                println!("Magazines to kill: {}", summary.magazines);
            }
        }
    }

    Ok(())
}
