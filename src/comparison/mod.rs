//! Weapon comparison table
//!
//! One row per weapon upgrade level, one cell per (shield, aim) pair.
//! Uses rayon: every cell is an independent simulation.

pub mod display;

use crate::catalog::Catalog;
use crate::combat::{loadout_summary, ArmorProfile, KillCount, Shield, WeaponProfile};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Kill numbers against one shield (or none) with one aim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCell {
    /// Shield name, `None` for an unshielded target
    pub shield: Option<String>,
    pub headshot: bool,
    pub shots: KillCount,
    pub magazines: KillCount,
}

/// One weapon at one upgrade level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub weapon: String,
    pub level: u32,
    pub profile: WeaponProfile,
    pub cells: Vec<ComparisonCell>,
}

impl ComparisonRow {
    /// Find the cell for a shield (by exact name, `None` = unshielded) and aim
    pub fn cell(&self, shield: Option<&str>, headshot: bool) -> Option<&ComparisonCell> {
        self.cells
            .iter()
            .find(|c| c.shield.as_deref() == shield && c.headshot == headshot)
    }
}

/// Column targets in table order: unshielded first, then catalog shields
pub fn targets(catalog: &Catalog) -> Vec<Option<&Shield>> {
    std::iter::once(None)
        .chain(catalog.shields().iter().map(Some))
        .collect()
}

fn build_row(
    weapon: &str,
    level: u32,
    profile: &WeaponProfile,
    targets: &[Option<&Shield>],
) -> ComparisonRow {
    let cells = [false, true]
        .into_iter()
        .flat_map(|headshot| {
            targets.iter().copied().map(move |shield| {
                let armor: Option<&ArmorProfile> = shield.map(|s| &s.profile);
                let summary = loadout_summary(profile, armor, headshot);
                ComparisonCell {
                    shield: shield.map(|s| s.name.clone()),
                    headshot,
                    shots: summary.shots,
                    magazines: summary.magazines,
                }
            })
        })
        .collect();

    ComparisonRow {
        weapon: weapon.to_string(),
        level,
        profile: *profile,
        cells,
    }
}

/// Build the comparison table for every weapon matching `filter`
///
/// Rows keep catalog order (weapon, then upgrade level).
pub fn build_comparison(catalog: &Catalog, filter: &str) -> Vec<ComparisonRow> {
    let targets = targets(catalog);
    let upgrades: Vec<_> = catalog
        .filter_weapons(filter)
        .flat_map(|w| w.upgrades.iter().map(move |u| (w.name.as_str(), u)))
        .collect();

    let rows: Vec<ComparisonRow> = upgrades
        .par_iter()
        .map(|&(name, upgrade)| build_row(name, upgrade.level, &upgrade.profile, &targets))
        .collect();

    tracing::debug!(
        "Built comparison table: {} rows x {} cells (filter {:?})",
        rows.len(),
        targets.len() * 2,
        filter
    );
    rows
}
