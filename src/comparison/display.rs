//! Plain-text rendering for terminal output

use super::ComparisonRow;
use crate::combat::{ShotBreakdown, ShotRecord};

const WEAPON_WIDTH: usize = 12;
const CELL_WIDTH: usize = 9;

fn cell_header(shield: Option<&str>, headshot: bool) -> String {
    let target = match shield {
        None => "None",
        Some(name) => name.split_whitespace().next().unwrap_or(name),
    };
    format!("{}:{}", if headshot { "HS" } else { "BS" }, target)
}

/// Render the comparison table. Each cell reads `shots/magazines`
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let Some(first) = rows.first() else {
        out.push_str("No weapons match.\n");
        return out;
    };

    out.push_str(&format!(
        "{:<WEAPON_WIDTH$} {:>3} {:>6} {:>4} {:>4}",
        "Weapon", "Lvl", "DMG", "Mag", "HSx"
    ));
    for cell in &first.cells {
        out.push_str(&format!(
            " {:>CELL_WIDTH$}",
            cell_header(cell.shield.as_deref(), cell.headshot)
        ));
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<WEAPON_WIDTH$} {:>3} {:>6.1} {:>4} {:>4.1}",
            row.weapon,
            row.level,
            row.profile.damage,
            row.profile.magazine_capacity,
            row.profile.headshot_multiplier
        ));
        for cell in &row.cells {
            let value = format!("{}/{}", cell.shots, cell.magazines);
            out.push_str(&format!(" {:>CELL_WIDTH$}", value));
        }
        out.push('\n');
    }
    out
}

fn render_record(record: &ShotRecord) -> String {
    format!(
        "{:>3}. shield {:>6.1} -> {:>6.1} ({:>+6.1}) | health {:>6.1} -> {:>6.1} ({:>+6.1})",
        record.shot,
        record.armor_before,
        record.armor_after,
        record.armor_delta,
        record.health_before,
        record.health_after,
        record.health_delta
    )
}

/// Render a per-shot breakdown under a title line
pub fn render_breakdown(title: &str, breakdown: &ShotBreakdown) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for record in &breakdown.records {
        out.push_str(&render_record(record));
        out.push('\n');
    }
    out.push_str(&format!("Shots to kill: {}\n", breakdown.outcome));
    out
}
