//! Load a catalog from TOML
//!
//! ```toml
//! [[weapons]]
//! name = "Anvil"
//!
//! [[weapons.upgrades]]
//! level = 1
//! damage = 40.0
//! magazine_capacity = 6
//! headshot_multiplier = 2.5   # optional
//!
//! [[shields]]
//! name = "Light Shield"
//! capacity = 40.0
//! mitigation_fraction = 0.4
//! movement_penalty = 0.0      # optional
//! ```

use super::Catalog;
use crate::combat::constants::DEFAULT_HEADSHOT_MULTIPLIER;
use crate::combat::{ArmorProfile, Shield, Weapon, WeaponProfile};
use crate::core::error::{Result, TtkError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    weapons: Vec<TomlWeapon>,
    #[serde(default)]
    shields: Vec<TomlShield>,
}

#[derive(Debug, Deserialize)]
struct TomlWeapon {
    name: String,
    #[serde(default)]
    upgrades: Vec<TomlUpgrade>,
}

#[derive(Debug, Deserialize)]
struct TomlUpgrade {
    level: u32,
    damage: f64,
    magazine_capacity: u32,
    headshot_multiplier: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TomlShield {
    name: String,
    capacity: f64,
    mitigation_fraction: f64,
    #[serde(default)]
    movement_penalty: f64,
}

impl TomlWeapon {
    fn into_weapon(self) -> Result<Weapon> {
        let invalid = |reason: String| TtkError::InvalidWeapon {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".into()));
        }

        let mut weapon = Weapon::new(self.name.trim());
        for upgrade in &self.upgrades {
            if weapon.upgrade(upgrade.level).is_some() {
                return Err(invalid(format!("upgrade level {} listed twice", upgrade.level)));
            }
            if !upgrade.damage.is_finite() || upgrade.damage < 0.0 {
                return Err(invalid(format!(
                    "level {} damage {} must be finite and non-negative",
                    upgrade.level, upgrade.damage
                )));
            }
            let multiplier = upgrade
                .headshot_multiplier
                .unwrap_or(DEFAULT_HEADSHOT_MULTIPLIER);
            if !multiplier.is_finite() || multiplier < 1.0 {
                return Err(invalid(format!(
                    "level {} headshot multiplier {} must be at least 1",
                    upgrade.level, multiplier
                )));
            }

            let profile = WeaponProfile::new(upgrade.damage, upgrade.magazine_capacity)
                .with_headshot_multiplier(multiplier);
            weapon = weapon.with_upgrade(upgrade.level, profile);
        }

        weapon.upgrades.sort_by_key(|u| u.level);
        Ok(weapon)
    }
}

impl TomlShield {
    fn into_shield(self) -> Result<Shield> {
        let invalid = |reason: String| TtkError::InvalidShield {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".into()));
        }
        if self.capacity.is_nan() || self.capacity < 0.0 {
            return Err(invalid(format!("capacity {} must be non-negative", self.capacity)));
        }
        if !(0.0..=1.0).contains(&self.mitigation_fraction) {
            return Err(invalid(format!(
                "mitigation fraction {} must be within [0, 1]",
                self.mitigation_fraction
            )));
        }

        let profile = ArmorProfile::new(self.capacity, self.mitigation_fraction)
            .with_movement_penalty(self.movement_penalty);
        Ok(Shield::new(self.name.trim(), profile))
    }
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TtkError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {}: {} weapons, {} shields",
            path.display(),
            catalog.weapons().len(),
            catalog.shields().len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml_data: TomlCatalog = toml::from_str(content)?;

        let weapons = toml_data
            .weapons
            .into_iter()
            .map(TomlWeapon::into_weapon)
            .collect::<Result<Vec<_>>>()?;
        let shields = toml_data
            .shields
            .into_iter()
            .map(TomlShield::into_shield)
            .collect::<Result<Vec<_>>>()?;

        Self::new(weapons, shields)
    }
}
