//! Weapon reference data
//!
//! A weapon is a named list of upgrade levels. Each level is an independent
//! profile; nothing is inherited between levels.

use crate::combat::constants::DEFAULT_HEADSHOT_MULTIPLIER;
use serde::{Deserialize, Serialize};

/// Firing stats of one weapon at one upgrade level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Nominal damage per shot
    pub damage: f64,
    /// Shots before a reload
    pub magazine_capacity: u32,
    /// Multiplier applied to damage on a headshot (>= 1.0)
    pub headshot_multiplier: f64,
}

impl WeaponProfile {
    pub fn new(damage: f64, magazine_capacity: u32) -> Self {
        Self {
            damage,
            magazine_capacity,
            headshot_multiplier: DEFAULT_HEADSHOT_MULTIPLIER,
        }
    }

    pub fn with_headshot_multiplier(mut self, multiplier: f64) -> Self {
        self.headshot_multiplier = multiplier;
        self
    }
}

/// One upgrade level of a weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponUpgrade {
    pub level: u32,
    pub profile: WeaponProfile,
}

/// A named weapon with its upgrade levels, in ascending level order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub upgrades: Vec<WeaponUpgrade>,
}

impl Weapon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upgrades: Vec::new(),
        }
    }

    /// Add an upgrade level (builder style)
    pub fn with_upgrade(mut self, level: u32, profile: WeaponProfile) -> Self {
        self.upgrades.push(WeaponUpgrade { level, profile });
        self
    }

    /// Get the profile for a specific upgrade level
    pub fn upgrade(&self, level: u32) -> Option<&WeaponProfile> {
        self.upgrades
            .iter()
            .find(|u| u.level == level)
            .map(|u| &u.profile)
    }

    /// Lowest upgrade level, if the weapon has any
    pub fn base_level(&self) -> Option<u32> {
        self.upgrades.iter().map(|u| u.level).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headshot_multiplier() {
        let profile = WeaponProfile::new(40.0, 6);
        assert_eq!(profile.headshot_multiplier, DEFAULT_HEADSHOT_MULTIPLIER);

        let custom = profile.with_headshot_multiplier(1.5);
        assert_eq!(custom.headshot_multiplier, 1.5);
        assert_eq!(custom.damage, 40.0);
    }

    #[test]
    fn test_upgrade_lookup() {
        let weapon = Weapon::new("Bettina")
            .with_upgrade(1, WeaponProfile::new(14.0, 25))
            .with_upgrade(2, WeaponProfile::new(14.0, 30));

        assert_eq!(weapon.upgrade(2).map(|p| p.magazine_capacity), Some(30));
        assert!(weapon.upgrade(5).is_none());
        assert_eq!(weapon.base_level(), Some(1));
    }

    #[test]
    fn test_weapon_without_upgrades() {
        let weapon = Weapon::new("Prototype");
        assert!(weapon.upgrades.is_empty());
        assert_eq!(weapon.base_level(), None);
    }
}
