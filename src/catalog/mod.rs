//! Weapon and shield reference data
//!
//! A catalog is built once (from the built-in tables or a TOML file) and
//! then only read. Lookups by name ignore case.

pub mod defaults;
pub mod loader;

use crate::combat::{Shield, Weapon, WeaponProfile};
use crate::core::error::{Result, TtkError};
use ahash::AHashMap;

/// Read-only name-indexed weapon and shield tables
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    shields: Vec<Shield>,
    weapon_index: AHashMap<String, usize>,
    shield_index: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(weapons: Vec<Weapon>, shields: Vec<Shield>) -> Result<Self> {
        let weapon_index = build_index(weapons.iter().map(|w| w.name.as_str()))?;
        let shield_index = build_index(shields.iter().map(|s| s.name.as_str()))?;
        Ok(Self {
            weapons,
            shields,
            weapon_index,
            shield_index,
        })
    }

    /// The game's shipped weapons and shields
    pub fn with_defaults() -> Self {
        let weapons = defaults::default_weapons();
        let shields = defaults::default_shields();
        // Built-in names are unique, so indexing cannot collide
        let weapon_index = index_unchecked(weapons.iter().map(|w| w.name.as_str()));
        let shield_index = index_unchecked(shields.iter().map(|s| s.name.as_str()));
        Self {
            weapons,
            shields,
            weapon_index,
            shield_index,
        }
    }

    /// All weapons in source order
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// All shields in source order
    pub fn shields(&self) -> &[Shield] {
        &self.shields
    }

    /// Get a weapon by name
    pub fn weapon(&self, name: &str) -> Result<&Weapon> {
        self.weapon_index
            .get(&name_key(name))
            .map(|&i| &self.weapons[i])
            .ok_or_else(|| TtkError::UnknownWeapon(name.to_string()))
    }

    /// Get a shield by name
    pub fn shield(&self, name: &str) -> Result<&Shield> {
        self.shield_index
            .get(&name_key(name))
            .map(|&i| &self.shields[i])
            .ok_or_else(|| TtkError::UnknownShield(name.to_string()))
    }

    /// Get a weapon's stats at one upgrade level
    pub fn upgrade(&self, weapon: &str, level: u32) -> Result<&WeaponProfile> {
        let found = self.weapon(weapon)?;
        found
            .upgrade(level)
            .ok_or_else(|| TtkError::UnknownUpgradeLevel {
                weapon: found.name.clone(),
                level,
            })
    }

    /// Weapons whose name contains `query`, ignoring case. An empty query
    /// matches everything
    pub fn filter_weapons<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Weapon> + 'a {
        let needle = query.trim().to_lowercase();
        self.weapons
            .iter()
            .filter(move |w| w.name.to_lowercase().contains(&needle))
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn build_index<'a>(names: impl Iterator<Item = &'a str>) -> Result<AHashMap<String, usize>> {
    let mut index = AHashMap::new();
    for (i, name) in names.enumerate() {
        if index.insert(name_key(name), i).is_some() {
            return Err(TtkError::DuplicateEntry(name.to_string()));
        }
    }
    Ok(index)
}

fn index_unchecked<'a>(names: impl Iterator<Item = &'a str>) -> AHashMap<String, usize> {
    names
        .enumerate()
        .map(|(i, name)| (name_key(name), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_loaded() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.weapons().len(), 19);
        assert_eq!(catalog.shields().len(), 3);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.weapon("il toro").unwrap().name, "Il Toro");
        assert_eq!(catalog.shield("HEAVY SHIELD").unwrap().profile.capacity, 80.0);
    }

    #[test]
    fn test_unknown_names() {
        let catalog = Catalog::with_defaults();
        assert!(matches!(catalog.weapon("Railgun"), Err(TtkError::UnknownWeapon(_))));
        assert!(matches!(catalog.shield("Tower"), Err(TtkError::UnknownShield(_))));
        assert!(matches!(
            catalog.upgrade("Anvil", 9),
            Err(TtkError::UnknownUpgradeLevel { level: 9, .. })
        ));
    }

    #[test]
    fn test_upgrade_lookup() {
        let catalog = Catalog::with_defaults();
        let profile = catalog.upgrade("Bettina", 4).unwrap();
        assert_eq!(profile.damage, 14.0);
        assert_eq!(profile.magazine_capacity, 40);
    }

    #[test]
    fn test_filter_weapons() {
        let catalog = Catalog::with_defaults();
        let names: Vec<_> = catalog.filter_weapons("ET").map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Bettina", "Burletta", "Kettle"]);

        assert_eq!(catalog.filter_weapons("").count(), 19);
        assert_eq!(catalog.filter_weapons("zzz").count(), 0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![], vec![Shield::light(), Shield::light()]);
        assert!(matches!(result, Err(TtkError::DuplicateEntry(_))));
    }
}
