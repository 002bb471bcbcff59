//! Built-in reference data for the shipped weapons and shields
//!
//! Every weapon has four upgrade levels. Damage does not change between
//! levels; upgrades only grow the magazine.

use crate::combat::{Shield, Weapon, WeaponProfile};

/// (name, damage per shot, magazine capacity at levels 1..=4)
const WEAPON_TABLE: &[(&str, f64, [u32; 4])] = &[
    ("Anvil", 40.0, [6, 6, 6, 6]),
    ("Arpeggio", 9.5, [24, 24, 24, 24]),
    ("Bettina", 14.0, [25, 30, 35, 40]),
    ("Bobcat", 6.0, [30, 35, 40, 45]),
    ("Burletta", 10.0, [12, 14, 16, 18]),
    ("Ferro", 40.0, [1, 1, 1, 1]),
    ("Hairpin", 20.0, [6, 7, 8, 9]),
    ("Hullcracker", 100.0, [1, 1, 1, 1]),
    ("Il Toro", 67.5, [5, 6, 7, 8]),
    ("Jupiter", 55.0, [5, 5, 5, 5]),
    ("Kettle", 10.0, [10, 14, 18, 22]),
    ("Osprey", 45.0, [8, 10, 12, 14]),
    ("Rattler", 9.0, [10, 14, 18, 22]),
    ("Renegade", 35.0, [6, 8, 10, 12]),
    ("Stitcher", 7.0, [20, 20, 20, 20]),
    ("Tempest", 10.0, [30, 35, 40, 45]),
    ("Torrente", 8.0, [50, 60, 70, 80]),
    ("Venator", 18.0, [10, 10, 10, 10]),
    ("Vulcano", 49.5, [6, 6, 6, 6]),
];

pub fn default_weapons() -> Vec<Weapon> {
    WEAPON_TABLE
        .iter()
        .map(|&(name, damage, magazines)| {
            magazines
                .iter()
                .zip(1..)
                .fold(Weapon::new(name), |weapon, (&capacity, level)| {
                    weapon.with_upgrade(level, WeaponProfile::new(damage, capacity))
                })
        })
        .collect()
}

pub fn default_shields() -> Vec<Shield> {
    vec![Shield::light(), Shield::medium(), Shield::heavy()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::constants::DEFAULT_HEADSHOT_MULTIPLIER;

    #[test]
    fn test_every_weapon_has_four_levels() {
        for weapon in default_weapons() {
            let levels: Vec<u32> = weapon.upgrades.iter().map(|u| u.level).collect();
            assert_eq!(levels, vec![1, 2, 3, 4], "{}", weapon.name);
        }
    }

    #[test]
    fn test_weapon_stats_sane() {
        for weapon in default_weapons() {
            for upgrade in &weapon.upgrades {
                assert!(upgrade.profile.damage > 0.0);
                assert!(upgrade.profile.magazine_capacity > 0);
                assert_eq!(upgrade.profile.headshot_multiplier, DEFAULT_HEADSHOT_MULTIPLIER);
            }
        }
    }

    #[test]
    fn test_torrente_magazines() {
        let weapons = default_weapons();
        let torrente = weapons.iter().find(|w| w.name == "Torrente").unwrap();
        assert_eq!(torrente.upgrade(1).unwrap().magazine_capacity, 50);
        assert_eq!(torrente.upgrade(4).unwrap().magazine_capacity, 80);
    }
}
