//! Single-shot damage resolution
//!
//! Splits one shot between the shield and the health pool. Mitigation is
//! all-or-nothing: a shield with any charge left applies its full fraction,
//! even on the shot that breaks it.

use crate::combat::weapons::WeaponProfile;
use serde::{Deserialize, Serialize};

/// The two damage channels of one shot
///
/// Shields always drain by the weapon's nominal damage. Only the health
/// channel is scaled by the headshot multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotDamage {
    /// Weapon damage before any multiplier (drains the shield)
    pub nominal: f64,
    /// Damage after the headshot multiplier (drains health)
    pub effective: f64,
}

impl ShotDamage {
    pub fn new(weapon: &WeaponProfile, headshot: bool) -> Self {
        let multiplier = if headshot {
            weapon.headshot_multiplier
        } else {
            1.0
        };
        Self {
            nominal: weapon.damage,
            effective: weapon.damage * multiplier,
        }
    }

    /// A body shot dealing `damage` on both channels
    pub fn uniform(damage: f64) -> Self {
        Self {
            nominal: damage,
            effective: damage,
        }
    }
}

/// How a shot's damage lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageSplit {
    /// Charge removed from the shield (uncapped by what is left)
    pub armor_damage: f64,
    /// Damage reaching health
    pub health_damage: f64,
}

/// Resolve one shot against an active or absent shield
///
/// # Arguments
/// * `shot` - Nominal and effective damage of the shot
/// * `armor_active` - Whether a shield with charge remaining is in front of health
/// * `mitigation` - The shield's mitigation fraction (ignored when inactive)
pub fn resolve_damage(shot: ShotDamage, armor_active: bool, mitigation: f64) -> DamageSplit {
    if !armor_active {
        return DamageSplit {
            armor_damage: 0.0,
            health_damage: shot.effective,
        };
    }

    DamageSplit {
        armor_damage: shot.nominal,
        health_damage: shot.effective * (1.0 - mitigation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_armor_passes_everything() {
        let split = resolve_damage(ShotDamage::uniform(40.0), false, 0.4);
        assert_eq!(split.armor_damage, 0.0);
        assert_eq!(split.health_damage, 40.0);
    }

    #[test]
    fn test_active_armor_mitigates() {
        let split = resolve_damage(ShotDamage::uniform(10.0), true, 0.4);
        assert_eq!(split.armor_damage, 10.0);
        assert!((split.health_damage - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_headshot_only_scales_health_channel() {
        let weapon = WeaponProfile::new(40.0, 6);
        let shot = ShotDamage::new(&weapon, true);
        assert_eq!(shot.nominal, 40.0);
        assert_eq!(shot.effective, 100.0);

        let split = resolve_damage(shot, true, 0.5);
        assert_eq!(split.armor_damage, 40.0);
        assert!((split.health_damage - 50.0).abs() < 1e-5);
    }

    #[test]
    fn test_full_mitigation_blocks_health() {
        let split = resolve_damage(ShotDamage::uniform(25.0), true, 1.0);
        assert_eq!(split.armor_damage, 25.0);
        assert_eq!(split.health_damage, 0.0);
    }

    #[test]
    fn test_body_shot_is_uniform() {
        let weapon = WeaponProfile::new(9.5, 24);
        assert_eq!(ShotDamage::new(&weapon, false), ShotDamage::uniform(9.5));
    }
}
