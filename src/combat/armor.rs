//! Shield reference data
//!
//! A shield is an absorbing pool in front of the target's health. While it
//! holds any charge it keeps back a fixed fraction of every hit.

use serde::{Deserialize, Serialize};

/// Absorbing-layer stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmorProfile {
    /// Total damage the layer absorbs before it breaks
    pub capacity: f64,
    /// Fraction of incoming damage kept from health while active, in [0, 1]
    pub mitigation_fraction: f64,
    /// Movement slowdown while worn. Not used by the simulation
    pub movement_penalty: f64,
}

impl ArmorProfile {
    pub fn new(capacity: f64, mitigation_fraction: f64) -> Self {
        Self {
            capacity,
            mitigation_fraction,
            movement_penalty: 0.0,
        }
    }

    pub fn with_movement_penalty(mut self, penalty: f64) -> Self {
        self.movement_penalty = penalty;
        self
    }
}

/// A named shield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    pub name: String,
    pub profile: ArmorProfile,
}

impl Shield {
    pub fn new(name: impl Into<String>, profile: ArmorProfile) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }

    /// Light shield: small pool, no movement cost
    pub fn light() -> Self {
        Self::new("Light Shield", ArmorProfile::new(40.0, 0.4))
    }

    /// Medium shield
    pub fn medium() -> Self {
        Self::new(
            "Medium Shield",
            ArmorProfile::new(70.0, 0.425).with_movement_penalty(0.05),
        )
    }

    /// Heavy shield: largest pool and best mitigation, slowest
    pub fn heavy() -> Self {
        Self::new(
            "Heavy Shield",
            ArmorProfile::new(80.0, 0.525).with_movement_penalty(0.15),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_presets() {
        let light = Shield::light();
        assert_eq!(light.profile.capacity, 40.0);
        assert_eq!(light.profile.mitigation_fraction, 0.4);
        assert_eq!(light.profile.movement_penalty, 0.0);

        let heavy = Shield::heavy();
        assert_eq!(heavy.name, "Heavy Shield");
        assert_eq!(heavy.profile.movement_penalty, 0.15);
    }

    #[test]
    fn test_heavier_shields_protect_more() {
        let tiers = [Shield::light(), Shield::medium(), Shield::heavy()];
        for pair in tiers.windows(2) {
            assert!(pair[1].profile.capacity > pair[0].profile.capacity);
            assert!(pair[1].profile.mitigation_fraction > pair[0].profile.mitigation_fraction);
        }
    }
}
