//! Magazine counts derived from shots-to-kill

use crate::combat::armor::ArmorProfile;
use crate::combat::engagement::{shots_to_kill, KillCount};
use crate::combat::weapons::WeaponProfile;
use serde::{Deserialize, Serialize};

/// Magazines needed to fire `shots` shots, rounded up
///
/// A weapon with no magazine capacity can never finish the job.
pub fn magazines_required(shots: KillCount, magazine_capacity: u32) -> KillCount {
    if magazine_capacity == 0 {
        return KillCount::Unkillable;
    }
    match shots {
        KillCount::Finite(n) => KillCount::Finite(n.div_ceil(magazine_capacity)),
        KillCount::Unkillable => KillCount::Unkillable,
    }
}

/// Shots and magazines for one weapon/shield/aim combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSummary {
    pub shots: KillCount,
    pub magazines: KillCount,
}

pub fn loadout_summary(
    weapon: &WeaponProfile,
    armor: Option<&ArmorProfile>,
    headshot: bool,
) -> LoadoutSummary {
    let shots = shots_to_kill(weapon, armor, headshot);
    LoadoutSummary {
        shots,
        magazines: magazines_required(shots, weapon.magazine_capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(magazines_required(KillCount::Finite(12), 6), KillCount::Finite(2));
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(magazines_required(KillCount::Finite(13), 6), KillCount::Finite(3));
        assert_eq!(magazines_required(KillCount::Finite(1), 80), KillCount::Finite(1));
    }

    #[test]
    fn test_single_shot_magazine() {
        assert_eq!(magazines_required(KillCount::Finite(3), 1), KillCount::Finite(3));
    }

    #[test]
    fn test_zero_capacity_is_unkillable() {
        assert_eq!(magazines_required(KillCount::Finite(3), 0), KillCount::Unkillable);
    }

    #[test]
    fn test_unkillable_propagates() {
        assert_eq!(magazines_required(KillCount::Unkillable, 30), KillCount::Unkillable);
    }

    #[test]
    fn test_loadout_summary() {
        let weapon = WeaponProfile::new(10.0, 6);
        let armor = ArmorProfile::new(40.0, 0.4);
        let summary = loadout_summary(&weapon, Some(&armor), false);

        assert_eq!(summary.shots, KillCount::Finite(12));
        assert_eq!(summary.magazines, KillCount::Finite(2));
    }
}
