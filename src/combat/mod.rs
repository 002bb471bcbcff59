pub mod armor;
pub mod constants;
pub mod engagement;
pub mod loadout;
pub mod resolution;
pub mod weapons;

pub use armor::{ArmorProfile, Shield};
pub use engagement::{
    shot_breakdown, shots_to_kill, Engagement, EngagementState, KillCount, ShotBreakdown,
    ShotRecord,
};
pub use loadout::{loadout_summary, magazines_required, LoadoutSummary};
pub use resolution::{resolve_damage, DamageSplit, ShotDamage};
pub use weapons::{Weapon, WeaponProfile, WeaponUpgrade};
