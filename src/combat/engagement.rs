//! Shot-by-shot engagement simulation
//!
//! A run has two phases. While the shield holds charge every shot drains it
//! by nominal damage and health by mitigated effective damage. Once the
//! shield is gone (or was never there) effective damage hits health
//! directly. The run ends on the shot that takes health to zero.
//!
//! Phase A is stepped shot by shot. Phase B is planned once, as
//! `ceil(health / effective)` shots, when the shield is found empty. Each
//! Phase B shot is measured from the health at that point, not subtracted
//! from the previous shot, so the result does not drift with the number of
//! shots. The count-only path adds the plan to the shots already fired.
//! The per-shot breakdown steps through it and lands the kill on the
//! planned shot, so both paths agree on the kill shot.

use crate::combat::armor::ArmorProfile;
use crate::combat::constants::{COUNT_SHOT_CAP, TARGET_HEALTH, TRACE_SHOT_CAP};
use crate::combat::resolution::{resolve_damage, ShotDamage};
use crate::combat::weapons::WeaponProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a kill computation
///
/// Every finite count orders before `Unkillable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillCount {
    Finite(u32),
    /// The target cannot be killed under these parameters
    Unkillable,
}

impl KillCount {
    pub fn is_finite(self) -> bool {
        matches!(self, KillCount::Finite(_))
    }

    /// The count, if finite
    pub fn finite(self) -> Option<u32> {
        match self {
            KillCount::Finite(n) => Some(n),
            KillCount::Unkillable => None,
        }
    }
}

impl fmt::Display for KillCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillCount::Finite(n) => write!(f, "{}", n),
            KillCount::Unkillable => write!(f, "∞"),
        }
    }
}

/// Mutable pools of one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngagementState {
    /// Shield charge left. Can go negative internally
    pub remaining_armor: f64,
    /// Health left. Can go negative internally
    pub remaining_health: f64,
    pub shots_fired: u32,
}

impl EngagementState {
    pub fn new(armor: Option<&ArmorProfile>) -> Self {
        Self {
            remaining_armor: armor.map_or(0.0, |a| a.capacity),
            remaining_health: TARGET_HEALTH,
            shots_fired: 0,
        }
    }

    pub fn armor_active(&self) -> bool {
        self.remaining_armor > 0.0
    }

    pub fn is_eliminated(&self) -> bool {
        self.remaining_health <= 0.0
    }

    /// Shield level as reported (never below zero)
    pub fn armor_level(&self) -> f64 {
        self.remaining_armor.max(0.0)
    }

    /// Health level as reported (never below zero)
    pub fn health_level(&self) -> f64 {
        self.remaining_health.max(0.0)
    }
}

/// Shield and health levels around one shot
///
/// Shot 0 is the snapshot before anything is fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub shot: u32,
    pub armor_before: f64,
    pub armor_after: f64,
    /// `armor_after - armor_before` (zero or negative)
    pub armor_delta: f64,
    pub health_before: f64,
    pub health_after: f64,
    /// `health_after - health_before` (zero or negative)
    pub health_delta: f64,
}

impl ShotRecord {
    fn snapshot(state: &EngagementState) -> Self {
        Self {
            shot: state.shots_fired,
            armor_before: state.armor_level(),
            armor_after: state.armor_level(),
            armor_delta: 0.0,
            health_before: state.health_level(),
            health_after: state.health_level(),
            health_delta: 0.0,
        }
    }

    pub fn is_kill(&self) -> bool {
        self.health_after <= 0.0
    }

    /// Whether this shot took the shield from charged to empty
    pub fn broke_armor(&self) -> bool {
        self.armor_before > 0.0 && self.armor_after <= 0.0
    }
}

/// Unmitigated run to zero health, fixed when the shield is first found empty
#[derive(Debug, Clone, Copy, PartialEq)]
struct HealthRun {
    /// Health when the run started
    start_health: f64,
    /// Health lost per shot
    per_shot: f64,
    /// Shots the run takes, the last one lethal
    shots_needed: u32,
    shots_taken: u32,
}

impl HealthRun {
    fn new(start_health: f64, per_shot: f64) -> Self {
        Self {
            start_health,
            per_shot,
            // Float-to-int `as` saturates, so a huge plan becomes u32::MAX
            shots_needed: (start_health / per_shot).ceil().max(1.0) as u32,
            shots_taken: 0,
        }
    }

    /// Health after the next shot of the run
    fn step(&mut self) -> f64 {
        self.shots_taken += 1;
        let health = self.start_health - f64::from(self.shots_taken) * self.per_shot;
        if self.shots_taken >= self.shots_needed {
            health.min(0.0)
        } else {
            health
        }
    }
}

/// Steps a target's pools one shot at a time
///
/// Yields one [`ShotRecord`] per shot fired. Stops after the killing shot,
/// when the shot cap is reached, or immediately if the shot cannot deal
/// damage to health.
#[derive(Debug, Clone)]
pub struct Engagement {
    shot: ShotDamage,
    mitigation: f64,
    state: EngagementState,
    health_run: Option<HealthRun>,
    shot_cap: u32,
    capped: bool,
}

impl Engagement {
    pub fn new(weapon: &WeaponProfile, armor: Option<&ArmorProfile>, headshot: bool) -> Self {
        Self {
            shot: ShotDamage::new(weapon, headshot),
            mitigation: armor.map_or(0.0, |a| a.mitigation_fraction),
            state: EngagementState::new(armor),
            health_run: None,
            shot_cap: COUNT_SHOT_CAP,
            capped: false,
        }
    }

    /// Limit the run to at most `cap` shots
    pub fn with_shot_cap(mut self, cap: u32) -> Self {
        self.shot_cap = cap;
        self
    }

    pub fn state(&self) -> &EngagementState {
        &self.state
    }

    pub fn shot_damage(&self) -> ShotDamage {
        self.shot
    }

    /// Snapshot of the current pools as a zero-delta record
    pub fn snapshot(&self) -> ShotRecord {
        ShotRecord::snapshot(&self.state)
    }

    /// Whether a shot can ever lower health. NaN damage counts as harmless
    pub fn can_damage_health(&self) -> bool {
        self.shot.effective > 0.0
    }

    /// Result of the run so far: the kill shot, or `Unkillable` if the
    /// target is still standing
    pub fn outcome(&self) -> KillCount {
        if self.state.is_eliminated() {
            KillCount::Finite(self.state.shots_fired)
        } else {
            KillCount::Unkillable
        }
    }

    /// Shots still needed once the shield is empty, counted without firing
    fn remaining_health_shots(&self) -> u32 {
        match self.health_run {
            Some(run) => run.shots_needed - run.shots_taken,
            None => HealthRun::new(self.state.remaining_health, self.shot.effective).shots_needed,
        }
    }

    fn warn_capped(&mut self) {
        if !self.capped {
            tracing::warn!(
                "Shot cap of {} reached with {:.2} health left, treating target as unkillable",
                self.shot_cap,
                self.state.remaining_health
            );
            self.capped = true;
        }
    }

    /// Fire the shield phase, count the rest, and return the outcome
    pub fn run(mut self) -> KillCount {
        while self.state.armor_active() {
            if self.next().is_none() {
                return self.outcome();
            }
        }
        if self.state.is_eliminated() || !self.can_damage_health() {
            return self.outcome();
        }

        let total = self
            .state
            .shots_fired
            .saturating_add(self.remaining_health_shots());
        if total > self.shot_cap {
            self.warn_capped();
            return KillCount::Unkillable;
        }
        KillCount::Finite(total)
    }
}

impl Iterator for Engagement {
    type Item = ShotRecord;

    fn next(&mut self) -> Option<ShotRecord> {
        if self.state.is_eliminated() || !self.can_damage_health() {
            return None;
        }
        if self.state.shots_fired >= self.shot_cap {
            self.warn_capped();
            return None;
        }

        let armor_before = self.state.armor_level();
        let health_before = self.state.health_level();

        if self.state.armor_active() {
            let split = resolve_damage(self.shot, true, self.mitigation);
            self.state.remaining_armor -= split.armor_damage;
            self.state.remaining_health -= split.health_damage;
        } else {
            let split = resolve_damage(self.shot, false, self.mitigation);
            let health = self.state.remaining_health;
            let run = self
                .health_run
                .get_or_insert_with(|| HealthRun::new(health, split.health_damage));
            self.state.remaining_health = run.step();
        }
        self.state.shots_fired += 1;

        let armor_after = self.state.armor_level();
        let health_after = self.state.health_level();

        Some(ShotRecord {
            shot: self.state.shots_fired,
            armor_before,
            armor_after,
            armor_delta: armor_after - armor_before,
            health_before,
            health_after,
            health_delta: health_after - health_before,
        })
    }
}

/// Full per-shot trace of one engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotBreakdown {
    /// Shot 0 snapshot followed by every shot fired
    pub records: Vec<ShotRecord>,
    pub outcome: KillCount,
}

impl ShotBreakdown {
    /// Records for fired shots only (without the snapshot)
    pub fn shots(&self) -> &[ShotRecord] {
        self.records.get(1..).unwrap_or_default()
    }

    pub fn last(&self) -> Option<&ShotRecord> {
        self.records.last()
    }

    /// Shot on which the shield broke, if it did
    pub fn armor_break_shot(&self) -> Option<u32> {
        self.shots().iter().find(|r| r.broke_armor()).map(|r| r.shot)
    }
}

/// Count the shots needed to kill
///
/// # Arguments
/// * `weapon` - Weapon stats at one upgrade level
/// * `armor` - The target's shield, if any
/// * `headshot` - Whether every shot is a headshot
pub fn shots_to_kill(
    weapon: &WeaponProfile,
    armor: Option<&ArmorProfile>,
    headshot: bool,
) -> KillCount {
    Engagement::new(weapon, armor, headshot).run()
}

/// Trace every shot of an engagement, including the shot 0 snapshot
pub fn shot_breakdown(
    weapon: &WeaponProfile,
    armor: Option<&ArmorProfile>,
    headshot: bool,
) -> ShotBreakdown {
    let mut engagement = Engagement::new(weapon, armor, headshot).with_shot_cap(TRACE_SHOT_CAP);
    let mut records = vec![engagement.snapshot()];
    records.extend(engagement.by_ref());

    ShotBreakdown {
        records,
        outcome: engagement.outcome(),
    }
}
