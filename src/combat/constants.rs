//! Engagement constants - all fixed values in one place
//!
//! Target health is not configurable. Every simulation runs against the
//! same pool.

/// Health pool of every target
pub const TARGET_HEALTH: f64 = 100.0;

/// Most shots a per-shot breakdown will step before giving up
pub const TRACE_SHOT_CAP: u32 = 100;

/// Most shots a count-only run will step before giving up
pub const COUNT_SHOT_CAP: u32 = 1000;

/// Headshot multiplier used when reference data omits one
pub const DEFAULT_HEADSHOT_MULTIPLIER: f64 = 2.5;
