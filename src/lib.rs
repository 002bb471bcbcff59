//! TTK Calculator - shots and magazines needed to eliminate a shielded target

pub mod catalog;
pub mod combat;
pub mod comparison;
pub mod core;
