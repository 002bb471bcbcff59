use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtkError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Weapon {weapon} has no upgrade level {level}")]
    UnknownUpgradeLevel { weapon: String, level: u32 },

    #[error("Unknown shield: {0}")]
    UnknownShield(String),

    #[error("Invalid weapon '{name}': {reason}")]
    InvalidWeapon { name: String, reason: String },

    #[error("Invalid shield '{name}': {reason}")]
    InvalidShield { name: String, reason: String },

    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("Failed to read catalog {path:?}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TtkError>;
