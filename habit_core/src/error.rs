//! Error types for snapshot access and computation entry points

use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced when deriving stats from upstream snapshots
#[derive(Error, Debug)]
pub enum HabitError {
    /// An optional upstream section was needed but is absent from the snapshot
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// The snapshot could not be parsed; absent required scalars land here
    #[error("failed to parse snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, HabitError>;
