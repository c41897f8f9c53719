//! Error types for felling and service setup.

use timber_world::{CatalogError, PlayerId, WorldError};

use crate::loot::LootError;

/// Errors that abort a felling after it has passed its gates.
#[derive(Debug, thiserror::Error)]
pub enum FellingError {
    /// A host mutation failed.
    #[error("host rejected a felling mutation: {0}")]
    World(#[from] WorldError),

    /// The actor's axe disappeared between the gate check and charging.
    #[error("player {0:?} no longer holds an axe")]
    ToolMissing(PlayerId),
}

/// Errors raised while building a service from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A configured catalog extension is invalid.
    #[error("invalid catalog configuration: {0}")]
    Catalog(#[from] CatalogError),

    /// The configured loot table is invalid.
    #[error("invalid loot table: {0}")]
    Loot(#[from] LootError),
}
