//! Configuration for timber.
//!
//! Settings persist to disk as RON files. Supports CLI overrides via clap,
//! hot-reload detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CatalogConfig, Config, DebugConfig, DecayConfig, FellingConfig, HostConfig,
    LootConfig, LootRuleConfig, RemovalMode,
};
pub use error::ConfigError;
