//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Timber command-line arguments.
///
/// CLI values override settings loaded from `timber.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "timber", about = "Tree felling and foliage decay")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Foliage blocks processed per scheduler tick.
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Fixed loot RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable foliage decay after felling.
    #[arg(long)]
    pub no_decay: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(batch) = args.batch_size {
            self.decay.batch_size = batch;
        }
        if let Some(seed) = args.seed {
            self.loot.seed = Some(seed);
        }
        if args.no_decay {
            self.decay.enabled = false;
        }
    }
}
