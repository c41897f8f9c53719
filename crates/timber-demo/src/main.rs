//! Timber demo: plants a birch in an in-memory world, fells it as a survival
//! player and drives the service until the canopy has decayed.
//!
//! Run with: `cargo run -p timber-demo -- --seed 7`

mod scene;

use std::process::ExitCode;

use clap::Parser;
use timber_config::{CliArgs, Config};
use timber_felling::{FellOutcome, FellingService};
use tracing::{error, info};

/// Upper bound on simulated ticks before the demo gives up.
const MAX_TICKS: u64 = 10_000;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().or_else(|| Config::default_dir().ok());

    // Load or create config, then apply CLI overrides
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    timber_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    let mut service = match FellingService::new(&config) {
        Ok(service) => service,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (mut host, event) = scene::birch_grove();
    info!(
        "Planted birch: {} logs, {} leaves",
        host.count_of(event.dimension, scene::TRUNK),
        host.count_of(event.dimension, scene::LEAVES)
    );

    match service.on_block_broken(&mut host, &event) {
        Some(FellOutcome::Felled(report)) => info!(
            "Felled {} logs ({} left standing), drops {:?}, axe damage {:?}",
            report.felled, report.truncated, report.stacks, report.new_damage
        ),
        Some(FellOutcome::Skipped(reason)) => {
            info!("Nothing felled: {reason:?}");
            return ExitCode::SUCCESS;
        }
        None => return ExitCode::FAILURE,
    }

    // The host applies queued commands between ticks.
    while !service.is_idle() && service.current_tick() < MAX_TICKS {
        let report = service.tick(&mut host);
        if report.decayed > 0 {
            info!("Tick {}: {} foliage removed", report.tick, report.decayed);
        }
        host.apply_deferred_commands();
    }

    let leaves_left = host.count_of(event.dimension, scene::LEAVES);
    let loot: u32 = host
        .spawned()
        .iter()
        .filter(|spawn| spawn.stack.type_id != scene::TRUNK)
        .map(|spawn| spawn.stack.count)
        .sum();
    info!(
        "Done after {} ticks: {leaves_left} leaves left, {loot} loot items dropped",
        service.current_tick()
    );

    if service.is_idle() {
        ExitCode::SUCCESS
    } else {
        error!("Service still busy after {MAX_TICKS} ticks");
        ExitCode::FAILURE
    }
}
