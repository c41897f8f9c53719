//! Tree felling: connected-trunk discovery, tree classification, tool
//! durability accounting, trunk removal with stacked drops, and the batched
//! foliage decay sweep with per-species loot.
//!
//! [`FellingService`] ties the pieces together. The host forwards
//! block-broken notifications to [`FellingService::on_block_broken`] and calls
//! [`FellingService::tick`] once per game tick to drive deferred work.

pub mod classify;
pub mod decay;
pub mod durability;
pub mod error;
pub mod executor;
pub mod loot;
pub mod scan;
pub mod schedule;
pub mod service;

pub use classify::is_tree;
pub use decay::{
    DecayEnv, DecaySettings, DecayStep, DecayTask, InFlight, PendingRemoval, Settled, drop_loot,
};
pub use durability::{ConsumptionPlan, DurabilityRecord, charge_tool, plan_consumption};
pub use error::{FellingError, SetupError};
pub use executor::{fell, spawn_drops, split_groups};
pub use loot::{LootEntry, LootError, LootTable};
pub use scan::discover_trunk;
pub use schedule::{DeferredQueue, ticks_from_millis};
pub use service::{FellOutcome, FellReport, FellingService, SkipReason, TaskId, TickReport};

#[cfg(test)]
mod test_support;
