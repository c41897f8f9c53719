//! The felling service: block-broken handler and per-tick driver.
//!
//! The host forwards every [`BlockBrokenEvent`] to
//! [`FellingService::on_block_broken`] and calls [`FellingService::tick`]
//! once per game tick. The handler runs discovery, classification, tool
//! charging and trunk removal synchronously; deferred slot unlocks and foliage
//! decay sweeps are advanced by the tick driver.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use timber_config::{Config, FellingConfig};
use timber_world::{
    BlockBrokenEvent, BlockKind, BlockPos, Catalog, DimensionId, GameMode, Host, PlayerId,
};

use crate::classify::is_tree;
use crate::decay::{DecayEnv, DecaySettings, DecayStep, DecayTask, InFlight, drop_loot};
use crate::durability::charge_tool;
use crate::error::{FellingError, SetupError};
use crate::executor::{fell, spawn_drops};
use crate::loot::LootTable;
use crate::scan::discover_trunk;
use crate::schedule::{DeferredQueue, ticks_from_millis};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Identifier of a running decay sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decay#{}", self.0)
    }
}

/// Why a block break did not fell anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The broken block is not a trunk block.
    NotATrunk,
    /// The broken block is a stripped log.
    StrippedLog,
    /// The actor was not sneaking.
    NotSneaking,
    /// The actor was not holding a known axe.
    NoAxe,
    /// No trunk blocks of the same type touch the broken block.
    NoConnectedTrunk,
    /// The trunk has no foliage nearby.
    NotATree,
}

/// What a successful felling did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FellReport {
    /// Trunk blocks removed.
    pub felled: usize,
    /// Trunk blocks left standing because the tool ran out.
    pub truncated: usize,
    /// Sizes of the drop stacks spawned at the break location.
    pub stacks: Vec<u32>,
    /// Damage written to the tool, if it was charged.
    pub new_damage: Option<u32>,
    /// Decay sweep started for the felled trunk.
    pub decay_task: Option<TaskId>,
}

/// Result of handling one block break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FellOutcome {
    /// A gate rejected the break; nothing changed.
    Skipped(SkipReason),
    /// The tree was felled.
    Felled(FellReport),
}

/// What one [`FellingService::tick`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number after advancing.
    pub tick: u64,
    /// Tool slots unlocked.
    pub unlocked: usize,
    /// Foliage blocks removed across all sweeps.
    pub decayed: usize,
    /// Command removals seen applied this tick.
    pub confirmed: usize,
    /// Command removals given up on this tick.
    pub expired: usize,
    /// Sweeps that ran out of foliage.
    pub finished: Vec<TaskId>,
    /// Sweeps stopped at the removal cap.
    pub abandoned: Vec<TaskId>,
}

// ---------------------------------------------------------------------------
// FellingService
// ---------------------------------------------------------------------------

/// Owns everything that outlives a single block break.
pub struct FellingService {
    catalog: Catalog,
    loot: LootTable,
    felling: FellingConfig,
    decay_enabled: bool,
    decay: DecaySettings,
    tick_rate: u32,
    rng: ChaCha8Rng,
    current_tick: u64,
    unlocks: DeferredQueue<PlayerId>,
    tasks: Vec<(TaskId, DecayTask)>,
    next_task: u64,
    in_flight: InFlight,
}

impl FellingService {
    /// Builds a service from configuration.
    ///
    /// The catalog starts from the vanilla block set and is extended with the
    /// configured extras. Without a configured loot seed the RNG is seeded
    /// from the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if a catalog extension collides or names an
    /// unknown species, or if the loot table is invalid.
    pub fn new(config: &Config) -> Result<Self, SetupError> {
        let mut catalog = Catalog::vanilla();
        for type_id in &config.catalog.extra_trunks {
            catalog.register_trunk(type_id)?;
        }
        for (type_id, species) in &config.catalog.extra_foliage {
            catalog.register_foliage(type_id, species)?;
        }
        for item_id in &config.catalog.extra_axes {
            catalog.register_axe(item_id)?;
        }
        let loot = LootTable::from_config(&config.loot)?;
        let seed = config.loot.seed.unwrap_or_else(|| rand::rng().random());

        tracing::info!(
            "Felling service ready: {} catalog entries, decay {}",
            catalog.len(),
            if config.decay.enabled { "on" } else { "off" }
        );

        Ok(Self {
            catalog,
            loot,
            felling: config.felling.clone(),
            decay_enabled: config.decay.enabled,
            decay: DecaySettings::from(&config.decay),
            tick_rate: config.host.tick_rate,
            rng: ChaCha8Rng::seed_from_u64(seed),
            current_tick: 0,
            unlocks: DeferredQueue::new(),
            tasks: Vec::new(),
            next_task: 0,
            in_flight: InFlight::default(),
        })
    }

    /// The block catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ticks driven so far.
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Decay sweeps still running.
    pub fn pending_decay(&self) -> usize {
        self.tasks.len()
    }

    /// Slot unlocks not yet due.
    pub fn pending_unlocks(&self) -> usize {
        self.unlocks.len()
    }

    /// Foliage removals issued as commands and not yet observed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Returns `true` once no deferred work remains.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty() && self.unlocks.is_empty() && self.in_flight.is_empty()
    }

    /// Handles a block-broken notification.
    ///
    /// Failures are logged and swallowed so they never propagate into the
    /// host's event dispatch; `None` means the felling failed part way.
    pub fn on_block_broken<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &BlockBrokenEvent,
    ) -> Option<FellOutcome> {
        match self.fell_tree(host, event) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                tracing::error!(
                    "Felling {} at {} failed: {err}",
                    event.broken_type_id,
                    event.location
                );
                None
            }
        }
    }

    /// Runs the felling pipeline for one block break.
    ///
    /// # Errors
    ///
    /// Returns [`FellingError`] if a host mutation fails or the tool vanishes
    /// after the slot is locked. Blocks removed before the failure stay
    /// removed.
    pub fn fell_tree<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &BlockBrokenEvent,
    ) -> Result<FellOutcome, FellingError> {
        if let Some(reason) = self.check_gates(&*host, event) {
            tracing::debug!(
                "Ignoring break of {} at {}: {reason:?}",
                event.broken_type_id,
                event.location
            );
            return Ok(FellOutcome::Skipped(reason));
        }

        let trunk = discover_trunk(
            &*host,
            &self.catalog,
            event.dimension,
            event.location,
            &event.broken_type_id,
            self.felling.search_radius,
        );
        if trunk.is_empty() {
            return Ok(FellOutcome::Skipped(SkipReason::NoConnectedTrunk));
        }
        if !is_tree(
            &*host,
            &self.catalog,
            event.dimension,
            &trunk,
            self.felling.classifier_radius,
        ) {
            tracing::debug!(
                "{} blocks of {} at {} look like a pillar",
                trunk.len(),
                event.broken_type_id,
                event.location
            );
            return Ok(FellOutcome::Skipped(SkipReason::NotATree));
        }

        let survival = host
            .players_in_mode(event.dimension, GameMode::Survival)
            .contains(&event.actor);
        let result = self.cut(host, event, trunk, survival);
        if survival {
            self.schedule_unlock(event.actor);
        }
        result.map(FellOutcome::Felled)
    }

    /// Advances deferred work by one host tick.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) -> TickReport {
        self.current_tick += 1;
        let mut report = TickReport {
            tick: self.current_tick,
            ..TickReport::default()
        };

        for player in self.unlocks.drain_due(self.current_tick) {
            match host.lock_equipped_slot(player, false) {
                Ok(()) => report.unlocked += 1,
                Err(err) => tracing::warn!("Could not unlock tool slot of {player:?}: {err}"),
            }
        }

        let settled = self.in_flight.settle(
            &*host,
            &self.catalog,
            self.current_tick,
            self.decay.command_timeout_ticks,
        );
        report.expired = settled.expired.len();
        for (dimension, pos, species) in settled.removed {
            drop_loot(&mut *host, dimension, &self.loot, species, pos, &mut self.rng);
            report.confirmed += 1;
        }

        let env = DecayEnv {
            catalog: &self.catalog,
            loot: &self.loot,
            settings: &self.decay,
            tick: self.current_tick,
        };
        let rng = &mut self.rng;
        let in_flight = &mut self.in_flight;
        self.tasks.retain_mut(|(id, task)| {
            let before = task.removed();
            let step = task.resume(&mut *host, env, &mut *rng, &mut *in_flight);
            report.decayed += task.removed() - before;
            match step {
                DecayStep::Yielded => true,
                DecayStep::Finished => {
                    tracing::info!(
                        "{id} finished: {} foliage removed, {} items dropped, {} failures",
                        task.removed(),
                        task.items_dropped(),
                        task.failures()
                    );
                    report.finished.push(*id);
                    false
                }
                DecayStep::Abandoned => {
                    tracing::warn!("{id} abandoned after {} removals", task.removed());
                    report.abandoned.push(*id);
                    false
                }
            }
        });

        report
    }

    /// Gate checks that need no scan. `None` means the break qualifies.
    fn check_gates<H: Host + ?Sized>(&self, host: &H, event: &BlockBrokenEvent) -> Option<SkipReason> {
        match self.catalog.kind_of(&event.broken_type_id) {
            BlockKind::Trunk => {}
            BlockKind::StrippedTrunk => return Some(SkipReason::StrippedLog),
            _ => return Some(SkipReason::NotATrunk),
        }
        if self.felling.require_sneaking && !host.is_sneaking(event.actor) {
            return Some(SkipReason::NotSneaking);
        }
        let holds_axe = host
            .equipped_item(event.actor)
            .is_some_and(|item| self.catalog.is_axe(&item.type_id));
        if !holds_axe {
            return Some(SkipReason::NoAxe);
        }
        None
    }

    /// Charges the tool (survival only), removes the trunk, spawns drops and
    /// starts the decay sweep.
    fn cut<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &BlockBrokenEvent,
        mut trunk: Vec<BlockPos>,
        survival: bool,
    ) -> Result<FellReport, FellingError> {
        let planned = trunk.len();
        let mut new_damage = None;

        if survival {
            host.lock_equipped_slot(event.actor, true)?;
            let mut tool = host
                .equipped_item(event.actor)
                .ok_or(FellingError::ToolMissing(event.actor))?;
            if let Some(plan) = charge_tool(&mut tool, planned) {
                plan.apply(&mut trunk);
                host.set_equipped_item(event.actor, tool)?;
                new_damage = Some(plan.new_damage);
                if plan.truncated > 0 {
                    tracing::debug!(
                        "Tool of {:?} only covers {} of {planned} blocks",
                        event.actor,
                        plan.actual
                    );
                }
            }
        }

        fell(host, event.dimension, &trunk)?;
        let stacks = spawn_drops(
            host,
            event.dimension,
            &event.broken_type_id,
            trunk.len() as u32,
            event.location,
            self.felling.max_stack_size,
        )?;

        let decay_task = if self.decay_enabled && !trunk.is_empty() {
            Some(self.start_decay(event.dimension, &trunk))
        } else {
            None
        };

        tracing::info!(
            "Felled {} {} at {} for {:?}",
            trunk.len(),
            event.broken_type_id,
            event.location,
            event.actor
        );

        Ok(FellReport {
            felled: trunk.len(),
            truncated: planned - trunk.len(),
            stacks,
            new_damage,
            decay_task,
        })
    }

    fn start_decay(&mut self, dimension: DimensionId, trunk: &[BlockPos]) -> TaskId {
        let id = TaskId(self.next_task);
        self.next_task += 1;
        self.tasks
            .push((id, DecayTask::new(dimension, trunk.iter().copied())));
        id
    }

    fn schedule_unlock(&mut self, player: PlayerId) {
        let delay = ticks_from_millis(self.felling.lock_release_ms, self.tick_rate);
        self.unlocks.schedule(self.current_tick + delay, player);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{OAK_LEAVES, OAK_LOG, OW, canopy, column};
    use timber_config::RemovalMode;
    use timber_world::{ItemStack, MemoryHost, PlayerState};

    const STEVE: PlayerId = PlayerId(1);

    fn seeded_config() -> Config {
        let mut config = Config::default();
        config.loot.seed = Some(42);
        config
    }

    fn break_event(type_id: &str, location: BlockPos) -> BlockBrokenEvent {
        BlockBrokenEvent {
            actor: STEVE,
            dimension: OW,
            broken_type_id: type_id.to_string(),
            location,
        }
    }

    /// Oak with the base already broken: logs at y=1..=5, leaves on top.
    fn oak(host: &mut MemoryHost) -> BlockBrokenEvent {
        column(host, BlockPos::new(0, 1, 0), 5, OAK_LOG);
        canopy(host, BlockPos::new(0, 6, 0), 1, OAK_LEAVES);
        break_event(OAK_LOG, BlockPos::new(0, 0, 0))
    }

    fn survival_host(axe: ItemStack) -> MemoryHost {
        let mut host = MemoryHost::new();
        host.add_player(STEVE, PlayerState::survival_with(axe));
        host
    }

    #[test]
    fn test_skips_non_trunk_and_stripped() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
        let mut service = FellingService::new(&seeded_config()).unwrap();

        let dirt = break_event("minecraft:dirt", BlockPos::new(0, 0, 0));
        assert_eq!(
            service.fell_tree(&mut host, &dirt).unwrap(),
            FellOutcome::Skipped(SkipReason::NotATrunk)
        );
        let stripped = break_event("minecraft:stripped_oak_log", BlockPos::new(0, 0, 0));
        assert_eq!(
            service.fell_tree(&mut host, &stripped).unwrap(),
            FellOutcome::Skipped(SkipReason::StrippedLog)
        );
    }

    #[test]
    fn test_requires_sneaking_unless_disabled() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
        host.player_mut(STEVE).unwrap().sneaking = false;
        let event = oak(&mut host);

        let mut service = FellingService::new(&seeded_config()).unwrap();
        assert_eq!(
            service.fell_tree(&mut host, &event).unwrap(),
            FellOutcome::Skipped(SkipReason::NotSneaking)
        );
        assert_eq!(host.count_of(OW, OAK_LOG), 5);

        let mut config = seeded_config();
        config.felling.require_sneaking = false;
        let mut service = FellingService::new(&config).unwrap();
        assert!(matches!(
            service.fell_tree(&mut host, &event).unwrap(),
            FellOutcome::Felled(_)
        ));
    }

    #[test]
    fn test_requires_known_axe() {
        let mut host = survival_host(ItemStack::new("minecraft:stick", 1));
        let event = oak(&mut host);
        let mut service = FellingService::new(&seeded_config()).unwrap();
        assert_eq!(
            service.fell_tree(&mut host, &event).unwrap(),
            FellOutcome::Skipped(SkipReason::NoAxe)
        );

        // A modded axe works once configured.
        host.player_mut(STEVE).unwrap().equipped =
            Some(ItemStack::tool("mymod:bronze_axe", 0, 180));
        let mut config = seeded_config();
        config.catalog.extra_axes.push("mymod:bronze_axe".to_string());
        let mut service = FellingService::new(&config).unwrap();
        assert!(matches!(
            service.fell_tree(&mut host, &event).unwrap(),
            FellOutcome::Felled(_)
        ));
    }

    #[test]
    fn test_isolated_break_and_pillar_are_skipped() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
        let mut service = FellingService::new(&seeded_config()).unwrap();
        let lone = break_event(OAK_LOG, BlockPos::new(10, 0, 10));
        assert_eq!(
            service.fell_tree(&mut host, &lone).unwrap(),
            FellOutcome::Skipped(SkipReason::NoConnectedTrunk)
        );

        column(&mut host, BlockPos::new(0, 1, 0), 4, OAK_LOG);
        let pillar = break_event(OAK_LOG, BlockPos::new(0, 0, 0));
        assert_eq!(
            service.fell_tree(&mut host, &pillar).unwrap(),
            FellOutcome::Skipped(SkipReason::NotATree)
        );
        assert_eq!(host.count_of(OW, OAK_LOG), 4);
        assert!(!host.player(STEVE).unwrap().slot_locked);
    }

    #[test]
    fn test_survival_charges_and_locks() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 10, 250));
        let event = oak(&mut host);
        let mut service = FellingService::new(&seeded_config()).unwrap();

        let FellOutcome::Felled(report) = service.fell_tree(&mut host, &event).unwrap() else {
            panic!("expected a felling");
        };
        assert_eq!(report.felled, 5);
        assert_eq!(report.new_damage, Some(15));
        assert_eq!(report.stacks, vec![5]);

        let steve = host.player(STEVE).unwrap();
        assert!(steve.slot_locked);
        assert_eq!(steve.equipped.as_ref().unwrap().durability.unwrap().damage, 15);
        assert_eq!(service.pending_unlocks(), 1);
    }

    #[test]
    fn test_creative_is_not_charged() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 10, 250));
        host.player_mut(STEVE).unwrap().mode = GameMode::Creative;
        let event = oak(&mut host);
        let mut service = FellingService::new(&seeded_config()).unwrap();

        let FellOutcome::Felled(report) = service.fell_tree(&mut host, &event).unwrap() else {
            panic!("expected a felling");
        };
        assert_eq!(report.felled, 5);
        assert_eq!(report.new_damage, None);
        let steve = host.player(STEVE).unwrap();
        assert!(!steve.slot_locked);
        assert_eq!(steve.equipped.as_ref().unwrap().durability.unwrap().damage, 10);
        assert_eq!(service.pending_unlocks(), 0);
    }

    #[test]
    fn test_unlock_after_configured_delay() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
        let event = oak(&mut host);
        let mut config = seeded_config();
        config.decay.enabled = false;
        config.felling.lock_release_ms = 250;
        let mut service = FellingService::new(&config).unwrap();
        service.fell_tree(&mut host, &event).unwrap();

        for _ in 0..4 {
            assert_eq!(service.tick(&mut host).unlocked, 0);
            assert!(host.player(STEVE).unwrap().slot_locked);
        }
        assert_eq!(service.tick(&mut host).unlocked, 1);
        assert!(!host.player(STEVE).unwrap().slot_locked);
        assert!(service.is_idle());
    }

    #[test]
    fn test_failed_mutation_is_logged_and_unlocks() {
        let setup = || {
            let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
            let event = oak(&mut host);
            host.reject_mutations_at(BlockPos::new(0, 3, 0));
            (host, event)
        };

        let (mut host, event) = setup();
        let mut service = FellingService::new(&seeded_config()).unwrap();
        assert!(matches!(
            service.fell_tree(&mut host, &event),
            Err(FellingError::World(_))
        ));
        // Blocks below the failure stay removed.
        assert_eq!(host.count_of(OW, OAK_LOG), 3);

        let (mut host, event) = setup();
        let mut service = FellingService::new(&seeded_config()).unwrap();
        assert!(service.on_block_broken(&mut host, &event).is_none());
        assert_eq!(service.pending_unlocks(), 1);
        assert_eq!(service.pending_decay(), 0);
    }

    #[test]
    fn test_decay_runs_across_ticks() {
        let mut host = survival_host(ItemStack::tool("minecraft:iron_axe", 0, 250));
        let event = oak(&mut host);
        let mut config = seeded_config();
        config.decay.batch_size = 5;
        let mut service = FellingService::new(&config).unwrap();

        let FellOutcome::Felled(report) = service.fell_tree(&mut host, &event).unwrap() else {
            panic!("expected a felling");
        };
        let task = report.decay_task.unwrap();

        let mut decayed = 0;
        let mut finished = Vec::new();
        for _ in 0..10 {
            let tick = service.tick(&mut host);
            assert!(tick.decayed <= 5);
            decayed += tick.decayed;
            finished.extend(tick.finished);
        }
        // The top log displaces one cell of the 3x3x3 canopy.
        assert_eq!(decayed, 26);
        assert_eq!(finished, vec![task]);
        assert_eq!(host.count_of(OW, OAK_LEAVES), 0);
    }

    #[test]
    fn test_command_removal_tracks_in_flight() {
        let mut host = MemoryHost::new();
        let mut creative = PlayerState::survival_with(ItemStack::tool("minecraft:iron_axe", 0, 250));
        creative.mode = GameMode::Creative;
        host.add_player(STEVE, creative);
        let event = oak(&mut host);
        let mut config = seeded_config();
        config.decay.removal = RemovalMode::Command;
        let mut service = FellingService::new(&config).unwrap();
        service.fell_tree(&mut host, &event).unwrap();

        service.tick(&mut host);
        assert_eq!(service.pending_decay(), 0);
        assert_eq!(service.in_flight(), 26);
        assert!(!service.is_idle());

        host.apply_deferred_commands();
        let tick = service.tick(&mut host);
        assert_eq!(tick.confirmed, 26);
        assert_eq!(service.in_flight(), 0);
        assert!(service.is_idle());
    }

    #[test]
    fn test_dropped_command_is_released() {
        let mut host = MemoryHost::new();
        let mut creative = PlayerState::survival_with(ItemStack::tool("minecraft:iron_axe", 0, 250));
        creative.mode = GameMode::Creative;
        host.add_player(STEVE, creative);
        let event = oak(&mut host);
        let stuck = BlockPos::new(1, 6, 1);
        host.reject_mutations_at(stuck);

        let mut config = seeded_config();
        config.decay.removal = RemovalMode::Command;
        config.decay.command_timeout_ticks = 40;
        config.loot.table.clear();
        config.loot.table.insert(
            "oak".to_string(),
            vec![timber_config::LootRuleConfig {
                item: "minecraft:stick".to_string(),
                chance: 100.0,
                min: 1,
                max: 1,
            }],
        );
        let mut service = FellingService::new(&config).unwrap();
        service.fell_tree(&mut host, &event).unwrap();

        let mut expired = 0;
        let mut ticks = 0;
        while !service.is_idle() {
            expired += service.tick(&mut host).expired;
            host.apply_deferred_commands();
            ticks += 1;
            assert!(ticks < 100, "in flight: {}", service.in_flight());
        }

        assert_eq!(expired, 1);
        assert_eq!(host.type_at(OW, stuck), Some(OAK_LEAVES));
        // Only the leaves actually removed dropped loot.
        let sticks: Vec<_> = host
            .spawned()
            .iter()
            .filter(|spawn| spawn.stack.type_id == "minecraft:stick")
            .collect();
        assert_eq!(sticks.len(), 25);
        assert!(sticks.iter().all(|spawn| spawn.pos != stuck));
    }

    #[test]
    fn test_bad_catalog_config_fails_setup() {
        let mut config = seeded_config();
        config
            .catalog
            .extra_foliage
            .insert("mymod:palm_leaves".to_string(), "palm".to_string());
        assert!(matches!(
            FellingService::new(&config),
            Err(SetupError::Catalog(_))
        ));
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(3).to_string(), "decay#3");
    }
}
