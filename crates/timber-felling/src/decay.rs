//! Foliage decay after a felling.
//!
//! A [`DecayTask`] is a resumable flood fill over foliage, seeded from the
//! felled trunk positions. Each call to [`DecayTask::resume`] processes at most
//! one batch of foliage removals and then hands control back, so a large
//! canopy is spread over several host ticks. All block state is re-queried on
//! every visit; nothing read before a yield is trusted after it.

use std::collections::VecDeque;

use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use timber_config::{DecayConfig, RemovalMode};
use timber_world::{
    AIR, BlockKind, BlockPos, BlockView, Catalog, DimensionId, FoliageSpecies,
    WorldMut, cube,
};

use crate::loot::LootTable;

/// A removal command issued for one foliage cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRemoval {
    /// Species of the foliage, for loot once the removal is seen.
    pub species: FoliageSpecies,
    /// Tick the command was issued on.
    pub issued_tick: u64,
}

/// Outcome of [`InFlight::settle`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settled {
    /// Cells whose foliage is gone, with the species that stood there.
    pub removed: Vec<(DimensionId, BlockPos, FoliageSpecies)>,
    /// Cells still standing after the timeout; eligible for decay again.
    pub expired: Vec<(DimensionId, BlockPos)>,
}

/// Foliage cells whose removal command has been issued but not yet observed.
///
/// Shared by every task of one service so concurrent sweeps do not double
/// count a cell. Loot for a command removal is only rolled once
/// [`InFlight::settle`] sees the cell gone.
#[derive(Debug, Default)]
pub struct InFlight {
    pending: FxHashMap<(DimensionId, BlockPos), PendingRemoval>,
}

impl InFlight {
    /// Records a removal command for `pos`.
    pub fn issue(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        species: FoliageSpecies,
        issued_tick: u64,
    ) {
        self.pending.insert(
            (dimension, pos),
            PendingRemoval {
                species,
                issued_tick,
            },
        );
    }

    /// Returns `true` if a removal of `pos` is awaiting confirmation.
    pub fn contains(&self, dimension: DimensionId, pos: BlockPos) -> bool {
        self.pending.contains_key(&(dimension, pos))
    }

    /// Pending removal of `pos`, if any.
    pub fn get(&self, dimension: DimensionId, pos: BlockPos) -> Option<&PendingRemoval> {
        self.pending.get(&(dimension, pos))
    }

    /// Number of pending removals.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Re-queries every pending cell at tick `now`.
    ///
    /// Cells no longer holding foliage are confirmed. Cells still standing
    /// `timeout_ticks` after their command was issued are released, on the
    /// assumption that the host dropped the command.
    pub fn settle<W: BlockView + ?Sized>(
        &mut self,
        world: &W,
        catalog: &Catalog,
        now: u64,
        timeout_ticks: u64,
    ) -> Settled {
        let mut settled = Settled::default();
        self.pending.retain(|&(dimension, pos), pending| {
            let standing = world
                .block(dimension, pos)
                .is_some_and(|block| catalog.classify(&block).is_foliage());
            if !standing {
                settled.removed.push((dimension, pos, pending.species));
                return false;
            }
            if now.saturating_sub(pending.issued_tick) >= timeout_ticks {
                tracing::warn!(
                    "Removal of foliage at {pos} not seen after {timeout_ticks} ticks, releasing it"
                );
                settled.expired.push((dimension, pos));
                return false;
            }
            true
        });
        // Loot rolls follow position order, not hash order.
        settled.removed.sort_unstable_by_key(|&(dimension, pos, _)| (dimension, pos));
        settled.expired.sort_unstable();
        settled
    }
}

/// Tuning for decay sweeps.
#[derive(Clone, Debug, PartialEq)]
pub struct DecaySettings {
    /// Radius the fill expands by around each removed foliage block.
    pub step_radius: i32,
    /// Foliage with a standing trunk within this radius is kept.
    pub support_radius: i32,
    /// Removals per resume.
    pub batch_size: usize,
    /// Removal channel.
    pub removal: RemovalMode,
    /// Removals after which a sweep is abandoned.
    pub max_blocks: usize,
    /// Ticks an unconfirmed command removal stays in flight.
    pub command_timeout_ticks: u64,
}

impl From<&DecayConfig> for DecaySettings {
    fn from(config: &DecayConfig) -> Self {
        Self {
            step_radius: config.step_radius,
            support_radius: config.support_radius,
            batch_size: config.batch_size.max(1),
            removal: config.removal,
            max_blocks: config.max_blocks_per_sweep,
            command_timeout_ticks: config.command_timeout_ticks.max(1),
        }
    }
}

impl Default for DecaySettings {
    fn default() -> Self {
        Self::from(&DecayConfig::default())
    }
}

/// Read-only collaborators a task needs while resuming.
#[derive(Clone, Copy)]
pub struct DecayEnv<'a> {
    /// Block classification.
    pub catalog: &'a Catalog,
    /// Loot rolled for each removed block.
    pub loot: &'a LootTable,
    /// Sweep tuning.
    pub settings: &'a DecaySettings,
    /// Current host tick, stamped on command removals.
    pub tick: u64,
}

/// Result of one [`DecayTask::resume`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayStep {
    /// A full batch was processed; resume again next tick.
    Yielded,
    /// The fill is exhausted.
    Finished,
    /// The sweep hit its removal cap and stopped.
    Abandoned,
}

/// Resumable foliage flood fill.
#[derive(Debug)]
pub struct DecayTask {
    dimension: DimensionId,
    seeds: VecDeque<BlockPos>,
    worklist: VecDeque<BlockPos>,
    visited: FxHashSet<BlockPos>,
    removed: usize,
    items_dropped: u32,
    failures: usize,
}

impl DecayTask {
    /// Creates a sweep around the given felled trunk positions.
    pub fn new(dimension: DimensionId, seeds: impl IntoIterator<Item = BlockPos>) -> Self {
        Self {
            dimension,
            seeds: seeds.into_iter().collect(),
            worklist: VecDeque::new(),
            visited: FxHashSet::default(),
            removed: 0,
            items_dropped: 0,
            failures: 0,
        }
    }

    /// Dimension the sweep runs in.
    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    /// Foliage blocks removed so far.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Loot items spawned so far.
    pub fn items_dropped(&self) -> u32 {
        self.items_dropped
    }

    /// Cells skipped because a mutation failed.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Processes foliage until one batch is removed or the fill runs out.
    pub fn resume<W, R>(
        &mut self,
        world: &mut W,
        env: DecayEnv<'_>,
        rng: &mut R,
        in_flight: &mut InFlight,
    ) -> DecayStep
    where
        W: WorldMut + ?Sized,
        R: Rng + ?Sized,
    {
        let settings = env.settings;
        let mut processed = 0;

        while let Some(pos) = self.next_candidate(settings.step_radius) {
            if !self.visited.insert(pos) {
                continue;
            }
            if in_flight.contains(self.dimension, pos) {
                continue;
            }
            let Some(block) = world.block(self.dimension, pos) else {
                continue;
            };
            let BlockKind::Foliage(species) = env.catalog.classify(&block) else {
                continue;
            };
            if self.is_supported(world, env.catalog, pos, settings.support_radius) {
                tracing::trace!("Foliage at {pos} still supported");
                continue;
            }

            if self.removed >= settings.max_blocks {
                tracing::warn!(
                    "Abandoning decay sweep after {} removals (cap {})",
                    self.removed,
                    settings.max_blocks
                );
                return DecayStep::Abandoned;
            }

            match settings.removal {
                RemovalMode::Direct => {
                    if let Err(err) = world.set_block_type(self.dimension, pos, AIR) {
                        tracing::warn!("Skipping foliage at {pos}: {err}");
                        self.failures += 1;
                        continue;
                    }
                    let (items, failures) =
                        drop_loot(world, self.dimension, env.loot, species, pos, rng);
                    self.items_dropped = self.items_dropped.saturating_add(items);
                    self.failures += failures;
                }
                RemovalMode::Command => {
                    world.run_deferred_command(self.dimension, &format!("setblock {pos} air"));
                    in_flight.issue(self.dimension, pos, species, env.tick);
                }
            }
            self.removed += 1;
            self.worklist.extend(
                cube(pos, settings.step_radius).filter(|next| !self.visited.contains(next)),
            );

            processed += 1;
            if processed >= settings.batch_size {
                return DecayStep::Yielded;
            }
        }

        DecayStep::Finished
    }

    /// Resumes until the sweep no longer yields.
    pub fn run_to_completion<W, R>(
        &mut self,
        world: &mut W,
        env: DecayEnv<'_>,
        rng: &mut R,
        in_flight: &mut InFlight,
    ) -> DecayStep
    where
        W: WorldMut + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            let step = self.resume(world, env, rng, in_flight);
            if step != DecayStep::Yielded {
                return step;
            }
        }
    }

    /// Next cell to visit, expanding the next seed once the worklist drains.
    fn next_candidate(&mut self, step_radius: i32) -> Option<BlockPos> {
        loop {
            if let Some(pos) = self.worklist.pop_front() {
                return Some(pos);
            }
            let seed = self.seeds.pop_front()?;
            self.worklist.extend(cube(seed, step_radius));
        }
    }

    fn is_supported<W: BlockView + ?Sized>(
        &self,
        world: &W,
        catalog: &Catalog,
        pos: BlockPos,
        radius: i32,
    ) -> bool {
        cube(pos, radius).any(|near| {
            world
                .block(self.dimension, near)
                .is_some_and(|block| catalog.classify(&block).is_trunk())
        })
    }
}

/// Rolls and spawns the loot of one removed foliage block at `pos`.
///
/// Returns the number of items spawned and the number of failed spawns.
pub fn drop_loot<W, R>(
    world: &mut W,
    dimension: DimensionId,
    loot: &LootTable,
    species: FoliageSpecies,
    pos: BlockPos,
    rng: &mut R,
) -> (u32, usize)
where
    W: WorldMut + ?Sized,
    R: Rng + ?Sized,
{
    let mut items = 0u32;
    let mut failures = 0;
    for stack in loot.resolve(species, rng) {
        let count = stack.count;
        match world.spawn_item_stack(dimension, stack, pos) {
            Ok(()) => items = items.saturating_add(count),
            Err(err) => {
                tracing::warn!("Dropping {species:?} loot at {pos}: {err}");
                failures += 1;
            }
        }
    }
    (items, failures)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
