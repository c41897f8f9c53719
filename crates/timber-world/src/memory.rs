//! In-memory host: a sparse block grid plus players, used by tests and the
//! demo binary.
//!
//! Unset positions read as `None` (nothing loaded, equivalent to air for the
//! core). Every mutation is recorded so tests can assert on exactly what the
//! core did.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::catalog::AIR;
use crate::coords::{BlockPos, DimensionId};
use crate::host::{Block, BlockView, GameMode, PlayerHost, PlayerId, WorldError, WorldMut};
use crate::item::ItemStack;

/// A recorded block mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockChange {
    /// Dimension of the change.
    pub dimension: DimensionId,
    /// Changed position.
    pub pos: BlockPos,
    /// Type id before the change (`minecraft:air` if nothing was there).
    pub old_type: String,
    /// Type id after the change.
    pub new_type: String,
}

/// A recorded item spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnedStack {
    /// Dimension of the spawn.
    pub dimension: DimensionId,
    /// Spawn location.
    pub pos: BlockPos,
    /// The spawned stack.
    pub stack: ItemStack,
}

/// State of one simulated player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    /// Dimension the player is in.
    pub dimension: DimensionId,
    /// Current game mode.
    pub mode: GameMode,
    /// Whether the player is sneaking.
    pub sneaking: bool,
    /// Item in the selected slot.
    pub equipped: Option<ItemStack>,
    /// Whether the selected slot is locked.
    pub slot_locked: bool,
}

impl PlayerState {
    /// A sneaking survival player in the overworld holding `item`.
    pub fn survival_with(item: ItemStack) -> Self {
        Self {
            dimension: DimensionId::OVERWORLD,
            mode: GameMode::Survival,
            sneaking: true,
            equipped: Some(item),
            slot_locked: false,
        }
    }
}

/// Sparse in-memory world implementing every host trait.
#[derive(Debug, Default)]
pub struct MemoryHost {
    blocks: FxHashMap<(DimensionId, BlockPos), Block>,
    players: FxHashMap<PlayerId, PlayerState>,
    spawned: Vec<SpawnedStack>,
    changes: Vec<BlockChange>,
    commands: Vec<(DimensionId, String)>,
    rejected: FxHashSet<BlockPos>,
}

impl MemoryHost {
    /// Creates an empty world with no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block without recording a change.
    pub fn place(&mut self, dimension: DimensionId, pos: BlockPos, type_id: &str) {
        self.place_variant(dimension, pos, type_id, None);
    }

    /// Places a block with a legacy variant state without recording a change.
    pub fn place_variant(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        type_id: &str,
        variant: Option<&str>,
    ) {
        self.blocks.insert(
            (dimension, pos),
            Block {
                pos,
                type_id: type_id.to_string(),
                variant: variant.map(str::to_string),
            },
        );
    }

    /// Type id at `pos`, or `None` if nothing is there.
    pub fn type_at(&self, dimension: DimensionId, pos: BlockPos) -> Option<&str> {
        self.blocks
            .get(&(dimension, pos))
            .map(|block| block.type_id.as_str())
    }

    /// Number of blocks of `type_id` in `dimension`.
    pub fn count_of(&self, dimension: DimensionId, type_id: &str) -> usize {
        self.blocks
            .iter()
            .filter(|((dim, _), block)| *dim == dimension && block.type_id == type_id)
            .count()
    }

    /// Adds or replaces a player.
    pub fn add_player(&mut self, id: PlayerId, state: PlayerState) {
        self.players.insert(id, state);
    }

    /// Current state of a player.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(&id)
    }

    /// Mutable state of a player.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerState> {
        self.players.get_mut(&id)
    }

    /// Every item spawn so far, in order.
    pub fn spawned(&self) -> &[SpawnedStack] {
        &self.spawned
    }

    /// Every block change so far, in order.
    pub fn changes(&self) -> &[BlockChange] {
        &self.changes
    }

    /// Deferred commands not yet applied.
    pub fn pending_commands(&self) -> &[(DimensionId, String)] {
        &self.commands
    }

    /// Makes every future mutation at `pos` fail with [`WorldError::Rejected`].
    pub fn reject_mutations_at(&mut self, pos: BlockPos) {
        self.rejected.insert(pos);
    }

    /// Runs queued `setblock x y z <type>` commands, returning how many applied.
    ///
    /// Malformed commands and rejected mutations are logged and dropped, the
    /// way a host drops a failing fire-and-forget command.
    pub fn apply_deferred_commands(&mut self) -> usize {
        let commands = std::mem::take(&mut self.commands);
        let mut applied = 0;
        for (dimension, command) in commands {
            let Some((pos, type_id)) = parse_setblock(&command) else {
                tracing::warn!("Dropping malformed command: {command}");
                continue;
            };
            match self.set_block_type(dimension, pos, &type_id) {
                Ok(()) => applied += 1,
                Err(err) => tracing::warn!("Deferred command failed: {err}"),
            }
        }
        applied
    }

    fn check_rejected(&self, pos: BlockPos) -> Result<(), WorldError> {
        if self.rejected.contains(&pos) {
            return Err(WorldError::Rejected {
                pos,
                reason: "mutation blocked".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses `setblock x y z type [mode]`; bare type names get the
/// `minecraft:` namespace.
fn parse_setblock(command: &str) -> Option<(BlockPos, String)> {
    let mut parts = command.split_whitespace();
    if parts.next()? != "setblock" {
        return None;
    }
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    let type_id = parts.next()?;
    let type_id = if type_id.contains(':') {
        type_id.to_string()
    } else {
        format!("minecraft:{type_id}")
    };
    Some((BlockPos::new(x, y, z), type_id))
}

impl BlockView for MemoryHost {
    fn block(&self, dimension: DimensionId, pos: BlockPos) -> Option<Block> {
        self.blocks.get(&(dimension, pos)).cloned()
    }
}

impl WorldMut for MemoryHost {
    fn set_block_type(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        type_id: &str,
    ) -> Result<(), WorldError> {
        self.check_rejected(pos)?;

        let old_type = self
            .type_at(dimension, pos)
            .unwrap_or(AIR)
            .to_string();
        if old_type == type_id {
            return Ok(());
        }

        if type_id == AIR {
            self.blocks.remove(&(dimension, pos));
        } else {
            self.place(dimension, pos, type_id);
        }
        self.changes.push(BlockChange {
            dimension,
            pos,
            old_type,
            new_type: type_id.to_string(),
        });
        Ok(())
    }

    fn spawn_item_stack(
        &mut self,
        dimension: DimensionId,
        stack: ItemStack,
        pos: BlockPos,
    ) -> Result<(), WorldError> {
        self.check_rejected(pos)?;
        self.spawned.push(SpawnedStack {
            dimension,
            pos,
            stack,
        });
        Ok(())
    }

    fn run_deferred_command(&mut self, dimension: DimensionId, command: &str) {
        self.commands.push((dimension, command.to_string()));
    }
}

impl PlayerHost for MemoryHost {
    fn players_in_mode(&self, dimension: DimensionId, mode: GameMode) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self
            .players
            .iter()
            .filter(|(_, state)| state.dimension == dimension && state.mode == mode)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    fn is_sneaking(&self, player: PlayerId) -> bool {
        self.players.get(&player).is_some_and(|state| state.sneaking)
    }

    fn equipped_item(&self, player: PlayerId) -> Option<ItemStack> {
        self.players.get(&player)?.equipped.clone()
    }

    fn set_equipped_item(&mut self, player: PlayerId, item: ItemStack) -> Result<(), WorldError> {
        let state = self
            .players
            .get_mut(&player)
            .ok_or(WorldError::UnknownPlayer(player))?;
        state.equipped = Some(item);
        Ok(())
    }

    fn lock_equipped_slot(&mut self, player: PlayerId, locked: bool) -> Result<(), WorldError> {
        let state = self
            .players
            .get_mut(&player)
            .ok_or(WorldError::UnknownPlayer(player))?;
        state.slot_locked = locked;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
