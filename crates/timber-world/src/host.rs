//! Capability traits through which the core reads and mutates host state.
//!
//! The host owns the world, the players and their inventories. The core is
//! written against these traits only, never against a global, so the same
//! code runs against the live game and against [`MemoryHost`](crate::MemoryHost).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::{BlockPos, DimensionId};
use crate::item::ItemStack;

/// Stable identifier of a connected player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Player game mode; only survival players wear out their tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

/// A snapshot of one block, valid only until the next yield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Where the block is.
    pub pos: BlockPos,
    /// Host type id (e.g. `minecraft:oak_log`).
    pub type_id: String,
    /// Legacy variant state (e.g. `birch` on `minecraft:leaves`).
    pub variant: Option<String>,
}

/// Notification fired by the host after a player breaks a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockBrokenEvent {
    /// Player who broke the block.
    pub actor: PlayerId,
    /// Dimension the block was in.
    pub dimension: DimensionId,
    /// Type id the block had before it broke.
    pub broken_type_id: String,
    /// Where the block was.
    pub location: BlockPos,
}

/// Errors reported by host mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The position is not loaded.
    #[error("block at {0} is not loaded")]
    Unloaded(BlockPos),
    /// The host refused the mutation.
    #[error("host rejected change at {pos}: {reason}")]
    Rejected {
        /// Target position.
        pos: BlockPos,
        /// Host-provided reason.
        reason: String,
    },
    /// The player is no longer connected.
    #[error("unknown player {0:?}")]
    UnknownPlayer(PlayerId),
}

/// Read access to blocks.
pub trait BlockView {
    /// Returns the block at `pos`, or `None` when nothing is loaded there.
    fn block(&self, dimension: DimensionId, pos: BlockPos) -> Option<Block>;
}

/// Block and item mutations.
pub trait WorldMut: BlockView {
    /// Replaces the block at `pos` with a block of `type_id`.
    fn set_block_type(
        &mut self,
        dimension: DimensionId,
        pos: BlockPos,
        type_id: &str,
    ) -> Result<(), WorldError>;

    /// Spawns an item stack entity at `pos`.
    fn spawn_item_stack(
        &mut self,
        dimension: DimensionId,
        stack: ItemStack,
        pos: BlockPos,
    ) -> Result<(), WorldError>;

    /// Queues a textual command to run later. Fire and forget.
    fn run_deferred_command(&mut self, dimension: DimensionId, command: &str);
}

/// Player queries and equipped-tool access.
pub trait PlayerHost {
    /// Players in `dimension` currently in `mode`.
    fn players_in_mode(&self, dimension: DimensionId, mode: GameMode) -> Vec<PlayerId>;

    /// Returns `true` while the player is sneaking.
    fn is_sneaking(&self, player: PlayerId) -> bool;

    /// The item in the player's selected hotbar slot.
    fn equipped_item(&self, player: PlayerId) -> Option<ItemStack>;

    /// Writes the item back into the player's selected slot.
    fn set_equipped_item(&mut self, player: PlayerId, item: ItemStack) -> Result<(), WorldError>;

    /// Locks or unlocks the selected slot against inventory actions.
    fn lock_equipped_slot(&mut self, player: PlayerId, locked: bool) -> Result<(), WorldError>;
}

/// Everything the felling service needs from the host.
pub trait Host: WorldMut + PlayerHost {}

impl<T: WorldMut + PlayerHost + ?Sized> Host for T {}
