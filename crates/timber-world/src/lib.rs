//! World-facing types for timber: grid coordinates, the block catalog, tool
//! items, and the host capability traits the felling core is written against.
//!
//! The host game owns all world state. Everything here either describes that
//! state by value or abstracts access to it, so the core can run against the
//! real host or against [`MemoryHost`] in tests.

pub mod catalog;
pub mod coords;
pub mod host;
pub mod item;
pub mod memory;

pub use catalog::{AIR, BlockKind, Catalog, CatalogError, FoliageSpecies, WoodSpecies};
pub use coords::{BlockPos, DimensionId, cube};
pub use host::{
    Block, BlockBrokenEvent, BlockView, GameMode, Host, PlayerHost, PlayerId, WorldError, WorldMut,
};
pub use item::{Durability, ItemStack, UNBREAKING};
pub use memory::{BlockChange, MemoryHost, PlayerState, SpawnedStack};
