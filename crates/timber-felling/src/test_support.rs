//! Shared fixtures for unit tests.

use timber_world::{BlockPos, DimensionId, MemoryHost};

pub const OW: DimensionId = DimensionId::OVERWORLD;
pub const OAK_LOG: &str = "minecraft:oak_log";
pub const OAK_LEAVES: &str = "minecraft:oak_leaves";

/// Stacks `height` blocks of `type_id` upward from `base`.
pub fn column(host: &mut MemoryHost, base: BlockPos, height: i32, type_id: &str) -> Vec<BlockPos> {
    (0..height)
        .map(|dy| {
            let pos = base.offset(0, dy, 0);
            host.place(OW, pos, type_id);
            pos
        })
        .collect()
}

/// Fills the cube of `radius` around `center` with `type_id`, skipping
/// occupied cells.
pub fn canopy(host: &mut MemoryHost, center: BlockPos, radius: i32, type_id: &str) -> usize {
    let mut placed = 0;
    for pos in timber_world::cube(center, radius) {
        if host.type_at(OW, pos).is_none() {
            host.place(OW, pos, type_id);
            placed += 1;
        }
    }
    placed
}
