//! The demo world: one birch with a layered canopy and a sneaking survival
//! player holding a lightly used iron axe.

use timber_world::{
    BlockBrokenEvent, BlockPos, DimensionId, ItemStack, MemoryHost, PlayerId, PlayerState,
    UNBREAKING, cube,
};

pub const LUMBERJACK: PlayerId = PlayerId(1);
pub const TRUNK: &str = "minecraft:birch_log";
pub const LEAVES: &str = "minecraft:birch_leaves";

const TRUNK_HEIGHT: i32 = 9;

/// Builds the world and returns it with the break that starts the demo.
pub fn birch_grove() -> (MemoryHost, BlockBrokenEvent) {
    let dimension = DimensionId::OVERWORLD;
    let mut host = MemoryHost::new();

    for y in 1..=TRUNK_HEIGHT {
        host.place(dimension, BlockPos::new(0, y, 0), TRUNK);
    }
    // Wide lower canopy, narrow crown.
    for pos in cube(BlockPos::new(0, TRUNK_HEIGHT - 1, 0), 2) {
        if host.type_at(dimension, pos).is_none() {
            host.place(dimension, pos, LEAVES);
        }
    }
    for pos in cube(BlockPos::new(0, TRUNK_HEIGHT + 2, 0), 1) {
        if host.type_at(dimension, pos).is_none() {
            host.place(dimension, pos, LEAVES);
        }
    }

    let axe = ItemStack::tool("minecraft:iron_axe", 40, 250).with_enchantment(UNBREAKING, 1);
    host.add_player(LUMBERJACK, PlayerState::survival_with(axe));

    let event = BlockBrokenEvent {
        actor: LUMBERJACK,
        dimension,
        broken_type_id: TRUNK.to_string(),
        location: BlockPos::new(0, 0, 0),
    };
    (host, event)
}
