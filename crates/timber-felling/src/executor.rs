//! Trunk removal and drop spawning.

use timber_world::{AIR, BlockPos, DimensionId, ItemStack, WorldError, WorldMut};

/// Splits `total` into groups no larger than `group_size`.
///
/// `split_groups(150, 64)` is `[64, 64, 22]`; zero yields no groups. A zero
/// `group_size` is treated as one.
pub fn split_groups(total: u32, group_size: u32) -> Vec<u32> {
    let group_size = group_size.max(1);
    let mut groups = Vec::with_capacity(total.div_ceil(group_size) as usize);
    let mut remaining = total;
    while remaining > 0 {
        let group = remaining.min(group_size);
        groups.push(group);
        remaining -= group;
    }
    groups
}

/// Sets every position in `trunk` to air, in order.
///
/// Stops at the first failing mutation; blocks before it stay removed.
pub fn fell<W: WorldMut + ?Sized>(
    world: &mut W,
    dimension: DimensionId,
    trunk: &[BlockPos],
) -> Result<(), WorldError> {
    for &pos in trunk {
        world.set_block_type(dimension, pos, AIR)?;
    }
    Ok(())
}

/// Spawns `total` items of `type_id` at `location` in stacks of at most
/// `max_stack`. Returns the stack sizes spawned.
pub fn spawn_drops<W: WorldMut + ?Sized>(
    world: &mut W,
    dimension: DimensionId,
    type_id: &str,
    total: u32,
    location: BlockPos,
    max_stack: u32,
) -> Result<Vec<u32>, WorldError> {
    let groups = split_groups(total, max_stack);
    for &count in &groups {
        world.spawn_item_stack(dimension, ItemStack::new(type_id, count), location)?;
    }
    Ok(groups)
}
