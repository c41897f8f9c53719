//! Connected trunk discovery.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use timber_world::{BlockPos, BlockView, Catalog, DimensionId, cube};

/// Finds every trunk block of exactly `match_type_id` connected to `origin`
/// through cube neighborhoods of `radius` (1 = faces, edges and corners).
///
/// The search is an explicit breadth-first worklist seeded with the
/// neighborhood of `origin`, so stack depth stays flat for any tree size.
/// `origin` itself is included only if it still holds a matching block.
/// Results are sorted by ascending `y`, lowest first; ties keep discovery
/// order. Returns an empty list if `match_type_id` is not a non-stripped
/// trunk.
pub fn discover_trunk<W: BlockView + ?Sized>(
    world: &W,
    catalog: &Catalog,
    dimension: DimensionId,
    origin: BlockPos,
    match_type_id: &str,
    radius: i32,
) -> Vec<BlockPos> {
    if !catalog.kind_of(match_type_id).is_trunk() {
        return Vec::new();
    }

    let mut visited: FxHashSet<BlockPos> = FxHashSet::default();
    let mut worklist: VecDeque<BlockPos> = cube(origin, radius).collect();
    let mut trunk = Vec::new();

    while let Some(pos) = worklist.pop_front() {
        if !visited.insert(pos) {
            continue;
        }
        let Some(block) = world.block(dimension, pos) else {
            continue;
        };
        if block.type_id != match_type_id {
            continue;
        }

        trunk.push(pos);
        worklist.extend(cube(pos, radius).filter(|next| !visited.contains(next)));
    }

    trunk.sort_by_key(|pos| pos.y);
    tracing::trace!(
        "Discovered {} trunk blocks of {match_type_id} from {origin}",
        trunk.len()
    );
    trunk
}
