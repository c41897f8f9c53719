//! Tree-versus-pillar classification.

use timber_world::{BlockPos, BlockView, Catalog, DimensionId, cube};

/// Returns `true` if any trunk block has foliage within `radius`.
///
/// A player-built pillar of logs has no foliage anywhere around it and is
/// left alone. Only the neighborhoods of the discovered trunk blocks are
/// checked, so a tree whose leaves all sit farther out (or have all decayed)
/// is reported as a pillar.
pub fn is_tree<W: BlockView + ?Sized>(
    world: &W,
    catalog: &Catalog,
    dimension: DimensionId,
    trunk: &[BlockPos],
    radius: i32,
) -> bool {
    trunk.iter().any(|&center| {
        cube(center, radius).any(|pos| {
            world
                .block(dimension, pos)
                .is_some_and(|block| catalog.classify(&block).is_foliage())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{OAK_LEAVES, OAK_LOG, OW, column};
    use timber_world::MemoryHost;

    fn classify(host: &MemoryHost, trunk: &[BlockPos]) -> bool {
        is_tree(host, &Catalog::vanilla(), OW, trunk, 1)
    }

    #[test]
    fn test_pillar_is_not_tree() {
        let mut host = MemoryHost::new();
        let trunk = column(&mut host, BlockPos::new(0, 0, 0), 8, OAK_LOG);
        host.place(OW, BlockPos::new(1, 3, 0), "minecraft:cobblestone");
        assert!(!classify(&host, &trunk));
    }

    #[test]
    fn test_single_leaf_at_any_member_is_tree() {
        for height in 0..5 {
            let mut host = MemoryHost::new();
            let trunk = column(&mut host, BlockPos::new(0, 0, 0), 5, OAK_LOG);
            host.place(OW, BlockPos::new(-1, height, 1), OAK_LEAVES);
            assert!(classify(&host, &trunk), "leaf at height {height}");
        }
    }

    #[test]
    fn test_leaf_out_of_radius_is_ignored() {
        let mut host = MemoryHost::new();
        let trunk = column(&mut host, BlockPos::new(0, 0, 0), 3, OAK_LOG);
        host.place(OW, BlockPos::new(2, 1, 0), OAK_LEAVES);
        assert!(!classify(&host, &trunk));
        assert!(is_tree(&host, &Catalog::vanilla(), OW, &trunk, 2));
    }

    #[test]
    fn test_wart_block_counts_as_foliage() {
        let mut host = MemoryHost::new();
        let trunk = column(&mut host, BlockPos::new(0, 0, 0), 4, "minecraft:warped_stem");
        host.place(OW, BlockPos::new(0, 4, 0), "minecraft:warped_wart_block");
        assert!(classify(&host, &trunk));
    }

    #[test]
    fn test_legacy_leaves_count_as_foliage() {
        let mut host = MemoryHost::new();
        let trunk = column(&mut host, BlockPos::new(0, 0, 0), 2, OAK_LOG);
        host.place_variant(OW, BlockPos::new(1, 2, 1), "minecraft:leaves", Some("birch"));
        assert!(classify(&host, &trunk));
    }

    #[test]
    fn test_empty_trunk_is_not_tree() {
        let host = MemoryHost::new();
        assert!(!classify(&host, &[]));
    }
}
